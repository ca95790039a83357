use pretty_assertions::assert_eq;
use smallvec::smallvec;
use vega_ir::{AddrSpace, ScalarKind, Type};

use super::*;
use crate::catalogue::RawIntrinsic;
use crate::resolve::resolve;
use crate::validate::validate;

fn def_of(
    name: &'static str,
    result: &'static str,
    args: &'static [&'static str],
    attrs: &'static str,
) -> IntrinsicDef {
    let records = [RawIntrinsic::new(name, result, args, attrs)];
    match validate(&records) {
        Ok(mut defs) => defs.remove(0),
        Err(errors) => panic!("test definition invalid: {errors:?}"),
    }
}

fn declare_call(
    def: &IntrinsicDef,
    args: &[Type],
    hint: Option<&Type>,
) -> Result<IntrinsicDecl, InvariantViolation> {
    match resolve(def, args, hint) {
        Ok(sig) => declare(def, &sig),
        Err(err) => panic!("resolution failed in declaration test: {err}"),
    }
}

#[test]
fn fixed_signature_mangles_nothing() {
    let def = def_of("logical_thread_id", "int", &[], "NoMem");
    let decl = declare_call(&def, &[], None);
    assert_eq!(
        decl.map(|d| d.name),
        Ok("llvm.vc.internal.logical.thread.id".to_string())
    );
}

#[test]
fn overloaded_slots_mangle_result_first() {
    let def = def_of("cast_to_bf16", "anyint", &["anyfloat"], "NoMem");
    let hint = Type::vector(ScalarKind::I16, 8);
    let decl = declare_call(&def, &[Type::vector(ScalarKind::F32, 8)], Some(&hint));
    assert_eq!(
        decl.map(|d| d.name),
        Ok("llvm.vc.internal.cast.to.bf16.v8i16.v8f32".to_string())
    );
}

#[test]
fn match_slots_contribute_no_suffix() {
    let def = def_of("passthrough", "any", &["0"], "NoMem");
    let decl = declare_call(&def, &[Type::scalar(ScalarKind::I64)], None);
    assert_eq!(
        decl.map(|d| d.name),
        Ok("llvm.vc.internal.passthrough.i64".to_string())
    );
}

#[test]
fn pointer_class_slots_are_overloaded() {
    let def = def_of(
        "cast_to_ptr_explicit",
        "anyptr",
        &["ptr_generic"],
        "NoMem",
    );
    let arg = Type::ptr(AddrSpace::Generic, Type::scalar(ScalarKind::F32));
    let hint = Type::ptr(AddrSpace::Global, Type::scalar(ScalarKind::F32));
    let decl = declare_call(&def, &[arg], Some(&hint));
    assert_eq!(
        decl.map(|d| d.name),
        Ok("llvm.vc.internal.cast.to.ptr.explicit.p1f32.p4f32".to_string())
    );
}

#[test]
fn memory_effect_translated() {
    let def = def_of("probe", "int", &[], "ReadMem");
    let decl = declare_call(&def, &[], None);
    assert_eq!(decl.map(|d| d.memory), Ok(MemoryEffect::ReadOnly));

    let def = def_of("fence", "void", &[], "Convergent");
    let decl = declare_call(&def, &[], None);
    assert_eq!(
        decl.clone().map(|d| d.memory),
        Ok(MemoryEffect::Unknown)
    );
    assert_eq!(decl.map(|d| d.attrs.convergent()), Ok(true));
}

#[test]
fn vararg_tail_kept_in_params() {
    let def = def_of("jump_table", "anyptr", &["anyint", "vararg"], "NoMem");
    let label = Type::ptr(AddrSpace::Private, Type::scalar(ScalarKind::I8));
    let args = [
        Type::scalar(ScalarKind::I32),
        label.clone(),
        label.clone(),
    ];
    let decl = declare_call(&def, &args, Some(&label));
    let expected: SmallVec<[Type; 8]> = smallvec![
        Type::scalar(ScalarKind::I32),
        label.clone(),
        label,
    ];
    assert_eq!(decl.map(|d| d.params), Ok(expected));
}

#[test]
fn corrupt_signature_is_an_invariant_violation() {
    let def = def_of("cast_to_bf16", "anyint", &["anyfloat"], "NoMem");
    let sig = ResolvedSignature {
        result: Type::scalar(ScalarKind::I16),
        // A float slot holding an integer: cannot come out of resolve().
        args: smallvec![Type::scalar(ScalarKind::I32)],
        attrs: def.attrs,
    };
    assert!(declare(&def, &sig).is_err());

    let sig = ResolvedSignature {
        result: Type::scalar(ScalarKind::I16),
        args: smallvec![],
        attrs: def.attrs,
    };
    let err = declare(&def, &sig);
    assert!(err.is_err_and(|e| e.to_string().contains("invariant")));
}
