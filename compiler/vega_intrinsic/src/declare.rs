//! Declaration generation: from a resolved signature to the object the
//! rest of the compiler consumes.
//!
//! A declaration carries the overload-mangled full name, the concrete
//! parameter and result types, and the translated side-effect model.
//! Mangling follows the LLVM intrinsic convention: the base name plus
//! one `.suffix` per overloaded slot (result first, then arguments in
//! declaration order). Match slots derive their type from their target
//! and contribute no suffix; neither does the vararg tail.
//!
//! Generation is a pure function of its inputs. It re-verifies the
//! signature against the definition; a failure here cannot be caused by
//! user input and is reported as an engine bug.

use smallvec::SmallVec;
use vega_ir::Type;

use crate::attrs::{AttrSet, MemoryEffect};
use crate::catalogue::IntrinsicDef;
use crate::error::InvariantViolation;
use crate::pattern::{SlotIdx, TypePattern};
use crate::resolve::ResolvedSignature;

/// A concrete, attributed intrinsic declaration.
///
/// Opaque to this crate's callers in the sense that instruction
/// selection and codegen consume it as-is; nothing here refers back into
/// the registry.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IntrinsicDecl {
    /// Full mangled name (`llvm.vc.internal.cast.to.bf16.v8i16.v8f32`).
    pub name: String,
    /// Concrete result type.
    pub result: Type,
    /// Concrete parameter types, vararg tail included.
    pub params: SmallVec<[Type; 8]>,
    /// The declared memory-effect bound.
    pub memory: MemoryEffect,
    /// The full attribute set (control markers included).
    pub attrs: AttrSet,
}

/// Generate the declaration for a resolved call site.
pub fn declare(
    def: &IntrinsicDef,
    sig: &ResolvedSignature,
) -> Result<IntrinsicDecl, InvariantViolation> {
    verify(def, sig)?;

    let mut name = def.full_name();
    if def.result.is_overloaded() {
        name.push('.');
        name.push_str(&sig.result.suffix());
    }
    for (pattern, ty) in def.arguments.iter().zip(sig.args.iter()) {
        if pattern.is_overloaded() {
            name.push('.');
            name.push_str(&ty.suffix());
        }
    }

    Ok(IntrinsicDecl {
        name,
        result: sig.result.clone(),
        params: sig.args.clone(),
        memory: sig.attrs.memory_effect(),
        attrs: sig.attrs,
    })
}

/// Re-check the signature against the definition it claims to satisfy.
fn verify(def: &IntrinsicDef, sig: &ResolvedSignature) -> Result<(), InvariantViolation> {
    let fixed = def.fixed_arg_len();
    let arity_ok = if def.is_variadic() {
        sig.args.len() >= fixed
    } else {
        sig.args.len() == fixed
    };
    if !arity_ok {
        return Err(InvariantViolation::new(format!(
            "signature for `{}` has {} arguments, definition declares {}",
            def.name,
            sig.args.len(),
            fixed
        )));
    }

    for index in 0..=fixed {
        let slot = if index == 0 {
            SlotIdx::RESULT
        } else {
            SlotIdx::arg(index - 1)
        };
        let ty = if index == 0 {
            &sig.result
        } else {
            &sig.args[index - 1]
        };
        let Some(pattern) = def.pattern(slot) else {
            continue;
        };
        let ok = match pattern {
            TypePattern::Concrete(kind) => kind.matches(ty),
            TypePattern::AnyClass { class, .. } => class.admits(ty),
            TypePattern::MatchRef(target) => match target.arg_index() {
                None => *ty == sig.result,
                Some(i) => sig.args.get(i).is_some_and(|bound| ty == bound),
            },
            TypePattern::VarArgTail => true,
        };
        if !ok {
            return Err(InvariantViolation::new(format!(
                "signature for `{}` binds `{ty}` in the {slot} slot, which its pattern `{pattern}` rejects",
                def.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
