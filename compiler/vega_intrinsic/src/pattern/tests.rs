use pretty_assertions::assert_eq;
use vega_ir::{AddrSpace, ScalarKind, Type};

use super::*;

#[test]
fn parses_primitive_tokens() {
    assert_eq!(
        TypePattern::parse("int"),
        Some(TypePattern::Concrete(ConcreteKind::Scalar(ScalarKind::I32)))
    );
    assert_eq!(
        TypePattern::parse("half"),
        Some(TypePattern::Concrete(ConcreteKind::Scalar(ScalarKind::F16)))
    );
    assert_eq!(
        TypePattern::parse("void"),
        Some(TypePattern::Concrete(ConcreteKind::Void))
    );
    assert_eq!(
        TypePattern::parse("ptr_generic"),
        Some(TypePattern::Concrete(ConcreteKind::Ptr(AddrSpace::Generic)))
    );
}

#[test]
fn parses_class_tokens() {
    assert_eq!(
        TypePattern::parse("anyint"),
        Some(TypePattern::AnyClass {
            class: TypeClass::AnyInt,
            default: None,
        })
    );
    assert_eq!(
        TypePattern::parse("any:int"),
        Some(TypePattern::AnyClass {
            class: TypeClass::Any,
            default: Some(ScalarKind::I32),
        })
    );
    assert_eq!(
        TypePattern::parse("anyfloat:half"),
        Some(TypePattern::AnyClass {
            class: TypeClass::AnyFloat,
            default: Some(ScalarKind::F16),
        })
    );
}

#[test]
fn parses_match_and_vararg_tokens() {
    assert_eq!(
        TypePattern::parse("0"),
        Some(TypePattern::MatchRef(SlotIdx::RESULT))
    );
    assert_eq!(
        TypePattern::parse("2"),
        Some(TypePattern::MatchRef(SlotIdx::arg(1)))
    );
    assert_eq!(TypePattern::parse("vararg"), Some(TypePattern::VarArgTail));
}

#[test]
fn rejects_unknown_tokens() {
    assert_eq!(TypePattern::parse("i32"), None);
    assert_eq!(TypePattern::parse("anyvec"), None);
    assert_eq!(TypePattern::parse("ptr"), None);
    assert_eq!(TypePattern::parse(""), None);
    // A default the class cannot admit is a malformed token as a whole.
    assert_eq!(TypePattern::parse("anyfloat:int"), None);
    assert_eq!(TypePattern::parse("anyptr:int"), None);
    assert_eq!(TypePattern::parse("any:ptr_global"), None);
}

#[test]
fn class_membership() {
    let i32s = Type::scalar(ScalarKind::I32);
    let v8f32 = Type::vector(ScalarKind::F32, 8);
    let v4i1 = Type::vector(ScalarKind::Bool, 4);
    let gptr = Type::ptr(AddrSpace::Generic, Type::scalar(ScalarKind::I8));

    assert!(TypeClass::Any.admits(&i32s));
    assert!(TypeClass::Any.admits(&gptr));
    assert!(!TypeClass::Any.admits(&Type::Void));

    assert!(TypeClass::AnyInt.admits(&i32s));
    assert!(TypeClass::AnyInt.admits(&v4i1));
    assert!(!TypeClass::AnyInt.admits(&v8f32));
    assert!(!TypeClass::AnyInt.admits(&gptr));

    assert!(TypeClass::AnyFloat.admits(&v8f32));
    assert!(!TypeClass::AnyFloat.admits(&i32s));

    assert!(TypeClass::AnyPtr.admits(&gptr));
    assert!(!TypeClass::AnyPtr.admits(&i32s));
}

#[test]
fn concrete_kind_matching() {
    let int = ConcreteKind::Scalar(ScalarKind::I32);
    assert!(int.matches(&Type::scalar(ScalarKind::I32)));
    assert!(!int.matches(&Type::scalar(ScalarKind::I64)));
    // An exact scalar is not satisfied by a vector of that scalar.
    assert!(!int.matches(&Type::vector(ScalarKind::I32, 4)));

    let gptr = ConcreteKind::Ptr(AddrSpace::Global);
    assert!(gptr.matches(&Type::ptr(AddrSpace::Global, Type::scalar(ScalarKind::F32))));
    assert!(gptr.matches(&Type::ptr(AddrSpace::Global, Type::Void)));
    assert!(!gptr.matches(&Type::ptr(AddrSpace::Local, Type::scalar(ScalarKind::F32))));
    assert!(!gptr.matches(&Type::scalar(ScalarKind::I64)));
}

#[test]
fn pointer_class_has_no_unique_type() {
    assert_eq!(ConcreteKind::Ptr(AddrSpace::Global).as_type(), None);
    assert_eq!(
        ConcreteKind::Scalar(ScalarKind::I8).as_type(),
        Some(Type::scalar(ScalarKind::I8))
    );
    assert_eq!(ConcreteKind::Void.as_type(), Some(Type::Void));
}

#[test]
fn display_round_trips_tokens() {
    for token in [
        "int", "long", "void", "ptr_local", "any", "anyint", "anyptr", "any:int",
        "anyint:short", "vararg", "0", "3",
    ] {
        let pattern = TypePattern::parse(token);
        assert!(pattern.is_some(), "token {token} failed to parse");
        assert_eq!(pattern.map(|p| p.to_string()).as_deref(), Some(token));
    }
}

#[test]
fn overloaded_slots() {
    assert!(TypePattern::parse("any").is_some_and(|p| p.is_overloaded()));
    assert!(TypePattern::parse("anyptr").is_some_and(|p| p.is_overloaded()));
    // Free pointee makes a fixed pointer class overloaded too.
    assert!(TypePattern::parse("ptr_generic").is_some_and(|p| p.is_overloaded()));
    assert!(!TypePattern::parse("int").is_some_and(|p| p.is_overloaded()));
    assert!(!TypePattern::parse("1").is_some_and(|p| p.is_overloaded()));
    assert!(!TypePattern::parse("vararg").is_some_and(|p| p.is_overloaded()));
}

#[test]
fn slot_idx_display() {
    assert_eq!(SlotIdx::RESULT.to_string(), "result");
    assert_eq!(SlotIdx::arg(0).to_string(), "argument 0");
    assert_eq!(SlotIdx::arg(4).index(), 5);
    assert!(SlotIdx::RESULT.is_result());
    assert_eq!(SlotIdx::arg(2).arg_index(), Some(2));
    assert_eq!(SlotIdx::RESULT.arg_index(), None);
}
