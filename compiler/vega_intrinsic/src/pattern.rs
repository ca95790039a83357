//! Type patterns: the declaration-side vocabulary of intrinsic signatures.
//!
//! A pattern describes one slot of a signature (the result, or one
//! argument). The catalogue spells patterns as tokens; they are parsed
//! here into a closed enum so that a bad token is rejected once, when the
//! registry is built, instead of being re-interpreted at every call site.

use std::fmt;

use vega_ir::{AddrSpace, ScalarKind, Type};

/// A slot index into a signature row.
///
/// Slot 0 is the result; slots 1..=N are the arguments, in declaration
/// order. Match-reference tokens in the catalogue use the same numbering.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct SlotIdx(u8);

impl SlotIdx {
    /// The result slot.
    pub const RESULT: SlotIdx = SlotIdx(0);

    /// The slot of the `index`-th argument (zero-based).
    pub fn arg(index: usize) -> Self {
        debug_assert!(index < usize::from(u8::MAX));
        SlotIdx(u8::try_from(index + 1).unwrap_or(u8::MAX))
    }

    /// Raw slot number: 0 for the result, 1..=N for arguments.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Is this the result slot?
    pub fn is_result(self) -> bool {
        self.0 == 0
    }

    /// Zero-based argument index, if this is an argument slot.
    pub fn arg_index(self) -> Option<usize> {
        (self.0 > 0).then(|| usize::from(self.0) - 1)
    }
}

impl fmt::Display for SlotIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.arg_index() {
            None => f.write_str("result"),
            Some(i) => write!(f, "argument {i}"),
        }
    }
}

/// An overload class: the set of concrete types a class slot accepts.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeClass {
    /// Any non-void type.
    Any,
    /// Integer or boolean scalars, and vectors of them.
    AnyInt,
    /// Float scalars, and vectors of them.
    AnyFloat,
    /// Pointers, in any address space.
    AnyPtr,
}

impl TypeClass {
    /// Does `ty` belong to this class?
    pub fn admits(self, ty: &Type) -> bool {
        match self {
            TypeClass::Any => !ty.is_void(),
            TypeClass::AnyInt => ty.is_int_class(),
            TypeClass::AnyFloat => ty.is_float_class(),
            TypeClass::AnyPtr => ty.is_ptr(),
        }
    }

    /// The catalogue token for this class.
    pub fn token(self) -> &'static str {
        match self {
            TypeClass::Any => "any",
            TypeClass::AnyInt => "anyint",
            TypeClass::AnyFloat => "anyfloat",
            TypeClass::AnyPtr => "anyptr",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "any" => TypeClass::Any,
            "anyint" => TypeClass::AnyInt,
            "anyfloat" => TypeClass::AnyFloat,
            "anyptr" => TypeClass::AnyPtr,
            _ => return None,
        })
    }
}

impl fmt::Display for TypeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A fixed kind: the non-overloaded half of the pattern vocabulary.
///
/// A fixed pointer class pins the address space but leaves the pointee
/// overloaded; the two dimensions of a pointer type are constrained
/// independently.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConcreteKind {
    /// `void` (results only, by convention).
    Void,
    /// An exact scalar kind.
    Scalar(ScalarKind),
    /// A pointer in a fixed address space, pointee unconstrained.
    Ptr(AddrSpace),
}

impl ConcreteKind {
    /// Does the supplied concrete type satisfy this kind?
    pub fn matches(self, ty: &Type) -> bool {
        match self {
            ConcreteKind::Void => ty.is_void(),
            ConcreteKind::Scalar(kind) => *ty == Type::Scalar(kind),
            ConcreteKind::Ptr(space) => matches!(ty, Type::Ptr { space: s, .. } if *s == space),
        }
    }

    /// The unique concrete type this kind denotes, if there is one.
    ///
    /// A pointer class denotes no single type (the pointee is free), so a
    /// pointer slot can only bind from call-site information.
    pub fn as_type(self) -> Option<Type> {
        match self {
            ConcreteKind::Void => Some(Type::Void),
            ConcreteKind::Scalar(kind) => Some(Type::Scalar(kind)),
            ConcreteKind::Ptr(_) => None,
        }
    }

    fn token(self) -> &'static str {
        match self {
            ConcreteKind::Void => "void",
            ConcreteKind::Scalar(kind) => kind.token(),
            ConcreteKind::Ptr(space) => space.token(),
        }
    }
}

/// One slot of an intrinsic signature pattern.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypePattern {
    /// A fixed primitive or fixed pointer address-space class.
    Concrete(ConcreteKind),
    /// An unconstrained slot restricted to a class, with an optional
    /// default kind used when no call-site information disambiguates it.
    AnyClass {
        /// The class the slot is restricted to.
        class: TypeClass,
        /// Default scalar kind for pure inference, from `any:int` syntax.
        default: Option<ScalarKind>,
    },
    /// Must equal the type resolved for another slot.
    MatchRef(SlotIdx),
    /// Zero or more trailing arguments of unconstrained type. Valid only
    /// as the last argument pattern.
    VarArgTail,
}

impl TypePattern {
    /// Parse a catalogue token into a pattern.
    ///
    /// Returns `None` for an unrecognized token, including a class
    /// default the class cannot admit (`anyfloat:int`).
    pub fn parse(token: &str) -> Option<Self> {
        if token == "vararg" {
            return Some(TypePattern::VarArgTail);
        }
        if let Ok(slot) = token.parse::<u8>() {
            return Some(TypePattern::MatchRef(SlotIdx(slot)));
        }
        if let Some((class_tok, default_tok)) = token.split_once(':') {
            let class = TypeClass::from_token(class_tok)?;
            let default = ScalarKind::from_token(default_tok)?;
            if !class.admits(&Type::Scalar(default)) {
                return None;
            }
            return Some(TypePattern::AnyClass {
                class,
                default: Some(default),
            });
        }
        if let Some(class) = TypeClass::from_token(token) {
            return Some(TypePattern::AnyClass {
                class,
                default: None,
            });
        }
        if token == "void" {
            return Some(TypePattern::Concrete(ConcreteKind::Void));
        }
        if let Some(kind) = ScalarKind::from_token(token) {
            return Some(TypePattern::Concrete(ConcreteKind::Scalar(kind)));
        }
        if let Some(space) = AddrSpace::from_token(token) {
            return Some(TypePattern::Concrete(ConcreteKind::Ptr(space)));
        }
        None
    }

    /// Is this slot overloaded, i.e. does its concrete type vary between
    /// call sites? Overloaded slots contribute a suffix to the mangled
    /// declaration name.
    pub fn is_overloaded(&self) -> bool {
        match self {
            TypePattern::Concrete(kind) => kind.as_type().is_none(),
            TypePattern::AnyClass { .. } => true,
            // A matched slot's type is derived from its target, so it
            // carries no suffix of its own.
            TypePattern::MatchRef(_) | TypePattern::VarArgTail => false,
        }
    }
}

impl fmt::Display for TypePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypePattern::Concrete(kind) => f.write_str(kind.token()),
            TypePattern::AnyClass {
                class,
                default: None,
            } => f.write_str(class.token()),
            TypePattern::AnyClass {
                class,
                default: Some(kind),
            } => write!(f, "{}:{}", class.token(), kind.token()),
            TypePattern::MatchRef(slot) => write!(f, "{}", slot.0),
            TypePattern::VarArgTail => f.write_str("vararg"),
        }
    }
}

#[cfg(test)]
mod tests;
