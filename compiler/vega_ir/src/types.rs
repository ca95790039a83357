//! Concrete types as the back-end sees them.
//!
//! A [`Type`] is always fully concrete: no inference variables, no
//! placeholders. Pattern-level notions such as "any integer" live in the
//! intrinsic crate; by the time a value reaches instruction selection it
//! is one of the shapes below.
//!
//! # Design
//!
//! - `ScalarKind` carries both the catalogue token (`"int"`) and the
//!   IR/mangling suffix (`"i32"`) so the two vocabularies stay in sync.
//! - Pointers nest a full `Type` as their pointee, so vectors-of-pointers
//!   and pointers-to-vectors both render and compare structurally.

use std::fmt;

/// A primitive scalar kind.
///
/// The catalogue names these with C-ish tokens (`char`, `short`, `long`,
/// `half`); the IR renders them by bit width (`i8`, `i16`, `i64`, `f16`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ScalarKind {
    /// 1-bit boolean / predicate.
    Bool,
    /// 8-bit signed integer (`char`).
    I8,
    /// 16-bit signed integer (`short`).
    I16,
    /// 32-bit signed integer (`int`).
    I32,
    /// 64-bit signed integer (`long`).
    I64,
    /// 16-bit IEEE float (`half`).
    F16,
    /// 32-bit IEEE float (`float`).
    F32,
    /// 64-bit IEEE float (`double`).
    F64,
}

impl ScalarKind {
    /// Map a catalogue token to a scalar kind.
    pub fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "bool" => ScalarKind::Bool,
            "char" => ScalarKind::I8,
            "short" => ScalarKind::I16,
            "int" => ScalarKind::I32,
            "long" => ScalarKind::I64,
            "half" => ScalarKind::F16,
            "float" => ScalarKind::F32,
            "double" => ScalarKind::F64,
            _ => return None,
        })
    }

    /// The catalogue token for this kind.
    pub fn token(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::I8 => "char",
            ScalarKind::I16 => "short",
            ScalarKind::I32 => "int",
            ScalarKind::I64 => "long",
            ScalarKind::F16 => "half",
            ScalarKind::F32 => "float",
            ScalarKind::F64 => "double",
        }
    }

    /// The IR spelling, also used as the overload-mangling suffix.
    pub fn suffix(self) -> &'static str {
        match self {
            ScalarKind::Bool => "i1",
            ScalarKind::I8 => "i8",
            ScalarKind::I16 => "i16",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::F16 => "f16",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
        }
    }

    /// Bit width of the kind.
    pub fn bits(self) -> u32 {
        match self {
            ScalarKind::Bool => 1,
            ScalarKind::I8 => 8,
            ScalarKind::I16 | ScalarKind::F16 => 16,
            ScalarKind::I32 | ScalarKind::F32 => 32,
            ScalarKind::I64 | ScalarKind::F64 => 64,
        }
    }

    /// Integer or boolean kind.
    pub fn is_int_or_bool(self) -> bool {
        matches!(
            self,
            ScalarKind::Bool
                | ScalarKind::I8
                | ScalarKind::I16
                | ScalarKind::I32
                | ScalarKind::I64
        )
    }

    /// Floating-point kind.
    pub fn is_float(self) -> bool {
        matches!(self, ScalarKind::F16 | ScalarKind::F32 | ScalarKind::F64)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A pointer address space.
///
/// The numeric encoding is the one used in mangled names and in the
/// target's memory model (`p1i8` is a pointer to `i8` in global memory).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AddrSpace {
    /// Per-thread private memory.
    Private,
    /// Device-global memory.
    Global,
    /// Read-only constant memory.
    Constant,
    /// Workgroup-local (shared) memory.
    Local,
    /// Generic: may alias any of the above, disambiguated at runtime.
    Generic,
}

impl AddrSpace {
    /// Map a catalogue token (`"ptr_global"`) to an address space.
    pub fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "ptr_private" => AddrSpace::Private,
            "ptr_global" => AddrSpace::Global,
            "ptr_constant" => AddrSpace::Constant,
            "ptr_local" => AddrSpace::Local,
            "ptr_generic" => AddrSpace::Generic,
            _ => return None,
        })
    }

    /// The catalogue token for this address space.
    pub fn token(self) -> &'static str {
        match self {
            AddrSpace::Private => "ptr_private",
            AddrSpace::Global => "ptr_global",
            AddrSpace::Constant => "ptr_constant",
            AddrSpace::Local => "ptr_local",
            AddrSpace::Generic => "ptr_generic",
        }
    }

    /// Numeric encoding used in mangled names.
    pub fn encoding(self) -> u32 {
        match self {
            AddrSpace::Private => 0,
            AddrSpace::Global => 1,
            AddrSpace::Constant => 2,
            AddrSpace::Local => 3,
            AddrSpace::Generic => 4,
        }
    }
}

impl fmt::Display for AddrSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A concrete back-end type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    /// No value. Legal only as a result type.
    Void,
    /// A scalar.
    Scalar(ScalarKind),
    /// A fixed-width vector of scalars.
    Vector {
        /// Element kind.
        elem: ScalarKind,
        /// Lane count.
        lanes: u32,
    },
    /// A pointer into a specific address space.
    Ptr {
        /// Target address space.
        space: AddrSpace,
        /// Pointee type.
        pointee: Box<Type>,
    },
}

impl Type {
    /// Shorthand for a scalar type.
    pub fn scalar(kind: ScalarKind) -> Self {
        Type::Scalar(kind)
    }

    /// Shorthand for a vector type.
    pub fn vector(elem: ScalarKind, lanes: u32) -> Self {
        Type::Vector { elem, lanes }
    }

    /// Shorthand for a pointer type.
    pub fn ptr(space: AddrSpace, pointee: Type) -> Self {
        Type::Ptr {
            space,
            pointee: Box::new(pointee),
        }
    }

    /// Is this `void`?
    pub fn is_void(&self) -> bool {
        matches!(self, Type::Void)
    }

    /// Is this a pointer (in any address space)?
    pub fn is_ptr(&self) -> bool {
        matches!(self, Type::Ptr { .. })
    }

    /// Scalar element kind of a scalar or vector type.
    pub fn elem_kind(&self) -> Option<ScalarKind> {
        match self {
            Type::Scalar(kind) => Some(*kind),
            Type::Vector { elem, .. } => Some(*elem),
            Type::Void | Type::Ptr { .. } => None,
        }
    }

    /// Integer class: an integer/bool scalar, or a vector of them.
    pub fn is_int_class(&self) -> bool {
        self.elem_kind().is_some_and(ScalarKind::is_int_or_bool)
    }

    /// Float class: a float scalar, or a vector of floats.
    pub fn is_float_class(&self) -> bool {
        self.elem_kind().is_some_and(ScalarKind::is_float)
    }

    /// The overload-mangling suffix for this type (`i32`, `v8f32`, `p1i8`).
    pub fn suffix(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => f.write_str("void"),
            Type::Scalar(kind) => f.write_str(kind.suffix()),
            Type::Vector { elem, lanes } => write!(f, "v{lanes}{}", elem.suffix()),
            Type::Ptr { space, pointee } => write!(f, "p{}{pointee}", space.encoding()),
        }
    }
}
