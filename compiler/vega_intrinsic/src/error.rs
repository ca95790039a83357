//! Error types for catalogue validation and call-site resolution.
//!
//! Two classes, reported differently:
//!
//! - **Catalogue errors** are found before a registry exists. They are
//!   fatal to compiler startup, and the validator collects all of them in
//!   one pass so a catalogue author sees every problem at once.
//! - **Resolution errors** are per-call-site and recoverable: the caller
//!   reports "no matching intrinsic overload" at that site and moves on.
//!
//! [`InvariantViolation`] is neither: it marks an internal-consistency
//! bug in this engine and renders under an E9xxx code so it is never
//! mistaken for bad user input.

use std::error::Error;
use std::fmt;

use vega_diagnostic::{Diagnostic, ErrorCode};
use vega_ir::Type;

use crate::pattern::{SlotIdx, TypeClass};

/// What is wrong with a catalogue record.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum CatalogueErrorKind {
    /// A result or argument token outside the pattern vocabulary.
    UnknownTypeToken {
        /// The offending token.
        token: String,
    },
    /// An attribute label outside the attribute vocabulary.
    UnknownAttributeToken {
        /// The offending label.
        token: String,
    },
    /// Two memory-effect attributes on one definition.
    ConflictingMemoryAttributes {
        /// The memory label seen first.
        first: &'static str,
        /// The conflicting memory label.
        second: &'static str,
    },
    /// Two definitions collide on a name (after namespace normalization).
    DuplicateName {
        /// The earlier definition's name.
        previous: String,
    },
    /// `vararg` somewhere other than the final argument slot.
    MisplacedVarArg,
    /// A match reference that can never bind: out of range, targeting
    /// the vararg tail, or part of a reference cycle.
    UnresolvedMatchChain {
        /// The referenced slot.
        target: SlotIdx,
    },
}

/// A structural violation in one catalogue record.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CatalogueError {
    /// Name of the offending definition.
    pub name: String,
    /// The slot the violation is attached to, when there is one.
    pub slot: Option<SlotIdx>,
    /// The violation itself.
    pub kind: CatalogueErrorKind,
}

impl CatalogueError {
    /// The diagnostic code for this violation.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            CatalogueErrorKind::UnknownTypeToken { .. } => ErrorCode::E7001,
            CatalogueErrorKind::UnknownAttributeToken { .. } => ErrorCode::E7002,
            CatalogueErrorKind::ConflictingMemoryAttributes { .. } => ErrorCode::E7003,
            CatalogueErrorKind::DuplicateName { .. } => ErrorCode::E7004,
            CatalogueErrorKind::MisplacedVarArg => ErrorCode::E7005,
            CatalogueErrorKind::UnresolvedMatchChain { .. } => ErrorCode::E7006,
        }
    }

    /// Convert to a diagnostic for the reporting layer.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(self.to_string());
        diag = diag.with_note(format!("in intrinsic `{}`", self.name));
        if let Some(slot) = self.slot {
            diag = diag.with_note(format!("in the {slot} slot"));
        }
        diag
    }
}

impl fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CatalogueErrorKind::UnknownTypeToken { token } => {
                write!(f, "unknown type token `{token}`")
            }
            CatalogueErrorKind::UnknownAttributeToken { token } => {
                write!(f, "unknown attribute `{token}`")
            }
            CatalogueErrorKind::ConflictingMemoryAttributes { first, second } => {
                write!(f, "memory attribute `{second}` conflicts with `{first}`")
            }
            CatalogueErrorKind::DuplicateName { previous } => {
                write!(f, "name collides with `{previous}`")
            }
            CatalogueErrorKind::MisplacedVarArg => {
                write!(f, "`vararg` is only valid as the last argument")
            }
            CatalogueErrorKind::UnresolvedMatchChain { target } => {
                write!(f, "match reference to the {target} slot can never bind")
            }
        }
    }
}

impl Error for CatalogueError {}

/// Failure to resolve a call site against a definition.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ResolveError {
    /// No definition under the requested name.
    UnknownIntrinsic {
        /// The requested name.
        name: String,
    },
    /// Wrong number of call-site arguments.
    ArityMismatch {
        /// Declared argument count (the fixed prefix, if variadic).
        expected: usize,
        /// Call-site argument count.
        found: usize,
        /// Whether the definition accepts a vararg tail.
        variadic: bool,
    },
    /// A supplied type outside its slot's class.
    ClassMismatch {
        /// The offending slot.
        slot: SlotIdx,
        /// The class the slot is restricted to.
        class: TypeClass,
        /// The supplied type.
        found: Type,
    },
    /// A supplied type conflicts with a fixed kind or a matched slot.
    TypeMismatch {
        /// The offending slot.
        slot: SlotIdx,
        /// What the definition requires there.
        expected: String,
        /// The supplied type.
        found: Type,
    },
    /// A slot no constraint reached: nothing at the call site, no
    /// default, no match reference to it.
    UnderconstrainedType {
        /// The unresolved slot.
        slot: SlotIdx,
    },
    /// A match-reference chain made no progress at this call site.
    UnresolvedMatchChain {
        /// The slot whose reference stayed unresolved.
        slot: SlotIdx,
    },
}

impl ResolveError {
    /// The diagnostic code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ResolveError::UnknownIntrinsic { .. } => ErrorCode::E8001,
            ResolveError::ArityMismatch { .. } => ErrorCode::E8002,
            ResolveError::ClassMismatch { .. } => ErrorCode::E8003,
            ResolveError::TypeMismatch { .. } => ErrorCode::E8004,
            ResolveError::UnderconstrainedType { .. } => ErrorCode::E8005,
            ResolveError::UnresolvedMatchChain { .. } => ErrorCode::E8006,
        }
    }

    /// Convert to a diagnostic for the reporting layer.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_note("no matching intrinsic overload for this call site")
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UnknownIntrinsic { name } => {
                write!(f, "unknown intrinsic `{name}`")
            }
            ResolveError::ArityMismatch {
                expected,
                found,
                variadic: false,
            } => write!(f, "expected {expected} arguments, found {found}"),
            ResolveError::ArityMismatch {
                expected,
                found,
                variadic: true,
            } => write!(f, "expected at least {expected} arguments, found {found}"),
            ResolveError::ClassMismatch { slot, class, found } => {
                write!(f, "{slot}: `{found}` is not in class `{class}`")
            }
            ResolveError::TypeMismatch {
                slot,
                expected,
                found,
            } => write!(f, "{slot}: expected {expected}, found `{found}`"),
            ResolveError::UnderconstrainedType { slot } => {
                write!(f, "{slot}: type cannot be determined from the call site")
            }
            ResolveError::UnresolvedMatchChain { slot } => {
                write!(f, "{slot}: match reference left unresolved by the call site")
            }
        }
    }
}

impl Error for ResolveError {}

/// A resolved signature that does not satisfy its own definition.
///
/// Cannot be produced by a successful resolution; seeing one means a bug
/// in this engine. Reported assertion-style under E9001, never as a user
/// error.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct InvariantViolation {
    /// What was violated.
    pub detail: String,
}

impl InvariantViolation {
    pub(crate) fn new(detail: impl Into<String>) -> Self {
        InvariantViolation {
            detail: detail.into(),
        }
    }

    /// Convert to a diagnostic for the reporting layer.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(ErrorCode::E9001)
            .with_message(self.to_string())
            .with_note("this is a compiler bug, not an error in the input")
    }
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "internal invariant violated: {}", self.detail)
    }
}

impl Error for InvariantViolation {}
