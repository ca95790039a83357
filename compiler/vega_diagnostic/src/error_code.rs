use std::fmt;

/// Error codes for all back-end intrinsic diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E7xxx: Catalogue (registry build) errors
/// - E8xxx: Overload resolution errors
/// - E9xxx: Internal compiler errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Catalogue Errors (E7xxx)
    /// Unknown type token in a result or argument pattern
    E7001,
    /// Unknown attribute token
    E7002,
    /// More than one memory-effect attribute
    E7003,
    /// Duplicate intrinsic name
    E7004,
    /// `vararg` not in the final argument slot
    E7005,
    /// Match-reference chain that can never bind
    E7006,

    // Resolution Errors (E8xxx)
    /// No intrinsic with the requested name
    E8001,
    /// Argument count mismatch
    E8002,
    /// Argument outside the slot's type class
    E8003,
    /// Argument conflicts with a fixed or matched type
    E8004,
    /// Slot left unconstrained by the call site
    E8005,
    /// Match-reference chain unresolved at this call site
    E8006,

    // Internal Errors (E9xxx)
    /// Resolved signature violates its own definition
    E9001,
}

impl ErrorCode {
    /// The code as text, e.g. `"E7001"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E7001 => "E7001",
            ErrorCode::E7002 => "E7002",
            ErrorCode::E7003 => "E7003",
            ErrorCode::E7004 => "E7004",
            ErrorCode::E7005 => "E7005",
            ErrorCode::E7006 => "E7006",
            ErrorCode::E8001 => "E8001",
            ErrorCode::E8002 => "E8002",
            ErrorCode::E8003 => "E8003",
            ErrorCode::E8004 => "E8004",
            ErrorCode::E8005 => "E8005",
            ErrorCode::E8006 => "E8006",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line description of the code.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::E7001 => "unknown type token",
            ErrorCode::E7002 => "unknown attribute token",
            ErrorCode::E7003 => "conflicting memory attributes",
            ErrorCode::E7004 => "duplicate intrinsic name",
            ErrorCode::E7005 => "misplaced vararg",
            ErrorCode::E7006 => "unresolvable match reference",
            ErrorCode::E8001 => "unknown intrinsic",
            ErrorCode::E8002 => "argument count mismatch",
            ErrorCode::E8003 => "type class mismatch",
            ErrorCode::E8004 => "type mismatch",
            ErrorCode::E8005 => "underconstrained type",
            ErrorCode::E8006 => "unresolved match reference",
            ErrorCode::E9001 => "internal invariant violation",
        }
    }

    /// Catalogue-phase code (fatal to registry construction).
    pub fn is_catalogue(self) -> bool {
        matches!(
            self,
            ErrorCode::E7001
                | ErrorCode::E7002
                | ErrorCode::E7003
                | ErrorCode::E7004
                | ErrorCode::E7005
                | ErrorCode::E7006
        )
    }

    /// Internal-consistency code (a bug in the engine, not user input).
    pub fn is_internal(self) -> bool {
        matches!(self, ErrorCode::E9001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
