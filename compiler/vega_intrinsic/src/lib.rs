//! Intrinsic registry and overload resolution for the Vega back-end.
//!
//! The back-end recognizes a catalogue of named intrinsics, each declared
//! with a result type pattern, an ordered list of argument type patterns
//! (possibly overloaded, possibly variadic) and a set of memory/control
//! attributes. This crate turns that catalogue into something the rest of
//! the compiler can trust:
//!
//! - [`validate`] checks a set of raw catalogue records for structural
//!   consistency and reports every violation it finds;
//! - [`Registry`] owns the validated definitions, built once at startup
//!   and read-only (and freely shared across threads) afterwards;
//! - [`resolve`] unifies a call site's concrete types against a stored
//!   pattern row, producing a fully typed signature or a typed failure;
//! - [`declare`] turns a resolved signature into the mangled, attributed
//!   declaration consumed by verification and instruction selection.
//!
//! # Pattern vocabulary
//!
//! Patterns are parsed from the catalogue's token vocabulary exactly once,
//! at registry-build time. A slot is either a fixed primitive (`int`), a
//! fixed pointer address-space class (`ptr_global`), an overload class
//! with an optional default (`any`, `anyint:int`), a match reference to
//! another slot's resolved type (`"1"`), or the trailing `vararg` marker.

mod attrs;
mod catalogue;
mod declare;
mod error;
mod pattern;
mod registry;
mod resolve;
mod validate;

pub use attrs::{AttrParseError, AttrSet, MemoryEffect};
pub use catalogue::{
    full_name, normalize, IntrinsicDef, RawIntrinsic, INTRINSIC_NAMESPACE,
    VC_INTERNAL_INTRINSICS,
};
pub use declare::{declare, IntrinsicDecl};
pub use error::{CatalogueError, CatalogueErrorKind, InvariantViolation, ResolveError};
pub use pattern::{ConcreteKind, SlotIdx, TypeClass, TypePattern};
pub use registry::Registry;
pub use resolve::{resolve, ResolvedSignature};
pub use validate::validate;
