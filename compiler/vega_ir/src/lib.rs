//! Vega IR - Back-End Type Vocabulary
//!
//! This crate contains the concrete type model shared by the Vega back-end
//! phases (intrinsic resolution, verification, instruction selection):
//! - Scalar kinds with their catalogue token names
//! - Vector shapes over scalar kinds
//! - Pointers tagged with a target address space
//!
//! # Design Philosophy
//!
//! - **Closed enums**: every kind the back-end understands is a variant;
//!   free-form strings are rejected at the edges, once.
//! - **Cheap equality**: every type here derives `Clone, Eq, Hash` so it
//!   can serve as a memoization key anywhere in the pipeline.
//! - **One rendering**: `Display` output doubles as the overload-mangling
//!   suffix, so names seen in IR dumps and in mangled intrinsic names
//!   never disagree.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod types;

pub use types::{AddrSpace, ScalarKind, Type};

// Size assertions to prevent accidental regressions.
// Type is stored in every resolved signature and binding table.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Type;
    // Type enum: largest variant is Ptr with AddrSpace (1) + Box<Type> (8),
    // which forces an explicit tag and 8-byte alignment.
    crate::static_assert_size!(Type, 16);
}
