//! Catalogue records: the external shape intrinsic definitions arrive in.
//!
//! This module provides a single source of truth for the back-end
//! intrinsic catalogue. A [`RawIntrinsic`] is the untrusted,
//! tokens-and-strings form a catalogue author produces (however it was
//! authored: table literal, structured file, generated source); an
//! [`IntrinsicDef`] is the validated, typed form the registry stores.
//!
//! # Naming
//!
//! Catalogue keys are short snake_case names (`cast_to_bf16`). In IR the
//! same intrinsic appears under its full name in the internal namespace
//! (`llvm.vc.internal.cast.to.bf16`); [`full_name`] and [`normalize`]
//! convert between the two.

use crate::attrs::AttrSet;
use crate::pattern::{SlotIdx, TypePattern};

/// The namespace prefix of all internal intrinsics.
pub const INTRINSIC_NAMESPACE: &str = "llvm.vc.internal.";

/// An untrusted catalogue record, exactly as authored.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct RawIntrinsic {
    /// Short catalogue key, unique after [`normalize`].
    pub name: &'static str,
    /// Result type token.
    pub result: &'static str,
    /// Argument type tokens, in declaration order.
    pub arguments: &'static [&'static str],
    /// Comma-joined attribute labels (`"None"` for none).
    pub attributes: &'static str,
}

impl RawIntrinsic {
    /// Create a record.
    pub const fn new(
        name: &'static str,
        result: &'static str,
        arguments: &'static [&'static str],
        attributes: &'static str,
    ) -> Self {
        Self {
            name,
            result,
            arguments,
            attributes,
        }
    }
}

/// A validated intrinsic definition.
///
/// Produced only by [`validate`](crate::validate); every pattern parsed,
/// every structural invariant checked. Immutable once stored in a
/// [`Registry`](crate::Registry).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IntrinsicDef {
    /// Short catalogue key.
    pub name: String,
    /// Result slot pattern.
    pub result: TypePattern,
    /// Argument slot patterns, in declaration order.
    pub arguments: Vec<TypePattern>,
    /// Declared attributes.
    pub attrs: AttrSet,
}

impl IntrinsicDef {
    /// Number of fixed (non-vararg) argument slots.
    pub fn fixed_arg_len(&self) -> usize {
        if self.is_variadic() {
            self.arguments.len() - 1
        } else {
            self.arguments.len()
        }
    }

    /// Does the definition end in a vararg tail?
    pub fn is_variadic(&self) -> bool {
        matches!(self.arguments.last(), Some(TypePattern::VarArgTail))
    }

    /// The pattern for a slot: the result, or a fixed argument.
    ///
    /// Returns `None` for out-of-range slots and for the vararg tail
    /// (tail arguments have no pattern to satisfy).
    pub fn pattern(&self, slot: SlotIdx) -> Option<&TypePattern> {
        match slot.arg_index() {
            None => Some(&self.result),
            Some(i) if i < self.fixed_arg_len() => Some(&self.arguments[i]),
            Some(_) => None,
        }
    }

    /// The full IR name of this intrinsic.
    pub fn full_name(&self) -> String {
        full_name(&self.name)
    }
}

/// The full IR name for a short catalogue key:
/// `jump_table` → `llvm.vc.internal.jump.table`.
pub fn full_name(short: &str) -> String {
    let mut name = String::with_capacity(INTRINSIC_NAMESPACE.len() + short.len());
    name.push_str(INTRINSIC_NAMESPACE);
    for ch in short.chars() {
        name.push(if ch == '_' { '.' } else { ch });
    }
    name
}

/// Canonical key for collision checks and lookup: strips an optional
/// namespace prefix and maps `.` back to `_`, so the short and full
/// spellings of one intrinsic normalize identically.
pub fn normalize(name: &str) -> String {
    let stripped = name.strip_prefix(INTRINSIC_NAMESPACE).unwrap_or(name);
    stripped.replace('.', "_")
}

/// The vISA back-end catalogue.
///
/// Each entry corresponds to a vISA instruction or an IR-level helper the
/// code generator recognizes directly.
pub static VC_INTERNAL_INTRINSICS: &[RawIntrinsic] = &[
    // Helper for switch jump-table generation: arg0 is the block index
    // consumed by switchjmp, the tail holds the full set of labels so the
    // IR stays semantically legal. Returns the selected label.
    RawIntrinsic::new("jump_table", "anyptr", &["anyint", "vararg"], "NoMem"),
    // Read a vISA variable region: pointer to the backing global, then
    // vstride/width/stride/offset in elements. General source operand of
    // a MOV.
    RawIntrinsic::new(
        "read_variable_region",
        "any",
        &["anyptr", "int", "int", "int", "int"],
        "ReadMem",
    ),
    // Write a vISA variable region: pointer to the backing global, value,
    // stride/offset in elements, then the write mask. General destination
    // operand of a MOV.
    RawIntrinsic::new(
        "write_variable_region",
        "void",
        &["anyptr", "any", "int", "int", "anyint"],
        "ReadWriteArgMem",
    ),
    // Explicit generic-to-named address-space cast; yields null when the
    // pointer does not actually live in the requested space.
    RawIntrinsic::new("cast_to_ptr_explicit", "anyptr", &["ptr_generic"], "NoMem"),
    // f32 -> bf16 conversion; bf16 travels as i16.
    RawIntrinsic::new("cast_to_bf16", "anyint", &["anyfloat"], "NoMem"),
    // bf16 -> f32 conversion.
    RawIntrinsic::new("cast_from_bf16", "anyfloat", &["anyint"], "NoMem"),
    // f32 -> tf32 rounding.
    RawIntrinsic::new("round_to_tf32", "anyfloat", &["anyint"], "NoMem"),
    // Logical global thread ID within a GPU tile.
    RawIntrinsic::new("logical_thread_id", "int", &[], "NoMem"),
];
