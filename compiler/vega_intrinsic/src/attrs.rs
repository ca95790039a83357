//! Intrinsic attributes and their side-effect meaning.
//!
//! The catalogue labels each intrinsic with a comma-joined attribute list
//! (`"Convergent,NoMem"`). Attributes are independent flags, except that
//! the four memory-effect attributes are mutually exclusive: an intrinsic
//! has at most one declared bound on what memory it may touch.
//!
//! The literal label `None` (and an empty list) means no attributes,
//! which leaves the memory effect unknown: the optimizer must assume the
//! intrinsic may read and write anything.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// The attribute set of one intrinsic definition.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct AttrSet: u8 {
        // === Memory effects (mutually exclusive) ===

        /// Reads and writes no memory.
        const NO_MEM = 1 << 0;
        /// Reads only memory reachable from pointer arguments.
        const READ_ARG_MEM = 1 << 1;
        /// May read unconstrained memory; writes nothing.
        const READ_MEM = 1 << 2;
        /// Reads and writes only memory reachable from pointer arguments.
        const READ_WRITE_ARG_MEM = 1 << 3;

        // === Control / scheduling markers ===

        /// Never returns to the caller.
        const NO_RETURN = 1 << 4;
        /// Must not be duplicated by transformations.
        const NO_DUPLICATE = 1 << 5;
        /// Control-flow dependent; cannot be made more divergent.
        const CONVERGENT = 1 << 6;
    }
}

/// The declared memory-effect bound, as consumed by later passes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MemoryEffect {
    /// No attribute declared: may read and write any memory.
    Unknown,
    /// Touches no memory at all.
    None,
    /// May read any memory, writes nothing.
    ReadOnly,
    /// Reads confined to memory reachable from pointer arguments.
    ReadArgsOnly,
    /// Reads and writes confined to memory reachable from pointer
    /// arguments.
    ReadWriteArgs,
}

impl MemoryEffect {
    /// May the intrinsic write memory under this bound?
    pub fn may_write(self) -> bool {
        matches!(self, MemoryEffect::Unknown | MemoryEffect::ReadWriteArgs)
    }

    /// May the intrinsic read memory under this bound?
    pub fn may_read(self) -> bool {
        !matches!(self, MemoryEffect::None)
    }

    /// Is the effect confined to memory reachable from the arguments?
    pub fn arg_mem_only(self) -> bool {
        matches!(
            self,
            MemoryEffect::ReadArgsOnly | MemoryEffect::ReadWriteArgs
        )
    }
}

/// Failure to parse an attribute label list.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum AttrParseError {
    /// A label outside the attribute vocabulary.
    UnknownToken(String),
    /// A second memory-effect label alongside `first`.
    ConflictingMemory {
        /// The memory label seen first.
        first: &'static str,
        /// The conflicting memory label.
        second: &'static str,
    },
}

/// Label table in canonical serialization order.
const LABELS: &[(&str, AttrSet)] = &[
    ("NoMem", AttrSet::NO_MEM),
    ("ReadArgMem", AttrSet::READ_ARG_MEM),
    ("ReadMem", AttrSet::READ_MEM),
    ("ReadWriteArgMem", AttrSet::READ_WRITE_ARG_MEM),
    ("NoReturn", AttrSet::NO_RETURN),
    ("NoDuplicate", AttrSet::NO_DUPLICATE),
    ("Convergent", AttrSet::CONVERGENT),
];

impl AttrSet {
    const MEMORY: AttrSet = AttrSet::NO_MEM
        .union(AttrSet::READ_ARG_MEM)
        .union(AttrSet::READ_MEM)
        .union(AttrSet::READ_WRITE_ARG_MEM);

    /// Parse a comma-joined label list (`"Convergent,NoMem"`).
    ///
    /// `"None"` and the empty string parse to the empty set.
    pub fn parse(text: &str) -> Result<Self, AttrParseError> {
        let mut set = AttrSet::empty();
        for label in text.split(',').map(str::trim) {
            if label.is_empty() || label == "None" {
                continue;
            }
            let Some(&(name, flag)) = LABELS.iter().find(|(name, _)| *name == label) else {
                return Err(AttrParseError::UnknownToken(label.to_string()));
            };
            if AttrSet::MEMORY.contains(flag) && set.intersects(AttrSet::MEMORY) {
                let first = set.memory_label().unwrap_or("NoMem");
                return Err(AttrParseError::ConflictingMemory {
                    first,
                    second: name,
                });
            }
            set.insert(flag);
        }
        Ok(set)
    }

    /// Render the canonical comma-joined form; `"None"` for the empty
    /// set. `parse(serialize(s)) == s` for every valid set.
    pub fn serialize(self) -> String {
        let labels: Vec<&str> = LABELS
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect();
        if labels.is_empty() {
            "None".to_string()
        } else {
            labels.join(",")
        }
    }

    /// The declared memory-effect bound.
    pub fn memory_effect(self) -> MemoryEffect {
        if self.contains(AttrSet::NO_MEM) {
            MemoryEffect::None
        } else if self.contains(AttrSet::READ_ARG_MEM) {
            MemoryEffect::ReadArgsOnly
        } else if self.contains(AttrSet::READ_MEM) {
            MemoryEffect::ReadOnly
        } else if self.contains(AttrSet::READ_WRITE_ARG_MEM) {
            MemoryEffect::ReadWriteArgs
        } else {
            MemoryEffect::Unknown
        }
    }

    /// Never returns to the caller.
    pub fn no_return(self) -> bool {
        self.contains(AttrSet::NO_RETURN)
    }

    /// Must not be duplicated by transformations.
    pub fn no_duplicate(self) -> bool {
        self.contains(AttrSet::NO_DUPLICATE)
    }

    /// Convergent: cannot be made more control-flow dependent.
    pub fn convergent(self) -> bool {
        self.contains(AttrSet::CONVERGENT)
    }

    fn memory_label(self) -> Option<&'static str> {
        LABELS
            .iter()
            .find(|(_, flag)| AttrSet::MEMORY.contains(*flag) && self.contains(*flag))
            .map(|(name, _)| *name)
    }
}

impl fmt::Display for AttrSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
