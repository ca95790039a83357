//! One-shot structural validation of a candidate catalogue.
//!
//! Validation is the only path from [`RawIntrinsic`] records to
//! [`IntrinsicDef`]s, so everything downstream — the registry, the
//! resolver, the declaration generator — can assume the invariants hold.
//! The pass is pure and collects every violation it finds rather than
//! stopping at the first, so a catalogue author sees all problems at
//! once. No state outlives a failed validation.

use rustc_hash::FxHashMap;

use crate::attrs::{AttrParseError, AttrSet};
use crate::catalogue::{normalize, IntrinsicDef, RawIntrinsic};
use crate::error::{CatalogueError, CatalogueErrorKind};
use crate::pattern::{SlotIdx, TypePattern};

/// Validate a candidate catalogue.
///
/// Checks, per record: every type token parses; the attribute list
/// parses with at most one memory-effect label; `vararg` appears only as
/// the final argument pattern; every match-reference chain is acyclic
/// and terminates at a concrete or class slot. Across records: names are
/// unique, including after namespace normalization (`jump_table` and
/// `llvm.vc.internal.jump.table` collide).
pub fn validate(records: &[RawIntrinsic]) -> Result<Vec<IntrinsicDef>, Vec<CatalogueError>> {
    let mut errors = Vec::new();
    let mut defs = Vec::with_capacity(records.len());
    // Normalized key -> first definition's name.
    let mut seen: FxHashMap<String, &str> = FxHashMap::default();

    for raw in records {
        let before = errors.len();

        match seen.entry(normalize(raw.name)) {
            std::collections::hash_map::Entry::Occupied(entry) => {
                errors.push(CatalogueError {
                    name: raw.name.to_string(),
                    slot: None,
                    kind: CatalogueErrorKind::DuplicateName {
                        previous: (*entry.get()).to_string(),
                    },
                });
            }
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(raw.name);
            }
        }

        let result = parse_slot(raw.name, SlotIdx::RESULT, raw.result, &mut errors);
        if matches!(result, Some(TypePattern::VarArgTail)) {
            errors.push(CatalogueError {
                name: raw.name.to_string(),
                slot: Some(SlotIdx::RESULT),
                kind: CatalogueErrorKind::MisplacedVarArg,
            });
        }

        let mut arguments = Vec::with_capacity(raw.arguments.len());
        for (i, token) in raw.arguments.iter().enumerate() {
            let slot = SlotIdx::arg(i);
            if let Some(pattern) = parse_slot(raw.name, slot, token, &mut errors) {
                if pattern == TypePattern::VarArgTail && i + 1 != raw.arguments.len() {
                    errors.push(CatalogueError {
                        name: raw.name.to_string(),
                        slot: Some(slot),
                        kind: CatalogueErrorKind::MisplacedVarArg,
                    });
                }
                arguments.push(pattern);
            }
        }

        let attrs = match AttrSet::parse(raw.attributes) {
            Ok(attrs) => attrs,
            Err(err) => {
                errors.push(CatalogueError {
                    name: raw.name.to_string(),
                    slot: None,
                    kind: match err {
                        AttrParseError::UnknownToken(token) => {
                            CatalogueErrorKind::UnknownAttributeToken { token }
                        }
                        AttrParseError::ConflictingMemory { first, second } => {
                            CatalogueErrorKind::ConflictingMemoryAttributes { first, second }
                        }
                    },
                });
                AttrSet::empty()
            }
        };

        if errors.len() > before {
            continue;
        }
        let Some(result) = result else { continue };

        let def = IntrinsicDef {
            name: raw.name.to_string(),
            result,
            arguments,
            attrs,
        };
        check_match_refs(&def, &mut errors);
        if errors.len() == before {
            defs.push(def);
        }
    }

    tracing::debug!(
        definitions = defs.len(),
        violations = errors.len(),
        "validated intrinsic catalogue"
    );
    if errors.is_empty() {
        Ok(defs)
    } else {
        Err(errors)
    }
}

fn parse_slot(
    name: &str,
    slot: SlotIdx,
    token: &str,
    errors: &mut Vec<CatalogueError>,
) -> Option<TypePattern> {
    let pattern = TypePattern::parse(token);
    if pattern.is_none() {
        errors.push(CatalogueError {
            name: name.to_string(),
            slot: Some(slot),
            kind: CatalogueErrorKind::UnknownTypeToken {
                token: token.to_string(),
            },
        });
    }
    pattern
}

/// Every match-reference chain must be acyclic and terminate at a
/// concrete or class slot. Out-of-range targets and references into the
/// vararg tail can never bind and fail the same way.
fn check_match_refs(def: &IntrinsicDef, errors: &mut Vec<CatalogueError>) {
    let slot_count = def.fixed_arg_len() + 1;
    for index in 0..slot_count {
        let slot = if index == 0 {
            SlotIdx::RESULT
        } else {
            SlotIdx::arg(index - 1)
        };
        let Some(TypePattern::MatchRef(first)) = def.pattern(slot) else {
            continue;
        };

        let mut visited = vec![false; slot_count];
        visited[index] = true;
        let mut target = *first;
        let bad = loop {
            if target.index() >= slot_count || def.pattern(target).is_none() {
                break Some(target);
            }
            if visited[target.index()] {
                break Some(target);
            }
            match def.pattern(target) {
                Some(TypePattern::MatchRef(next)) => {
                    visited[target.index()] = true;
                    target = *next;
                }
                _ => break None,
            }
        };
        if let Some(target) = bad {
            errors.push(CatalogueError {
                name: def.name.clone(),
                slot: Some(slot),
                kind: CatalogueErrorKind::UnresolvedMatchChain { target },
            });
        }
    }
}

#[cfg(test)]
mod tests;
