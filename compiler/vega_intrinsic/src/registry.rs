//! The intrinsic registry: validated definitions, indexed by name.
//!
//! Built exactly once from a validated set, during compiler startup, and
//! read-only afterwards. There is no mutation API: swapping catalogues
//! means constructing a new registry. Because construction consumes only
//! owned data and the registry holds no interior mutability, a built
//! registry is `Send + Sync` and is read concurrently by per-function
//! compilation threads without locking; publishing it before the first
//! resolution call is the only ordering requirement.
//!
//! # Design
//!
//! - Definitions live in a vector; both name indexes map to positions.
//! - Short names are indexed in a `BTreeMap`, so [`Registry::names`]
//!   iterates in sorted order and tooling output is deterministic.
//! - Full IR names (`llvm.vc.internal.*`) get a hash index, since that
//!   is the hot lookup during instruction selection.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use vega_ir::Type;

use crate::catalogue::{IntrinsicDef, RawIntrinsic};
use crate::error::{CatalogueError, ResolveError};
use crate::resolve::{resolve, ResolvedSignature};
use crate::validate::validate;

/// Immutable store of validated intrinsic definitions.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    /// The definitions, in catalogue order.
    defs: Vec<IntrinsicDef>,
    /// Short name -> position (`BTreeMap` for deterministic iteration).
    by_name: BTreeMap<String, usize>,
    /// Full IR name -> position (`FxHashMap` for fast lookup).
    by_full_name: FxHashMap<String, usize>,
}

impl Registry {
    /// Build a registry from an already validated set.
    pub fn build(defs: Vec<IntrinsicDef>) -> Self {
        let mut by_name = BTreeMap::new();
        let mut by_full_name =
            FxHashMap::with_capacity_and_hasher(defs.len(), rustc_hash::FxBuildHasher);
        for (index, def) in defs.iter().enumerate() {
            by_name.insert(def.name.clone(), index);
            by_full_name.insert(def.full_name(), index);
        }
        tracing::debug!(definitions = defs.len(), "built intrinsic registry");
        Registry {
            defs,
            by_name,
            by_full_name,
        }
    }

    /// Validate raw catalogue records and build the registry in one step.
    ///
    /// On failure the registry is never constructed; the caller gets
    /// every collected violation and must refuse to start.
    pub fn from_records(records: &[RawIntrinsic]) -> Result<Self, Vec<CatalogueError>> {
        validate(records).map(Registry::build)
    }

    /// Look up a definition by short catalogue key or full IR name.
    pub fn lookup(&self, name: &str) -> Option<&IntrinsicDef> {
        let index = self
            .by_name
            .get(name)
            .or_else(|| self.by_full_name.get(name))?;
        self.defs.get(*index)
    }

    /// Short names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Is the registry empty?
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Resolve a call site against the named definition.
    #[tracing::instrument(level = "trace", skip(self, args))]
    pub fn resolve(
        &self,
        name: &str,
        args: &[Type],
        expected_result: Option<&Type>,
    ) -> Result<ResolvedSignature, ResolveError> {
        let def = self
            .lookup(name)
            .ok_or_else(|| ResolveError::UnknownIntrinsic {
                name: name.to_string(),
            })?;
        resolve(def, args, expected_result)
    }
}
