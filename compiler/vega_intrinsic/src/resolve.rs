//! Call-site overload resolution.
//!
//! Resolution unifies the concrete types at one call site with a
//! definition's pattern row, producing a fully typed signature. The
//! binding table is a flat array indexed by slot (slot 0 the result,
//! 1..=N the fixed arguments); match references can point at slots in
//! either direction, so binding iterates to a fixed point — bounded by
//! the slot count — instead of assuming one left-to-right pass suffices.
//!
//! Equality constraints propagate both ways: a match slot takes its
//! target's binding, and a supplied type on a match slot is pushed back
//! into an unbound target (re-checked against the target's own pattern).
//!
//! When the fixed point stalls with an unbound class result, two
//! fallbacks run in order. First, result-from-pointee inference: an
//! intrinsic that reads through an overloaded pointer (the
//! variable-region shape) yields the pointee type, so an unbound class
//! result takes the pointee of the first bound pointer argument its
//! class admits. Second, declared defaults fill slots no constraint
//! reached at all. Call-site information always wins over both, and the
//! pointee (call-site-derived) wins over a declared default.
//!
//! Resolution is pure: identical inputs yield identical signatures or
//! identical failures.

use smallvec::SmallVec;
use vega_ir::Type;

use crate::attrs::AttrSet;
use crate::catalogue::IntrinsicDef;
use crate::error::ResolveError;
use crate::pattern::{SlotIdx, TypePattern};

/// A fully typed, attributed signature for one call site.
///
/// Ephemeral: produced per resolution and consumed by the declaration
/// generator; never shared back into the registry.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ResolvedSignature {
    /// Concrete result type.
    pub result: Type,
    /// Concrete argument types, vararg tail included.
    pub args: SmallVec<[Type; 8]>,
    /// Attributes carried over from the definition.
    pub attrs: AttrSet,
}

/// Resolve a call site against a definition.
///
/// `args` are the concrete call-site argument types; `expected_result`
/// is the optional result hint (callers that only supply arguments get
/// result inference where the patterns allow it). Excess trailing
/// arguments of a variadic definition are accepted unconstrained and
/// copied into the signature verbatim.
#[tracing::instrument(level = "trace", skip(def, args), fields(name = %def.name))]
pub fn resolve(
    def: &IntrinsicDef,
    args: &[Type],
    expected_result: Option<&Type>,
) -> Result<ResolvedSignature, ResolveError> {
    let fixed = def.fixed_arg_len();
    if args.len() < fixed || (!def.is_variadic() && args.len() != fixed) {
        return Err(ResolveError::ArityMismatch {
            expected: fixed,
            found: args.len(),
            variadic: def.is_variadic(),
        });
    }

    let mut table = BindingTable::new(def, args, expected_result);
    table.run()?;

    let mut bindings = table.into_bindings()?;
    let result = bindings.remove(0);
    let mut out_args: SmallVec<[Type; 8]> = bindings.into_iter().collect();
    out_args.extend(args[fixed..].iter().cloned());

    Ok(ResolvedSignature {
        result,
        args: out_args,
        attrs: def.attrs,
    })
}

/// Slot bindings for one resolution, slot 0 first.
struct BindingTable<'a> {
    def: &'a IntrinsicDef,
    args: &'a [Type],
    expected_result: Option<&'a Type>,
    bindings: Vec<Option<Type>>,
}

impl<'a> BindingTable<'a> {
    fn new(def: &'a IntrinsicDef, args: &'a [Type], expected_result: Option<&'a Type>) -> Self {
        BindingTable {
            def,
            args,
            expected_result,
            bindings: vec![None; def.fixed_arg_len() + 1],
        }
    }

    fn slot(index: usize) -> SlotIdx {
        if index == 0 {
            SlotIdx::RESULT
        } else {
            SlotIdx::arg(index - 1)
        }
    }

    /// The call-site type for a slot, if the caller supplied one.
    fn supplied(&self, index: usize) -> Option<&'a Type> {
        if index == 0 {
            self.expected_result
        } else {
            self.args.get(index - 1)
        }
    }

    /// Iterate to a fixed point, then fill defaults for whatever the
    /// constraints never reached.
    fn run(&mut self) -> Result<(), ResolveError> {
        loop {
            let mut progress = false;
            let mut unresolved = 0usize;
            for index in 0..self.bindings.len() {
                if self.bindings[index].is_some() {
                    continue;
                }
                match self.bind_slot(index)? {
                    BindOutcome::Bound => progress = true,
                    BindOutcome::Deferred => unresolved += 1,
                }
            }
            if unresolved == 0 {
                return Ok(());
            }
            if !progress && !self.infer_result_from_pointee() && !self.apply_default() {
                return Err(self.stall_error());
            }
        }
    }

    fn bind_slot(&mut self, index: usize) -> Result<BindOutcome, ResolveError> {
        let slot = Self::slot(index);
        let Some(pattern) = self.def.pattern(slot) else {
            return Ok(BindOutcome::Deferred);
        };
        match *pattern {
            TypePattern::Concrete(kind) => match self.supplied(index) {
                Some(ty) => {
                    if !kind.matches(ty) {
                        return Err(ResolveError::TypeMismatch {
                            slot,
                            expected: format!("`{}`", TypePattern::Concrete(kind)),
                            found: ty.clone(),
                        });
                    }
                    self.bindings[index] = Some(ty.clone());
                    Ok(BindOutcome::Bound)
                }
                None => match kind.as_type() {
                    Some(ty) => {
                        self.bindings[index] = Some(ty);
                        Ok(BindOutcome::Bound)
                    }
                    // A pointer class with no supplied type: the pointee
                    // is unknown, so the slot cannot bind by itself.
                    None => Ok(BindOutcome::Deferred),
                },
            },
            TypePattern::AnyClass { class, .. } => match self.supplied(index) {
                Some(ty) => {
                    if !class.admits(ty) {
                        return Err(ResolveError::ClassMismatch {
                            slot,
                            class,
                            found: ty.clone(),
                        });
                    }
                    self.bindings[index] = Some(ty.clone());
                    Ok(BindOutcome::Bound)
                }
                None => Ok(BindOutcome::Deferred),
            },
            TypePattern::MatchRef(target) => self.bind_match(index, slot, target),
            // The tail never appears among fixed slots.
            TypePattern::VarArgTail => Ok(BindOutcome::Deferred),
        }
    }

    /// Bind a match slot from its target, or push a supplied type back
    /// into an unbound target.
    fn bind_match(
        &mut self,
        index: usize,
        slot: SlotIdx,
        target: SlotIdx,
    ) -> Result<BindOutcome, ResolveError> {
        if let Some(bound) = self.bindings[target.index()].clone() {
            if let Some(ty) = self.supplied(index) {
                if *ty != bound {
                    return Err(ResolveError::TypeMismatch {
                        slot,
                        expected: format!("`{bound}` (matching the {target} slot)"),
                        found: ty.clone(),
                    });
                }
            }
            self.bindings[index] = Some(bound);
            return Ok(BindOutcome::Bound);
        }
        let Some(ty) = self.supplied(index) else {
            return Ok(BindOutcome::Deferred);
        };
        self.check_against_pattern(target, ty)?;
        self.bindings[target.index()] = Some(ty.clone());
        self.bindings[index] = Some(ty.clone());
        Ok(BindOutcome::Bound)
    }

    /// A type pushed backward into a match target must still satisfy the
    /// target's own pattern.
    fn check_against_pattern(&self, target: SlotIdx, ty: &Type) -> Result<(), ResolveError> {
        match self.def.pattern(target) {
            Some(TypePattern::Concrete(kind)) if !kind.matches(ty) => {
                Err(ResolveError::TypeMismatch {
                    slot: target,
                    expected: format!("`{}`", TypePattern::Concrete(*kind)),
                    found: ty.clone(),
                })
            }
            Some(TypePattern::AnyClass { class, .. }) if !class.admits(ty) => {
                Err(ResolveError::ClassMismatch {
                    slot: target,
                    class: *class,
                    found: ty.clone(),
                })
            }
            // A match target that is itself a match re-checks when its
            // own constraint propagates on a later iteration.
            _ => Ok(()),
        }
    }

    /// Infer an unbound class result from the pointee of a bound pointer
    /// argument. Covers intrinsics that read a value through an
    /// overloaded pointer, where the result is the element type behind
    /// the pointer rather than anything spelled at the call site.
    fn infer_result_from_pointee(&mut self) -> bool {
        if self.bindings[0].is_some() {
            return false;
        }
        let Some(TypePattern::AnyClass { class, .. }) = self.def.pattern(SlotIdx::RESULT) else {
            return false;
        };
        let inferred = self.bindings[1..].iter().flatten().find_map(|bound| {
            match bound {
                Type::Ptr { pointee, .. } if class.admits(pointee) => {
                    Some((**pointee).clone())
                }
                _ => None,
            }
        });
        match inferred {
            Some(ty) => {
                self.bindings[0] = Some(ty);
                true
            }
            None => false,
        }
    }

    /// Bind one defaulted class slot, if any remains unbound. Returns
    /// whether progress was made.
    fn apply_default(&mut self) -> bool {
        for index in 0..self.bindings.len() {
            if self.bindings[index].is_some() {
                continue;
            }
            if let Some(TypePattern::AnyClass {
                default: Some(kind),
                ..
            }) = self.def.pattern(Self::slot(index))
            {
                self.bindings[index] = Some(Type::Scalar(*kind));
                return true;
            }
        }
        false
    }

    /// The failure for a stalled fixed point: an unresolved match chain
    /// if any match slot is still open, otherwise an underconstrained
    /// class or pointer slot.
    fn stall_error(&self) -> ResolveError {
        for index in 0..self.bindings.len() {
            if self.bindings[index].is_none() {
                let slot = Self::slot(index);
                if let Some(TypePattern::MatchRef(_)) = self.def.pattern(slot) {
                    return ResolveError::UnresolvedMatchChain { slot };
                }
            }
        }
        for index in 0..self.bindings.len() {
            if self.bindings[index].is_none() {
                return ResolveError::UnderconstrainedType {
                    slot: Self::slot(index),
                };
            }
        }
        // run() only calls this while a slot is unresolved.
        ResolveError::UnderconstrainedType {
            slot: SlotIdx::RESULT,
        }
    }

    fn into_bindings(self) -> Result<Vec<Type>, ResolveError> {
        let mut out = Vec::with_capacity(self.bindings.len());
        for (index, binding) in self.bindings.into_iter().enumerate() {
            match binding {
                Some(ty) => out.push(ty),
                None => {
                    return Err(ResolveError::UnderconstrainedType {
                        slot: Self::slot(index),
                    })
                }
            }
        }
        Ok(out)
    }
}

enum BindOutcome {
    Bound,
    Deferred,
}
