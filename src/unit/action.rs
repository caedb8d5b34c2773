use crate::core::extension::{Extension, Registry, RegistryError};
use crate::output::print::PrintTerm;
use crate::prelude::*;
use crate::statistics::Statistics;
use crate::unit::extension::{antecedent, UnitExtension};

/// Unit propagation over conditional hypotheses.
///
/// A hypothesis `A1 → .. → An → B` is a clause with literals `A1 .. An`.
/// Given facts for all of them, it yields `B`. Given facts for all but one,
/// `Ai`, and a refutation of `B`, it yields `¬Ai`.
pub struct UnitAction {
    extension: Id<Extension>,
    contrapositive: bool,
    statistics: Statistics,
}

impl UnitAction {
    pub fn initialize(
        registry: &mut Registry,
        options: &Options,
    ) -> Result<Self, RegistryError> {
        let extension =
            registry.register(Box::new(UnitExtension::default()))?;
        let contrapositive = !options.no_contrapositive;
        let statistics = Statistics::default();
        Ok(Self {
            extension,
            contrapositive,
            statistics,
        })
    }

    pub fn finalize(self) -> Statistics {
        self.statistics
    }

    pub fn extension_id(&self) -> Id<Extension> {
        self.extension
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Propagate from a hypothesis: a conditional is discharged against the
    /// known facts, a fact is fed to the conditionals waiting for it.
    pub fn unit_action(
        &self,
        kernel: &mut Kernel,
        state: &mut State,
        id: Id<Hypothesis>,
    ) -> ActionResult {
        self.statistics.increment_unit_actions();
        let hypothesis = state.get_hypothesis(id);
        let proof = hypothesis.proof();
        let ty = kernel.whnf(hypothesis.ty());
        if kernel.is_pi(ty) {
            self.unit_pi(kernel, state, ty, proof)
        } else if kernel.is_prop(ty) {
            self.unit_fact(kernel, state, ty)
        } else {
            ActionResult::Failed
        }
    }

    /// Discharge the leading antecedents of `ty` (proved by `proof`) against
    /// live facts, tolerating a single unknown one.
    pub fn unit_pi(
        &self,
        kernel: &mut Kernel,
        state: &mut State,
        ty: Id<Term>,
        proof: Id<Term>,
    ) -> ActionResult {
        let (hypotheses, extension) =
            state.split_extension::<UnitExtension>(self.extension);
        let mut ty = ty;
        let mut proof = proof;
        let mut has_antecedent = false;
        let mut missing = None;

        while let Some((domain, body)) = antecedent(kernel, ty) {
            has_antecedent = true;
            let fact =
                extension.find_live_fact_in_disjunction(kernel, hypotheses, domain);
            match fact {
                Some(fact) => proof = kernel.app(proof, fact),
                None => {
                    // greedy: a second unknown antecedent gives up
                    if missing.is_some() {
                        return ActionResult::Failed;
                    }
                    let local = kernel.fresh_local(domain);
                    proof = kernel.app(proof, local);
                    missing = Some(local);
                }
            }
            ty = body;
        }

        if !has_antecedent || !kernel.is_prop(ty) {
            return ActionResult::Failed;
        }
        let local = match missing {
            None => {
                self.statistics.increment_propagations();
                log::debug!("unit: derived {}", PrintTerm(kernel, ty));
                state.make_hypothesis(kernel, ty, proof);
                return ActionResult::NewBranch;
            }
            Some(local) => local,
        };
        if !self.contrapositive {
            return ActionResult::Failed;
        }

        // `proof` now proves `ty` under the placeholder `local`: refute `ty`
        let falsum = match kernel.is_not(ty) {
            Some(negated) => {
                let fact = match extension
                    .find_live_fact_in_disjunction(kernel, hypotheses, negated)
                {
                    Some(fact) => fact,
                    None => return ActionResult::Failed,
                };
                kernel.app(proof, fact)
            }
            None => {
                let negated = kernel.mk_not(ty);
                let fact = match extension
                    .find_live_fact_in_disjunction(kernel, hypotheses, negated)
                {
                    Some(fact) => fact,
                    None => return ActionResult::Failed,
                };
                kernel.app(fact, proof)
            }
        };
        let missing_ty = match kernel.local_type(local) {
            Some(missing_ty) => missing_ty,
            None => unreachable("unit placeholder is not a local"),
        };
        let new_ty = kernel.mk_not(missing_ty);
        let new_proof = kernel.fun(local, falsum);
        self.statistics.increment_contrapositives();
        log::debug!("unit: derived {}", PrintTerm(kernel, new_ty));
        state.make_hypothesis(kernel, new_ty, new_proof);
        ActionResult::NewBranch
    }

    /// Retry every live conditional waiting on `fact`.
    pub fn unit_fact(
        &self,
        kernel: &mut Kernel,
        state: &mut State,
        fact: Id<Term>,
    ) -> ActionResult {
        let candidates: Vec<Id<Hypothesis>> = state
            .extension::<UnitExtension>(self.extension)
            .lemmas(fact)
            .iter()
            .rev()
            .copied()
            .collect();
        if candidates.is_empty() {
            return ActionResult::Failed;
        }

        let mut success = false;
        let mut dead = vec![];
        for id in candidates {
            let hypothesis = state.get_hypothesis(id);
            if hypothesis.is_dead() {
                dead.push(id);
                continue;
            }
            let proof = hypothesis.proof();
            let ty = kernel.whnf(hypothesis.ty());
            let result = self.unit_pi(kernel, state, ty, proof);
            success = success || result.is_new_branch();
        }
        if !dead.is_empty() {
            self.statistics.add_evicted_lemmas(dead.len() as u32);
            state
                .extension_mut::<UnitExtension>(self.extension)
                .evict_lemmas(fact, &dead);
        }

        if success {
            ActionResult::NewBranch
        } else {
            ActionResult::Failed
        }
    }
}
