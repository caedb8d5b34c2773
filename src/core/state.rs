use crate::core::extension::{BranchExtension, Extension, Extensions};
use crate::prelude::*;

/// One branch of the search: its hypotheses, its goal, and its own copy of
/// every branch extension.
#[derive(Clone)]
pub struct State {
    hypotheses: Hypotheses,
    extensions: Extensions,
    goal: Id<Term>,
}

impl State {
    pub(crate) fn new(extensions: Extensions, goal: Id<Term>) -> Self {
        let hypotheses = Hypotheses::default();
        Self {
            hypotheses,
            extensions,
            goal,
        }
    }

    /// An independent child branch. Nothing done to either branch
    /// afterwards is visible in the other.
    pub fn fork(&self) -> Self {
        self.clone()
    }

    pub fn hypotheses(&self) -> &Hypotheses {
        &self.hypotheses
    }

    pub fn get_hypothesis(&self, id: Id<Hypothesis>) -> &Hypothesis {
        self.hypotheses.get(id)
    }

    pub fn live_hypotheses(&self) -> impl Iterator<Item = Id<Hypothesis>> + '_ {
        self.hypotheses
            .ids()
            .filter(move |id| self.hypotheses.is_live(*id))
    }

    pub fn current_goal(&self) -> Id<Term> {
        self.goal
    }

    pub fn set_goal(&mut self, goal: Id<Term>) {
        self.goal = goal;
    }

    /// Add and activate a hypothesis. Every extension has observed it by
    /// the time this returns.
    pub fn make_hypothesis(
        &mut self,
        kernel: &mut Kernel,
        ty: Id<Term>,
        proof: Id<Term>,
    ) -> Id<Hypothesis> {
        let id = self.hypotheses.push(ty, proof);
        let hypothesis = self.hypotheses.get(id);
        for extension in self.extensions.iter_mut() {
            extension.hypothesis_activated(kernel, hypothesis, id);
        }
        id
    }

    /// A hypothesis of type `ty` proved by a fresh placeholder.
    pub fn assume(&mut self, kernel: &mut Kernel, ty: Id<Term>) -> Id<Hypothesis> {
        let proof = kernel.fresh_local(ty);
        self.make_hypothesis(kernel, ty, proof)
    }

    /// Mark a hypothesis dead. Its index stays valid; deleting twice is a
    /// no-op.
    pub fn delete_hypothesis(&mut self, kernel: &mut Kernel, id: Id<Hypothesis>) {
        if !self.hypotheses.kill(id) {
            return;
        }
        let hypothesis = self.hypotheses.get(id);
        for extension in self.extensions.iter_mut() {
            extension.hypothesis_deleted(kernel, hypothesis, id);
        }
    }

    pub fn extension<E: BranchExtension>(&self, id: Id<Extension>) -> &E {
        self.extensions.get(id)
    }

    pub fn extension_mut<E: BranchExtension>(
        &mut self,
        id: Id<Extension>,
    ) -> &mut E {
        self.extensions.get_mut(id)
    }

    /// Borrow an extension mutably alongside the hypotheses it refers to.
    pub(crate) fn split_extension<E: BranchExtension>(
        &mut self,
        id: Id<Extension>,
    ) -> (&Hypotheses, &mut E) {
        (&self.hypotheses, self.extensions.get_mut(id))
    }
}
