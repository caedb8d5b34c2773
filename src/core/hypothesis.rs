use crate::prelude::*;

#[derive(Clone, Copy)]
pub struct Hypothesis {
    ty: Id<Term>,
    proof: Id<Term>,
    dead: bool,
}

impl Hypothesis {
    pub fn ty(&self) -> Id<Term> {
        self.ty
    }

    pub fn proof(&self) -> Id<Term> {
        self.proof
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }
}

/// Hypotheses of one branch. Indices are stable: hypotheses are only ever
/// marked dead, never removed.
#[derive(Clone, Default)]
pub struct Hypotheses {
    hypotheses: Block<Hypothesis>,
}

impl Hypotheses {
    pub fn len(&self) -> usize {
        self.hypotheses.len().as_usize()
    }

    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }

    pub fn get(&self, id: Id<Hypothesis>) -> &Hypothesis {
        &self.hypotheses[id]
    }

    pub fn is_live(&self, id: Id<Hypothesis>) -> bool {
        !self.hypotheses[id].dead
    }

    pub fn ids(&self) -> impl Iterator<Item = Id<Hypothesis>> {
        self.hypotheses.ids()
    }

    pub(crate) fn push(
        &mut self,
        ty: Id<Term>,
        proof: Id<Term>,
    ) -> Id<Hypothesis> {
        let dead = false;
        self.hypotheses.push(Hypothesis { ty, proof, dead })
    }

    /// Returns whether `id` was live before.
    pub(crate) fn kill(&mut self, id: Id<Hypothesis>) -> bool {
        let hypothesis = &mut self.hypotheses[id];
        let was_live = !hypothesis.dead;
        hypothesis.dead = true;
        was_live
    }
}
