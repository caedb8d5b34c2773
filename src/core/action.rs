use crate::prelude::*;

/// Outcome of a search action. `Failed` is the ordinary "does not apply
/// here" signal, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionResult {
    Failed,
    /// The branch changed: resume search on the current state.
    NewBranch,
    /// The goal is closed by the given proof.
    Solved(Id<Term>),
}

impl ActionResult {
    pub fn is_failed(self) -> bool {
        self == ActionResult::Failed
    }

    pub fn is_new_branch(self) -> bool {
        self == ActionResult::NewBranch
    }

    pub fn is_solved(self) -> bool {
        matches!(self, ActionResult::Solved(_))
    }
}
