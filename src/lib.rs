//! Proof-state core of a backtracking proof search.
//!
//! A [`State`] is one branch: hypotheses that may be marked dead, a goal,
//! and one instance of every [`BranchExtension`] registered with the
//! session's [`Registry`]. Forking a branch deep-copies its extensions, so
//! abandoning a branch needs no rollback.
//!
//! The [`UnitAction`] keeps a [`UnitExtension`] index of facts and
//! conditional hypotheses and performs unit propagation over them.

pub mod core;
pub mod kernel;
pub mod options;
pub mod output;
pub mod session;
pub mod statistics;
pub mod unit;

mod prelude;
mod util;

pub use crate::core::action::ActionResult;
pub use crate::core::extension::{
    BranchExtension, Extension, Registry, RegistryError,
};
pub use crate::core::hypothesis::{Hypotheses, Hypothesis};
pub use crate::core::state::State;
pub use crate::kernel::{Kernel, KernelError, Sort, Term, TermView};
pub use crate::options::Options;
pub use crate::session::Session;
pub use crate::unit::{UnitAction, UnitExtension};
pub use crate::util::id::Id;
