pub(crate) use crate::core::action::ActionResult;
pub(crate) use crate::core::hypothesis::{Hypotheses, Hypothesis};
pub(crate) use crate::core::state::State;
pub(crate) use crate::kernel::{Kernel, Sort, Symbol, Term, TermView};
pub(crate) use crate::options::Options;
pub(crate) use crate::util::block::Block;
pub(crate) use crate::util::id::Id;
pub(crate) use crate::util::unreachable::unreachable;
