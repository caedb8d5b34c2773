use crate::core::extension::{Registry, RegistryError};
use crate::output::log::start_logging;
use crate::prelude::*;
use crate::statistics::Statistics;
use crate::unit::UnitAction;

/// One proof session: the term kernel, the registered branch extensions and
/// the actions that use them. Sessions share nothing, so several may run
/// side by side.
pub struct Session {
    kernel: Kernel,
    registry: Registry,
    unit: UnitAction,
    options: Options,
}

impl Session {
    /// Also sets the process-wide log level from `options`.
    pub fn new(options: Options) -> Result<Self, RegistryError> {
        start_logging(options.log_level);
        let kernel = Kernel::new();
        let mut registry = Registry::default();
        let unit = UnitAction::initialize(&mut registry, &options)?;
        Ok(Self {
            kernel,
            registry,
            unit,
            options,
        })
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    pub fn kernel_mut(&mut self) -> &mut Kernel {
        &mut self.kernel
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn unit(&self) -> &UnitAction {
        &self.unit
    }

    /// The root branch, proving `goal` from no hypotheses.
    pub fn root(&mut self, goal: Id<Term>) -> State {
        self.registry.root(goal)
    }

    pub fn unit_action(
        &mut self,
        state: &mut State,
        id: Id<Hypothesis>,
    ) -> ActionResult {
        if self.options.no_unit {
            return ActionResult::Failed;
        }
        self.unit.unit_action(&mut self.kernel, state, id)
    }

    /// Tear down the registry and report what the actions did.
    pub fn finalize(mut self) -> Statistics {
        self.registry.finalize();
        let statistics = self.unit.finalize();
        statistics.log();
        statistics
    }
}
