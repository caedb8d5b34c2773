use crate::prelude::*;
use std::any::Any;
use thiserror::Error;

/// Per-branch auxiliary index, kept up to date by hypothesis events.
///
/// Every branch owns exactly one instance of each registered extension.
/// Forking a branch calls `clone_extension`, which must produce an
/// independent deep copy: later changes to either copy stay invisible to
/// the other.
pub trait BranchExtension: Any {
    fn clone_extension(&self) -> Box<dyn BranchExtension>;

    fn hypothesis_activated(
        &mut self,
        kernel: &mut Kernel,
        hypothesis: &Hypothesis,
        id: Id<Hypothesis>,
    );

    fn hypothesis_deleted(
        &mut self,
        _kernel: &mut Kernel,
        _hypothesis: &Hypothesis,
        _id: Id<Hypothesis>,
    ) {
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

pub struct Extension;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    #[error("branch extensions must be registered before the first branch")]
    Sealed,
}

/// Extension instances of a single branch, indexed by registration id.
pub(crate) struct Extensions {
    extensions: Vec<Box<dyn BranchExtension>>,
}

impl Extensions {
    pub(crate) fn iter_mut(
        &mut self,
    ) -> impl Iterator<Item = &mut Box<dyn BranchExtension>> {
        self.extensions.iter_mut()
    }

    pub(crate) fn get<E: BranchExtension>(&self, id: Id<Extension>) -> &E {
        match self.extensions[id.as_usize()].as_any().downcast_ref::<E>() {
            Some(extension) => extension,
            None => unreachable("branch extension kind mismatch"),
        }
    }

    pub(crate) fn get_mut<E: BranchExtension>(
        &mut self,
        id: Id<Extension>,
    ) -> &mut E {
        match self.extensions[id.as_usize()].as_any_mut().downcast_mut::<E>() {
            Some(extension) => extension,
            None => unreachable("branch extension kind mismatch"),
        }
    }
}

impl Clone for Extensions {
    fn clone(&self) -> Self {
        let extensions = self
            .extensions
            .iter()
            .map(|extension| extension.clone_extension())
            .collect();
        Self { extensions }
    }
}

/// Extension kinds known to one proof session.
///
/// Kinds are registered with an empty prototype and receive a small id.
/// Creating the root branch seals the registry: every branch of the session
/// must carry the same set of extensions.
#[derive(Default)]
pub struct Registry {
    prototypes: Vec<Box<dyn BranchExtension>>,
    sealed: bool,
}

impl Registry {
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn register(
        &mut self,
        prototype: Box<dyn BranchExtension>,
    ) -> Result<Id<Extension>, RegistryError> {
        if self.sealed {
            return Err(RegistryError::Sealed);
        }
        let id = Id::new(self.prototypes.len() as u32);
        self.prototypes.push(prototype);
        log::trace!("registered branch extension {:?}", id);
        Ok(id)
    }

    /// Create the root branch with fresh copies of every prototype.
    pub fn root(&mut self, goal: Id<Term>) -> State {
        self.sealed = true;
        let extensions = self
            .prototypes
            .iter()
            .map(|prototype| prototype.clone_extension())
            .collect();
        let extensions = Extensions { extensions };
        State::new(extensions, goal)
    }

    /// Teardown: forget every registered kind. Branches created earlier
    /// keep their own instances.
    pub fn finalize(&mut self) {
        self.prototypes.clear();
        self.sealed = false;
    }
}
