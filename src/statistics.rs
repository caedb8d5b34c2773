use std::sync::atomic::{AtomicU32, Ordering};

#[derive(Default)]
pub struct Statistics {
    unit_actions: AtomicU32,
    propagations: AtomicU32,
    contrapositives: AtomicU32,
    evicted_lemmas: AtomicU32,
}

impl Statistics {
    pub fn log(&self) {
        log::info!("unit actions\t: {}", self.load_unit_actions());
        log::info!("propagations\t: {}", self.load_propagations());
        log::info!("contrapositives\t: {}", self.load_contrapositives());
        log::info!("evicted lemmas\t: {}", self.load_evicted_lemmas());
    }

    pub fn load_unit_actions(&self) -> u32 {
        self.unit_actions.load(Ordering::Relaxed)
    }

    pub fn load_propagations(&self) -> u32 {
        self.propagations.load(Ordering::Relaxed)
    }

    pub fn load_contrapositives(&self) -> u32 {
        self.contrapositives.load(Ordering::Relaxed)
    }

    pub fn load_evicted_lemmas(&self) -> u32 {
        self.evicted_lemmas.load(Ordering::Relaxed)
    }

    pub(crate) fn increment_unit_actions(&self) {
        self.unit_actions.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn increment_propagations(&self) {
        self.propagations.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn increment_contrapositives(&self) {
        self.contrapositives.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn add_evicted_lemmas(&self, evicted: u32) {
        self.evicted_lemmas.fetch_add(evicted, Ordering::Relaxed);
    }
}
