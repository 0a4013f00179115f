//! Mutex-serialized handle for hosts with overlapping lifecycle callbacks

use crate::clock::{Clock, SystemClock};
use crate::prompt::InstallPrompt;
use crate::record::InstallPromptState;
use kodomotrip_store::KeyValueStore;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle; every operation runs under one lock so no visit is lost
#[derive(Debug)]
pub struct SharedInstallPrompt<S, C = SystemClock> {
    inner: Arc<Mutex<InstallPrompt<S, C>>>,
}

impl<S, C> Clone for SharedInstallPrompt<S, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStore, C: Clock> SharedInstallPrompt<S, C> {
    pub fn new(prompt: InstallPrompt<S, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(prompt)),
        }
    }

    pub fn initialize(&self) -> InstallPromptState {
        *self.lock().initialize()
    }

    pub fn record_visit(&self) -> bool {
        self.lock().record_visit()
    }

    pub fn dismiss(&self) {
        self.lock().dismiss();
    }

    pub fn close(&self) {
        self.lock().close();
    }

    pub fn should_show_dialog(&self) -> bool {
        self.lock().should_show_dialog()
    }

    /// Copy of the latest committed state
    pub fn snapshot(&self) -> InstallPromptState {
        *self.lock().state()
    }

    // A panic mid-operation leaves a fully assigned state; keep using it.
    fn lock(&self) -> MutexGuard<'_, InstallPrompt<S, C>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
