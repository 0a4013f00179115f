//! Install prompt state machine

use crate::clock::{Clock, SystemClock};
use crate::config::PromptConfig;
use crate::policy;
use crate::record::{self, InstallPromptState};
use kodomotrip_store::KeyValueStore;

/// Outcome of reading the persisted record
enum Stored {
    Loaded(InstallPromptState),
    /// Absent or unparsable; safe to overwrite
    Missing,
    /// The store itself failed; leave the record alone
    Unreadable,
}

/// Owns the install prompt state and writes it through to a key-value store
///
/// All mutation goes through [`initialize`](Self::initialize),
/// [`record_visit`](Self::record_visit), [`dismiss`](Self::dismiss) and
/// [`close`](Self::close). Storage failures are logged and never surface:
/// the in-memory state stays authoritative for the rest of the process.
#[derive(Debug)]
pub struct InstallPrompt<S, C = SystemClock> {
    store: S,
    clock: C,
    config: PromptConfig,
    state: InstallPromptState,
}

impl<S: KeyValueStore> InstallPrompt<S> {
    /// Create with default state; call [`initialize`](Self::initialize) to load
    pub fn new(store: S) -> Self {
        Self {
            store,
            clock: SystemClock,
            config: PromptConfig::new(),
            state: InstallPromptState::default(),
        }
    }
}

impl<S: KeyValueStore, C: Clock> InstallPrompt<S, C> {
    pub fn with_clock<C2: Clock>(self, clock: C2) -> InstallPrompt<S, C2> {
        InstallPrompt {
            store: self.store,
            clock,
            config: self.config,
            state: self.state,
        }
    }

    pub fn with_config(mut self, config: PromptConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the persisted record, falling back to defaults
    ///
    /// An absent or unparsable record is replaced by the default state, which
    /// is written back. A failed read also yields the default but leaves the
    /// stored record alone.
    pub fn initialize(&mut self) -> &InstallPromptState {
        match self.read_stored() {
            Stored::Loaded(state) => self.state = state,
            Stored::Missing => self.reset(),
            Stored::Unreadable => self.state = InstallPromptState::default(),
        }
        &self.state
    }

    /// Load the persisted record without writing anything back
    ///
    /// Anything other than a readable record yields the default state.
    pub fn load(&mut self) -> &InstallPromptState {
        self.state = match self.read_stored() {
            Stored::Loaded(state) => state,
            Stored::Missing | Stored::Unreadable => InstallPromptState::default(),
        };
        &self.state
    }

    /// Count one app start and recompute visibility; returns the new visibility
    pub fn record_visit(&mut self) -> bool {
        let now = self.clock.now();
        self.state.visit_count = self.state.visit_count.saturating_add(1);
        self.state.should_show_dialog = policy::should_show_with_cooldown(
            self.state.visit_count,
            self.state.last_dismissed_at,
            now,
            self.config.cooldown,
        );

        tracing::debug!(
            visit_count = self.state.visit_count,
            should_show = self.state.should_show_dialog,
            "recorded visit"
        );
        self.persist();
        self.state.should_show_dialog
    }

    /// "Remind me later": hide and start the cooldown
    pub fn dismiss(&mut self) {
        let now = self.clock.now();
        self.state.should_show_dialog = false;
        self.state.last_dismissed_at = Some(now);

        tracing::debug!(dismissed_at = %now, "install prompt dismissed");
        self.persist();
    }

    /// Plain close: hide without starting the cooldown
    pub fn close(&mut self) {
        self.state.should_show_dialog = false;

        tracing::debug!("install prompt closed");
        self.persist();
    }

    pub fn state(&self) -> &InstallPromptState {
        &self.state
    }

    pub fn should_show_dialog(&self) -> bool {
        self.state.should_show_dialog
    }

    pub fn visit_count(&self) -> u32 {
        self.state.visit_count
    }

    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn read_stored(&self) -> Stored {
        match self.store.get(&self.config.storage_key) {
            Ok(Some(raw)) => match record::decode(&raw) {
                Ok(state) => {
                    tracing::debug!(
                        visit_count = state.visit_count,
                        should_show = state.should_show_dialog,
                        "loaded install prompt state"
                    );
                    Stored::Loaded(state)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "discarding unparsable install prompt record");
                    Stored::Missing
                }
            },
            Ok(None) => {
                tracing::debug!("no install prompt record, starting fresh");
                Stored::Missing
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read install prompt record");
                Stored::Unreadable
            }
        }
    }

    fn reset(&mut self) {
        self.state = InstallPromptState::default();
        self.persist();
    }

    fn persist(&mut self) {
        let json = match record::encode(&self.state) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode install prompt state");
                return;
            }
        };

        if let Err(e) = self.store.set(&self.config.storage_key, &json) {
            tracing::warn!(error = %e, "failed to persist install prompt state");
        }
    }
}
