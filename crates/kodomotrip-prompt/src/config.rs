//! Configuration for the install prompt

use crate::policy::DISMISS_COOLDOWN_DAYS;
use chrono::TimeDelta;

/// Storage key of the persisted record
pub const STORAGE_KEY: &str = "pwa_install_state";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    /// Key the record is stored under
    pub storage_key: String,

    /// Suppression window started by "remind me later"
    pub cooldown: TimeDelta,
}

impl PromptConfig {
    pub fn new() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            cooldown: TimeDelta::days(DISMISS_COOLDOWN_DAYS),
        }
    }

    /// Override the cooldown in whole days; out-of-range values keep the default
    pub fn with_cooldown_days(mut self, days: i64) -> Self {
        if let Some(cooldown) = TimeDelta::try_days(days).filter(|d| *d >= TimeDelta::zero()) {
            self.cooldown = cooldown;
        }
        self
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self::new()
    }
}
