//! User settings read from `settings.json` in the data directory

use kodomotrip_prompt::policy::DISMISS_COOLDOWN_DAYS;
use kodomotrip_prompt::PromptConfig;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Days "remind me later" suppresses the install dialog
    pub cooldown_days: i64,

    /// Show the install dialog on every start and persist nothing
    pub preview: bool,
}

impl Settings {
    pub fn prompt_config(&self) -> PromptConfig {
        PromptConfig::new().with_cooldown_days(self.cooldown_days)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cooldown_days: DISMISS_COOLDOWN_DAYS,
            preview: false,
        }
    }
}

/// Missing or malformed settings fall back to defaults
pub fn load(path: &Path) -> Settings {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return Settings::default(),
    };

    match serde_json::from_str(&content) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed settings");
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let settings = load(&temp.path().join("settings.json"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.prompt_config().cooldown, TimeDelta::days(7));
    }

    #[test]
    fn test_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        std::fs::write(&path, r#"{"preview": true}"#).unwrap();

        let settings = load(&path);
        assert!(settings.preview);
        assert_eq!(settings.cooldown_days, 7);
    }

    #[test]
    fn test_cooldown_override() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        std::fs::write(&path, r#"{"cooldownDays": 2}"#).unwrap();

        assert_eq!(load(&path).prompt_config().cooldown, TimeDelta::days(2));
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        std::fs::write(&path, "cooldownDays = 2").unwrap();

        assert_eq!(load(&path), Settings::default());
    }
}
