//! Process-wide context handed to every command

use anyhow::Context;
use kodomotrip_core::Catalog;
use kodomotrip_prompt::{DialogController, InstallPrompt, PreviewDialog};
use kodomotrip_store::{FileStore, Paths};
use std::path::Path;

use crate::settings::{self, Settings};

pub struct App {
    pub paths: Paths,
    pub settings: Settings,
    pub catalog: Catalog,
}

impl App {
    pub fn open(data_dir: Option<&Path>, catalog: Option<&Path>) -> anyhow::Result<Self> {
        let paths = match data_dir {
            Some(dir) => Paths::with_root(dir),
            None => Paths::new().context("cannot locate a data directory; pass --data-dir")?,
        };

        let catalog = match catalog {
            Some(path) => Catalog::load(path)
                .with_context(|| format!("failed to load catalog {}", path.display()))?,
            None => Catalog::builtin(),
        };

        let settings = settings::load(&paths.settings_file());

        Ok(Self {
            paths,
            settings,
            catalog,
        })
    }

    /// Persisted install prompt, already loaded from disk
    pub fn install_prompt(&self) -> InstallPrompt<FileStore> {
        let store = FileStore::new(self.paths.store_dir());
        let mut prompt = InstallPrompt::new(store).with_config(self.settings.prompt_config());
        prompt.initialize();
        prompt
    }

    /// Persisted install prompt, read without writing anything
    pub fn stored_prompt(&self) -> InstallPrompt<FileStore> {
        let store = FileStore::new(self.paths.store_dir());
        let mut prompt = InstallPrompt::new(store).with_config(self.settings.prompt_config());
        prompt.load();
        prompt
    }

    /// Dialog controller for this run: preview or persisted
    pub fn dialog(&self) -> Box<dyn DialogController> {
        if self.settings.preview {
            Box::new(PreviewDialog::new())
        } else {
            Box::new(self.install_prompt())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_with_data_dir() {
        let temp = TempDir::new().unwrap();
        let app = App::open(Some(temp.path()), None).unwrap();
        assert_eq!(app.paths.data_dir, temp.path());
        assert_eq!(app.catalog.len(), 8);
        assert!(!app.settings.preview);
    }

    #[test]
    fn test_open_with_bad_catalog_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.json");
        let err = App::open(Some(temp.path()), Some(&missing)).err().unwrap();
        assert!(err.to_string().contains("failed to load catalog"));
    }

    #[test]
    fn test_install_prompt_persists_under_store_dir() {
        let temp = TempDir::new().unwrap();
        let app = App::open(Some(temp.path()), None).unwrap();

        let mut prompt = app.install_prompt();
        prompt.record_visit();

        assert!(temp
            .path()
            .join("store")
            .join("pwa_install_state.json")
            .exists());
        assert_eq!(app.install_prompt().visit_count(), 1);
    }

    #[test]
    fn test_preview_dialog_selected_by_settings() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("settings.json"), r#"{"preview":true}"#).unwrap();
        let app = App::open(Some(temp.path()), None).unwrap();

        let mut dialog = app.dialog();
        assert!(dialog.on_start());
        assert!(dialog.on_start());
        assert!(!temp.path().join("store").exists());
    }
}
