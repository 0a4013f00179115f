//! Dialog controllers the presentation layer drives

use crate::clock::Clock;
use crate::prompt::InstallPrompt;
use kodomotrip_store::KeyValueStore;

/// What the presentation layer needs from an install dialog
pub trait DialogController {
    /// Called once per app start; returns whether the dialog is visible
    fn on_start(&mut self) -> bool;

    fn is_visible(&self) -> bool;

    /// "Remind me later"
    fn dismiss(&mut self);

    fn close(&mut self);
}

impl<S: KeyValueStore, C: Clock> DialogController for InstallPrompt<S, C> {
    fn on_start(&mut self) -> bool {
        self.record_visit()
    }

    fn is_visible(&self) -> bool {
        self.should_show_dialog()
    }

    fn dismiss(&mut self) {
        InstallPrompt::dismiss(self);
    }

    fn close(&mut self) {
        InstallPrompt::close(self);
    }
}

/// Preview build behaviour: visible on every start, hidden for the rest of
/// the process once closed or dismissed, nothing persisted
#[derive(Debug, Clone, Default)]
pub struct PreviewDialog {
    visible: bool,
}

impl PreviewDialog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DialogController for PreviewDialog {
    fn on_start(&mut self) -> bool {
        self.visible = true;
        self.visible
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn dismiss(&mut self) {
        self.visible = false;
    }

    fn close(&mut self) {
        self.visible = false;
    }
}
