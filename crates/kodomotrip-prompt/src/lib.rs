//! "Add to home screen" install prompt: visit counting and re-display policy

mod clock;
mod config;
mod dialog;
pub mod policy;
mod prompt;
mod record;
mod shared;

pub use clock::{Clock, SystemClock};
pub use config::{PromptConfig, STORAGE_KEY};
pub use dialog::{DialogController, PreviewDialog};
pub use prompt::InstallPrompt;
pub use record::{InstallPromptState, PromptRecord, RecordError};
pub use shared::SharedInstallPrompt;
