pub mod list;
pub mod prompt;
pub mod show;
pub mod version;
