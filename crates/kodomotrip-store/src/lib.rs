//! Local key-value persistence for app state

mod io;
mod paths;
mod store;

pub use io::{atomic_write, read_optional};
pub use paths::Paths;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
