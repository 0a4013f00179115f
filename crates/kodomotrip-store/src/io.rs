//! Atomic file operations

use std::io::ErrorKind;
use std::path::Path;

/// Read a file to a string, mapping a missing file to `None`
pub fn read_optional(path: &Path) -> std::io::Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_creates_parents() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("nested").join("state.json");

        atomic_write(&target, b"{\"visitCount\":1}").unwrap();

        let read_data = std::fs::read(&target).unwrap();
        assert_eq!(read_data.as_slice(), b"{\"visitCount\":1}");
        assert!(!target.with_extension("tmp").exists());
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("state.json");

        atomic_write(&target, b"old").unwrap();
        atomic_write(&target, b"new").unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn test_read_optional_missing_file() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("absent.json");
        assert_eq!(read_optional(&missing).unwrap(), None);
    }

    #[test]
    fn test_read_optional_directory_is_error() {
        let temp = TempDir::new().unwrap();
        assert!(read_optional(temp.path()).is_err());
    }
}
