use std::path::Path;

use eyre::Result;

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already up to date)
    Skipped,
}

/// Write `content` to `path`, creating parent directories as needed.
///
/// Skips the write when the file already holds exactly `content`, so
/// repeated runs leave mtimes untouched.
pub fn write_file(path: &Path, content: &str) -> Result<WriteResult> {
    if let Ok(existing) = std::fs::read_to_string(path) {
        if existing == content {
            return Ok(WriteResult::Skipped);
        }
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(WriteResult::Written)
}

/// Copy the bytes of `from` to `to`, creating parent directories as needed.
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::copy(from, to)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.js");

        let result = write_file(&path, "hello").unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("out.js");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_skips_identical_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.js");

        assert_eq!(write_file(&path, "same").unwrap(), WriteResult::Written);
        assert_eq!(write_file(&path, "same").unwrap(), WriteResult::Skipped);
        assert_eq!(write_file(&path, "changed").unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "changed");
    }

    #[test]
    fn test_copy_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src.js");
        let dest = temp.path().join("out").join("deep").join("src.js");
        fs::write(&src, "bytes").unwrap();

        copy_file(&src, &dest).unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "bytes");
    }
}
