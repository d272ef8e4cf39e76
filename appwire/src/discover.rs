//! Ordered file discovery.
//!
//! Walks the input tree once and returns the relative paths of regular
//! files matching the configured glob patterns, sorted by name so the
//! processing order (and therefore the document) is stable across runs and
//! platforms.

use std::path::Path;

use eyre::{eyre, Context, Result};
use glob::Pattern;
use walkdir::WalkDir;

/// Discover the ordered file list under `root`.
pub fn discover(root: &Path, patterns: &[String]) -> Result<Vec<String>> {
    let patterns: Vec<Pattern> = patterns
        .iter()
        .map(|p| Pattern::new(p).wrap_err_with(|| format!("Invalid input pattern '{p}'")))
        .collect::<Result<_>>()?;

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.wrap_err("Failed to walk input tree")?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|_| eyre!("walked outside of '{}'", root.display()))?;
        // normalize to forward slashes; the whole pipeline works on
        // slash-separated relative paths
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        if patterns.iter().any(|p| p.matches(&relative)) {
            files.push(relative);
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn seed(root: &Path, files: &[&str]) {
        for file in files {
            let path = root.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "").unwrap();
        }
    }

    #[test]
    fn test_discover_filters_by_pattern() {
        let temp = TempDir::new().unwrap();
        seed(
            temp.path(),
            &["app.js", "models/user.js", "styles/app.css"],
        );

        let files = discover(temp.path(), &["**/*.js".to_string()]).unwrap();
        assert_eq!(files, ["app.js", "models/user.js"]);
    }

    #[test]
    fn test_discover_order_is_stable() {
        let temp = TempDir::new().unwrap();
        seed(temp.path(), &["b.js", "a.js", "models/user.js"]);

        let files = discover(temp.path(), &["**/*.js".to_string()]).unwrap();
        assert_eq!(files, ["a.js", "b.js", "models/user.js"]);
    }

    #[test]
    fn test_discover_rejects_bad_patterns() {
        let temp = TempDir::new().unwrap();
        assert!(discover(temp.path(), &["[".to_string()]).is_err());
    }

    #[test]
    fn test_multiple_patterns_union() {
        let temp = TempDir::new().unwrap();
        seed(temp.path(), &["app.js", "templates/x.hbs", "readme.md"]);

        let files =
            discover(temp.path(), &["**/*.js".to_string(), "**/*.hbs".to_string()]).unwrap();
        assert_eq!(files, ["app.js", "templates/x.hbs"]);
    }
}
