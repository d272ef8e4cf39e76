//! The execution phase: filesystem side effects for a finished plan.

use std::path::{Path, PathBuf};

use appwire_core::{copy_file, write_file, WriteResult};
use eyre::{Context, Result};

use crate::plan::Plan;

/// Outcome of one generation run.
#[derive(Debug)]
pub struct GenerateResult {
    /// Absolute (or caller-relative) path of the written document.
    pub document_path: PathBuf,
    /// Whether the document changed on disk.
    pub write: WriteResult,
    /// Number of input files relocated under the output root.
    pub relocated: usize,
}

/// Executes a [`Plan`] against a source and output root.
///
/// Planning never touches the filesystem; everything with a side effect
/// happens here, in one bounded pass. There is no rollback: an interrupted
/// run leaves partially relocated files behind, and the next run simply
/// recomputes and overwrites.
pub struct Generator<'a> {
    plan: &'a Plan,
    source_root: &'a Path,
    output_root: &'a Path,
}

impl<'a> Generator<'a> {
    pub fn new(plan: &'a Plan, source_root: &'a Path, output_root: &'a Path) -> Self {
        Self {
            plan,
            source_root,
            output_root,
        }
    }

    /// Render the document without touching the filesystem.
    pub fn preview(&self) -> String {
        self.plan.render()
    }

    /// Relocate every planned file and write the document as
    /// `output_file` (relative to the output root).
    pub fn generate(&self, output_file: &Path) -> Result<GenerateResult> {
        for file in &self.plan.files {
            let from = self.source_root.join(&file.path);
            let to = self.output_root.join(&file.path);
            copy_file(&from, &to)
                .wrap_err_with(|| format!("Failed to relocate '{}'", file.path))?;
        }

        let document_path = self.output_root.join(output_file);
        let write = write_file(&document_path, &self.plan.render())
            .wrap_err_with(|| format!("Failed to write '{}'", document_path.display()))?;

        Ok(GenerateResult {
            document_path,
            write,
            relocated: self.plan.files.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use super::*;
    use crate::plan::{build_plan, PlanOptions};

    fn seed(root: &Path, files: &[&str]) -> Vec<String> {
        for file in files {
            let path = root.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, format!("// {file}\n")).unwrap();
        }
        files.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_generate_relocates_and_writes_the_document() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let paths = seed(src.path(), &["app.js", "models/user.js", "styles/app.css"]);

        let plan = build_plan(&paths, &PlanOptions::default());
        let generator = Generator::new(&plan, src.path(), out.path());
        let result = generator.generate(Path::new("app-init.js")).unwrap();

        assert_eq!(result.relocated, 3);
        assert_eq!(result.write, WriteResult::Written);
        // every file is relocated, registered or not
        assert!(out.path().join("app.js").exists());
        assert!(out.path().join("models/user.js").exists());
        assert!(out.path().join("styles/app.css").exists());

        let document = fs::read_to_string(out.path().join("app-init.js")).unwrap();
        assert!(document.contains("App.User = User;"));
        assert_eq!(document, generator.preview());
    }

    #[test]
    fn test_generate_twice_is_idempotent() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let paths = seed(src.path(), &["router.js"]);

        let plan = build_plan(&paths, &PlanOptions::default());
        let generator = Generator::new(&plan, src.path(), out.path());

        assert_eq!(
            generator.generate(Path::new("app-init.js")).unwrap().write,
            WriteResult::Written
        );
        assert_eq!(
            generator.generate(Path::new("app-init.js")).unwrap().write,
            WriteResult::Skipped
        );
    }
}
