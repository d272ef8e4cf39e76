//! The three append-only output sections and their assembly.

use crate::snippets::{APP_PREAMBLE, APP_TRAILER, MODULES_PREAMBLE};

/// The buffers the generated document is accumulated into.
///
/// Each section starts from its fixed preamble and is append-only; nothing
/// is ever reordered after the fact, so document order is exactly the
/// order files were planned in.
#[derive(Debug)]
pub struct OutputSections {
    modules: String,
    helpers: String,
    app: String,
}

impl OutputSections {
    pub fn new() -> Self {
        Self {
            modules: MODULES_PREAMBLE.to_string(),
            helpers: String::new(),
            app: APP_PREAMBLE.to_string(),
        }
    }

    /// Append a plain-module import line.
    pub fn push_module(&mut self, snippet: &str) {
        self.modules.push_str(snippet);
    }

    /// Append a helper registration pair.
    pub fn push_helper(&mut self, snippet: &str) {
        self.helpers.push_str(snippet);
    }

    /// Append an app registration pair.
    pub fn push_app(&mut self, snippet: &str) {
        self.app.push_str(snippet);
    }

    /// Concatenate the sections in their fixed order and close the app
    /// namespace with the trailer.
    pub fn assemble(self) -> String {
        let mut document =
            String::with_capacity(self.modules.len() + self.helpers.len() + self.app.len() + APP_TRAILER.len());
        document.push_str(&self.modules);
        document.push_str(&self.helpers);
        document.push_str(&self.app);
        document.push_str(APP_TRAILER);
        document
    }
}

impl Default for OutputSections {
    fn default() -> Self {
        Self::new()
    }
}
