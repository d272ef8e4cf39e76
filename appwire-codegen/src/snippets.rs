//! The textual forms of every generated statement.
//!
//! All emitted syntax lives here and nowhere else, so swapping the module
//! format is a one-file change. Every snippet is a full line (or line
//! pair) ending in a newline; the sections just concatenate them.

use appwire_classify::{dash_segments, COMPONENT_NAMESPACE_PREFIX};
use appwire_core::{camelize, camelize_str};

/// The namespace a load snippet assigns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    /// The application namespace (`App`).
    App,
    /// The runtime namespace (`Ember`).
    Runtime,
}

impl Namespace {
    pub fn as_str(self) -> &'static str {
        match self {
            Namespace::App => "App",
            Namespace::Runtime => "Ember",
        }
    }
}

/// Fixed head of the plain-modules section: import the runtime itself.
pub const MODULES_PREAMBLE: &str = "import Ember from 'ember';\n";

/// Fixed head of the app section: import the application namespace.
pub const APP_PREAMBLE: &str = "import App from 'app';\n";

/// Fixed tail of the document.
pub const APP_TRAILER: &str = "export default App;\n";

/// Side-effect import of a plain module.
pub fn module_import(stem: &str) -> String {
    format!("import '{stem}';\n")
}

/// Import a file and assign it into a namespace under its identifier.
pub fn load(identifier: &str, stem: &str, scope: Namespace) -> String {
    format!(
        "import {identifier} from '{stem}';\n{scope}.{identifier} = {identifier};\n",
        scope = scope.as_str()
    )
}

/// Import a template and register it under its runtime key.
pub fn template(identifier: &str, stem: &str, key: &str) -> String {
    format!("import {identifier} from '{stem}';\nEmber.TEMPLATES['{key}'] = {identifier};\n")
}

/// Import an initializer and hand it to the application.
pub fn initializer(identifier: &str, stem: &str) -> String {
    format!("import {identifier} from '{stem}';\nEmber.Application.initializer({identifier});\n")
}

/// Import a view.
///
/// A view whose identifier lives in the component namespace is attached as
/// a named property on its owning component via a `reopen` merge; any other
/// view takes the plain app load.
pub fn view(identifier: &str, stem: &str) -> String {
    if !identifier.starts_with(COMPONENT_NAMESPACE_PREFIX) {
        return load(identifier, stem, Namespace::App);
    }

    let mut parts = dash_segments(stem);
    let last = parts.pop().unwrap_or_default();
    let property = match strip_view_suffix(last) {
        Some(remainder) if !remainder.is_empty() => camelize_str(remainder),
        _ => camelize_str(last),
    };
    let component = camelize(parts.iter().copied().chain(["component"]));

    format!(
        "import {identifier} from '{stem}';\n{component}.reopen({{{property} : {identifier}}});\n"
    )
}

fn strip_view_suffix(segment: &str) -> Option<&str> {
    let cut = segment.len().checked_sub("View".len())?;
    segment.is_char_boundary(cut).then(|| segment.split_at(cut))
        .filter(|(_, tail)| tail.eq_ignore_ascii_case("View"))
        .map(|(head, _)| head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_import() {
        assert_eq!(module_import("router"), "import 'router';\n");
    }

    #[test]
    fn test_load_into_app() {
        assert_eq!(
            load("User", "models/user", Namespace::App),
            "import User from 'models/user';\nApp.User = User;\n"
        );
    }

    #[test]
    fn test_load_into_runtime() {
        assert_eq!(
            load("FormatDateHelper", "helpers/format-date", Namespace::Runtime),
            "import FormatDateHelper from 'helpers/format-date';\n\
             Ember.FormatDateHelper = FormatDateHelper;\n"
        );
    }

    #[test]
    fn test_template_registration() {
        assert_eq!(
            template("FooBarTemplate", "templates/foo/bar", "foo/bar"),
            "import FooBarTemplate from 'templates/foo/bar';\n\
             Ember.TEMPLATES['foo/bar'] = FooBarTemplate;\n"
        );
    }

    #[test]
    fn test_initializer_registration() {
        assert_eq!(
            initializer("SessionInitializer", "initializers/session"),
            "import SessionInitializer from 'initializers/session';\n\
             Ember.Application.initializer(SessionInitializer);\n"
        );
    }

    #[test]
    fn test_plain_view_takes_the_app_load() {
        assert_eq!(
            view("ProfileView", "profileView"),
            "import ProfileView from 'profileView';\nApp.ProfileView = ProfileView;\n"
        );
    }

    #[test]
    fn test_component_namespace_view_reopens_its_component() {
        assert_eq!(
            view("ComponentsXBoxDropdownView", "x-box/dropdownView"),
            "import ComponentsXBoxDropdownView from 'x-box/dropdownView';\n\
             XBoxComponent.reopen({Dropdown : ComponentsXBoxDropdownView});\n"
        );
    }
}
