//! Template registration keys.
//!
//! A compiled template is registered at runtime under a path-shaped key,
//! not under its generated identifier. The key derivation mirrors the
//! identifier's component-namespace handling so a disambiguated template
//! still lands under `components/`.

use crate::{category::strip_suffix_ci, identifier::COMPONENT_NAMESPACE_PREFIX};

const TEMPLATE_ROOTS: [&str; 2] = ["templates", "hbs_templates"];

/// Derive the runtime registration key for a template file.
///
/// `stem` is the path without its extension; `identifier` is the name
/// [`crate::resolve`] produced for the same file.
pub fn template_key(stem: &str, identifier: &str) -> String {
    let mut parts: Vec<&str> = stem.split('/').collect();
    let mut last = "";

    if parts.first().is_some_and(|p| TEMPLATE_ROOTS.contains(p)) {
        parts.remove(0);
    } else {
        last = parts.pop().unwrap_or_default();
        if last == "template" {
            last = "";
        }
    }

    let mut key = String::new();
    if parts.first() != Some(&"components")
        && identifier.starts_with(COMPONENT_NAMESPACE_PREFIX)
    {
        key = format!("components/{}", parts.join("-"));
    }
    if key.is_empty() {
        key = parts.join("/");
    }

    let trailing = match strip_suffix_ci(last, "Template") {
        Some(remainder) => remainder,
        None => last,
    };
    if !trailing.is_empty() {
        if !key.is_empty() {
            key.push('/');
        }
        key.push_str(trailing);
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_root_is_stripped() {
        assert_eq!(template_key("templates/foo/bar", "FooBarTemplate"), "foo/bar");
        assert_eq!(template_key("hbs_templates/foo", "FooHbs_template"), "foo");
    }

    #[test]
    fn test_literal_template_stem_is_dropped() {
        assert_eq!(template_key("foo/template", "FooTemplate"), "foo");
        assert_eq!(
            template_key("components/foo/template", "ComponentsFooTemplate"),
            "components/foo"
        );
    }

    #[test]
    fn test_component_namespace_key_stays_components_rooted() {
        assert_eq!(
            template_key("templates/components/x-box", "ComponentsXBoxTemplate"),
            "components/x-box"
        );
    }

    #[test]
    fn test_component_namespace_key_is_rerooted() {
        // a disambiguated identifier pulls the key under components/ with
        // dash-joined segments
        assert_eq!(
            template_key("foo/template", "ComponentsFooTemplate"),
            "components/foo"
        );
        assert_eq!(
            template_key("templates/foo/x-box", "ComponentsFooXBoxTemplate"),
            "components/foo-x-box"
        );
    }

    #[test]
    fn test_bare_template_stem_in_component_namespace() {
        // nothing left of the path, but the namespace root survives
        assert_eq!(template_key("template", "ComponentsTemplate"), "components/");
    }

    #[test]
    fn test_trailing_template_suffix_is_stripped() {
        assert_eq!(template_key("foo/barTemplate", "FooBarTemplate"), "foo/bar");
    }

    #[test]
    fn test_plain_stem_keeps_its_name() {
        assert_eq!(template_key("foo/bar", "FooBarTemplate"), "foo/bar");
    }
}
