//! Identifier resolution.
//!
//! Turns a classified path stem into the unique name the manifest imports
//! the file under. Resolution is deterministic for a fixed processing
//! order: the only state it consults is which base names earlier
//! components have claimed in the [`ComponentRegistry`].

use appwire_core::{camelize, camelize_str};

use crate::{
    category::{suffix_match, Category},
    registry::ComponentRegistry,
    tokenizer::dash_segments,
};

/// Prefix applied to an identifier whose base name an earlier component
/// already occupies.
pub const COMPONENT_NAMESPACE_PREFIX: &str = "Components";

/// Resolve the identifier for a classified file.
///
/// `stem` is the path without its extension. The registry is written only
/// for `Component` files, and read for every file.
///
/// The steps, in order:
/// 1. a leading segment that is this category's name or any pluralized
///    category is dropped; the trailing segment folds into the base and
///    the category itself becomes the authoritative suffix;
/// 2. the base name is the camel-cased remaining segments;
/// 3. a base an earlier component claimed gets the component-namespace
///    prefix;
/// 4. a category suffix carried by the trailing segment is stripped, its
///    remainder folded into the name;
/// 5. `model` takes no suffix, `component` claims its base and takes one,
///    every other category takes one unconditionally.
pub fn resolve(stem: &str, category: Category, registry: &mut ComponentRegistry) -> String {
    let mut parts = dash_segments(stem);
    let first = parts.first().copied().unwrap_or_default();
    let mut last = parts.pop().unwrap_or_default();

    if first == category.name() || Category::from_plural(first).is_some() {
        if !parts.is_empty() {
            parts.remove(0);
        }
        parts.push(last);
        last = category.name();
    }

    let mut result = camelize(&parts);
    if registry.is_used(&result) {
        result.insert_str(0, COMPONENT_NAMESPACE_PREFIX);
    }

    if let Some((_, remainder)) = suffix_match(last) {
        result.push_str(&camelize_str(remainder));
        last = category.name();
    }

    match category {
        Category::Model => {}
        Category::Component => {
            registry.mark_used(result.clone());
            result.push_str(&camelize_str(last));
        }
        _ => result.push_str(&camelize_str(last)),
    }
    result
}
