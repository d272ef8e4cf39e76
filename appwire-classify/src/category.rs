//! The category vocabulary and the classification rules.

use crate::tokenizer::SegmentSequence;

/// The semantic role a file plays in the application, inferred purely from
/// its path shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    HbsTemplate,
    Template,
    Model,
    Component,
    Controller,
    Adapter,
    Helper,
    Initializer,
    Mixin,
    Route,
    Serializer,
    Transform,
    Util,
    View,
}

impl Category {
    /// The full vocabulary. The order doubles as the suffix-match order, so
    /// `hbs_template` is tried before its own tail `template`.
    pub const ALL: [Category; 14] = [
        Category::HbsTemplate,
        Category::Template,
        Category::Model,
        Category::Component,
        Category::Controller,
        Category::Adapter,
        Category::Helper,
        Category::Initializer,
        Category::Mixin,
        Category::Route,
        Category::Serializer,
        Category::Transform,
        Category::Util,
        Category::View,
    ];

    /// The lower-case spelling used in path segments.
    pub fn name(self) -> &'static str {
        match self {
            Category::HbsTemplate => "hbs_template",
            Category::Template => "template",
            Category::Model => "model",
            Category::Component => "component",
            Category::Controller => "controller",
            Category::Adapter => "adapter",
            Category::Helper => "helper",
            Category::Initializer => "initializer",
            Category::Mixin => "mixin",
            Category::Route => "route",
            Category::Serializer => "serializer",
            Category::Transform => "transform",
            Category::Util => "util",
            Category::View => "view",
        }
    }

    /// The camel-cased spelling appended to identifiers
    /// (`camelize_str(name)`, so `hbs_template` stays `Hbs_template`).
    pub fn suffix(self) -> &'static str {
        match self {
            Category::HbsTemplate => "Hbs_template",
            Category::Template => "Template",
            Category::Model => "Model",
            Category::Component => "Component",
            Category::Controller => "Controller",
            Category::Adapter => "Adapter",
            Category::Helper => "Helper",
            Category::Initializer => "Initializer",
            Category::Mixin => "Mixin",
            Category::Route => "Route",
            Category::Serializer => "Serializer",
            Category::Transform => "Transform",
            Category::Util => "Util",
            Category::View => "View",
        }
    }

    /// Look a category up by its exact lower-case name.
    pub fn from_name(s: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.name() == s)
    }

    /// Look a category up by its pluralized directory spelling
    /// (`routes` -> `Route`).
    pub fn from_plural(s: &str) -> Option<Category> {
        s.strip_suffix('s').and_then(Category::from_name)
    }
}

/// Strip `suffix` off the end of `segment`, ignoring ASCII case.
pub(crate) fn strip_suffix_ci<'a>(segment: &'a str, suffix: &str) -> Option<&'a str> {
    let cut = segment.len().checked_sub(suffix.len())?;
    if !segment.is_char_boundary(cut) {
        return None;
    }
    let (head, tail) = segment.split_at(cut);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}

/// Match a segment against the ordered suffix table, returning the category
/// and the remainder in front of the suffix (`fooView` -> `(View, "foo")`).
///
/// The table is the vocabulary in [`Category::ALL`] order checked by plain
/// string-suffix comparison; first match wins.
pub fn suffix_match(segment: &str) -> Option<(Category, &str)> {
    Category::ALL
        .into_iter()
        .find_map(|c| strip_suffix_ci(segment, c.suffix()).map(|rest| (c, rest)))
}

/// Classify a segment sequence, or return `None` for a plain module.
///
/// Rules, first hit wins:
/// 1. anything under the reserved `modules_dir` is a plain module;
/// 2. a leading directory that is the plural of a category implies it;
/// 3. a trailing segment that *is* a category name implies it;
/// 4. a trailing segment that ends with a category suffix implies it.
pub fn classify(segments: &SegmentSequence, modules_dir: &str) -> Option<Category> {
    let first = segments.first();
    if first == modules_dir {
        return None;
    }
    if let Some(category) = Category::from_plural(first) {
        return Some(category);
    }
    let last = segments.last();
    if let Some(category) = Category::from_name(last) {
        return Some(category);
    }
    suffix_match(last).map(|(category, _)| category)
}
