//! The planning phase: one pass over the ordered file list, one decided
//! action per file.

use appwire_classify::{classify, resolve, template_key, tokenize, Category, ComponentRegistry};

use crate::{
    sections::OutputSections,
    snippets::{self, Namespace},
};

/// Knobs the planner needs about the tree being processed.
#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// The reserved application entry file, relocated but never registered.
    pub entry_file: String,
    /// The recognized source extension (without dot).
    pub extension: String,
    /// The reserved plain-modules directory, exempt from classification.
    pub modules_dir: String,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            entry_file: "app.js".to_string(),
            extension: "js".to_string(),
            modules_dir: "modules".to_string(),
        }
    }
}

/// Why a file is relocated without being registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The reserved application entry file.
    EntryFile,
    /// The path does not carry the recognized source extension.
    UnsupportedExtension,
}

/// The one registration action decided for a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// Relocate only; nothing is emitted.
    Skip { reason: SkipReason },
    /// Side-effect import in the modules section.
    Module { stem: String },
    /// Import-and-assign into the app namespace.
    Load { identifier: String, stem: String },
    /// Import-and-assign into the runtime namespace, helpers section.
    Helper { identifier: String, stem: String },
    /// Reopen-or-load, depending on the identifier's namespace.
    View { identifier: String, stem: String },
    /// Import plus runtime template registration under `key`.
    Template {
        identifier: String,
        stem: String,
        key: String,
    },
    /// Import plus application-initializer registration.
    Initializer { identifier: String, stem: String },
}

/// One input file with its decided action.
#[derive(Debug, Clone)]
pub struct PlannedFile {
    /// The relative path as discovered.
    pub path: String,
    /// The classified category, `None` for skips and plain modules.
    pub category: Option<Category>,
    pub registration: Registration,
}

/// The full, ordered plan for one aggregation run.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    pub files: Vec<PlannedFile>,
}

/// Plan the whole run.
///
/// Files are processed strictly in the order given; the caller owns
/// discovery order and the planner never reorders it. Each file is decided
/// exactly once, and component-name claims accumulate in processing order,
/// so the first component to use a base name keeps it unprefixed.
pub fn build_plan(paths: &[String], options: &PlanOptions) -> Plan {
    let mut registry = ComponentRegistry::new();
    let files = paths
        .iter()
        .map(|path| plan_file(path, options, &mut registry))
        .collect();
    Plan { files }
}

fn plan_file(path: &str, options: &PlanOptions, registry: &mut ComponentRegistry) -> PlannedFile {
    let skip = |reason| PlannedFile {
        path: path.to_string(),
        category: None,
        registration: Registration::Skip { reason },
    };

    if path == options.entry_file {
        return skip(SkipReason::EntryFile);
    }
    let Ok(segments) = tokenize(path, &options.extension) else {
        return skip(SkipReason::UnsupportedExtension);
    };

    let stem = segments.stem().to_string();
    let Some(category) = classify(&segments, &options.modules_dir) else {
        return PlannedFile {
            path: path.to_string(),
            category: None,
            registration: Registration::Module { stem },
        };
    };

    let identifier = resolve(&stem, category, registry);
    let registration = match category {
        Category::Helper => Registration::Helper { identifier, stem },
        Category::View => Registration::View { identifier, stem },
        Category::Template => {
            let key = template_key(&stem, &identifier);
            Registration::Template {
                identifier,
                stem,
                key,
            }
        }
        Category::Initializer => Registration::Initializer { identifier, stem },
        // model, component, controller, adapter, mixin, route, serializer,
        // transform, util, hbs_template all take the generic app load
        _ => Registration::Load { identifier, stem },
    };

    PlannedFile {
        path: path.to_string(),
        category: Some(category),
        registration,
    }
}

impl Plan {
    /// Render the plan into the final document.
    pub fn render(&self) -> String {
        let mut sections = OutputSections::new();
        for file in &self.files {
            match &file.registration {
                Registration::Skip { .. } => {}
                Registration::Module { stem } => {
                    sections.push_module(&snippets::module_import(stem));
                }
                Registration::Load { identifier, stem } => {
                    sections.push_app(&snippets::load(identifier, stem, Namespace::App));
                }
                Registration::Helper { identifier, stem } => {
                    sections.push_helper(&snippets::load(identifier, stem, Namespace::Runtime));
                }
                Registration::View { identifier, stem } => {
                    sections.push_app(&snippets::view(identifier, stem));
                }
                Registration::Template {
                    identifier,
                    stem,
                    key,
                } => {
                    sections.push_app(&snippets::template(identifier, stem, key));
                }
                Registration::Initializer { identifier, stem } => {
                    sections.push_app(&snippets::initializer(identifier, stem));
                }
            }
        }
        sections.assemble()
    }

    /// Files that will be registered in some section.
    pub fn registered_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| {
                !matches!(
                    f.registration,
                    Registration::Skip { .. } | Registration::Module { .. }
                )
            })
            .count()
    }

    /// Plain modules imported for side effects.
    pub fn module_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.registration, Registration::Module { .. }))
            .count()
    }

    /// Paths relocated without registration.
    pub fn skipped(&self) -> impl Iterator<Item = &PlannedFile> {
        self.files
            .iter()
            .filter(|f| matches!(f.registration, Registration::Skip { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(paths: &[&str]) -> Plan {
        let paths: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
        build_plan(&paths, &PlanOptions::default())
    }

    #[test]
    fn test_entry_file_is_skipped() {
        let plan = plan(&["app.js"]);
        assert_eq!(
            plan.files[0].registration,
            Registration::Skip {
                reason: SkipReason::EntryFile
            }
        );
    }

    #[test]
    fn test_unsupported_extension_is_skipped() {
        let plan = plan(&["styles/app.css"]);
        assert_eq!(
            plan.files[0].registration,
            Registration::Skip {
                reason: SkipReason::UnsupportedExtension
            }
        );
    }

    #[test]
    fn test_every_file_gets_exactly_one_action() {
        let plan = plan(&[
            "app.js",
            "router.js",
            "models/user.js",
            "components/x-box.js",
            "helpers/format-date.js",
            "templates/foo/bar.js",
            "initializers/session.js",
            "modules/lodash.js",
        ]);
        assert_eq!(plan.files.len(), 8);
        assert_eq!(plan.registered_count(), 5);
        assert_eq!(plan.module_count(), 2);
        assert_eq!(plan.skipped().count(), 1);
    }

    #[test]
    fn test_category_routing() {
        let plan = plan(&[
            "helpers/format-date.js",
            "views/profileView.js",
            "templates/foo.js",
            "initializers/session.js",
            "adapters/user.js",
        ]);
        assert!(matches!(plan.files[0].registration, Registration::Helper { .. }));
        assert!(matches!(plan.files[1].registration, Registration::View { .. }));
        assert!(matches!(plan.files[2].registration, Registration::Template { .. }));
        assert!(matches!(
            plan.files[3].registration,
            Registration::Initializer { .. }
        ));
        assert!(matches!(plan.files[4].registration, Registration::Load { .. }));
    }

    #[test]
    fn test_component_claims_accumulate_in_order() {
        let plan = plan(&["foo/component.js", "foo-component.js"]);
        let ids: Vec<&str> = plan
            .files
            .iter()
            .map(|f| match &f.registration {
                Registration::Load { identifier, .. } => identifier.as_str(),
                other => panic!("unexpected registration: {other:?}"),
            })
            .collect();
        assert_eq!(ids, ["FooComponent", "ComponentsFooComponent"]);
    }

    #[test]
    fn test_render_is_deterministic() {
        let paths = [
            "app.js",
            "router.js",
            "models/user.js",
            "components/x-box.js",
            "templates/components/x-box.js",
        ];
        assert_eq!(plan(&paths).render(), plan(&paths).render());
    }
}
