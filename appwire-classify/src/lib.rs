//! Path classification and name resolution for the appwire manifest
//! generator.
//!
//! Everything in this crate is pure: given a relative file path, it decides
//! which category of application code the file holds ([`classify`]), derives
//! the collision-free identifier the generated manifest registers it under
//! ([`resolve`]), and, for templates, the runtime key the compiled template
//! is stored under ([`template_key`]). The only state is the
//! [`ComponentRegistry`] passed explicitly through the call chain.

mod category;
mod error;
mod identifier;
mod registry;
mod template_name;
mod tokenizer;

pub use category::{classify, suffix_match, Category};
pub use error::{Error, Result};
pub use identifier::{resolve, COMPONENT_NAMESPACE_PREFIX};
pub use registry::ComponentRegistry;
pub use template_name::template_key;
pub use tokenizer::{dash_segments, tokenize, SegmentSequence};
