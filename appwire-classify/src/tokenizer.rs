//! Path tokenization.
//!
//! A relative file path is turned into an ordered segment sequence exactly
//! once per file; all classification rules work on the segments, never on
//! the raw path.

use crate::{Error, Result};

/// The segments of one relative file path, extension already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentSequence {
    stem: String,
    segments: Vec<String>,
}

impl SegmentSequence {
    /// The path without its extension, separators untouched.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// The path segments: directories first, file stem last.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The leading segment. A stem is never empty, so neither is this.
    pub fn first(&self) -> &str {
        &self.segments[0]
    }

    /// The trailing segment (the file stem proper).
    pub fn last(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }
}

/// Split `path` into segments after stripping the `.{extension}` suffix.
///
/// # Errors
///
/// Returns [`Error::UnsupportedExtension`] when the path does not end in the
/// expected extension. Callers that process whole trees treat that as a
/// silent skip rather than a failure.
pub fn tokenize(path: &str, extension: &str) -> Result<SegmentSequence> {
    let unsupported = || Error::UnsupportedExtension {
        path: path.to_string(),
        extension: extension.to_string(),
    };

    let stem = path
        .strip_suffix(extension)
        .and_then(|p| p.strip_suffix('.'))
        .ok_or_else(unsupported)?;
    if stem.is_empty() || stem.ends_with('/') {
        return Err(unsupported());
    }

    Ok(SegmentSequence {
        stem: stem.to_string(),
        segments: stem.split('/').map(str::to_string).collect(),
    })
}

/// Split a stem on both `/` and `-`, the segmentation identifier resolution
/// works on (`components/x-box` -> `["components", "x", "box"]`).
pub fn dash_segments(stem: &str) -> Vec<&str> {
    stem.split(['/', '-']).collect()
}
