//! Dotted-path resolution over nested bridge values.
//!
//! A path like `"a.b.2"` is split on a separator and folded left-to-right
//! over a nested value: Mapping steps use the segment as a key, ordered
//! sequence steps parse the segment as a base-10 index, and every other
//! shape is a leaf that yields `Null` for the remainder of the path.
//!
//! Failure shapes are deliberately asymmetric: a missing Mapping key is a
//! [`ResolveError::KeyNotFound`], while an out-of-range or unparseable
//! sequence index, or a step into a leaf, is a plain `Null` result. Callers
//! rely on this distinction.

pub mod error;

pub use error::ResolveError;

use notebridge_types::Source;
use serde_json::Value;

/// Separator used when the caller does not configure one.
pub const DEFAULT_SEPARATOR: char = '.';

/// Resolve `path` against `source`.
///
/// Encoded sources are decoded exactly once before traversal; decode
/// failure is [`ResolveError::MalformedInput`] and is never converted into
/// `default`. A supplied `default` suppresses only
/// [`ResolveError::KeyNotFound`]. The path always splits into at least one
/// segment; an empty path is a lookup of the empty key.
pub fn resolve(
    path: &str,
    source: impl Into<Source>,
    default: Option<Value>,
    separator: char,
) -> Result<Value, ResolveError> {
    let mut current = decode(source.into())?;
    for segment in path.split(separator) {
        current = match step(current, segment) {
            Ok(value) => value,
            Err(err @ ResolveError::KeyNotFound(_)) => {
                return match default {
                    Some(value) => Ok(value),
                    None => Err(err),
                };
            }
            Err(err) => return Err(err),
        };
    }
    Ok(current)
}

/// A resolver carrying a configured separator.
#[derive(Clone, Debug)]
pub struct Resolver {
    separator: char,
}

impl Resolver {
    pub fn new() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
        }
    }

    pub fn with_separator(separator: char) -> Self {
        Self { separator }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Resolve with no default: a missing Mapping key is an error.
    pub fn resolve(&self, path: &str, source: impl Into<Source>) -> Result<Value, ResolveError> {
        resolve(path, source, None, self.separator)
    }

    /// Resolve with a default that replaces a missing Mapping key.
    pub fn resolve_or(
        &self,
        path: &str,
        source: impl Into<Source>,
        default: Value,
    ) -> Result<Value, ResolveError> {
        resolve(path, source, Some(default), self.separator)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode an encoded source into a traversable value. Parsed sources pass
/// through untouched; this is the single decoder call per resolution.
fn decode(source: Source) -> Result<Value, ResolveError> {
    match source {
        Source::Parsed(value) => Ok(value),
        Source::Encoded(text) => {
            serde_json::from_str(&text).map_err(|e| ResolveError::MalformedInput(e.to_string()))
        }
        Source::EncodedBytes(bytes) => {
            serde_json::from_slice(&bytes).map_err(|e| ResolveError::MalformedInput(e.to_string()))
        }
    }
}

/// One traversal step. Takes the current value by value so the addressed
/// subtree is moved out rather than cloned.
fn step(current: Value, segment: &str) -> Result<Value, ResolveError> {
    match current {
        Value::Object(mut map) => map
            .remove(segment)
            .ok_or_else(|| ResolveError::KeyNotFound(segment.to_string())),
        Value::Array(mut items) => Ok(match segment.parse::<usize>() {
            Ok(index) if index < items.len() => items.swap_remove(index),
            _ => Value::Null,
        }),
        _ => Ok(Value::Null),
    }
}
