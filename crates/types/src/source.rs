use serde_json::Value;

/// Input to path resolution.
///
/// A source is either an already-parsed structure (a Mapping, an ordered
/// sequence, or a scalar leaf) or an encoded textual form that must be
/// decoded exactly once before traversal begins. Only Mappings and ordered
/// sequences are traversable; every other shape is a leaf.
#[derive(Clone, Debug)]
pub enum Source {
    /// An already-parsed structure.
    Parsed(Value),
    /// JSON text, decoded at the start of resolution.
    Encoded(String),
    /// JSON bytes, decoded at the start of resolution.
    EncodedBytes(Vec<u8>),
}

impl From<Value> for Source {
    fn from(value: Value) -> Self {
        Source::Parsed(value)
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Source::Encoded(text.to_string())
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Source::Encoded(text)
    }
}

impl From<Vec<u8>> for Source {
    fn from(bytes: Vec<u8>) -> Self {
        Source::EncodedBytes(bytes)
    }
}
