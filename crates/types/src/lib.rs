//! Core type definitions for the notebridge core.
//!
//! This crate provides the shared value model and the opaque identifier
//! types passed between the bridge leaves and their collaborators.

pub mod bundle;
pub mod source;
pub mod tag;

// Re-export primary types at crate root for ergonomic use.
pub use bundle::DisplayBundle;
pub use source::Source;
pub use tag::{DisplayHandle, IdentityTag};

#[cfg(test)]
mod tests {
    use super::{IdentityTag, Source};

    #[test]
    fn primary_types_are_available() {
        let _ = IdentityTag::new("b00000000");
        let _ = Source::from("{}");
    }
}
