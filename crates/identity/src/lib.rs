//! Stable identity tags for bridge-visible values.
//!
//! An [`IdentityAllocator`] issues two kinds of tag: anonymous tags backed
//! by sixteen random bytes, and derived tags of the form
//! `{TypeLabel}_{disambiguator}`. Derived tags let the browser side
//! correlate repeated renders of the same value across updates; the
//! disambiguator is either the value's own identity token or a per-type
//! occurrence count owned by this allocator instance.

pub mod random;
pub mod taggable;

pub use random::{FixedRandom, OsRandom, RandomSource};
pub use taggable::Taggable;

use std::collections::HashMap;

use notebridge_types::IdentityTag;

/// Marker prefixed to every anonymous tag.
pub const TAG_MARKER: char = 'b';

/// Number of random bytes behind an anonymous tag.
pub const TAG_RANDOM_BYTES: usize = 16;

/// Allocator of identity tags.
///
/// The occurrence counter is private, per-instance state: two allocators
/// never share counts, and deterministic replay requires reusing one
/// allocator and feeding values of the same types in the same order.
/// Callers needing per-session isolation construct one allocator per
/// session; the allocator does not guard against cross-session sharing.
pub struct IdentityAllocator {
    occurrences: HashMap<&'static str, u64>,
    random: Box<dyn RandomSource>,
}

impl IdentityAllocator {
    /// Allocator backed by operating-system randomness.
    pub fn new() -> Self {
        Self::with_random_source(Box::new(OsRandom))
    }

    /// Allocator with an injected random source.
    pub fn with_random_source(random: Box<dyn RandomSource>) -> Self {
        Self {
            occurrences: HashMap::new(),
            random,
        }
    }

    /// Issue a fresh anonymous tag: the marker followed by sixteen random
    /// bytes hex-encoded in four-byte groups joined by `-`. Uniqueness is
    /// probabilistic; no check against previously issued tags is made.
    pub fn anonymous(&mut self) -> IdentityTag {
        let mut bytes = [0u8; TAG_RANDOM_BYTES];
        self.random.fill(&mut bytes);
        IdentityTag::new(format!("{}{}", TAG_MARKER, hex::encode_grouped(&bytes, 4)))
    }

    /// Issue a derived tag for `value`: `{TypeLabel}_{disambiguator}`.
    ///
    /// Values with their own identity token reuse it, so the same value
    /// tags identically every time. Values without one increment this
    /// allocator's per-type occurrence counter, starting at 1. Never fails.
    pub fn tag<T: Taggable + ?Sized>(&mut self, value: &T) -> IdentityTag {
        let label = value.type_label();
        let disambiguator = match value.identity_token() {
            Some(token) => token,
            None => self.next_occurrence(label).to_string(),
        };
        IdentityTag::new(format!("{label}_{disambiguator}"))
    }

    fn next_occurrence(&mut self, label: &'static str) -> u64 {
        let count = self.occurrences.entry(label).or_insert(0);
        *count += 1;
        *count
    }
}

impl Default for IdentityAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Hex encoding helper (no external dep needed, small utility).
mod hex {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    /// Lowercase hex with a `-` between every `group` input bytes.
    pub fn encode_grouped(bytes: &[u8], group: usize) -> String {
        let mut s = String::with_capacity(bytes.len() * 2 + bytes.len() / group.max(1));
        for (i, &b) in bytes.iter().enumerate() {
            if i > 0 && group > 0 && i % group == 0 {
                s.push('-');
            }
            s.push(HEX_CHARS[(b >> 4) as usize] as char);
            s.push(HEX_CHARS[(b & 0xf) as usize] as char);
        }
        s
    }
}
