//! Notebook-to-browser bridge core.
//!
//! Ties the three bridge leaves together behind one explicitly constructed
//! session service. The leaves never call each other: [`Bridge`] sequences
//! them, and callers hold and pass the instance rather than reaching for a
//! process-wide singleton. One `Bridge` (and so one allocator) per
//! notebook session keeps tag disambiguation session-local.

pub use notebridge_display::{
    Described, DisplayMultiplexer, DisplaySink, JsonPretty, MemorySink, PrettyPrinter,
};
pub use notebridge_identity::{
    FixedRandom, IdentityAllocator, OsRandom, RandomSource, Taggable, TAG_MARKER,
};
pub use notebridge_resolve::{resolve, ResolveError, Resolver, DEFAULT_SEPARATOR};
pub use notebridge_types::{DisplayBundle, DisplayHandle, IdentityTag, Source};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Bridge-wide configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Separator for dotted paths.
    pub separator: char,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
        }
    }
}

/// One notebook session's bridge service.
///
/// Explicitly constructed and explicitly passed. `initialize` performs
/// one-time setup and no-ops on repeat calls.
pub struct Bridge {
    config: BridgeConfig,
    resolver: Resolver,
    allocator: IdentityAllocator,
    multiplexer: DisplayMultiplexer,
    initialized: bool,
}

impl Bridge {
    pub fn new(config: BridgeConfig, sink: Box<dyn DisplaySink>) -> Self {
        let resolver = Resolver::with_separator(config.separator);
        Self {
            config,
            resolver,
            allocator: IdentityAllocator::new(),
            multiplexer: DisplayMultiplexer::new(sink),
            initialized: false,
        }
    }

    /// One-time setup; idempotent.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        tracing::debug!(separator = %self.config.separator, "bridge session initialized");
        self.initialized = true;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Resolve a dotted path against a source value.
    pub fn resolve(&self, path: &str, source: impl Into<Source>) -> Result<Value, ResolveError> {
        self.resolver.resolve(path, source)
    }

    /// Resolve with a default replacing a missing Mapping key.
    pub fn resolve_or(
        &self,
        path: &str,
        source: impl Into<Source>,
        default: Value,
    ) -> Result<Value, ResolveError> {
        self.resolver.resolve_or(path, source, default)
    }

    /// Issue a fresh anonymous identity tag.
    pub fn anonymous_tag(&mut self) -> IdentityTag {
        self.allocator.anonymous()
    }

    /// Issue a derived identity tag for `value`.
    pub fn tag<T: Taggable + ?Sized>(&mut self, value: &T) -> IdentityTag {
        self.allocator.tag(value)
    }

    /// Render values to a new display entry or an existing slot.
    pub fn render(&mut self, values: &[Value], target: Option<&DisplayHandle>) {
        self.multiplexer.render(values, target);
    }

    /// Render one value on the requested channels without touching the sink.
    pub fn describe(&self, value: &Value, want_text: bool, want_html: bool) -> Described {
        self.multiplexer.describe(value, want_text, want_html)
    }
}

/// Merge `entries` into `target`, skipping values equal to `sentinel`.
///
/// The sentinel marks "not provided": entries carrying it leave the target
/// untouched, everything else is inserted (overwriting existing keys).
pub fn merge_defined(
    target: &mut Map<String, Value>,
    entries: impl IntoIterator<Item = (String, Value)>,
    sentinel: &Value,
) {
    for (key, value) in entries {
        if &value != sentinel {
            target.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn bridge() -> (Bridge, Rc<RefCell<MemorySink>>) {
        let sink = Rc::new(RefCell::new(MemorySink::new()));
        let bridge = Bridge::new(BridgeConfig::default(), Box::new(sink.clone()));
        (bridge, sink)
    }

    #[test]
    fn initialize_is_idempotent() {
        let (mut bridge, _sink) = bridge();
        assert!(!bridge.is_initialized());
        bridge.initialize();
        assert!(bridge.is_initialized());
        bridge.initialize();
        assert!(bridge.is_initialized());
    }

    #[test]
    fn bridge_resolves_with_its_configured_separator() {
        let sink = Rc::new(RefCell::new(MemorySink::new()));
        let bridge = Bridge::new(BridgeConfig { separator: '/' }, Box::new(sink));
        let value = bridge.resolve("a/b", json!({"a": {"b": 1}})).unwrap();
        assert_eq!(value, json!(1));
    }

    #[test]
    fn tag_resolve_render_sequence() {
        let (mut bridge, sink) = bridge();
        bridge.initialize();

        let session = json!({"kernel": {"id": "k1"}, "cells": [{"out": 3}]});
        let tag = bridge.tag(&session);
        assert_eq!(tag.as_str(), "Object_1");

        let out = bridge.resolve("cells.0.out", session).unwrap();
        bridge.render(&[out], None);

        assert_eq!(sink.borrow().published()[0].text, "3");
    }

    #[test]
    fn render_to_handle_updates_in_place() {
        let (mut bridge, sink) = bridge();
        let handle = DisplayHandle::new(bridge.anonymous_tag().to_string());
        bridge.render(&[json!("v1")], Some(&handle));
        bridge.render(&[json!("v2")], Some(&handle));

        let sink = sink.borrow();
        assert!(sink.published().is_empty());
        assert_eq!(sink.updates().len(), 2);
        assert_eq!(sink.updates()[0].0, handle);
        assert_eq!(sink.updates()[1].0, handle);
    }

    #[test]
    fn merge_defined_skips_sentinel_values() {
        let mut target = Map::new();
        target.insert("kept".to_string(), json!(1));
        merge_defined(
            &mut target,
            vec![
                ("added".to_string(), json!("x")),
                ("skipped".to_string(), Value::Null),
                ("kept".to_string(), json!(2)),
            ],
            &Value::Null,
        );

        assert_eq!(target.get("added"), Some(&json!("x")));
        assert_eq!(target.get("skipped"), None);
        assert_eq!(target.get("kept"), Some(&json!(2)));
    }

    #[test]
    fn merge_defined_with_custom_sentinel() {
        let mut target = Map::new();
        merge_defined(
            &mut target,
            vec![
                ("a".to_string(), json!("")),
                ("b".to_string(), json!("set")),
            ],
            &json!(""),
        );

        assert_eq!(target.get("a"), None);
        assert_eq!(target.get("b"), Some(&json!("set")));
    }
}
