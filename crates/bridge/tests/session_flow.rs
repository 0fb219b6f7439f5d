//! End-to-end flow over one bridge session: tag a session value, extract a
//! field for transmission, and render the result into a display slot.

use notebridge::{Bridge, BridgeConfig, DisplayHandle, MemorySink, ResolveError};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::rc::Rc;

fn session_bridge() -> (Bridge, Rc<RefCell<MemorySink>>) {
    let sink = Rc::new(RefCell::new(MemorySink::new()));
    let mut bridge = Bridge::new(BridgeConfig::default(), Box::new(sink.clone()));
    bridge.initialize();
    (bridge, sink)
}

#[test]
fn repeated_renders_of_one_session_correlate_by_tag_and_slot() {
    let (mut bridge, sink) = session_bridge();

    let session = json!({
        "kernel": {"id": "k-1", "state": "idle"},
        "outputs": [{"value": 1}, {"value": 2}],
    });

    // Same session value, same derived tag on every update.
    let tag = bridge.tag(&session);
    assert_eq!(bridge.tag(&session).as_str(), "Object_2");
    assert_eq!(tag.as_str(), "Object_1");

    // A display slot named by an anonymous tag survives repeated updates.
    let slot = DisplayHandle::new(bridge.anonymous_tag().to_string());

    let first = bridge.resolve("outputs.0.value", session.clone()).unwrap();
    bridge.render(&[first], Some(&slot));
    let second = bridge.resolve("outputs.1.value", session).unwrap();
    bridge.render(&[second], Some(&slot));

    let sink = sink.borrow();
    assert!(sink.published().is_empty());
    assert_eq!(sink.updates().len(), 2);
    assert_eq!(sink.updates()[0].1.text, "1");
    assert_eq!(sink.updates()[1].1.text, "2");
}

#[test]
fn encoded_session_payloads_resolve_like_parsed_ones() {
    let (bridge, _sink) = session_bridge();

    let payload = r#"{"kernel": {"id": "k-9"}}"#;
    assert_eq!(bridge.resolve("kernel.id", payload).unwrap(), json!("k-9"));

    let err = bridge.resolve("kernel.id", "{broken").unwrap_err();
    assert!(matches!(err, ResolveError::MalformedInput(_)));
}

#[test]
fn missing_fields_follow_the_key_index_asymmetry() {
    let (bridge, _sink) = session_bridge();
    let session = json!({"outputs": [{"value": 1}]});

    // Missing mapping key errors (or takes the default).
    assert!(bridge.resolve("missing", session.clone()).is_err());
    let fallback = bridge
        .resolve_or("missing", session.clone(), json!("default"))
        .unwrap();
    assert_eq!(fallback, json!("default"));

    // Missing sequence position is a plain null.
    assert_eq!(
        bridge.resolve("outputs.5.value", session).unwrap(),
        Value::Null
    );
}
