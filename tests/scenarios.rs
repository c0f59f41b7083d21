//! End-to-end connect scenarios.
//!
//! Tests cover:
//! - Overriding a home-locale namespace replaces it whole
//! - Adding a second locale leaves the home locale's defaults intact
//! - Replacement and fallback hold for arbitrary default bundles
//! - Repeated connects with the same bundle are idempotent
//! - Form-state class toggling alongside translated text

use hostlink::prelude::*;
use hostlink_core::test_utils::{NullEnvironment, RecordingWire, StubEnvironment};
use serde_json::{Value, json};
use std::sync::Arc;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Helpers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn overwriting_bundle() -> Bundle {
    Bundle::new(
        Arc::new(StubEnvironment::new().with_wire(Arc::new(RecordingWire::default()))),
        Localization::from_value(json!({
            "en": { "ui": { "form": { "sending": "requesting" } } }
        }))
        .unwrap(),
    )
}

fn adding_bundle() -> Bundle {
    Bundle::new(
        Arc::new(StubEnvironment::new().with_wire(Arc::new(RecordingWire::default()))),
        Localization::from_value(json!({
            "pl": { "ui": { "form": { "sending": "wysyłam..." } } }
        }))
        .unwrap(),
    )
}

fn form_len(registry: &Registry, locale: &str) -> usize {
    registry
        .localization
        .get(locale)
        .and_then(|t| t.lookup("ui.form"))
        .and_then(Value::as_object)
        .map_or(0, |m| m.len())
}

fn tree(value: Value) -> LocaleTree {
    LocaleTree::from_value(value).unwrap()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Overwrite and enhance
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn translations_can_be_overridden() {
    let mut registry = Registry::new();
    Connector::default().connect(&mut registry, overwriting_bundle());

    assert_eq!(form_len(&registry, "en"), 1);
    assert_eq!(registry.text("en", "ui.form.sending").unwrap(), "requesting");
}

#[test]
fn translations_can_be_enhanced() {
    let mut registry = Registry::new();
    let connector = Connector::default();
    connector.connect(&mut registry, overwriting_bundle());
    connector.connect(&mut registry, adding_bundle());

    assert_eq!(form_len(&registry, "en"), 3);
    assert_eq!(registry.text("pl", "ui.form.sending").unwrap(), "wysyłam...");
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Properties over varied defaults and overrides
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn replacement_and_fallback_hold_for_varied_bundles() {
    let cases = [
        (
            json!({ "a": { "x": "1", "y": "2" }, "b": "flat" }),
            json!({ "a": { "x": "9" } }),
        ),
        (
            json!({ "a": { "deep": { "deeper": "d" } }, "b": { "k": "v" }, "c": [] }),
            json!({ "b": {}, "c": { "now": "object" }, "new": "n" }),
        ),
        (json!({ "only": "default" }), json!({})),
        (json!({}), json!({ "host": { "only": "h" } })),
    ];

    for (defaults, overrides) in cases {
        let defaults = tree(defaults);
        let overrides = tree(overrides);
        let connector = Connector::new(
            DefaultBundle::new("en", defaults.clone()),
            ConnectorConfig::default(),
        );
        let mut registry = Registry::new();
        connector.connect(
            &mut registry,
            Bundle::new(
                Arc::new(NullEnvironment),
                Localization::new()
                    .with_locale("en", overrides.clone())
                    .with_locale("xx", overrides.clone()),
            ),
        );

        let home = registry.localization.get("en").unwrap();
        for (ns, value) in overrides.iter() {
            assert_eq!(home.namespace(ns), Some(value), "override {ns} replaces");
        }
        for (ns, value) in defaults.iter() {
            if !overrides.contains(ns) {
                assert_eq!(home.namespace(ns), Some(value), "default {ns} kept");
            }
        }
        assert_eq!(registry.localization.get("xx"), Some(&overrides));
    }
}

#[test]
fn connect_is_idempotent() {
    let connector = Connector::default();
    let mut once = Registry::new();
    connector.connect(&mut once, overwriting_bundle());

    let mut twice = Registry::new();
    connector.connect(&mut twice, overwriting_bundle());
    connector.connect(&mut twice, overwriting_bundle());

    assert_eq!(once.localization.get("en"), twice.localization.get("en"));
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Widget flow
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn form_submission_uses_wire_text_and_classes() {
    let wire = Arc::new(RecordingWire::new(json!({ "status": "ok" })));
    let env = StubEnvironment::new().with_wire(wire.clone()).with_locale("pl");
    let mut registry = Registry::new();
    Connector::default().connect(
        &mut registry,
        Bundle::new(
            Arc::new(env),
            Localization::from_value(json!({
                "pl": { "ui": { "form": { "sending": "wysyłam..." } } }
            }))
            .unwrap(),
        ),
    );

    let fields = vec![
        MemoryElement::input("text"),
        MemoryElement::input("email"),
        MemoryElement::input("text"),
    ];
    let mut form = MemoryElement::new("form");

    add_class(&mut form, "sending");
    assert_eq!(registry.current_text("ui.form.sending").unwrap(), "wysyłam...");

    let reply = registry
        .wire()
        .unwrap()
        .send(WireMessage::new(
            "form.submit",
            json!({ "types": unique_input_types(&fields) }),
        ))
        .await
        .unwrap();
    remove_class(&mut form, "sending");
    add_class(&mut form, "success");

    assert_eq!(reply["status"], "ok");
    assert_eq!(wire.sent()[0].payload, json!({ "types": ["text", "email"] }));
    assert!(has_class(&form, "success"));
    assert!(!has_class(&form, "sending"));
    // "success" was not translated, so the English default shows.
    assert_eq!(registry.current_text("ui.form.success").unwrap(), "Sent");
}
