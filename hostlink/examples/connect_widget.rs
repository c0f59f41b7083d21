//! Connect a widget to an in-process host and submit a form over the wire.
//!
//! Run with:
//!
//!     RUST_LOG=debug cargo run -p hostlink --example connect_widget --features full

use hostlink::prelude::*;
use serde_json::json;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), DepsError> {
    tracing_subscriber::fmt::init();

    let (env, receiver) = LocalEnv::loopback(16);
    tokio::spawn(receiver.serve(|msg| {
        println!("host received {}: {}", msg.topic, msg.payload);
        Ok(json!({ "status": "ok" }))
    }));

    let translations = Localization::from_json_str(
        r#"{
            "en": { "ui": { "form": { "sending": "Submitting...", "success": "Thanks!", "error": "Try again" } } },
            "pl": { "ui": { "form": { "sending": "Wysyłam...", "success": "Dzięki!", "error": "Spróbuj ponownie" } } }
        }"#,
    )?;
    let utilities = Utilities::new().with("trim", |args| {
        json!(args.first().and_then(|v| v.as_str()).unwrap_or_default().trim())
    });

    hostlink::connect(
        Bundle::new(Arc::new(env.with_locale("pl")), translations).with_utilities(utilities),
    );

    let registry = hostlink::global::read();
    let locale = registry.current_locale();
    println!("[{locale}] {}", registry.current_text("ui.form.sending")?);

    let name = registry.call_utility("trim", &[json!("  Ada  ")])?;
    let reply = registry
        .wire()?
        .send(WireMessage::new("form.submit", json!({ "name": name })))
        .await?;
    println!("[{locale}] {} ({reply})", registry.current_text("ui.form.success")?);

    // Not overridden by the host, so the built-in English text is used.
    println!("[{locale}] {}", registry.current_text("validation.required")?);
    Ok(())
}
