//! Support Session Example
//!
//! This example demonstrates how to:
//! - Load configuration and wire the backends
//! - Dispatch intents through the handler registry
//! - Apply returned slot updates between turns
//!
//! Run with `cargo run --example support_session`. Set
//! `IT_SUPPORT_ACTIONS__BACKEND__KIND=table` and
//! `IT_SUPPORT_ACTIONS__BACKEND__INVENTORY_PATH=...` to use an inventory file.

use anyhow::Context;
use it_support_actions::{
    intents, slots, ActionsConfig, Backends, HandlerRegistry, HandlerSettings, Request,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== IT Support Actions Example ===\n");

    let config = ActionsConfig::load().context("loading configuration")?;
    let backends = Backends::from_config(&config).context("wiring backends")?;
    let registry = HandlerRegistry::standard(&backends, HandlerSettings::from(&config));

    println!("Registered intents: {:?}\n", registry.intents());

    let mut request = Request::new("demo-session");

    let turns = [
        (intents::CHECK_DEVICE_STATUS, None),
        (intents::CHECK_DEVICE_STATUS, Some((slots::DEVICE, "printer"))),
        (intents::CHECK_SOFTWARE_COMPATIBILITY, Some((slots::SOFTWARE, "Photoshop"))),
        (intents::CHECK_NETWORK_STATUS, None),
        (intents::CREATE_SUPPORT_TICKET, Some((slots::ISSUE_TYPE, "printing"))),
    ];

    for (turn, (intent, slot)) in turns.into_iter().enumerate() {
        if let Some((name, value)) = slot {
            request = request.with_slot(name, value);
        }

        println!("{}. {intent}", turn + 1);
        let response = registry
            .dispatch(intent, &request)
            .await
            .with_context(|| format!("dispatching {intent}"))?;
        println!("   bot: {}", response.message);

        for event in response.events() {
            println!("   event: {}", serde_json::to_string(&event)?);
        }
        for update in response.slot_updates {
            request = request.with_slot(update.name, update.value);
        }
        println!();
    }

    Ok(())
}
