//! Four-Way Intersection
//!
//! This example drives an intersection the way a UI button would: one
//! `advance` per press, with undo and reset.
//!
//! Key concepts:
//! - Handover to the next light on the orange-to-red edge
//! - Controller history and undo
//! - Logging through `tracing` (set `RUST_LOG=crossroads=debug`)
//!
//! Run with: cargo run --example intersection

use crossroads::{ControllerBuilder, Intersection};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Four-Way Intersection ===\n");

    let mut controller = ControllerBuilder::<Intersection>::new()
        .history_limit(32)
        .build()?;

    println!("start    {}", controller.current());
    for press in 1..=12 {
        let handover = controller.current().handover_pending();
        let state = controller.advance();
        let note = if handover { "  <- handover" } else { "" };
        println!("press {press:>2} {state}{note}");
    }

    println!("\nUndo twice:");
    for _ in 0..2 {
        if let Some(state) = controller.undo() {
            println!("         {state}");
        }
    }

    controller.reset();
    println!("\nAfter reset: {}", controller.current());

    println!("\n=== Example Complete ===");
    Ok(())
}
