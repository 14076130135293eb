//! Traffic Light
//!
//! This example steps a single three-color light.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Immutable values: each step is a new `Light`
//! - No final state (cycles indefinitely)
//!
//! Run with: cargo run --example traffic_light

use crossroads::{Color, Light};

fn main() {
    println!("=== Traffic Light ===\n");

    let initial = Light::default();
    println!("Initial color: {initial}\n");

    println!("Transition sequence:");
    let mut light = initial;
    for press in 1..=6 {
        let next = light.advance();
        println!("  press {press}: {light} -> {next}");
        light = next;
    }

    assert_eq!(light, initial);
    println!("\nAfter two full cycles the light is {} again.", Color::Red);

    println!("\n=== Example Complete ===");
}
