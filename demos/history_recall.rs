//! History Recall
//!
//! This example demonstrates the ledger: completed calculations are
//! recorded newest first, duplicates of the latest entry are dropped,
//! and any entry can be recalled back into live engine state.
//!
//! Run with: cargo run --example history_recall

use reckon::Engine;

fn main() {
    println!("=== History Recall ===\n");

    let mut engine = Engine::new();

    for token in ["9", "-", "4", "=", "C", "8", "*", "2", "=", "C", "1", "/", "8", "="] {
        engine.press(token);
    }

    println!("Ledger, newest first:");
    for entry in engine.ledger().entries() {
        println!("  {} = {}  ({})", entry.expression, entry.result, entry.id);
    }

    // Recall the oldest entry and let equals repeat it.
    let oldest = engine
        .ledger()
        .entries()
        .last()
        .expect("three calculations were completed")
        .id;
    engine.recall(&oldest);

    println!("\nRecalled: {}", engine.expression());
    println!("Display:  {}", engine.display());

    engine.press("=");
    println!("After =:  {}", engine.display());

    println!("\n=== Example Complete ===");
}
