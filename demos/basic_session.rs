//! Basic Calculator Session
//!
//! This example demonstrates driving the engine with raw tokens.
//!
//! Key concepts:
//! - One normalization step turns tokens into canonical commands
//! - The reducer is pure; the engine shell just swaps states
//! - Repeated equals replays the last operand
//! - Division by zero is an ordinary transition, not a fault
//!
//! Run with: cargo run --example basic_session

use reckon::Engine;

fn press_and_show(engine: &mut Engine, tokens: &[&str]) {
    for token in tokens {
        engine.press(token);
        println!("  [{token:>9}] display = {:?}", engine.display());
    }
}

fn main() {
    println!("=== Basic Calculator Session ===\n");

    let mut engine = Engine::new();

    println!("Chained calculation, left to right:");
    press_and_show(&mut engine, &["2", "+", "3", "*", "4", "="]);
    println!("Equation: {}\n", engine.expression());

    println!("Repeated equals keeps folding the last operand:");
    press_and_show(&mut engine, &["C", "7", "+", "3", "=", "=", "="]);
    println!();

    println!("Decimal entry stays exact:");
    press_and_show(&mut engine, &["C", ".", "1", "+", ".", "2", "="]);
    println!();

    println!("Division by zero and recovery:");
    press_and_show(&mut engine, &["C", "6", "/", "0", "=", "7"]);
    println!();

    println!("Completed calculations recorded: {}", engine.ledger().len());

    println!("\n=== Session Complete ===");
}
