//! Property-based tests for the calculator core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated command sequences and operand values.

use proptest::prelude::*;
use reckon::core::{
    compute, format_decimal, parse_operand, reduce, CalculatorState, Command, HistoryEvent, Ledger,
    Operator, DIVIDE_BY_ZERO,
};
use reckon::Engine;
use rust_decimal::Decimal;

prop_compose! {
    fn arbitrary_operator()(variant in 0..4u8) -> Operator {
        match variant {
            0 => Operator::Add,
            1 => Operator::Sub,
            2 => Operator::Mul,
            _ => Operator::Div,
        }
    }
}

prop_compose! {
    fn arbitrary_command()(
        variant in 0..6u8,
        digit in 0..10u8,
        op in arbitrary_operator(),
    ) -> Command {
        match variant {
            0 => Command::Digit(digit),
            1 => Command::Dot,
            2 => Command::Op(op),
            3 => Command::Equals,
            4 => Command::Clear,
            _ => Command::Backspace,
        }
    }
}

fn run(commands: &[Command]) -> CalculatorState {
    commands
        .iter()
        .fold(CalculatorState::new(), |state, &command| {
            reduce(&state, command).0
        })
}

fn press_number(engine: &mut Engine, value: u32) {
    for ch in value.to_string().chars() {
        engine.press(&ch.to_string());
    }
}

proptest! {
    #[test]
    fn clear_resets_any_reachable_state(
        commands in prop::collection::vec(arbitrary_command(), 0..40)
    ) {
        let state = run(&commands);
        let (cleared, event) = reduce(&state, Command::Clear);
        prop_assert_eq!(cleared, CalculatorState::new());
        prop_assert_eq!(event, None);
    }

    #[test]
    fn reduce_is_deterministic(
        commands in prop::collection::vec(arbitrary_command(), 0..30),
        command in arbitrary_command(),
    ) {
        let state = run(&commands);
        let first = reduce(&state, command);
        let second = reduce(&state, command);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn reduce_leaves_its_input_untouched(
        commands in prop::collection::vec(arbitrary_command(), 0..30),
        command in arbitrary_command(),
    ) {
        let state = run(&commands);
        let snapshot = state.clone();
        let _ = reduce(&state, command);
        prop_assert_eq!(state, snapshot);
    }

    #[test]
    fn pending_operation_pairs_with_left_operand(
        commands in prop::collection::vec(arbitrary_command(), 0..40)
    ) {
        let state = run(&commands);
        prop_assert_eq!(state.operation.is_some(), !state.previous.is_empty());
    }

    #[test]
    fn display_is_numeric_or_the_error_message(
        commands in prop::collection::vec(arbitrary_command(), 0..40)
    ) {
        let state = run(&commands);
        let ok = state.current.is_empty()
            || state.current == DIVIDE_BY_ZERO
            || parse_operand(&state.current).is_some();
        prop_assert!(ok, "unexpected display buffer: {:?}", state.current);
    }

    #[test]
    fn error_state_carries_initial_fields(
        commands in prop::collection::vec(arbitrary_command(), 0..40)
    ) {
        let state = run(&commands);
        if state.is_error() {
            prop_assert_eq!(&state.previous, "");
            prop_assert_eq!(state.operation, None);
        }
    }

    #[test]
    fn state_serde_roundtrips(
        commands in prop::collection::vec(arbitrary_command(), 0..30)
    ) {
        let state = run(&commands);
        let json = serde_json::to_string(&state).unwrap();
        let back: CalculatorState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, back);
    }

    #[test]
    fn commit_is_idempotent_for_adjacent_duplicates(
        expression in "[0-9]{1,3} [+*/-] [0-9]{1,3}",
        result in "[0-9]{1,3}",
        op in arbitrary_operator(),
        operand in "[0-9]{1,3}",
    ) {
        let event = HistoryEvent {
            expression,
            result,
            operation: op,
            operand,
        };
        let once = Ledger::new().commit(event.clone());
        let twice = once.commit(event);
        prop_assert_eq!(once.len(), 1);
        prop_assert_eq!(twice.len(), 1);
    }

    #[test]
    fn repeat_equals_is_a_stable_fold(
        a in 0..1000u32,
        b in 1..1000u32,
        op in arbitrary_operator(),
        presses in 1..5usize,
    ) {
        let mut engine = Engine::new();
        press_number(&mut engine, a);
        engine.press(op.symbol());
        press_number(&mut engine, b);
        for _ in 0..presses {
            engine.press("=");
        }

        let right = Decimal::from(b);
        let mut expected = Decimal::from(a);
        for _ in 0..presses {
            expected = compute(expected, op, right).unwrap();
        }
        prop_assert_eq!(engine.display(), format_decimal(expected));
    }

    #[test]
    fn addition_matches_exact_decimal_arithmetic(
        a in 0..100_000u32,
        b in 0..100_000u32,
        scale in 0..4u32,
    ) {
        let left = Decimal::new(a.into(), scale);
        let right = Decimal::new(b.into(), scale);
        let sum = compute(left, Operator::Add, right).unwrap();
        let expected = Decimal::new((a as i64) + (b as i64), scale);
        prop_assert_eq!(sum, expected);
    }

    #[test]
    fn division_by_zero_for_every_numerator(a in any::<i32>()) {
        let outcome = compute(Decimal::from(a), Operator::Div, Decimal::ZERO);
        prop_assert!(outcome.is_err());
    }
}
