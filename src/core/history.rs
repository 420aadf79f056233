//! The history ledger: completed calculations, newest first.
//!
//! The ledger is immutable - `commit` returns a new ledger with the
//! entry added, following functional programming principles. Commits
//! are idempotent under at-least-once delivery: a repeat of the most
//! recently committed calculation is dropped.

use super::reduce::HistoryEvent;
use super::state::{CalculatorState, Operator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed calculation. Immutable once created.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Opaque unique token identifying this entry.
    pub id: Uuid,
    /// `"<left> <op> <right>"` in normalized decimal text.
    pub expression: String,
    /// Normalized decimal text of the result.
    pub result: String,
    /// The operation that completed.
    pub operation: Operator,
    /// The right operand, reusable for repeat-equals after recall.
    pub operand: String,
    /// When the entry was committed.
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Derived key identifying a logically unique completed calculation.
    pub fn dedup_key(&self) -> String {
        format!("{}|{}", self.expression, self.result)
    }
}

/// Ordered, deduplicated sequence of completed calculations.
///
/// Entries are kept newest first. Growth is unbounded; there is no
/// eviction.
///
/// # Example
///
/// ```rust
/// use reckon::core::{HistoryEvent, Ledger, Operator};
///
/// let event = HistoryEvent {
///     expression: "5 + 3".to_string(),
///     result: "8".to_string(),
///     operation: Operator::Add,
///     operand: "3".to_string(),
/// };
///
/// let ledger = Ledger::new();
/// let ledger = ledger.commit(event.clone());
/// let ledger = ledger.commit(event); // duplicate delivery, dropped
///
/// assert_eq!(ledger.len(), 1);
/// assert_eq!(ledger.entries()[0].result, "8");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Ledger {
    entries: Vec<HistoryEntry>,
}

impl Ledger {
    /// Create a new empty ledger.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Commit a completed calculation, returning a new ledger.
    ///
    /// This is a pure function - it does not mutate the existing ledger
    /// but returns a new one with the entry prepended. The event is
    /// dropped when its dedup key matches the most recently committed
    /// entry, which makes the commit idempotent when the surrounding
    /// event system delivers the same completion more than once. The
    /// same calculation performed again after a different one commits
    /// normally.
    pub fn commit(&self, event: HistoryEvent) -> Self {
        let key = event.dedup_key();
        if self
            .entries
            .first()
            .is_some_and(|latest| latest.dedup_key() == key)
        {
            return self.clone();
        }
        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            expression: event.expression,
            result: event.result,
            operation: event.operation,
            operand: event.operand,
            created_at: Utc::now(),
        };
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(entry);
        entries.extend_from_slice(&self.entries);
        Self { entries }
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of committed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no calculations have been committed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by id.
    pub fn get(&self, id: &Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == *id)
    }

    /// Reconstruct engine state from a past entry.
    ///
    /// The returned state is exactly what the reducer produces when a
    /// calculation completes: result on display, operation and operand
    /// armed, so a following equals repeats the recalled calculation.
    pub fn recall(&self, id: &Uuid) -> Option<CalculatorState> {
        self.get(id).map(|entry| CalculatorState {
            current: entry.result.clone(),
            previous: entry.result.clone(),
            operation: Some(entry.operation),
            last_operand: entry.operand.clone(),
            new_number: true,
            expression: format!("{} =", entry.expression),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reduce::reduce;
    use crate::core::Command;

    fn event(expression: &str, result: &str, operation: Operator, operand: &str) -> HistoryEvent {
        HistoryEvent {
            expression: expression.to_string(),
            result: result.to_string(),
            operation,
            operand: operand.to_string(),
        }
    }

    #[test]
    fn new_ledger_is_empty() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert!(ledger.entries().is_empty());
    }

    #[test]
    fn commit_prepends_newest_first() {
        let ledger = Ledger::new()
            .commit(event("5 + 3", "8", Operator::Add, "3"))
            .commit(event("8 * 2", "16", Operator::Mul, "2"));

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.entries()[0].expression, "8 * 2");
        assert_eq!(ledger.entries()[1].expression, "5 + 3");
    }

    #[test]
    fn commit_is_immutable() {
        let ledger = Ledger::new();
        let committed = ledger.commit(event("5 + 3", "8", Operator::Add, "3"));

        assert_eq!(ledger.len(), 0);
        assert_eq!(committed.len(), 1);
    }

    #[test]
    fn duplicate_delivery_commits_once() {
        let first = event("5 + 3", "8", Operator::Add, "3");
        let ledger = Ledger::new().commit(first.clone()).commit(first);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn same_calculation_after_another_commits_again() {
        let repeated = event("5 + 3", "8", Operator::Add, "3");
        let ledger = Ledger::new()
            .commit(repeated.clone())
            .commit(event("1 - 1", "0", Operator::Sub, "1"))
            .commit(repeated);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn entries_get_distinct_ids() {
        let ledger = Ledger::new()
            .commit(event("5 + 3", "8", Operator::Add, "3"))
            .commit(event("8 * 2", "16", Operator::Mul, "2"));
        assert_ne!(ledger.entries()[0].id, ledger.entries()[1].id);
    }

    #[test]
    fn get_finds_entry_by_id() {
        let ledger = Ledger::new().commit(event("9 / 3", "3", Operator::Div, "3"));
        let id = ledger.entries()[0].id;

        let found = ledger.get(&id).unwrap();
        assert_eq!(found.result, "3");
        assert!(ledger.get(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn recall_reconstructs_completed_state() {
        let ledger = Ledger::new().commit(event("9 - 4", "5", Operator::Sub, "4"));
        let id = ledger.entries()[0].id;

        let state = ledger.recall(&id).unwrap();
        assert_eq!(state.current, "5");
        assert_eq!(state.previous, "5");
        assert_eq!(state.operation, Some(Operator::Sub));
        assert_eq!(state.last_operand, "4");
        assert!(state.new_number);
        assert_eq!(state.expression, "9 - 4 =");
    }

    #[test]
    fn recall_unknown_id_is_none() {
        let ledger = Ledger::new().commit(event("9 - 4", "5", Operator::Sub, "4"));
        assert!(ledger.recall(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn equals_after_recall_repeats_the_calculation() {
        let ledger = Ledger::new().commit(event("9 - 4", "5", Operator::Sub, "4"));
        let id = ledger.entries()[0].id;
        let state = ledger.recall(&id).unwrap();

        let (state, happened) = reduce(&state, Command::Equals);
        assert_eq!(state.current, "1");
        assert_eq!(happened.unwrap().expression, "5 - 4");
    }

    #[test]
    fn ledger_serializes_correctly() {
        let ledger = Ledger::new().commit(event("5 + 3", "8", Operator::Add, "3"));
        let json = serde_json::to_string(&ledger).unwrap();
        let deserialized: Ledger = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.entries()[0].id, ledger.entries()[0].id);
        assert_eq!(deserialized.entries()[0].expression, "5 + 3");
    }
}
