// ─────────────────────────────────────────────────────────────────────
// RiskGate: Evaluation Ledger
// ─────────────────────────────────────────────────────────────────────
//! Caller-owned accumulator of the latest evaluation per model.
//!
//! Re-evaluating a model replaces its record in place, so listing order
//! stays the order in which models were first submitted. No history is
//! kept.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use riskgate_types::{ChecklistResult, GuardrailOutcome, Tier, TierResult};

/// Everything known about one model after an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub checklist: ChecklistResult,
    /// `None` when the model was not in the tiered batch.
    pub tier: Option<TierResult>,
    pub outcome: GuardrailOutcome,
}

impl EvaluationRecord {
    pub fn model(&self) -> &str {
        &self.checklist.model
    }

    pub fn tier_level(&self) -> Option<Tier> {
        self.tier.as_ref().map(|t| t.tier)
    }
}

/// Thread-safe: record mutations are guarded by a `parking_lot::Mutex`.
#[derive(Debug, Default)]
pub struct EvaluationLedger {
    records: Mutex<Vec<EvaluationRecord>>,
}

impl EvaluationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record`, returning the one it replaced.
    pub fn set(&self, record: EvaluationRecord) -> Option<EvaluationRecord> {
        let mut records = self.records.lock();
        if let Some(index) = records.iter().position(|r| r.model() == record.model()) {
            log::info!("re-evaluated {:?}, replacing previous result", record.model());
            return Some(std::mem::replace(&mut records[index], record));
        }
        records.push(record);
        None
    }

    pub fn get(&self, model: &str) -> Option<EvaluationRecord> {
        self.records
            .lock()
            .iter()
            .find(|r| r.model() == model)
            .cloned()
    }

    pub fn remove(&self, model: &str) -> Option<EvaluationRecord> {
        let mut records = self.records.lock();
        let index = records.iter().position(|r| r.model() == model)?;
        Some(records.remove(index))
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Snapshot in first-submission order.
    pub fn records(&self) -> Vec<EvaluationRecord> {
        self.records.lock().clone()
    }

    /// Snapshot sorted by model name.
    pub fn sorted_by_name(&self) -> Vec<EvaluationRecord> {
        let mut records = self.records();
        records.sort_by(|a, b| a.model().cmp(b.model()));
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::ChecklistEngine;
    use crate::guardrail::GuardrailEvaluator;
    use riskgate_types::{Answer, AnswerSet, Grade};

    fn record(model: &str, answer: Answer) -> EvaluationRecord {
        let checklist = ChecklistEngine::default()
            .apply(model, &AnswerSet::uniform(1..=10, answer))
            .unwrap();
        let outcome = GuardrailEvaluator::default().evaluate(None, &checklist);
        EvaluationRecord {
            checklist,
            tier: None,
            outcome,
        }
    }

    #[test]
    fn test_set_get_clear() {
        let ledger = EvaluationLedger::new();
        assert!(ledger.is_empty());
        assert!(ledger.set(record("a", Answer::Yes)).is_none());
        assert_eq!(ledger.get("a").unwrap().checklist.grade, Grade::A);
        assert!(ledger.get("b").is_none());
        ledger.clear();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let ledger = EvaluationLedger::new();
        ledger.set(record("zeta", Answer::Yes));
        ledger.set(record("alpha", Answer::Yes));
        let previous = ledger.set(record("zeta", Answer::No)).unwrap();
        assert_eq!(previous.checklist.grade, Grade::A);

        let records = ledger.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].model(), "zeta");
        assert_eq!(records[0].checklist.grade, Grade::F);
    }

    #[test]
    fn test_sorted_by_name() {
        let ledger = EvaluationLedger::new();
        ledger.set(record("zeta", Answer::Yes));
        ledger.set(record("alpha", Answer::No));
        let names: Vec<String> = ledger
            .sorted_by_name()
            .iter()
            .map(|r| r.model().to_string())
            .collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_remove() {
        let ledger = EvaluationLedger::new();
        ledger.set(record("a", Answer::Yes));
        assert!(ledger.remove("a").is_some());
        assert!(ledger.remove("a").is_none());
        assert_eq!(ledger.len(), 0);
    }

    #[test]
    fn test_record_json_round_trip() {
        let original = record("a", Answer::Yes);
        let json = serde_json::to_string(&original).unwrap();
        let back: EvaluationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
        assert!(json.contains(r#""decision":"deployable""#));
    }

    #[test]
    fn test_shared_across_threads() {
        let ledger = EvaluationLedger::new();
        std::thread::scope(|s| {
            for i in 0..8 {
                let ledger = &ledger;
                s.spawn(move || {
                    ledger.set(record(&format!("model-{i}"), Answer::Partial));
                });
            }
        });
        assert_eq!(ledger.len(), 8);
    }
}
