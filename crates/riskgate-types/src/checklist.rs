// ─────────────────────────────────────────────────────────────────────
// RiskGate: Ethical Checklist Types
// ─────────────────────────────────────────────────────────────────────
//! Governance pillars, checklist questions, and answer sets.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GovernanceError, GovernanceResult};

/// Question id of the demographic bias-testing control.
pub const BIAS_TESTING_QUESTION_ID: u32 = 2;

/// The six governance pillars (FATPSR), in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pillar {
    Fairness,
    Accountability,
    Transparency,
    Privacy,
    Security,
    Reliability,
}

impl Pillar {
    pub const ALL: [Pillar; 6] = [
        Self::Fairness,
        Self::Accountability,
        Self::Transparency,
        Self::Privacy,
        Self::Security,
        Self::Reliability,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fairness => "Fairness",
            Self::Accountability => "Accountability",
            Self::Transparency => "Transparency",
            Self::Privacy => "Privacy",
            Self::Security => "Security",
            Self::Reliability => "Reliability",
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evidence status of one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    Partial,
    No,
}

impl Answer {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::Partial => "partial",
            Self::No => "no",
        }
    }

    /// Fraction of the question weight this answer earns.
    pub fn credit(self) -> f64 {
        match self {
            Self::Yes => 1.0,
            Self::Partial => 0.5,
            Self::No => 0.0,
        }
    }

    /// Parse a raw answer for `question_id`. Exact lowercase only.
    pub fn parse_for(question_id: u32, raw: &str) -> GovernanceResult<Self> {
        match raw {
            "yes" => Ok(Self::Yes),
            "partial" => Ok(Self::Partial),
            "no" => Ok(Self::No),
            other => Err(GovernanceError::InvalidAnswer {
                question_id,
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One weighted control question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistQuestion {
    pub id: u32,
    pub question: String,
    pub pillar: Pillar,
    pub weight: u32,
}

const DEFAULT_CHECKLIST: [(u32, &str, Pillar, u32); 10] = [
    (1, "Could errors significantly harm clients or stakeholders?", Pillar::Reliability, 3),
    (2, "Has the model been tested for demographic bias?", Pillar::Fairness, 3),
    (3, "Can the model explain its individual decisions?", Pillar::Transparency, 2),
    (4, "Is there a process for human review of outputs?", Pillar::Accountability, 3),
    (5, "Has the model been stress-tested under adverse conditions?", Pillar::Reliability, 2),
    (6, "Is all AI-generated content labeled as such?", Pillar::Transparency, 1),
    (7, "Does the model use customer data with proper consent?", Pillar::Privacy, 2),
    (8, "Is there an incident response plan if the model fails?", Pillar::Accountability, 2),
    (9, "Has an independent team validated the model?", Pillar::Reliability, 2),
    (10, "Are model decisions logged for audit?", Pillar::Accountability, 2),
];

/// The ten-question ethical checklist.
pub fn default_checklist() -> Vec<ChecklistQuestion> {
    DEFAULT_CHECKLIST
        .iter()
        .map(|&(id, question, pillar, weight)| ChecklistQuestion {
            id,
            question: question.to_string(),
            pillar,
            weight,
        })
        .collect()
}

/// Answers keyed by question id. Absent ids resolve to [`Answer::No`].
///
/// Deserializes from a map of raw strings so a bad value surfaces as
/// [`GovernanceError::InvalidAnswer`] with its question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    into = "BTreeMap<u32, Answer>",
    try_from = "BTreeMap<u32, String>"
)]
pub struct AnswerSet(BTreeMap<u32, Answer>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw `(id, value)` pairs, failing on the first bad value.
    pub fn from_raw<I, S>(raw: I) -> GovernanceResult<Self>
    where
        I: IntoIterator<Item = (u32, S)>,
        S: AsRef<str>,
    {
        let mut answers = Self::new();
        for (id, value) in raw {
            answers.insert(id, Answer::parse_for(id, value.as_ref())?);
        }
        Ok(answers)
    }

    /// Every id answered `answer`.
    pub fn uniform(ids: impl IntoIterator<Item = u32>, answer: Answer) -> Self {
        ids.into_iter().map(|id| (id, answer)).collect()
    }

    pub fn insert(&mut self, id: u32, answer: Answer) -> Option<Answer> {
        self.0.insert(id, answer)
    }

    pub fn get(&self, id: u32) -> Option<Answer> {
        self.0.get(&id).copied()
    }

    /// Answer for `id`, with "no" for anything unanswered.
    pub fn resolve(&self, id: u32) -> Answer {
        self.get(id).unwrap_or(Answer::No)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, Answer)> + '_ {
        self.0.iter().map(|(&id, &a)| (id, a))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<BTreeMap<u32, String>> for AnswerSet {
    type Error = GovernanceError;

    fn try_from(raw: BTreeMap<u32, String>) -> GovernanceResult<Self> {
        Self::from_raw(raw)
    }
}

impl From<AnswerSet> for BTreeMap<u32, Answer> {
    fn from(set: AnswerSet) -> Self {
        set.0
    }
}

impl FromIterator<(u32, Answer)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (u32, Answer)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_set_json_reports_question_id() {
        let err = serde_json::from_str::<AnswerSet>(r#"{"1": "yes", "3": "maybe"}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("question 3"), "{err}");
        assert!(err.contains("maybe"), "{err}");
    }

    #[test]
    fn test_answer_set_json_shape() {
        let set: AnswerSet = serde_json::from_str(r#"{"2": "partial", "1": "yes"}"#).unwrap();
        assert_eq!(set.get(2), Some(Answer::Partial));
        assert_eq!(
            serde_json::to_string(&set).unwrap(),
            r#"{"1":"yes","2":"partial"}"#
        );
    }

    #[test]
    fn test_default_checklist_shape() {
        let checklist = default_checklist();
        assert_eq!(checklist.len(), 10);
        let total: u32 = checklist.iter().map(|q| q.weight).sum();
        assert_eq!(total, 22);
        let bias = checklist
            .iter()
            .find(|q| q.id == BIAS_TESTING_QUESTION_ID)
            .unwrap();
        assert_eq!(bias.pillar, Pillar::Fairness);
    }

    #[test]
    fn test_no_security_questions_by_default() {
        assert!(default_checklist()
            .iter()
            .all(|q| q.pillar != Pillar::Security));
    }

    #[test]
    fn test_answer_credit() {
        assert_eq!(Answer::Yes.credit(), 1.0);
        assert_eq!(Answer::Partial.credit(), 0.5);
        assert_eq!(Answer::No.credit(), 0.0);
    }

    #[test]
    fn test_parse_for_rejects_unknown() {
        let err = Answer::parse_for(4, "n/a").unwrap_err();
        assert_eq!(
            err,
            GovernanceError::InvalidAnswer {
                question_id: 4,
                value: "n/a".into()
            }
        );
        assert!(Answer::parse_for(4, "Yes").is_err());
    }

    #[test]
    fn test_missing_resolves_to_no() {
        let answers = AnswerSet::from_raw([(1, "yes")]).unwrap();
        assert_eq!(answers.resolve(1), Answer::Yes);
        assert_eq!(answers.resolve(9), Answer::No);
        assert_eq!(answers.get(9), None);
    }

    #[test]
    fn test_from_raw_reports_offending_id() {
        let err = AnswerSet::from_raw([(1, "yes"), (6, "mostly")]).unwrap_err();
        assert!(matches!(err, GovernanceError::InvalidAnswer { question_id: 6, .. }));
    }

    #[test]
    fn test_answer_set_json_keys() {
        let answers: AnswerSet = serde_json::from_str(r#"{"1":"yes","2":"partial"}"#).unwrap();
        assert_eq!(answers.resolve(2), Answer::Partial);
        assert_eq!(answers.len(), 2);
    }
}
