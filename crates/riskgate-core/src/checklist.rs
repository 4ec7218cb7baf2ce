// ─────────────────────────────────────────────────────────────────────
// RiskGate: Checklist Scoring Engine
// ─────────────────────────────────────────────────────────────────────
//! Weighted ethical checklist scoring.
//!
//! Each question earns its full weight for "yes", half for "partial",
//! nothing for "no" (or no answer). The percentage of the total weight
//! determines the letter grade; every non-"yes" question is a gap.

use std::collections::BTreeMap;

use riskgate_types::config::validate_checklist;
use riskgate_types::score::ratio_percent;
use riskgate_types::{
    default_checklist, Answer, AnswerSet, ChecklistQuestion, ChecklistResult, Gap, GovernanceError,
    GovernanceResult, Grade, GradeThresholds, QuestionOutcome,
};

/// Stateless checklist engine over a fixed question table.
#[derive(Debug, Clone)]
pub struct ChecklistEngine {
    /// Sorted by ascending id.
    questions: Vec<ChecklistQuestion>,
    grading: GradeThresholds,
}

impl Default for ChecklistEngine {
    fn default() -> Self {
        let mut questions = default_checklist();
        questions.sort_by_key(|q| q.id);
        Self {
            questions,
            grading: GradeThresholds::default(),
        }
    }
}

impl ChecklistEngine {
    pub fn new(
        mut questions: Vec<ChecklistQuestion>,
        grading: GradeThresholds,
    ) -> GovernanceResult<Self> {
        validate_checklist(&questions)?;
        grading.validate()?;
        questions.sort_by_key(|q| q.id);
        Ok(Self { questions, grading })
    }

    pub fn questions(&self) -> &[ChecklistQuestion] {
        &self.questions
    }

    pub fn grading(&self) -> &GradeThresholds {
        &self.grading
    }

    /// Sum of all question weights.
    pub fn max_score(&self) -> u32 {
        self.questions.iter().map(|q| q.weight).sum()
    }

    /// Score `answers` for `model`.
    pub fn apply(&self, model: &str, answers: &AnswerSet) -> GovernanceResult<ChecklistResult> {
        let max_score = self.max_score();
        if max_score == 0 {
            return Err(GovernanceError::EmptyChecklist);
        }

        for (id, _) in answers.iter() {
            if !self.questions.iter().any(|q| q.id == id) {
                log::warn!("{model:?}: ignoring answer for unknown question {id}");
            }
        }

        let full_results: Vec<QuestionOutcome> = self
            .questions
            .iter()
            .map(|q| {
                let answer = answers.resolve(q.id);
                QuestionOutcome {
                    id: q.id,
                    question: q.question.clone(),
                    pillar: q.pillar,
                    weight: q.weight,
                    answer,
                    points_earned: f64::from(q.weight) * answer.credit(),
                }
            })
            .collect();

        let raw_score: f64 = full_results.iter().map(|r| r.points_earned).sum();
        let percentage = ratio_percent(raw_score, f64::from(max_score));
        let grade = Grade::from_percentage(percentage, &self.grading);

        let gaps_details: Vec<Gap> = full_results
            .iter()
            .filter(|r| r.answer != Answer::Yes)
            .map(|r| Gap {
                id: r.id,
                pillar: r.pillar,
                question: r.question.clone(),
            })
            .collect();

        log::debug!(
            "checklist {model:?}: {raw_score}/{max_score} ({percentage:.2}%) grade {grade}, {} gaps",
            gaps_details.len()
        );

        Ok(ChecklistResult {
            model: model.to_string(),
            raw_score,
            max_score,
            percentage,
            grade,
            gaps_count: gaps_details.len(),
            gaps_details,
            full_results,
        })
    }

    /// Parse raw string answers (fail-fast on bad values), then score.
    pub fn apply_raw(
        &self,
        model: &str,
        raw: &BTreeMap<u32, String>,
    ) -> GovernanceResult<ChecklistResult> {
        let answers = AnswerSet::from_raw(raw.iter().map(|(&id, v)| (id, v.as_str())))?;
        self.apply(model, &answers)
    }
}
