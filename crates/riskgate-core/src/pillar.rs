// ─────────────────────────────────────────────────────────────────────
// RiskGate: Pillar Aggregator
// ─────────────────────────────────────────────────────────────────────
//! Per-pillar control coverage, derived from a checklist breakdown.
//! Diagnostic only: coverage shape says nothing about deployability.

use riskgate_types::score::ratio_percent;
use riskgate_types::{Pillar, PillarCoverage, PillarScore, QuestionOutcome};

/// Fold earned points and weights per pillar.
///
/// Every pillar is present in the output. A pillar with no questions
/// reports 0% with `question_count == 0` rather than being omitted.
pub fn aggregate_by_pillar(full_results: &[QuestionOutcome]) -> PillarCoverage {
    let mut coverage: PillarCoverage = Pillar::ALL
        .into_iter()
        .map(|p| {
            (
                p,
                PillarScore {
                    earned: 0.0,
                    max: 0.0,
                    percentage: 0.0,
                    question_count: 0,
                },
            )
        })
        .collect();

    for outcome in full_results {
        if let Some(entry) = coverage.get_mut(&outcome.pillar) {
            entry.earned += outcome.points_earned;
            entry.max += f64::from(outcome.weight);
            entry.question_count += 1;
        }
    }

    for entry in coverage.values_mut() {
        entry.percentage = ratio_percent(entry.earned, entry.max);
    }
    coverage
}

/// Lowest-coverage pillar among those with at least one question.
pub fn weakest_pillar(coverage: &PillarCoverage) -> Option<(Pillar, PillarScore)> {
    coverage
        .iter()
        .filter(|(_, s)| s.question_count > 0)
        .min_by(|(_, a), (_, b)| a.percentage.total_cmp(&b.percentage))
        .map(|(&p, &s)| (p, s))
}
