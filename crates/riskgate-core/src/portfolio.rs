// ─────────────────────────────────────────────────────────────────────
// RiskGate: Portfolio Report
// ─────────────────────────────────────────────────────────────────────
//! Committee decision packet across every evaluated model.
//!
//! The score is control coverage and evidence readiness, not model
//! skill; the summary never ranks models by performance.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use riskgate_types::{DeploymentDecision, Grade, Pillar, Tier};

use crate::ledger::{EvaluationLedger, EvaluationRecord};

/// Overall readiness band from the average checklist percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioAssessment {
    /// Average >= 80%.
    Strong,
    /// Average >= 60%.
    Moderate,
    SignificantGaps,
}

impl PortfolioAssessment {
    pub fn from_average(avg: f64) -> Self {
        if avg >= 80.0 {
            Self::Strong
        } else if avg >= 60.0 {
            Self::Moderate
        } else {
            Self::SignificantGaps
        }
    }

    pub fn describe(self, avg: f64) -> String {
        match self {
            Self::Strong => format!(
                "Portfolio demonstrates strong governance readiness with an average score of {avg:.1}%."
            ),
            Self::Moderate => format!(
                "Portfolio shows moderate governance readiness ({avg:.1}%). Remediation required before deployment."
            ),
            Self::SignificantGaps => format!(
                "Portfolio has significant governance gaps ({avg:.1}%). Substantial remediation needed."
            ),
        }
    }
}

/// One row of the committee summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub model: String,
    pub tier: Option<Tier>,
    pub percentage: f64,
    pub raw_score: f64,
    pub max_score: u32,
    pub grade: Grade,
    pub gaps: usize,
    pub decision: DeploymentDecision,
}

/// A gap attributed to the model it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioGap {
    pub model: String,
    pub question_id: u32,
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_models: usize,
    pub tier_counts: BTreeMap<Tier, usize>,
    pub untiered: usize,
    pub average_percentage: f64,
    pub total_gaps: usize,
    pub grade_counts: BTreeMap<Grade, usize>,
    pub assessment: PortfolioAssessment,
    pub rows: Vec<SummaryRow>,
    /// Pillar order, then submission order within a pillar.
    pub gaps_by_pillar: BTreeMap<Pillar, Vec<PortfolioGap>>,
}

impl PortfolioSummary {
    /// Summarize records in the order given. `None` when empty.
    pub fn from_records(records: &[EvaluationRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let mut tier_counts: BTreeMap<Tier, usize> = Tier::ALL.into_iter().map(|t| (t, 0)).collect();
        let mut grade_counts: BTreeMap<Grade, usize> =
            Grade::ALL.into_iter().map(|g| (g, 0)).collect();
        let mut gaps_by_pillar: BTreeMap<Pillar, Vec<PortfolioGap>> = BTreeMap::new();
        let mut untiered = 0;
        let mut rows = Vec::with_capacity(records.len());

        for record in records {
            match record.tier_level() {
                Some(tier) => *tier_counts.entry(tier).or_insert(0) += 1,
                None => untiered += 1,
            }
            *grade_counts.entry(record.checklist.grade).or_insert(0) += 1;

            for gap in &record.checklist.gaps_details {
                gaps_by_pillar.entry(gap.pillar).or_default().push(PortfolioGap {
                    model: record.model().to_string(),
                    question_id: gap.id,
                    question: gap.question.clone(),
                });
            }

            rows.push(SummaryRow {
                model: record.model().to_string(),
                tier: record.tier_level(),
                percentage: record.checklist.percentage,
                raw_score: record.checklist.raw_score,
                max_score: record.checklist.max_score,
                grade: record.checklist.grade,
                gaps: record.checklist.gaps_count,
                decision: record.outcome.decision,
            });
        }

        let total_models = records.len();
        let average_percentage =
            records.iter().map(|r| r.checklist.percentage).sum::<f64>() / total_models as f64;
        let total_gaps = records.iter().map(|r| r.checklist.gaps_count).sum();

        Some(Self {
            total_models,
            tier_counts,
            untiered,
            average_percentage,
            total_gaps,
            grade_counts,
            assessment: PortfolioAssessment::from_average(average_percentage),
            rows,
            gaps_by_pillar,
        })
    }

    pub fn from_ledger(ledger: &EvaluationLedger) -> Option<Self> {
        Self::from_records(&ledger.records())
    }

    pub fn tier_count(&self, tier: Tier) -> usize {
        self.tier_counts.get(&tier).copied().unwrap_or(0)
    }

    pub fn grade_count(&self, grade: Grade) -> usize {
        self.grade_counts.get(&grade).copied().unwrap_or(0)
    }
}
