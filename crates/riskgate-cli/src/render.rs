// ─────────────────────────────────────────────────────────────────────
// RiskGate: Text Rendering
// ─────────────────────────────────────────────────────────────────────
//! Plain-text views over engine results for the terminal.

use std::fmt;

use riskgate_core::{weakest_pillar, PortfolioSummary};
use riskgate_types::{Answer, ChecklistResult, GuardrailOutcome, PillarCoverage, TierResult};

const QUESTION_WIDTH: usize = 50;

fn rule(f: &mut fmt::Formatter<'_>, ch: char, width: usize) -> fmt::Result {
    writeln!(f, "{}", ch.to_string().repeat(width))
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub struct TierTable<'a>(pub &'a [TierResult]);

impl fmt::Display for TierTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .0
            .iter()
            .map(|t| t.model.chars().count())
            .max()
            .unwrap_or(5)
            .max(5);
        writeln!(f, "MODEL RISK TIERING")?;
        rule(f, '=', 70)?;
        writeln!(f, "{:<width$}  {:>5}  {:<6}  GOVERNANCE REQUIREMENTS", "MODEL", "SCORE", "TIER")?;
        for t in self.0 {
            writeln!(
                f,
                "{:<width$}  {:>5}  {:<6}  {}",
                t.model,
                t.score,
                t.tier.to_string(),
                t.governance_requirement
            )?;
        }
        Ok(())
    }
}

pub struct ChecklistSummary<'a>(pub &'a ChecklistResult);

impl fmt::Display for ChecklistSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        writeln!(f, "ETHICAL CHECKLIST: {}", r.model)?;
        writeln!(
            f,
            "Score: {:.1}/{} ({:.0}%) Grade: {}",
            r.raw_score, r.max_score, r.percentage, r.grade
        )?;
        rule(f, '-', 60)?;
        for q in &r.full_results {
            let status = match q.answer {
                Answer::Yes => "PASS",
                Answer::Partial => "PARTIAL",
                Answer::No => "FAIL",
            };
            writeln!(
                f,
                "  [{status:>7}] Q{}: {}",
                q.id,
                truncate(&q.question, QUESTION_WIDTH)
            )?;
        }
        if !r.gaps_details.is_empty() {
            writeln!(f)?;
            writeln!(f, "GAPS TO ADDRESS ({}):", r.gaps_count)?;
            for g in &r.gaps_details {
                writeln!(f, "  Q{} ({}): {}", g.id, g.pillar, g.question)?;
            }
        }
        Ok(())
    }
}

pub struct CoverageTable<'a>(pub &'a PillarCoverage);

impl fmt::Display for CoverageTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PILLAR COVERAGE")?;
        rule(f, '-', 60)?;
        for (pillar, score) in self.0 {
            if score.question_count == 0 {
                writeln!(f, "  {:<15} no questions", pillar.to_string())?;
            } else {
                writeln!(
                    f,
                    "  {:<15} {:>4.1}/{:<3} ({:.0}%)",
                    pillar.to_string(),
                    score.earned,
                    score.max,
                    score.percentage
                )?;
            }
        }
        if let Some((pillar, score)) = weakest_pillar(self.0) {
            writeln!(f, "  Weakest: {pillar} ({:.0}%)", score.percentage)?;
        }
        Ok(())
    }
}

pub struct DecisionView<'a>(pub &'a GuardrailOutcome);

impl fmt::Display for DecisionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DEPLOYMENT DECISION: {}", self.0.decision.detail())?;
        for stop in &self.0.hard_stops {
            writeln!(f, "  HARD STOP: {stop}")?;
        }
        Ok(())
    }
}

pub struct PortfolioView<'a>(pub &'a PortfolioSummary);

impl fmt::Display for PortfolioView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        writeln!(f, "PORTFOLIO GOVERNANCE REPORT")?;
        rule(f, '=', 70)?;
        writeln!(f, "Models evaluated: {}", s.total_models)?;
        let tiers = s
            .tier_counts
            .iter()
            .map(|(tier, n)| format!("{tier}: {n}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "By tier: {tiers}")?;
        if s.untiered > 0 {
            write!(f, ", untiered: {}", s.untiered)?;
        }
        writeln!(f)?;
        let grades = s
            .grade_counts
            .iter()
            .map(|(grade, n)| format!("{grade}: {n}"))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "By grade: {grades}")?;
        writeln!(f, "Average score: {:.1}%", s.average_percentage)?;
        writeln!(f, "Total gaps: {}", s.total_gaps)?;
        writeln!(f, "{}", s.assessment.describe(s.average_percentage))?;

        writeln!(f)?;
        rule(f, '-', 70)?;
        for row in &s.rows {
            let tier = row.tier.map_or_else(|| "-".to_string(), |t| t.to_string());
            writeln!(
                f,
                "{}  [{tier}]  {:.1}/{} ({:.0}%)  Grade {}  gaps {}  {}",
                row.model,
                row.raw_score,
                row.max_score,
                row.percentage,
                row.grade,
                row.gaps,
                row.decision
            )?;
        }

        if !s.gaps_by_pillar.is_empty() {
            writeln!(f)?;
            writeln!(f, "GAPS BY PILLAR")?;
            for (pillar, gaps) in &s.gaps_by_pillar {
                writeln!(f, "{pillar} ({}):", gaps.len())?;
                for g in gaps {
                    writeln!(f, "  {}: Q{} {}", g.model, g.question_id, g.question)?;
                }
            }
        }
        Ok(())
    }
}
