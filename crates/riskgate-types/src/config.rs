// ─────────────────────────────────────────────────────────────────────
// RiskGate: Configuration
// ─────────────────────────────────────────────────────────────────────

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::checklist::{default_checklist, ChecklistQuestion, BIAS_TESTING_QUESTION_ID};
use crate::error::{GovernanceError, GovernanceResult};
use crate::profile::{AutonomyLevel, DecisionImpact, RegulatoryExposure};
use crate::score::Tier;

/// Points awarded when financial impact is strictly above `above_usd`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialBand {
    pub above_usd: f64,
    pub points: u32,
}

/// Canned governance requirement per tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRequirements {
    pub tier1: String,
    pub tier2: String,
    pub tier3: String,
}

impl TierRequirements {
    pub fn for_tier(&self, tier: Tier) -> &str {
        match tier {
            Tier::One => &self.tier1,
            Tier::Two => &self.tier2,
            Tier::Three => &self.tier3,
        }
    }
}

impl Default for TierRequirements {
    fn default() -> Self {
        Self {
            tier1: "Full validation + bias + XAI + committee approval + annual review".into(),
            tier2: "Validation + monitoring + manager approval + biennial review".into(),
            tier3: "Documentation + basic testing + self-certification + triennial review".into(),
        }
    }
}

/// Lookup tables and thresholds for the additive tiering rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TieringConfig {
    /// Points per decision impact level.
    /// Default: informational 1, advisory 2, recommendation 3,
    /// automated_decision 4, autonomous_action 5.
    pub decision_impact_points: BTreeMap<DecisionImpact, u32>,

    /// Points per autonomy level.
    /// Default: human_executes 1, human_approves 2, human_monitors 3,
    /// human_reviews_after 4, fully_autonomous 5.
    pub autonomy_points: BTreeMap<AutonomyLevel, u32>,

    /// Points per regulatory exposure.
    /// Default: none 0, general 1, sector_specific 2, high_risk_regulated 3.
    pub regulatory_points: BTreeMap<RegulatoryExposure, u32>,

    /// Points added for client-facing models.
    /// Default: 2.
    pub client_facing_points: u32,

    /// Checked top to bottom; the first band exceeded wins.
    /// Default: > $10M 3, > $1M 2, > $100K 1.
    pub financial_bands: Vec<FinancialBand>,

    /// Tier 1 when score >= this.
    /// Default: 10.
    pub tier1_min_score: u32,

    /// Tier 2 when score >= this (and below `tier1_min_score`).
    /// Default: 6.
    pub tier2_min_score: u32,

    /// Canned governance requirement per tier.
    pub requirements: TierRequirements,
}

impl Default for TieringConfig {
    fn default() -> Self {
        Self {
            decision_impact_points: BTreeMap::from([
                (DecisionImpact::Informational, 1),
                (DecisionImpact::Advisory, 2),
                (DecisionImpact::Recommendation, 3),
                (DecisionImpact::AutomatedDecision, 4),
                (DecisionImpact::AutonomousAction, 5),
            ]),
            autonomy_points: BTreeMap::from([
                (AutonomyLevel::HumanExecutes, 1),
                (AutonomyLevel::HumanApproves, 2),
                (AutonomyLevel::HumanMonitors, 3),
                (AutonomyLevel::HumanReviewsAfter, 4),
                (AutonomyLevel::FullyAutonomous, 5),
            ]),
            regulatory_points: BTreeMap::from([
                (RegulatoryExposure::None, 0),
                (RegulatoryExposure::General, 1),
                (RegulatoryExposure::SectorSpecific, 2),
                (RegulatoryExposure::HighRiskRegulated, 3),
            ]),
            client_facing_points: 2,
            financial_bands: vec![
                FinancialBand { above_usd: 10_000_000.0, points: 3 },
                FinancialBand { above_usd: 1_000_000.0, points: 2 },
                FinancialBand { above_usd: 100_000.0, points: 1 },
            ],
            tier1_min_score: 10,
            tier2_min_score: 6,
            requirements: TierRequirements::default(),
        }
    }
}

fn check_table<K: Ord + Copy + std::fmt::Display>(
    table: &BTreeMap<K, u32>,
    members: &[K],
    field: &str,
) -> GovernanceResult<()> {
    for member in members {
        if !table.contains_key(member) {
            return Err(GovernanceError::Config(format!(
                "{field} table has no points for `{member}`"
            )));
        }
    }
    Ok(())
}

fn max_points<K>(table: &BTreeMap<K, u32>) -> u32 {
    table.values().copied().max().unwrap_or(0)
}

impl TieringConfig {
    /// Highest score any profile can reach, `None` if it overflows `u32`.
    pub fn max_possible_score(&self) -> Option<u32> {
        let financial = self
            .financial_bands
            .iter()
            .map(|b| b.points)
            .max()
            .unwrap_or(0);
        max_points(&self.decision_impact_points)
            .checked_add(max_points(&self.autonomy_points))?
            .checked_add(max_points(&self.regulatory_points))?
            .checked_add(self.client_facing_points)?
            .checked_add(financial)
    }

    pub fn validate(&self) -> GovernanceResult<()> {
        check_table(
            &self.decision_impact_points,
            &DecisionImpact::ALL,
            DecisionImpact::FIELD,
        )?;
        check_table(&self.autonomy_points, &AutonomyLevel::ALL, AutonomyLevel::FIELD)?;
        check_table(
            &self.regulatory_points,
            &RegulatoryExposure::ALL,
            RegulatoryExposure::FIELD,
        )?;

        let mut previous = f64::INFINITY;
        for band in &self.financial_bands {
            if !band.above_usd.is_finite() || band.above_usd < 0.0 {
                return Err(GovernanceError::Config(format!(
                    "financial band threshold must be finite and >= 0, got {}",
                    band.above_usd
                )));
            }
            if band.above_usd >= previous {
                return Err(GovernanceError::Config(
                    "financial bands must be strictly descending".to_string(),
                ));
            }
            previous = band.above_usd;
        }

        if self.max_possible_score().is_none() {
            return Err(GovernanceError::Config(
                "tiering points overflow: the largest possible score exceeds u32".to_string(),
            ));
        }

        if self.tier1_min_score <= self.tier2_min_score {
            return Err(GovernanceError::Config(format!(
                "tier1_min_score ({}) must exceed tier2_min_score ({})",
                self.tier1_min_score, self.tier2_min_score
            )));
        }
        Ok(())
    }
}

/// Closed lower bounds for grades A, B, C. Anything below C is F.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeThresholds {
    /// Grade A at or above this percentage.
    /// Default: 90.0.
    pub a: f64,

    /// Grade B at or above this percentage.
    /// Default: 75.0.
    pub b: f64,

    /// Grade C at or above this percentage.
    /// Default: 60.0.
    pub c: f64,
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self {
            a: 90.0,
            b: 75.0,
            c: 60.0,
        }
    }
}

impl GradeThresholds {
    pub fn validate(&self) -> GovernanceResult<()> {
        let ordered = self.a > self.b && self.b > self.c;
        let bounded = [self.a, self.b, self.c]
            .iter()
            .all(|t| (0.0..=100.0).contains(t));
        if !ordered || !bounded {
            return Err(GovernanceError::Config(format!(
                "grade thresholds must satisfy 100 >= a > b > c >= 0, got a={} b={} c={}",
                self.a, self.b, self.c
            )));
        }
        Ok(())
    }
}

/// Which hard-stop rule guards Tier 1 deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardrailPolicy {
    /// Block Tier 1 when the critical question is not answered "yes".
    #[default]
    CriticalControl,
    /// Block Tier 1 when any checklist gap remains.
    AnyGapBlocksTier1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardrailConfig {
    /// Hard-stop rule for Tier 1.
    /// Default: `critical_control`.
    pub policy: GuardrailPolicy,

    /// Question whose answer gates Tier 1 under `CriticalControl`.
    /// Default: 2 (bias testing).
    pub critical_question_id: u32,
}

impl Default for GuardrailConfig {
    fn default() -> Self {
        Self {
            policy: GuardrailPolicy::CriticalControl,
            critical_question_id: BIAS_TESTING_QUESTION_ID,
        }
    }
}

/// Complete runtime configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernanceConfig {
    pub tiering: TieringConfig,

    /// Weighted checklist.
    /// Default: the ten-question table, total weight 22.
    pub checklist: Vec<ChecklistQuestion>,

    pub grading: GradeThresholds,
    pub guardrail: GuardrailConfig,
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        Self {
            tiering: TieringConfig::default(),
            checklist: default_checklist(),
            grading: GradeThresholds::default(),
            guardrail: GuardrailConfig::default(),
        }
    }
}

/// Question ids unique and positive, weights positive, total weight
/// within `u32`.
pub fn validate_checklist(questions: &[ChecklistQuestion]) -> GovernanceResult<()> {
    let mut seen = BTreeSet::new();
    let mut total: u32 = 0;
    for q in questions {
        if q.id == 0 {
            return Err(GovernanceError::Config(
                "checklist question ids must be positive".to_string(),
            ));
        }
        if !seen.insert(q.id) {
            return Err(GovernanceError::Config(format!(
                "duplicate checklist question id {}",
                q.id
            )));
        }
        if q.weight == 0 {
            return Err(GovernanceError::Config(format!(
                "question {} must have a positive weight",
                q.id
            )));
        }
        total = total.checked_add(q.weight).ok_or_else(|| {
            GovernanceError::Config("checklist weights overflow: total exceeds u32".to_string())
        })?;
    }
    Ok(())
}

impl GovernanceConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> GovernanceResult<()> {
        self.tiering.validate()?;
        validate_checklist(&self.checklist)?;
        self.grading.validate()?;
        if self.guardrail.policy == GuardrailPolicy::CriticalControl
            && !self
                .checklist
                .iter()
                .any(|q| q.id == self.guardrail.critical_question_id)
        {
            return Err(GovernanceError::Config(format!(
                "guardrail critical question {} is not on the checklist",
                self.guardrail.critical_question_id
            )));
        }
        Ok(())
    }

    /// Load from JSON string and validate.
    pub fn from_json(json: &str) -> GovernanceResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| GovernanceError::Config(format!("JSON parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
