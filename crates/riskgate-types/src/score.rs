// ─────────────────────────────────────────────────────────────────────
// RiskGate: Score Types
// ─────────────────────────────────────────────────────────────────────

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::checklist::{Answer, Pillar};
use crate::config::GradeThresholds;
use crate::error::GovernanceError;

/// `part / whole * 100`, or 0.0 when `whole` is zero.
#[inline]
pub fn ratio_percent(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    part / whole * 100.0
}

/// Governance-burden tier. Tier 1 carries the heaviest scrutiny.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Tier {
    One,
    Two,
    Three,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Self::One, Self::Two, Self::Three];

    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> Self {
        tier.number()
    }
}

impl TryFrom<u8> for Tier {
    type Error = GovernanceError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(GovernanceError::Validation(format!(
                "tier must be 1, 2 or 3, got {other}"
            ))),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tier {}", self.number())
    }
}

/// Points contributed by each tiering factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBreakdown {
    pub impact: u32,
    pub autonomy: u32,
    pub regulatory: u32,
    pub client_facing: u32,
    pub financial: u32,
}

impl TierBreakdown {
    pub fn total(&self) -> u32 {
        self.impact + self.autonomy + self.regulatory + self.client_facing + self.financial
    }
}

/// Outcome of tiering one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierResult {
    pub model: String,
    pub score: u32,
    pub tier: Tier,
    pub governance_requirement: String,
    pub breakdown: TierBreakdown,
}

/// Letter grade for checklist coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    F,
}

impl Grade {
    pub const ALL: [Grade; 4] = [Self::A, Self::B, Self::C, Self::F];

    /// Closed lower bounds, compared on the unrounded percentage.
    pub fn from_percentage(pct: f64, thresholds: &GradeThresholds) -> Self {
        if pct >= thresholds.a {
            Self::A
        } else if pct >= thresholds.b {
            Self::B
        } else if pct >= thresholds.c {
            Self::C
        } else {
            Self::F
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-question scoring trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOutcome {
    pub id: u32,
    pub question: String,
    pub pillar: Pillar,
    pub weight: u32,
    pub answer: Answer,
    pub points_earned: f64,
}

/// A control whose answer is not "yes".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gap {
    pub id: u32,
    pub pillar: Pillar,
    pub question: String,
}

/// Outcome of scoring one model against the checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistResult {
    pub model: String,
    pub raw_score: f64,
    pub max_score: u32,
    pub percentage: f64,
    pub grade: Grade,
    pub gaps_count: usize,
    /// Ascending question id.
    pub gaps_details: Vec<Gap>,
    pub full_results: Vec<QuestionOutcome>,
}

impl ChecklistResult {
    /// Resolved answer for `id`, if the question is on the checklist.
    pub fn answer_for(&self, id: u32) -> Option<Answer> {
        self.full_results
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.answer)
    }

    pub fn yes_count(&self) -> usize {
        self.full_results
            .iter()
            .filter(|r| r.answer == Answer::Yes)
            .count()
    }
}

/// Earned versus available weight for one pillar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillarScore {
    pub earned: f64,
    pub max: f64,
    pub percentage: f64,
    pub question_count: usize,
}

/// Coverage per pillar, in [`Pillar::ALL`] order.
pub type PillarCoverage = BTreeMap<Pillar, PillarScore>;

/// Recommended deployment decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentDecision {
    BlockedByGuardrail,
    DeployableWithControls,
    Deployable,
    DeployableWithRemediationPlan,
    NotProductionReady,
    Blocked,
}

impl DeploymentDecision {
    pub fn label(self) -> &'static str {
        match self {
            Self::BlockedByGuardrail => "BLOCKED pending remediation (guardrail triggered)",
            Self::DeployableWithControls => "Deployable with controls",
            Self::Deployable => "Deployable",
            Self::DeployableWithRemediationPlan => "Deployable with remediation plan",
            Self::NotProductionReady => "Not production-ready",
            Self::Blocked => "BLOCKED pending remediation",
        }
    }

    /// Committee wording, including the conditions attached to the decision.
    pub fn detail(self) -> &'static str {
        match self {
            Self::BlockedByGuardrail => "BLOCKED pending remediation (guardrail triggered)",
            Self::DeployableWithControls => {
                "Deployable with controls (committee sign-off + monitoring + evidence pack required)"
            }
            Self::Deployable => "Deployable (subject to standard monitoring + documentation)",
            Self::DeployableWithRemediationPlan => {
                "Deployable with remediation plan and defined owners"
            }
            Self::NotProductionReady => "Not production-ready without remediation",
            Self::Blocked => "BLOCKED pending remediation",
        }
    }

    pub fn is_blocked(self) -> bool {
        matches!(self, Self::BlockedByGuardrail | Self::Blocked)
    }
}

impl fmt::Display for DeploymentDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decision plus the hard stops that produced it (empty when none fired).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardrailOutcome {
    pub decision: DeploymentDecision,
    pub hard_stops: Vec<String>,
}
