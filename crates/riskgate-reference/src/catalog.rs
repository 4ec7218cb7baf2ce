// ─────────────────────────────────────────────────────────────────────
// RiskGate: Sample Model Catalog
// ─────────────────────────────────────────────────────────────────────
//! Synthetic model inventory and checklist answers used by the demo.

use riskgate_types::{
    Answer, AnswerSet, AutonomyLevel, DecisionImpact, ModelProfile, RegulatoryExposure,
};

pub const CREDIT_DEFAULT: &str = "Credit Default XGBoost";
pub const TRADING_AGENT: &str = "Trading RL Agent";

const CATALOG: [(&str, DecisionImpact, AutonomyLevel, RegulatoryExposure, bool, f64); 6] = [
    (
        CREDIT_DEFAULT,
        DecisionImpact::AutomatedDecision,
        AutonomyLevel::HumanApproves,
        RegulatoryExposure::HighRiskRegulated,
        true,
        50_000_000.0,
    ),
    (
        TRADING_AGENT,
        DecisionImpact::AutonomousAction,
        AutonomyLevel::HumanMonitors,
        RegulatoryExposure::SectorSpecific,
        false,
        100_000_000.0,
    ),
    (
        "News Sentiment (FinBERT)",
        DecisionImpact::Informational,
        AutonomyLevel::HumanExecutes,
        RegulatoryExposure::None,
        false,
        0.0,
    ),
    (
        "Research Copilot (RAG)",
        DecisionImpact::Advisory,
        AutonomyLevel::HumanExecutes,
        RegulatoryExposure::General,
        true,
        0.0,
    ),
    (
        "Portfolio Rebalancing Agent",
        DecisionImpact::Recommendation,
        AutonomyLevel::HumanApproves,
        RegulatoryExposure::SectorSpecific,
        false,
        50_000_000.0,
    ),
    (
        "ESG Research Agent",
        DecisionImpact::Advisory,
        AutonomyLevel::HumanExecutes,
        RegulatoryExposure::General,
        false,
        0.0,
    ),
];

/// The six-model synthetic inventory.
pub fn sample_catalog() -> Vec<ModelProfile> {
    CATALOG
        .iter()
        .map(
            |&(name, decision_impact, autonomy_level, regulatory_exposure, client_facing, usd)| {
                ModelProfile {
                    name: name.to_string(),
                    decision_impact,
                    autonomy_level,
                    regulatory_exposure,
                    client_facing,
                    financial_impact_usd: usd,
                }
            },
        )
        .collect()
}

fn answers(values: [Answer; 10]) -> AnswerSet {
    (1..=10).zip(values).collect()
}

/// A well-governed model: partial on content labeling and incident response.
pub fn credit_default_answers() -> AnswerSet {
    use Answer::{Partial as P, Yes as Y};
    answers([Y, Y, Y, Y, Y, P, Y, P, Y, Y])
}

/// A model with open gaps, including untested bias.
pub fn trading_agent_answers() -> AnswerSet {
    use Answer::{No as N, Partial as P, Yes as Y};
    answers([Y, N, N, P, P, N, Y, N, N, P])
}

/// Both sample answer sets keyed by model name.
pub fn sample_answers() -> Vec<(&'static str, AnswerSet)> {
    vec![
        (CREDIT_DEFAULT, credit_default_answers()),
        (TRADING_AGENT, trading_agent_answers()),
    ]
}
