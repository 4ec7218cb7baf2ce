// ─────────────────────────────────────────────────────────────────────
// RiskGate: Model Governance Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Data model, configuration, and error hierarchy shared by the
//! RiskGate tiering and checklist engines.

pub mod checklist;
pub mod config;
pub mod error;
pub mod profile;
pub mod score;

pub use checklist::{
    default_checklist, Answer, AnswerSet, ChecklistQuestion, Pillar, BIAS_TESTING_QUESTION_ID,
};
pub use config::{
    FinancialBand, GovernanceConfig, GradeThresholds, GuardrailConfig, GuardrailPolicy,
    TierRequirements, TieringConfig,
};
pub use error::{GovernanceError, GovernanceResult};
pub use profile::{AutonomyLevel, DecisionImpact, ModelProfile, ProfileRecord, RegulatoryExposure};
pub use score::{
    ChecklistResult, DeploymentDecision, Gap, Grade, GuardrailOutcome, PillarCoverage,
    PillarScore, QuestionOutcome, Tier, TierBreakdown, TierResult,
};
