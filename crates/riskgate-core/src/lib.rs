// ─────────────────────────────────────────────────────────────────────
// RiskGate: Governance Scoring Core
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Risk tiering, checklist scoring, pillar coverage, and deployment
//! guardrails for AI models awaiting governance sign-off.
//!
//! # Invariants
//!
//! 1. **Scoring is pure**: every engine is a deterministic function of
//!    its validated config and inputs. Only [`EvaluationLedger`] holds
//!    state, and it is owned by the caller.
//!
//! 2. **The guardrail dominates the grade**: a Tier 1 model that fails
//!    the critical control is blocked even at grade A.
//!
//! 3. **Coverage is not deployability**: [`aggregate_by_pillar`] is a
//!    diagnostic and never feeds the deployment decision.

pub mod checklist;
pub mod engine;
pub mod guardrail;
pub mod ledger;
pub mod pillar;
pub mod portfolio;
pub mod tiering;

pub use checklist::ChecklistEngine;
pub use engine::GovernanceEngine;
pub use guardrail::GuardrailEvaluator;
pub use ledger::{EvaluationLedger, EvaluationRecord};
pub use pillar::{aggregate_by_pillar, weakest_pillar};
pub use portfolio::{PortfolioAssessment, PortfolioGap, PortfolioSummary, SummaryRow};
pub use tiering::TieringEngine;
