// ─────────────────────────────────────────────────────────────────────
// RiskGate: Reference Content
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Static governance reference material: the human-oversight policy,
//! the regulatory control map, the policy document template, and the
//! synthetic sample catalog. Nothing here feeds the scoring engines.

pub mod catalog;
pub mod oversight;
pub mod policy_doc;
pub mod regulatory;

pub use catalog::{
    credit_default_answers, sample_answers, sample_catalog, trading_agent_answers,
    CREDIT_DEFAULT, TRADING_AGENT,
};
pub use oversight::{find_level, OversightLevel, OversightReport, OVERSIGHT_LEVELS};
pub use policy_doc::{PolicyDocument, PolicySection, GOVERNANCE_POLICY};
pub use regulatory::{Regulation, RegulatoryReport, REGULATORY_MAP};
