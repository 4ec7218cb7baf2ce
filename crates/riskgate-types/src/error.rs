// ─────────────────────────────────────────────────────────────────────
// RiskGate: Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all RiskGate failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GovernanceError {
    /// A model profile field holds a value outside its enumeration.
    #[error("invalid profile: field `{field}` has unrecognized value `{value}`")]
    InvalidProfile { field: &'static str, value: String },

    /// A checklist answer is not one of yes / partial / no.
    #[error("invalid answer for question {question_id}: `{value}` (expected yes, partial or no)")]
    InvalidAnswer { question_id: u32, value: String },

    /// The checklist has no weight to score against.
    #[error("checklist is empty: maximum score is 0")]
    EmptyChecklist,

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Invalid input batch (duplicate names, unknown models).
    #[error("validation error: {0}")]
    Validation(String),
}

impl GovernanceError {
    pub fn invalid_profile(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidProfile {
            field,
            value: value.into(),
        }
    }
}

pub type GovernanceResult<T> = Result<T, GovernanceError>;
