// ─────────────────────────────────────────────────────────────────────
// RiskGate: Model Profile Types
// ─────────────────────────────────────────────────────────────────────
//! Risk attributes of a model submitted for tiering.
//!
//! Raw records (strings, as read from JSON or the command line) become
//! typed profiles through [`ModelProfile::try_from`]; an unrecognized
//! member is an `InvalidProfile` error, never a silent zero.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GovernanceError, GovernanceResult};

/// How directly the model's output turns into an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionImpact {
    Informational,
    Advisory,
    Recommendation,
    AutomatedDecision,
    AutonomousAction,
}

impl DecisionImpact {
    pub const FIELD: &'static str = "decision_impact";

    pub const ALL: [DecisionImpact; 5] = [
        Self::Informational,
        Self::Advisory,
        Self::Recommendation,
        Self::AutomatedDecision,
        Self::AutonomousAction,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Informational => "informational",
            Self::Advisory => "advisory",
            Self::Recommendation => "recommendation",
            Self::AutomatedDecision => "automated_decision",
            Self::AutonomousAction => "autonomous_action",
        }
    }
}

/// Where the human sits relative to the model's decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutonomyLevel {
    HumanExecutes,
    HumanApproves,
    HumanMonitors,
    HumanReviewsAfter,
    FullyAutonomous,
}

impl AutonomyLevel {
    pub const FIELD: &'static str = "autonomy_level";

    pub const ALL: [AutonomyLevel; 5] = [
        Self::HumanExecutes,
        Self::HumanApproves,
        Self::HumanMonitors,
        Self::HumanReviewsAfter,
        Self::FullyAutonomous,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::HumanExecutes => "human_executes",
            Self::HumanApproves => "human_approves",
            Self::HumanMonitors => "human_monitors",
            Self::HumanReviewsAfter => "human_reviews_after",
            Self::FullyAutonomous => "fully_autonomous",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegulatoryExposure {
    None,
    General,
    SectorSpecific,
    HighRiskRegulated,
}

impl RegulatoryExposure {
    pub const FIELD: &'static str = "regulatory_exposure";

    pub const ALL: [RegulatoryExposure; 4] = [
        Self::None,
        Self::General,
        Self::SectorSpecific,
        Self::HighRiskRegulated,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::General => "general",
            Self::SectorSpecific => "sector_specific",
            Self::HighRiskRegulated => "high_risk_regulated",
        }
    }
}

impl FromStr for DecisionImpact {
    type Err = GovernanceError;

    fn from_str(s: &str) -> GovernanceResult<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| GovernanceError::invalid_profile(Self::FIELD, s))
    }
}

impl FromStr for AutonomyLevel {
    type Err = GovernanceError;

    fn from_str(s: &str) -> GovernanceResult<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| GovernanceError::invalid_profile(Self::FIELD, s))
    }
}

impl FromStr for RegulatoryExposure {
    type Err = GovernanceError;

    fn from_str(s: &str) -> GovernanceResult<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| GovernanceError::invalid_profile(Self::FIELD, s))
    }
}

impl fmt::Display for DecisionImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AutonomyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RegulatoryExposure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Untyped profile as it arrives from a file or an operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(alias = "model_name")]
    pub name: String,
    pub decision_impact: String,
    pub autonomy_level: String,
    pub regulatory_exposure: String,
    pub client_facing: bool,
    pub financial_impact_usd: f64,
}

/// Typed risk profile consumed by the tiering engine.
///
/// Deserialization goes through [`ProfileRecord`], so a bad member in
/// JSON surfaces as the same `InvalidProfile` message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileRecord")]
pub struct ModelProfile {
    pub name: String,
    pub decision_impact: DecisionImpact,
    pub autonomy_level: AutonomyLevel,
    pub regulatory_exposure: RegulatoryExposure,
    pub client_facing: bool,
    pub financial_impact_usd: f64,
}

impl ModelProfile {
    /// Financial impact must be a finite, non-negative amount.
    pub fn validate(&self) -> GovernanceResult<()> {
        let usd = self.financial_impact_usd;
        if !usd.is_finite() || usd < 0.0 {
            return Err(GovernanceError::invalid_profile(
                "financial_impact_usd",
                usd.to_string(),
            ));
        }
        Ok(())
    }
}

impl TryFrom<ProfileRecord> for ModelProfile {
    type Error = GovernanceError;

    fn try_from(record: ProfileRecord) -> GovernanceResult<Self> {
        let profile = Self {
            decision_impact: record.decision_impact.parse()?,
            autonomy_level: record.autonomy_level.parse()?,
            regulatory_exposure: record.regulatory_exposure.parse()?,
            client_facing: record.client_facing,
            financial_impact_usd: record.financial_impact_usd,
            name: record.name,
        };
        profile.validate()?;
        Ok(profile)
    }
}

impl From<&ModelProfile> for ProfileRecord {
    fn from(profile: &ModelProfile) -> Self {
        Self {
            name: profile.name.clone(),
            decision_impact: profile.decision_impact.to_string(),
            autonomy_level: profile.autonomy_level.to_string(),
            regulatory_exposure: profile.regulatory_exposure.to_string(),
            client_facing: profile.client_facing,
            financial_impact_usd: profile.financial_impact_usd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProfileRecord {
        ProfileRecord {
            name: "Credit Default XGBoost".into(),
            decision_impact: "automated_decision".into(),
            autonomy_level: "human_approves".into(),
            regulatory_exposure: "high_risk_regulated".into(),
            client_facing: true,
            financial_impact_usd: 50_000_000.0,
        }
    }

    #[test]
    fn test_parse_every_member() {
        for v in DecisionImpact::ALL {
            assert_eq!(v.as_str().parse::<DecisionImpact>().unwrap(), v);
        }
        for v in AutonomyLevel::ALL {
            assert_eq!(v.as_str().parse::<AutonomyLevel>().unwrap(), v);
        }
        for v in RegulatoryExposure::ALL {
            assert_eq!(v.as_str().parse::<RegulatoryExposure>().unwrap(), v);
        }
    }

    #[test]
    fn test_unknown_member_names_field() {
        let err = "semi_autonomous".parse::<AutonomyLevel>().unwrap_err();
        assert_eq!(
            err,
            GovernanceError::InvalidProfile {
                field: "autonomy_level",
                value: "semi_autonomous".into()
            }
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Advisory".parse::<DecisionImpact>().is_err());
    }

    #[test]
    fn test_record_converts() {
        let profile = ModelProfile::try_from(record()).unwrap();
        assert_eq!(profile.decision_impact, DecisionImpact::AutomatedDecision);
        assert_eq!(profile.autonomy_level, AutonomyLevel::HumanApproves);
        assert_eq!(profile.regulatory_exposure, RegulatoryExposure::HighRiskRegulated);
    }

    #[test]
    fn test_record_bad_regulatory() {
        let mut r = record();
        r.regulatory_exposure = "offshore".into();
        let err = ModelProfile::try_from(r).unwrap_err();
        assert!(matches!(
            err,
            GovernanceError::InvalidProfile { field: "regulatory_exposure", .. }
        ));
    }

    #[test]
    fn test_negative_financial_impact_rejected() {
        let mut r = record();
        r.financial_impact_usd = -1.0;
        let err = ModelProfile::try_from(r).unwrap_err();
        assert!(matches!(
            err,
            GovernanceError::InvalidProfile { field: "financial_impact_usd", .. }
        ));
    }

    #[test]
    fn test_nan_financial_impact_rejected() {
        let mut profile = ModelProfile::try_from(record()).unwrap();
        profile.financial_impact_usd = f64::NAN;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_json_uses_model_name_alias() {
        let json = r#"{
            "model_name": "ESG Research Agent",
            "decision_impact": "advisory",
            "autonomy_level": "human_executes",
            "regulatory_exposure": "general",
            "client_facing": false,
            "financial_impact_usd": 0
        }"#;
        let profile: ModelProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "ESG Research Agent");
    }

    #[test]
    fn test_json_bad_member_reports_invalid_profile() {
        let json = r#"{
            "name": "x",
            "decision_impact": "oracle",
            "autonomy_level": "human_executes",
            "regulatory_exposure": "general",
            "client_facing": false,
            "financial_impact_usd": 0
        }"#;
        let err = serde_json::from_str::<ModelProfile>(json).unwrap_err();
        assert!(err.to_string().contains("decision_impact"));
        assert!(err.to_string().contains("oracle"));
    }

    #[test]
    fn test_json_round_trip() {
        let profile = ModelProfile::try_from(record()).unwrap();
        let json = serde_json::to_string(&profile).unwrap();
        let back: ModelProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
