// ─────────────────────────────────────────────────────────────────────
// RiskGate: Risk Tiering Engine
// ─────────────────────────────────────────────────────────────────────
//! Additive risk rubric that assigns each model a governance tier.
//!
//! `S_total = S_impact + S_autonomy + S_regulatory + S_client + S_financial`.
//! Tier 1 when `S_total >= 10`, Tier 2 when `6 <= S_total < 10`,
//! Tier 3 otherwise. Every point is reported in a [`TierBreakdown`].

use std::collections::{BTreeMap, HashSet};
use std::fmt::Display;

use riskgate_types::{
    GovernanceError, GovernanceResult, ModelProfile, ProfileRecord, Tier, TierBreakdown,
    TierResult, TieringConfig,
};

fn lookup<K: Ord + Display>(
    table: &BTreeMap<K, u32>,
    key: &K,
    field: &str,
) -> GovernanceResult<u32> {
    table.get(key).copied().ok_or_else(|| {
        GovernanceError::Config(format!("{field} table has no points for `{key}`"))
    })
}

/// Stateless tiering engine over a validated [`TieringConfig`].
#[derive(Debug, Clone, Default)]
pub struct TieringEngine {
    config: TieringConfig,
}

impl TieringEngine {
    /// Build an engine, rejecting incomplete or inconsistent tables.
    pub fn new(config: TieringConfig) -> GovernanceResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TieringConfig {
        &self.config
    }

    /// Points from the first band whose threshold is strictly exceeded.
    pub fn financial_points(&self, financial_impact_usd: f64) -> u32 {
        self.config
            .financial_bands
            .iter()
            .find(|band| financial_impact_usd > band.above_usd)
            .map_or(0, |band| band.points)
    }

    /// Map a total score onto exactly one tier.
    pub fn tier_for_score(&self, score: u32) -> Tier {
        if score >= self.config.tier1_min_score {
            Tier::One
        } else if score >= self.config.tier2_min_score {
            Tier::Two
        } else {
            Tier::Three
        }
    }

    /// Per-factor points for a profile.
    pub fn breakdown(&self, profile: &ModelProfile) -> GovernanceResult<TierBreakdown> {
        profile.validate()?;
        Ok(TierBreakdown {
            impact: lookup(
                &self.config.decision_impact_points,
                &profile.decision_impact,
                "decision_impact",
            )?,
            autonomy: lookup(
                &self.config.autonomy_points,
                &profile.autonomy_level,
                "autonomy_level",
            )?,
            regulatory: lookup(
                &self.config.regulatory_points,
                &profile.regulatory_exposure,
                "regulatory_exposure",
            )?,
            client_facing: if profile.client_facing {
                self.config.client_facing_points
            } else {
                0
            },
            financial: self.financial_points(profile.financial_impact_usd),
        })
    }

    /// Score and tier one model.
    pub fn tier_model(&self, profile: &ModelProfile) -> GovernanceResult<TierResult> {
        let breakdown = self.breakdown(profile)?;
        let score = breakdown.total();
        let tier = self.tier_for_score(score);
        log::debug!("tiered {:?}: score={score} {tier}", profile.name);

        Ok(TierResult {
            model: profile.name.clone(),
            score,
            tier,
            governance_requirement: self.config.requirements.for_tier(tier).to_string(),
            breakdown,
        })
    }

    /// Parse a raw record (fail-fast on unknown members) and tier it.
    pub fn tier_record(&self, record: ProfileRecord) -> GovernanceResult<TierResult> {
        let profile = ModelProfile::try_from(record)?;
        self.tier_model(&profile)
    }

    /// Tier a batch in submission order. Model names must be unique.
    pub fn tier_batch(&self, profiles: &[ModelProfile]) -> GovernanceResult<Vec<TierResult>> {
        let mut seen = HashSet::with_capacity(profiles.len());
        for profile in profiles {
            if !seen.insert(profile.name.as_str()) {
                return Err(GovernanceError::Validation(format!(
                    "duplicate model name in batch: {:?}",
                    profile.name
                )));
            }
        }
        profiles.iter().map(|p| self.tier_model(p)).collect()
    }
}
