// ─────────────────────────────────────────────────────────────────────
// RiskGate: Governance Engine
// ─────────────────────────────────────────────────────────────────────
//! Composes the tiering, checklist, and guardrail engines over one
//! validated [`GovernanceConfig`].

use riskgate_types::{
    AnswerSet, GovernanceConfig, GovernanceError, GovernanceResult, ModelProfile, PillarCoverage,
    TierResult,
};

use crate::checklist::ChecklistEngine;
use crate::guardrail::GuardrailEvaluator;
use crate::ledger::{EvaluationLedger, EvaluationRecord};
use crate::pillar::aggregate_by_pillar;
use crate::tiering::TieringEngine;

#[derive(Debug, Clone, Default)]
pub struct GovernanceEngine {
    tiering: TieringEngine,
    checklist: ChecklistEngine,
    guardrail: GuardrailEvaluator,
}

impl GovernanceEngine {
    pub fn new(config: GovernanceConfig) -> GovernanceResult<Self> {
        config.validate()?;
        Ok(Self {
            tiering: TieringEngine::new(config.tiering)?,
            checklist: ChecklistEngine::new(config.checklist, config.grading)?,
            guardrail: GuardrailEvaluator::new(config.guardrail),
        })
    }

    pub fn tiering(&self) -> &TieringEngine {
        &self.tiering
    }

    pub fn checklist(&self) -> &ChecklistEngine {
        &self.checklist
    }

    pub fn guardrail(&self) -> &GuardrailEvaluator {
        &self.guardrail
    }

    pub fn tier_model(&self, profile: &ModelProfile) -> GovernanceResult<TierResult> {
        self.tiering.tier_model(profile)
    }

    /// Score the checklist for `model` and decide deployment.
    ///
    /// `tier` must belong to the same model when given.
    pub fn evaluate(
        &self,
        model: &str,
        tier: Option<&TierResult>,
        answers: &AnswerSet,
    ) -> GovernanceResult<EvaluationRecord> {
        let checklist = self.checklist.apply(model, answers)?;
        let outcome = match tier {
            Some(t) => self.guardrail.evaluate_results(t, &checklist)?,
            None => self.guardrail.evaluate(None, &checklist),
        };
        Ok(EvaluationRecord {
            checklist,
            tier: tier.cloned(),
            outcome,
        })
    }

    /// Find the model's tier in `tiers`, evaluate, and store in `ledger`.
    pub fn evaluate_into(
        &self,
        ledger: &EvaluationLedger,
        model: &str,
        tiers: &[TierResult],
        answers: &AnswerSet,
    ) -> GovernanceResult<EvaluationRecord> {
        let tier = tiers.iter().find(|t| t.model == model);
        if tier.is_none() {
            log::warn!("{model:?} has no tier result; guardrail uses grade rules only");
        }
        let record = self.evaluate(model, tier, answers)?;
        ledger.set(record.clone());
        Ok(record)
    }

    /// Pillar coverage for an evaluated record.
    pub fn pillar_coverage(&self, record: &EvaluationRecord) -> PillarCoverage {
        aggregate_by_pillar(&record.checklist.full_results)
    }

    /// Tier every profile, evaluate the named answer sets, and fill a
    /// fresh ledger. Every answered model must be in `profiles`.
    pub fn evaluate_portfolio<'a>(
        &self,
        profiles: &[ModelProfile],
        answers: impl IntoIterator<Item = (&'a str, &'a AnswerSet)>,
    ) -> GovernanceResult<(Vec<TierResult>, EvaluationLedger)> {
        let tiers = self.tiering.tier_batch(profiles)?;
        let ledger = EvaluationLedger::new();
        for (model, set) in answers {
            if !tiers.iter().any(|t| t.model == model) {
                return Err(GovernanceError::Validation(format!(
                    "answers given for unknown model {model:?}"
                )));
            }
            self.evaluate_into(&ledger, model, &tiers, set)?;
        }
        Ok((tiers, ledger))
    }
}
