// ─────────────────────────────────────────────────────────────────────
// RiskGate: Deployment Guardrails
// ─────────────────────────────────────────────────────────────────────
//! Deployment decision from tier + checklist grade.
//!
//! Rules are evaluated top to bottom, first match wins:
//!
//! 1. Tier 1 and the hard stop fires -> blocked (guardrail triggered)
//! 2. Tier 1 and grade A or B        -> deployable with controls
//! 3. Grade A                        -> deployable
//! 4. Grade B                        -> deployable with remediation plan
//! 5. Grade C                        -> not production-ready
//! 6. Grade F                        -> blocked
//!
//! The hard stop is independent of the gap list: under the default
//! policy only the critical control (bias testing) can fire it, however
//! high the overall percentage is.
//!
//! Under [`GuardrailPolicy::AnyGapBlocksTier1`] rule 2 is checked before
//! rule 1, and rule 1 fires on any open gap. A Tier 1 model graded A or
//! B therefore stays deployable with controls, and only Tier 1 models
//! graded C or F are blocked by the guardrail.

use riskgate_types::{
    Answer, ChecklistResult, DeploymentDecision, GovernanceError, GovernanceResult, Grade,
    GuardrailConfig, GuardrailOutcome, GuardrailPolicy, Tier, TierResult,
};

#[derive(Debug, Clone, Default)]
pub struct GuardrailEvaluator {
    config: GuardrailConfig,
}

impl GuardrailEvaluator {
    pub fn new(config: GuardrailConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GuardrailConfig {
        &self.config
    }

    /// Hard stops that fire for a Tier 1 model. Empty for other tiers.
    pub fn hard_stops(&self, tier: Option<Tier>, checklist: &ChecklistResult) -> Vec<String> {
        if tier != Some(Tier::One) {
            return Vec::new();
        }
        match self.config.policy {
            GuardrailPolicy::CriticalControl => {
                let id = self.config.critical_question_id;
                let answer = checklist.answer_for(id).unwrap_or(Answer::No);
                if answer == Answer::Yes {
                    return Vec::new();
                }
                let question = checklist
                    .full_results
                    .iter()
                    .find(|r| r.id == id)
                    .map_or("critical control", |r| r.question.as_str());
                vec![format!(
                    "Q{id} ({question}) is '{answer}' for a Tier 1 model: deployment blocker pending remediation"
                )]
            }
            GuardrailPolicy::AnyGapBlocksTier1 => {
                if checklist.gaps_count == 0 || matches!(checklist.grade, Grade::A | Grade::B) {
                    return Vec::new();
                }
                vec![format!(
                    "Tier 1 model has {} open gap(s): deployment blocker pending remediation",
                    checklist.gaps_count
                )]
            }
        }
    }

    /// Decide for a checklist result, with the tier if the model was tiered.
    pub fn evaluate(&self, tier: Option<Tier>, checklist: &ChecklistResult) -> GuardrailOutcome {
        let hard_stops = self.hard_stops(tier, checklist);
        let decision = if !hard_stops.is_empty() {
            log::warn!(
                "guardrail triggered for {:?}: {}",
                checklist.model,
                hard_stops.join("; ")
            );
            DeploymentDecision::BlockedByGuardrail
        } else if tier == Some(Tier::One) && matches!(checklist.grade, Grade::A | Grade::B) {
            DeploymentDecision::DeployableWithControls
        } else {
            match checklist.grade {
                Grade::A => DeploymentDecision::Deployable,
                Grade::B => DeploymentDecision::DeployableWithRemediationPlan,
                Grade::C => DeploymentDecision::NotProductionReady,
                Grade::F => DeploymentDecision::Blocked,
            }
        };
        GuardrailOutcome {
            decision,
            hard_stops,
        }
    }

    /// Decide for a tier result and checklist result of the same model.
    pub fn evaluate_results(
        &self,
        tier: &TierResult,
        checklist: &ChecklistResult,
    ) -> GovernanceResult<GuardrailOutcome> {
        if tier.model != checklist.model {
            return Err(GovernanceError::Validation(format!(
                "tier result for {:?} paired with checklist for {:?}",
                tier.model, checklist.model
            )));
        }
        Ok(self.evaluate(Some(tier.tier), checklist))
    }
}
