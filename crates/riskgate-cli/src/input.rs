// ─────────────────────────────────────────────────────────────────────
// RiskGate: CLI Input Loading
// ─────────────────────────────────────────────────────────────────────

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use riskgate_types::{AnswerSet, GovernanceConfig, GuardrailPolicy, ModelProfile};

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Config from `path` (or the defaults), with an optional policy override.
pub fn load_config(path: Option<&Path>, policy: Option<GuardrailPolicy>) -> Result<GovernanceConfig> {
    let mut config = match path {
        Some(p) => GovernanceConfig::from_json(&read(p)?)
            .with_context(|| format!("invalid config {}", p.display()))?,
        None => GovernanceConfig::default(),
    };
    if let Some(policy) = policy {
        config.guardrail.policy = policy;
        config.validate().context("guardrail policy override")?;
    }
    Ok(config)
}

/// Profiles from a JSON array, or the sample catalog.
pub fn load_profiles(path: Option<&Path>) -> Result<Vec<ModelProfile>> {
    match path {
        Some(p) => serde_json::from_str(&read(p)?)
            .with_context(|| format!("invalid model profiles in {}", p.display())),
        None => Ok(riskgate_reference::sample_catalog()),
    }
}

/// Answers from a JSON object of question id -> answer string.
pub fn load_answers(path: &Path) -> Result<AnswerSet> {
    serde_json::from_str(&read(path)?)
        .with_context(|| format!("invalid answers in {}", path.display()))
}

/// Split `ID=VALUE` into its parts.
pub fn parse_override(arg: &str) -> Result<(u32, String)> {
    let (id, value) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("expected ID=VALUE, got `{arg}`"))?;
    let id = id
        .trim()
        .parse()
        .with_context(|| format!("invalid question id in `{arg}`"))?;
    Ok((id, value.trim().to_string()))
}

/// Apply `ID=VALUE` overrides on top of `base`.
pub fn apply_overrides(mut base: AnswerSet, overrides: &[String]) -> Result<AnswerSet> {
    let parsed = overrides
        .iter()
        .map(|o| parse_override(o))
        .collect::<Result<Vec<_>>>()?;
    for (id, answer) in AnswerSet::from_raw(parsed)?.iter() {
        base.insert(id, answer);
    }
    Ok(base)
}

/// Per-model answers from a JSON object of model name -> answer object,
/// ordered by each model's position in `profiles`.
pub fn load_portfolio_answers(
    path: &Path,
    profiles: &[ModelProfile],
) -> Result<Vec<(String, AnswerSet)>> {
    let raw: BTreeMap<String, AnswerSet> = serde_json::from_str(&read(path)?)
        .with_context(|| format!("invalid portfolio answers in {}", path.display()))?;
    let mut sets: Vec<(String, AnswerSet)> = raw.into_iter().collect();
    sets.sort_by_key(|(model, _)| {
        profiles
            .iter()
            .position(|p| &p.name == model)
            .unwrap_or(usize::MAX)
    });
    Ok(sets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskgate_types::Answer;

    #[test]
    fn test_parse_override() {
        assert_eq!(parse_override("2=yes").unwrap(), (2, "yes".to_string()));
        assert_eq!(parse_override(" 10 = no ").unwrap(), (10, "no".to_string()));
        assert!(parse_override("2yes").is_err());
        assert!(parse_override("x=yes").is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let base = AnswerSet::uniform(1..=3, Answer::Yes);
        let merged = apply_overrides(base, &["2=no".into(), "4=partial".into()]).unwrap();
        assert_eq!(merged.get(2), Some(Answer::No));
        assert_eq!(merged.get(4), Some(Answer::Partial));
        assert_eq!(merged.len(), 4);
        assert!(apply_overrides(AnswerSet::new(), &["1=Yes".into()]).is_err());
    }

    #[test]
    fn test_policy_override() {
        let config = load_config(None, Some(GuardrailPolicy::AnyGapBlocksTier1)).unwrap();
        assert_eq!(config.guardrail.policy, GuardrailPolicy::AnyGapBlocksTier1);
    }

    #[test]
    fn test_default_profiles() {
        assert_eq!(load_profiles(None).unwrap().len(), 6);
    }
}
