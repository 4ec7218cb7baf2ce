// ─────────────────────────────────────────────────────────────────────
// RiskGate: Command Line Entry Point
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]

mod cli;
mod input;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::json;

use riskgate_core::{GovernanceEngine, PortfolioSummary};
use riskgate_reference::{
    sample_answers, sample_catalog, OversightReport, RegulatoryReport, GOVERNANCE_POLICY,
    OVERSIGHT_LEVELS, REGULATORY_MAP,
};
use riskgate_types::AnswerSet;

use cli::{Cli, Commands};
use render::{ChecklistSummary, CoverageTable, DecisionView, PortfolioView, TierTable};

fn print_json<T: Serialize + ?Sized>(data: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = input::load_config(cli.config.as_deref(), cli.guardrail_policy.map(Into::into))?;
    let engine = GovernanceEngine::new(config).context("invalid governance config")?;

    match cli.command {
        Commands::Tier { models } => {
            let profiles = input::load_profiles(models.as_deref())?;
            let tiers = engine.tiering().tier_batch(&profiles)?;
            if cli.json {
                print_json(&tiers)?;
            } else {
                print!("{}", TierTable(&tiers));
            }
        }
        Commands::Checklist {
            model,
            answers,
            overrides,
            models,
        } => {
            let base = match answers {
                Some(path) => input::load_answers(&path)?,
                None => sample_answers()
                    .into_iter()
                    .find(|(name, _)| *name == model)
                    .map(|(_, set)| set)
                    .unwrap_or_default(),
            };
            let answers = input::apply_overrides(base, &overrides)?;
            let tiers = engine.tiering().tier_batch(&input::load_profiles(models.as_deref())?)?;
            let tier = tiers.iter().find(|t| t.model == model);
            if tier.is_none() {
                log::warn!("{model:?} is not in the model inventory; scoring without a tier");
            }
            let record = engine
                .evaluate(&model, tier, &answers)
                .with_context(|| format!("failed to evaluate {model:?}"))?;
            let coverage = engine.pillar_coverage(&record);
            if cli.json {
                print_json(&json!({
                    "tier": record.tier,
                    "checklist": record.checklist,
                    "pillar_coverage": coverage,
                    "outcome": record.outcome,
                }))?;
            } else {
                if let Some(t) = &record.tier {
                    println!("{} (score {}): {}", t.tier, t.score, t.governance_requirement);
                }
                print!("{}", ChecklistSummary(&record.checklist));
                println!();
                print!("{}", CoverageTable(&coverage));
                println!();
                print!("{}", DecisionView(&record.outcome));
            }
        }
        Commands::Report { answers, models } => {
            let profiles = input::load_profiles(models.as_deref())?;
            let sets = input::load_portfolio_answers(&answers, &profiles)?;
            let (_, ledger) = engine
                .evaluate_portfolio(&profiles, sets.iter().map(|(m, a)| (m.as_str(), a)))
                .context("portfolio evaluation failed")?;
            match PortfolioSummary::from_ledger(&ledger) {
                Some(summary) if cli.json => print_json(&summary)?,
                Some(summary) => print!("{}", PortfolioView(&summary)),
                None => anyhow::bail!("no models were evaluated"),
            }
        }
        Commands::Oversight => {
            if cli.json {
                print_json(&OVERSIGHT_LEVELS)?;
            } else {
                print!("{}", OversightReport);
            }
        }
        Commands::Regulatory => {
            if cli.json {
                print_json(&REGULATORY_MAP)?;
            } else {
                print!("{}", RegulatoryReport);
            }
        }
        Commands::Policy => {
            if cli.json {
                print_json(&GOVERNANCE_POLICY)?;
            } else {
                print!("{}", GOVERNANCE_POLICY);
            }
        }
        Commands::Demo => run_demo(&engine, cli.json)?,
    }
    Ok(())
}

fn run_demo(engine: &GovernanceEngine, json: bool) -> Result<()> {
    let catalog = sample_catalog();
    let samples: Vec<(&str, AnswerSet)> = sample_answers();
    let (tiers, ledger) =
        engine.evaluate_portfolio(&catalog, samples.iter().map(|(m, a)| (*m, a)))?;
    let summary = PortfolioSummary::from_ledger(&ledger);

    if json {
        return print_json(&json!({
            "tiers": tiers,
            "evaluations": ledger.records(),
            "portfolio": summary,
            "oversight": OVERSIGHT_LEVELS,
            "regulatory": REGULATORY_MAP,
            "policy": GOVERNANCE_POLICY,
        }));
    }

    print!("{}", TierTable(&tiers));
    for record in ledger.records() {
        println!();
        print!("{}", ChecklistSummary(&record.checklist));
        print!("{}", DecisionView(&record.outcome));
    }
    if let Some(summary) = &summary {
        println!();
        print!("{}", PortfolioView(summary));
    }
    println!();
    print!("{}", OversightReport);
    println!();
    print!("{}", RegulatoryReport);
    println!();
    print!("{}", GOVERNANCE_POLICY);
    Ok(())
}
