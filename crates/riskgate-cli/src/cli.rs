// ─────────────────────────────────────────────────────────────────────
// RiskGate: Command Line
// ─────────────────────────────────────────────────────────────────────

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use riskgate_types::GuardrailPolicy;

#[derive(Parser, Debug)]
#[command(
    name = "riskgate",
    version,
    about = "AI model risk tiering and governance readiness scoring"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        help = "Governance config (JSON); defaults to the built-in tables"
    )]
    pub config: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        value_enum,
        help = "Override the Tier 1 guardrail policy from the config"
    )]
    pub guardrail_policy: Option<PolicyArg>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tier every model in the inventory
    Tier {
        /// Model profiles (JSON array); defaults to the sample catalog
        #[arg(long, value_name = "FILE")]
        models: Option<PathBuf>,
    },
    /// Score one model against the ethical checklist
    Checklist {
        #[arg(long)]
        model: String,
        /// Answers (JSON object of question id -> yes|partial|no)
        #[arg(long, value_name = "FILE")]
        answers: Option<PathBuf>,
        /// Single answer override, e.g. `2=yes`; repeatable
        #[arg(long = "answer", value_name = "ID=VALUE")]
        overrides: Vec<String>,
        /// Model profiles used to tier the model
        #[arg(long, value_name = "FILE")]
        models: Option<PathBuf>,
    },
    /// Portfolio report for a set of answered models
    Report {
        /// JSON object of model name -> answers
        #[arg(long, value_name = "FILE")]
        answers: PathBuf,
        #[arg(long, value_name = "FILE")]
        models: Option<PathBuf>,
    },
    /// Human oversight policy
    Oversight,
    /// Regulatory requirement to control mapping
    Regulatory,
    /// Governance policy document template
    Policy,
    /// Run the sample catalog end to end
    Demo,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum PolicyArg {
    /// Block Tier 1 models whose bias testing is not complete
    BiasTesting,
    /// Block Tier 1 models with any open gap
    AnyGap,
}

impl From<PolicyArg> for GuardrailPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::BiasTesting => GuardrailPolicy::CriticalControl,
            PolicyArg::AnyGap => GuardrailPolicy::AnyGapBlocksTier1,
        }
    }
}
