// ─────────────────────────────────────────────────────────────────────
// RiskGate: Human Oversight Policy
// ─────────────────────────────────────────────────────────────────────
//! The three human-oversight levels and where each applies.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OversightLevel {
    /// Snake-case key, e.g. `human_in_the_loop`.
    pub key: &'static str,
    pub description: &'static str,
    pub applies_to: &'static [&'static str],
    pub example: &'static str,
}

impl OversightLevel {
    /// `human_in_the_loop` -> `HUMAN IN THE LOOP`.
    pub fn heading(&self) -> String {
        self.key.to_uppercase().replace('_', " ")
    }
}

pub const OVERSIGHT_LEVELS: [OversightLevel; 3] = [
    OversightLevel {
        key: "human_in_the_loop",
        description: "Human APPROVES every AI decision before execution",
        applies_to: &[
            "Credit decisions > $100K",
            "Trade recommendations > $1M",
            "Client-facing communications",
            "Regulatory filings",
        ],
        example: "Rebalancing agent: trade ticket requires human sign-off",
    },
    OversightLevel {
        key: "human_on_the_loop",
        description: "AI executes; human MONITORS and can intervene",
        applies_to: &[
            "Algorithmic trading within pre-set limits",
            "Automated screening (flagged items reviewed)",
            "Portfolio risk alerts",
        ],
        example: "Audit logging: anomaly alerts trigger human review",
    },
    OversightLevel {
        key: "human_out_of_the_loop",
        description: "AI operates autonomously; periodic human REVIEW",
        applies_to: &[
            "Internal sentiment dashboards",
            "Data preprocessing",
            "Document classification for non-client use",
        ],
        example: "FinBERT sentiment scoring: runs overnight, PM reviews in morning",
    },
];

pub fn find_level(key: &str) -> Option<&'static OversightLevel> {
    OVERSIGHT_LEVELS.iter().find(|l| l.key == key)
}

/// Text rendering of [`OVERSIGHT_LEVELS`]. Long applies-to lists are
/// cut to their first two entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct OversightReport;

impl fmt::Display for OversightReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HUMAN OVERSIGHT POLICY")?;
        writeln!(f, "{}", "=".repeat(60))?;
        for level in &OVERSIGHT_LEVELS {
            writeln!(f)?;
            writeln!(f, "{}:", level.heading())?;
            writeln!(f, "  Description: {}", level.description)?;
            let shown = level.applies_to.iter().take(2).copied().collect::<Vec<_>>();
            let more = if level.applies_to.len() > 2 { "..." } else { "" };
            writeln!(f, "  Applies to: {}{more}", shown.join(", "))?;
            writeln!(f, "  Example: {}", level.example)?;
        }
        Ok(())
    }
}
