// ─────────────────────────────────────────────────────────────────────
// RiskGate: Regulatory Mapping
// ─────────────────────────────────────────────────────────────────────
//! Regulations in scope and the control answering each requirement.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Regulation {
    pub name: &'static str,
    pub requires: &'static [&'static str],
    /// Paired by position with `requires`.
    pub controls: &'static [&'static str],
}

impl Regulation {
    /// Requirement/control pairs. Unpaired trailing entries are dropped.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.requires.iter().copied().zip(self.controls.iter().copied())
    }
}

pub const REGULATORY_MAP: [Regulation; 4] = [
    Regulation {
        name: "SR 11-7 (US Banking)",
        requires: &[
            "Model documentation",
            "Independent validation",
            "Ongoing monitoring",
            "Effective challenge",
        ],
        controls: &[
            "Independent validation (checklist Q9)",
            "Stress testing (checklist Q5)",
            "Decision audit log (checklist Q10)",
            "Tiered governance",
        ],
    },
    Regulation {
        name: "EU AI Act (High-Risk)",
        requires: &[
            "Transparency",
            "Human oversight",
            "Bias testing",
            "Automatic logging",
            "Documentation",
        ],
        controls: &[
            "Explainability (SHAP/LIME/surrogate tree)",
            "Oversight policy",
            "Fairness testing (checklist Q2)",
            "Decision audit log",
            "Governance policy document",
        ],
    },
    Regulation {
        name: "ECOA (US Fair Lending)",
        requires: &[
            "No discrimination",
            "Adverse action reasons",
            "Fair treatment",
        ],
        controls: &[
            "Fairness metrics",
            "SHAP reason codes",
            "Bias mitigation",
        ],
    },
    Regulation {
        name: "FINRA (Broker-Dealer AI)",
        requires: &[
            "Supervised communications",
            "Customer data privacy",
            "Suitability of AI recommendations",
        ],
        controls: &[
            "Oversight policy",
            "Privacy pillar",
            "Human-in-loop for client-facing",
        ],
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct RegulatoryReport;

impl fmt::Display for RegulatoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "REGULATORY COMPLIANCE MAPPING")?;
        writeln!(f, "{}", "=".repeat(60))?;
        for regulation in &REGULATORY_MAP {
            writeln!(f)?;
            writeln!(f, "{}:", regulation.name)?;
            for (requirement, control) in regulation.pairs() {
                writeln!(f, "  Requirement: {requirement}")?;
                writeln!(f, "  Our Control: {control}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_requirement_has_a_control() {
        for regulation in &REGULATORY_MAP {
            assert_eq!(
                regulation.requires.len(),
                regulation.controls.len(),
                "{}",
                regulation.name
            );
        }
    }

    #[test]
    fn test_render_pairs() {
        let text = RegulatoryReport.to_string();
        assert!(text.contains("ECOA (US Fair Lending):"));
        assert!(text.contains("  Requirement: Adverse action reasons\n  Our Control: SHAP reason codes"));
        assert_eq!(text.matches("Requirement:").count(), 15);
    }
}
