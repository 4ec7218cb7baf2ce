// ─────────────────────────────────────────────────────────────────────
// RiskGate: Governance Policy Document
// ─────────────────────────────────────────────────────────────────────
//! Template of the AI model governance policy submitted for committee
//! sign-off.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicySection {
    pub number: u8,
    pub title: &'static str,
    pub content: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicyDocument {
    pub title: &'static str,
    pub version: &'static str,
    pub effective_date: &'static str,
    pub approved_by: &'static str,
    pub sections: &'static [PolicySection],
    pub sign_off: &'static [&'static str],
}

const SECTIONS: [PolicySection; 10] = [
    PolicySection {
        number: 1,
        title: "Principles",
        content: "Fairness, Accountability, Transparency, Privacy, Security, Reliability (FATPSR)",
    },
    PolicySection {
        number: 2,
        title: "Scope",
        content: "All AI/ML models used in investment, risk, client service, and operational decisions",
    },
    PolicySection {
        number: 3,
        title: "Tiering",
        content: "3-tier risk classification. Tier determines governance requirements.",
    },
    PolicySection {
        number: 4,
        title: "Lifecycle",
        content: "6-phase lifecycle with controls at each: Data -> Build -> Validate -> Deploy -> Monitor -> Retire",
    },
    PolicySection {
        number: 5,
        title: "Oversight",
        content: "3-level human oversight: in-loop (approve), on-loop (monitor), out-of-loop (review)",
    },
    PolicySection {
        number: 6,
        title: "Bias",
        content: "Mandatory fairness testing for Tier 1 models. Four-fifths rule compliance required before deployment.",
    },
    PolicySection {
        number: 7,
        title: "XAI",
        content: "SHAP required for Tier 1; surrogate tree for executive reporting; LIME for vendor models.",
    },
    PolicySection {
        number: 8,
        title: "Monitoring",
        content: "Continuous audit logging. 4-check anomaly detection. Monthly dashboard review.",
    },
    PolicySection {
        number: 9,
        title: "Incident",
        content: "Detect -> Contain -> Investigate -> Remediate -> Document -> Prevent. Max 24h response for Tier 1.",
    },
    PolicySection {
        number: 10,
        title: "Regulatory",
        content: "Annual regulatory mapping review. Compliance officer signs off on each Tier 1 deployment.",
    },
];

pub const GOVERNANCE_POLICY: PolicyDocument = PolicyDocument {
    title: "AI MODEL GOVERNANCE POLICY",
    version: "1.0",
    effective_date: "2025-03-01",
    approved_by: "AI Governance Committee",
    sections: &SECTIONS,
    sign_off: &[
        "CRO",
        "CTO",
        "CLO",
        "Head of Data Science",
        "AI Governance Officer",
    ],
};

impl fmt::Display for PolicyDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(60);
        writeln!(f, "{rule}")?;
        writeln!(f, "{} v{}", self.title, self.version)?;
        writeln!(f, "Effective: {}", self.effective_date)?;
        writeln!(f, "Approved by: {}", self.approved_by)?;
        writeln!(f, "{rule}")?;
        for section in self.sections {
            writeln!(f)?;
            writeln!(f, "{}. {}:", section.number, section.title.to_uppercase())?;
            writeln!(f, " {}", section.content)?;
        }
        writeln!(f)?;
        writeln!(f, "APPROVED BY:")?;
        for role in self.sign_off {
            writeln!(f, " {role}: ___________")?;
        }
        Ok(())
    }
}
