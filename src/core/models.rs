// src/core/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

// --- Core Data Models ---

/// Severity of a single finding. The ordinal rank drives the final sort of
/// the findings list (critical first, info last).
#[derive(Debug, Clone, Copy, Display, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    /// Sort rank: critical=0 .. info=4. Findings of equal rank keep their
    /// rule-evaluation order (the sort is stable).
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
            Severity::Info => 4,
        }
    }
}

/// Discrete classification of the composite risk score.
#[derive(Debug, Clone, Copy, Display, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
    Safe,
}

impl RiskLevel {
    /// Maps a capped risk score to its level. Thresholds are evaluated
    /// high-to-low, first match wins.
    pub fn from_score(score: u8) -> Self {
        match score {
            75..=u8::MAX => RiskLevel::Critical,
            50..=74 => RiskLevel::High,
            30..=49 => RiskLevel::Medium,
            10..=29 => RiskLevel::Low,
            _ => RiskLevel::Safe,
        }
    }

    /// The gauge caption shown next to the score in reports.
    pub fn gauge_label(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "CRITICAL",
            RiskLevel::High => "HIGH RISK",
            RiskLevel::Medium => "MEDIUM RISK",
            RiskLevel::Low => "LOW RISK",
            RiskLevel::Safe => "SAFE",
        }
    }
}

/// One emitted result of a single detection rule. Immutable once created;
/// `label` and `description` may embed rule-specific detail (the offending
/// TLD, matched keywords, a port number).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatFinding {
    pub id: String,
    pub label: String,
    pub description: String,
    pub severity: Severity,
    pub score: u8,
}

impl ThreatFinding {
    pub fn new(
        id: &str,
        label: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
        score: u8,
    ) -> Self {
        Self {
            id: id.to_string(),
            label: label.into(),
            description: description.into(),
            severity,
            score,
        }
    }
}

/// Structural breakdown of a parsed URL, produced once per analysis and read
/// by the rule battery. Hostname and derived labels are lower-cased.
#[derive(Debug, Clone)]
pub struct DecomposedUrl {
    /// Original input text, untouched.
    pub raw_input: String,
    /// Parsed scheme ("https" when the input carried no scheme prefix).
    pub scheme: String,
    pub hostname: String,
    /// Last dot-separated hostname label; the whole hostname if it has no dot.
    pub tld: String,
    /// Second-to-last label (the registrable-looking name); empty with fewer
    /// than two labels.
    pub domain_label: String,
    /// Dot-joined labels preceding `domain_label`; empty with two or fewer
    /// labels total.
    pub subdomain_chain: String,
    /// Explicit port, if the URL spells one out. Scheme-default ports
    /// (443/80) are elided by the parser and show up as `None`.
    pub port: Option<String>,
}

/// The sole output of the engine: echoed input, capped composite score, its
/// classification, and the severity-sorted findings. `analyzed_at` records
/// wall-clock time and takes no part in the scored logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub url: String,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub findings: Vec<ThreatFinding>,
    pub analyzed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ranks_are_strictly_increasing() {
        let order = [
            Severity::Critical,
            Severity::High,
            Severity::Medium,
            Severity::Low,
            Severity::Info,
        ];
        for pair in order.windows(2) {
            assert!(pair[0].rank() < pair[1].rank());
        }
    }

    #[test]
    fn risk_level_thresholds() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Safe);
        assert_eq!(RiskLevel::from_score(9), RiskLevel::Safe);
        assert_eq!(RiskLevel::from_score(10), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(29), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(30), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(49), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(50), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(74), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(75), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::Critical);
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(serde_json::to_string(&RiskLevel::Safe).unwrap(), "\"safe\"");
    }
}
