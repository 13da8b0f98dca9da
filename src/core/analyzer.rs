// src/core/analyzer.rs

use chrono::Utc;
use tracing::{debug, info};

use crate::core::decomposer;
use crate::core::models::{AnalysisResult, RiskLevel, Severity, ThreatFinding};
use crate::core::rules;

/// Uncapped scores are summed here before clamping to 0..=100; all twelve
/// rules together can reach 265, which does not fit the result's `u8`.
const SCORE_CAP: u32 = 100;

/// Analyzes a URL for phishing indicators and returns the scored verdict.
///
/// This is the engine's sole entry point. It is total over all string
/// inputs: unparsable text (empty strings included) yields the fixed
/// invalid-URL result rather than an error, so callers never need a
/// fallible path around it. Two calls with the same input produce the same
/// score, level, and findings; only `analyzed_at` differs.
pub fn analyze(url: &str) -> AnalysisResult {
    info!(target = %url, "Starting URL analysis.");

    let Some(parts) = decomposer::decompose(url) else {
        debug!("Decomposition failed, returning the invalid-URL result.");
        return AnalysisResult {
            url: url.to_string(),
            risk_score: 0,
            risk_level: RiskLevel::Safe,
            findings: vec![ThreatFinding::new(
                "invalid",
                "Invalid URL",
                "Could not parse the URL",
                Severity::Info,
                0,
            )],
            analyzed_at: Utc::now(),
        };
    };

    let raw_lower = url.to_lowercase();
    let mut findings = rules::run_battery(&parts, url, &raw_lower);

    let total: u32 = findings.iter().map(|f| u32::from(f.score)).sum();
    let risk_score = total.min(SCORE_CAP) as u8;
    let risk_level = RiskLevel::from_score(risk_score);

    if findings.is_empty() {
        findings.push(ThreatFinding::new(
            "clean",
            "No Threats Detected",
            "No heuristic indicators of phishing were found. This does not guarantee safety - always exercise caution.",
            Severity::Info,
            0,
        ));
    }

    // Stable sort: equal-severity findings keep their rule-evaluation order.
    findings.sort_by_key(|f| f.severity.rank());

    info!(
        findings = findings.len(),
        score = risk_score,
        level = %risk_level,
        "URL analysis finished."
    );

    AnalysisResult {
        url: url.to_string(),
        risk_score,
        risk_level,
        findings,
        analyzed_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_short_circuits_to_the_fixed_result() {
        let result = analyze("");
        assert_eq!(result.risk_score, 0);
        assert_eq!(result.risk_level, RiskLevel::Safe);
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].id, "invalid");
        assert_eq!(result.findings[0].severity, Severity::Info);
    }

    #[test]
    fn echoed_url_is_the_unmodified_input() {
        // Not the normalized/decomposed form.
        let result = analyze("ExAmPlE.CoM/Login");
        assert_eq!(result.url, "ExAmPlE.CoM/Login");
    }

    #[test]
    fn clean_placeholder_appears_only_when_nothing_fired() {
        let clean = analyze("https://google.com");
        assert_eq!(clean.findings.len(), 1);
        assert_eq!(clean.findings[0].id, "clean");
        assert_eq!(clean.findings[0].score, 0);

        let dirty = analyze("http://example.com");
        assert!(dirty.findings.iter().all(|f| f.id != "clean"));
    }

    #[test]
    fn score_is_capped_at_one_hundred() {
        // IP host + brand in path + keywords + http + port + @: uncapped sum
        // is well past 100.
        let result =
            analyze("http://0.0.0.0:8081/@paypal-login-secure-verify-update-confirm-account");
        assert_eq!(result.risk_score, 100);
        assert_eq!(result.risk_level, RiskLevel::Critical);
    }
}
