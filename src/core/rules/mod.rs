// src/core/rules/mod.rs

// Public interface of the rule battery. Each sub-module groups related
// heuristics; this file runs them in their fixed evaluation order.
pub mod host_rules;
pub mod lexical_rules;
pub mod transport_rules;

use tracing::debug;

use crate::core::models::{DecomposedUrl, ThreatFinding};

/// Runs the full twelve-rule battery against a decomposed URL.
///
/// Rules are independent pure functions; none reads another's output or a
/// running total, and each appends at most one finding. The evaluation order
/// below is fixed because it doubles as the tie-break order when findings of
/// equal severity are sorted later.
///
/// `raw` is the original input string (used for prefix and `@` checks),
/// `raw_lower` its lower-cased form (used for substring matching).
pub fn run_battery(parts: &DecomposedUrl, raw: &str, raw_lower: &str) -> Vec<ThreatFinding> {
    let checks = [
        host_rules::ip_address(parts),
        host_rules::suspicious_tld(parts),
        lexical_rules::brand_misuse(parts, raw_lower),
        lexical_rules::long_url(raw),
        host_rules::hyphens(parts),
        lexical_rules::keywords(raw_lower),
        lexical_rules::at_symbol(raw),
        transport_rules::no_https(parts),
        host_rules::subdomain_abuse(parts),
        transport_rules::unusual_port(parts),
        transport_rules::dangerous_protocol(raw),
        host_rules::homograph(parts),
    ];

    let mut findings = Vec::new();
    for finding in checks.into_iter().flatten() {
        debug!(rule = %finding.id, severity = %finding.severity, score = finding.score, "Rule fired.");
        findings.push(finding);
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::decomposer::decompose;

    fn battery(raw: &str) -> Vec<ThreatFinding> {
        let parts = decompose(raw).expect("test input must decompose");
        run_battery(&parts, raw, &raw.to_lowercase())
    }

    #[test]
    fn clean_url_fires_nothing() {
        assert!(battery("https://google.com").is_empty());
    }

    #[test]
    fn findings_come_out_in_rule_evaluation_order() {
        // Fires suspicious-tld (rule 2), hyphens (rule 5), keywords (rule 6).
        let ids: Vec<String> = battery("https://faceb00k-verify.tk/login?confirm=true")
            .into_iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, ["suspicious-tld", "hyphens", "keywords"]);
    }

    #[test]
    fn each_rule_contributes_at_most_one_finding() {
        // Three abused TLD-ish hits, many keywords, many hyphens: still one
        // finding per rule id.
        let findings = battery("http://secure-login-verify-update.xyz/account?password=1");
        let mut ids: Vec<&str> = findings.iter().map(|f| f.id.as_str()).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(before, ids.len());
    }
}
