// src/core/rules/host_rules.rs
//
// Heuristics that look only at the shape of the hostname: raw IP literals,
// abused TLDs, hyphen stuffing, subdomain nesting, and non-ASCII characters.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::knowledge_base::SUSPICIOUS_TLDS;
use crate::core::models::{DecomposedUrl, Severity, ThreatFinding};

/// Four dot-separated digit groups, anchored. Deliberately no octet-range
/// validation; the pattern is linear-time so pathological inputs cannot
/// trigger backtracking blowup.
static IPV4_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+\.\d+$").expect("valid literal pattern"));

/// Rule 1: the host is a raw IP address instead of a domain name.
pub fn ip_address(parts: &DecomposedUrl) -> Option<ThreatFinding> {
    if !IPV4_SHAPE.is_match(&parts.hostname) {
        return None;
    }
    Some(ThreatFinding::new(
        "ip-address",
        "IP Address Used",
        "URL uses a raw IP address instead of a domain name - a common phishing tactic to evade detection.",
        Severity::Critical,
        30,
    ))
}

/// Rule 2: the TLD belongs to the fixed list of frequently abused TLDs.
pub fn suspicious_tld(parts: &DecomposedUrl) -> Option<ThreatFinding> {
    let tld = parts.tld.to_lowercase();
    if !SUSPICIOUS_TLDS.contains(&tld.as_str()) {
        return None;
    }
    Some(ThreatFinding::new(
        "suspicious-tld",
        format!("Suspicious TLD (.{tld})"),
        format!("The TLD \".{tld}\" is frequently associated with phishing and spam domains."),
        Severity::High,
        20,
    ))
}

/// Rule 5: hyphen count in the hostname, two mutually exclusive tiers.
pub fn hyphens(parts: &DecomposedUrl) -> Option<ThreatFinding> {
    let count = parts.hostname.matches('-').count();
    if count >= 3 {
        Some(ThreatFinding::new(
            "hyphens",
            "Excessive Hyphens",
            format!(
                "Domain contains {count} hyphens - often used to mimic legitimate domains (e.g., \"paypal-secure-login.com\")."
            ),
            Severity::High,
            18,
        ))
    } else if count >= 1 {
        Some(ThreatFinding::new(
            "hyphens",
            "Hyphens in Domain",
            format!("Domain contains {count} hyphen(s) - can be used to impersonate legitimate sites."),
            Severity::Low,
            5,
        ))
    } else {
        None
    }
}

/// Rule 9: three or more levels of subdomain nesting.
pub fn subdomain_abuse(parts: &DecomposedUrl) -> Option<ThreatFinding> {
    let depth = if parts.subdomain_chain.is_empty() {
        0
    } else {
        parts.subdomain_chain.split('.').count()
    };
    if depth < 3 {
        return None;
    }
    Some(ThreatFinding::new(
        "subdomain-abuse",
        "Deep Subdomain Nesting",
        format!("{depth} levels of subdomains detected - often used to disguise the real domain."),
        Severity::High,
        18,
    ))
}

/// Rule 12: any character outside 7-bit ASCII in the hostname (possible IDN
/// homograph). The parser punycodes well-formed IDN hosts, so in practice
/// this catches hosts that slipped through in non-ASCII form.
pub fn homograph(parts: &DecomposedUrl) -> Option<ThreatFinding> {
    if parts.hostname.chars().all(|c| c.is_ascii()) {
        return None;
    }
    Some(ThreatFinding::new(
        "homograph",
        "Homograph Attack Possible",
        "Domain contains non-ASCII characters that could visually impersonate a legitimate domain (IDN homograph attack).",
        Severity::Critical,
        30,
    ))
}
