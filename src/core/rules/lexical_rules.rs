// src/core/rules/lexical_rules.rs
//
// Heuristics over the raw input string: brand impersonation, overall length,
// suspicious keywords, and the classic "@" redirection trick. Substring
// matching runs against the full URL, path and query included; that can
// false-positive on coincidental substrings, which is the documented
// behavior of this rule set.

use crate::core::knowledge_base::{BRAND_NAMES, SUSPICIOUS_KEYWORDS};
use crate::core::models::{DecomposedUrl, Severity, ThreatFinding};

/// Rule 3: a known brand name appears somewhere in the URL while the
/// registrable domain label is not that brand. One finding listing every
/// matching brand, not one finding per brand.
pub fn brand_misuse(parts: &DecomposedUrl, raw_lower: &str) -> Option<ThreatFinding> {
    let detected: Vec<&str> = BRAND_NAMES
        .iter()
        .copied()
        .filter(|brand| raw_lower.contains(brand) && parts.domain_label != *brand)
        .collect();
    if detected.is_empty() {
        return None;
    }
    Some(ThreatFinding::new(
        "brand-misuse",
        "Brand Impersonation",
        format!(
            "Detected brand name(s) \"{}\" in the URL that don't match the actual domain - likely impersonation.",
            detected.join(", ")
        ),
        Severity::Critical,
        25,
    ))
}

/// Rule 4: overall URL length, measured on the raw input, two mutually
/// exclusive tiers.
pub fn long_url(raw: &str) -> Option<ThreatFinding> {
    let length = raw.chars().count();
    if length > 100 {
        Some(ThreatFinding::new(
            "long-url",
            "Excessively Long URL",
            format!(
                "URL is {length} characters long. Phishing URLs often use long paths to obscure the real destination."
            ),
            Severity::Medium,
            15,
        ))
    } else if length > 75 {
        Some(ThreatFinding::new(
            "long-url",
            "Long URL",
            format!("URL is {length} characters - longer than typical legitimate URLs."),
            Severity::Low,
            8,
        ))
    } else {
        None
    }
}

/// Rule 6: count of suspicious-keyword substring hits in the full URL, two
/// mutually exclusive tiers, both listing the matched keywords.
pub fn keywords(raw_lower: &str) -> Option<ThreatFinding> {
    let found: Vec<&str> = SUSPICIOUS_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| raw_lower.contains(kw))
        .collect();
    if found.len() >= 3 {
        Some(ThreatFinding::new(
            "keywords",
            "Multiple Suspicious Keywords",
            format!(
                "Found {} suspicious keywords: \"{}\". Phishing pages typically use urgency-driven language.",
                found.len(),
                found.join("\", \"")
            ),
            Severity::High,
            22,
        ))
    } else if !found.is_empty() {
        Some(ThreatFinding::new(
            "keywords",
            "Suspicious Keywords",
            format!("Found keyword(s): \"{}\".", found.join("\", \"")),
            Severity::Low,
            8,
        ))
    } else {
        None
    }
}

/// Rule 7: a literal "@" anywhere in the raw URL, scheme included. Browsers
/// treat everything before "@" in the authority as credentials, which lets
/// an attacker hide the true destination.
pub fn at_symbol(raw: &str) -> Option<ThreatFinding> {
    if !raw.contains('@') {
        return None;
    }
    Some(ThreatFinding::new(
        "at-symbol",
        "@ Symbol in URL",
        "The \"@\" symbol can be used to redirect the browser to a different host, hiding the true destination.",
        Severity::Critical,
        28,
    ))
}
