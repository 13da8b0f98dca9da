// src/core/rules/transport_rules.rs
//
// Heuristics on how the URL reaches its destination: cleartext HTTP,
// non-standard ports, and executable pseudo-protocols.

use crate::core::models::{DecomposedUrl, Severity, ThreatFinding};

/// Rule 8: the parsed scheme is plain "http".
pub fn no_https(parts: &DecomposedUrl) -> Option<ThreatFinding> {
    if parts.scheme != "http" {
        return None;
    }
    Some(ThreatFinding::new(
        "no-https",
        "No HTTPS",
        "This URL uses HTTP (unencrypted). Legitimate login/payment pages always use HTTPS.",
        Severity::Medium,
        12,
    ))
}

/// Rule 10: an explicit port other than 443 or 80. The label embeds the
/// offending port.
pub fn unusual_port(parts: &DecomposedUrl) -> Option<ThreatFinding> {
    let port = parts.port.as_deref()?;
    if port == "443" || port == "80" {
        return None;
    }
    Some(ThreatFinding::new(
        "unusual-port",
        format!("Unusual Port (:{port})"),
        "Non-standard port usage can indicate a rogue server.",
        Severity::Medium,
        12,
    ))
}

/// Rule 11: the raw, unprefixed input opens with "data:" or "javascript:".
/// Case-sensitive prefix match on the original string.
pub fn dangerous_protocol(raw: &str) -> Option<ThreatFinding> {
    if !raw.starts_with("data:") && !raw.starts_with("javascript:") {
        return None;
    }
    Some(ThreatFinding::new(
        "dangerous-protocol",
        "Dangerous Protocol",
        "This URL uses a protocol that can execute malicious code.",
        Severity::Critical,
        35,
    ))
}
