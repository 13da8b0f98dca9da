// src/core/decomposer.rs

use tracing::debug;
use url::Url;

use crate::core::models::DecomposedUrl;

/// True when the input already opens with a recognizable scheme prefix.
/// Byte-wise comparison so a multi-byte first character cannot split a char
/// boundary. Anything starting with "http" counts, including strings like
/// "httpfoo" that will subsequently fail to parse on their own.
fn has_http_prefix(input: &str) -> bool {
    input
        .as_bytes()
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(b"http"))
}

/// Breaks a raw input string into the structural parts the rule battery
/// reads. Inputs without a scheme prefix get `https://` prepended before
/// parsing, so bare domains like "example.com" decompose normally.
///
/// Returns `None` on any parse failure; the caller turns that into the fixed
/// invalid-URL result. No partial decomposition is ever produced.
pub fn decompose(input: &str) -> Option<DecomposedUrl> {
    let candidate = if has_http_prefix(input) {
        input.to_string()
    } else {
        format!("https://{input}")
    };

    let parsed = match Url::parse(&candidate) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!(error = %e, "Input did not parse as a URL.");
            return None;
        }
    };

    // Cannot-be-a-base URLs have no host; treat that as an empty hostname,
    // which downstream yields empty TLD and domain labels.
    let hostname = parsed.host_str().unwrap_or_default().to_lowercase();

    let labels: Vec<&str> = hostname.split('.').collect();
    let tld = labels.last().copied().unwrap_or_default().to_string();
    let (domain_label, subdomain_chain) = if labels.len() >= 2 {
        let domain = labels[labels.len() - 2].to_string();
        let chain = if labels.len() > 2 {
            labels[..labels.len() - 2].join(".")
        } else {
            String::new()
        };
        (domain, chain)
    } else {
        (String::new(), String::new())
    };

    Some(DecomposedUrl {
        raw_input: input.to_string(),
        scheme: parsed.scheme().to_string(),
        hostname,
        tld,
        domain_label,
        subdomain_chain,
        // The parser elides scheme-default ports, so 443/80 never show here
        // unless the scheme makes them non-default.
        port: parsed.port().map(|p| p.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_domain_gets_https_scheme() {
        let parts = decompose("example.com").unwrap();
        assert_eq!(parts.scheme, "https");
        assert_eq!(parts.hostname, "example.com");
        assert_eq!(parts.tld, "com");
        assert_eq!(parts.domain_label, "example");
        assert_eq!(parts.subdomain_chain, "");
    }

    #[test]
    fn explicit_scheme_is_kept() {
        let parts = decompose("http://example.com/login").unwrap();
        assert_eq!(parts.scheme, "http");
    }

    #[test]
    fn uppercase_scheme_and_host_are_normalized() {
        let parts = decompose("HTTP://ExAmPlE.CoM").unwrap();
        assert_eq!(parts.scheme, "http");
        assert_eq!(parts.hostname, "example.com");
    }

    #[test]
    fn subdomain_chain_joins_leading_labels() {
        let parts = decompose("https://a.b.c.example.co").unwrap();
        assert_eq!(parts.tld, "co");
        assert_eq!(parts.domain_label, "example");
        assert_eq!(parts.subdomain_chain, "a.b.c");
    }

    #[test]
    fn single_label_host_has_no_domain_label() {
        let parts = decompose("https://localhost").unwrap();
        assert_eq!(parts.tld, "localhost");
        assert_eq!(parts.domain_label, "");
        assert_eq!(parts.subdomain_chain, "");
    }

    #[test]
    fn explicit_nonstandard_port_is_surfaced() {
        let parts = decompose("https://example.com:8080/x").unwrap();
        assert_eq!(parts.port.as_deref(), Some("8080"));
    }

    #[test]
    fn scheme_default_port_is_elided() {
        let parts = decompose("https://example.com:443/x").unwrap();
        assert_eq!(parts.port, None);
    }

    #[test]
    fn empty_input_fails_to_parse() {
        assert!(decompose("").is_none());
    }

    #[test]
    fn bare_https_prefix_fails_to_parse() {
        assert!(decompose("https://").is_none());
    }

    #[test]
    fn garbage_with_scheme_prefix_fails_to_parse() {
        // Starts with "http" so nothing is prepended, and "httpfoo" alone is
        // not a valid absolute URL.
        assert!(decompose("httpfoo").is_none());
    }
}
