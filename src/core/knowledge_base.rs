//! Static, read-only intelligence that drives the rule battery: the TLD,
//! brand, and keyword lists the heuristics match against. Keeping these as
//! data rather than code makes the scanner's knowledge easy to audit and
//! extend without touching rule logic. Membership is exact and verbatim;
//! the lists carry no wildcards or patterns.

/// Top-level domains disproportionately registered for phishing and spam
/// campaigns. Matched exactly against the lower-cased TLD label.
pub static SUSPICIOUS_TLDS: &[&str] = &[
    "xyz", "tk", "ml", "ga", "cf", "gq", "top", "buzz", "club",
    "work", "icu", "cam", "live", "rest", "fit", "surf", "click",
    "link", "win", "bid", "stream", "racing", "download", "loan",
];

/// Frequently impersonated brand names. A brand appearing anywhere in a URL
/// whose registrable domain label is not that brand suggests impersonation.
pub static BRAND_NAMES: &[&str] = &[
    "paypal", "paytm", "google", "facebook", "instagram", "apple",
    "microsoft", "amazon", "netflix", "whatsapp", "telegram", "twitter",
    "linkedin", "chase", "wellsfargo", "bankofamerica", "citibank",
    "coinbase", "binance", "metamask", "blockchain", "dropbox",
    "icloud", "outlook", "yahoo", "steam", "spotify", "uber",
];

/// Urgency- and credential-themed words common in phishing URLs. Matched as
/// case-insensitive substrings of the full URL.
pub static SUSPICIOUS_KEYWORDS: &[&str] = &[
    "login", "secure", "verify", "update", "confirm", "account",
    "suspend", "unlock", "restore", "validate", "authenticate",
    "signin", "sign-in", "password", "credential", "billing",
    "wallet", "otp", "2fa", "token", "expire",
];
