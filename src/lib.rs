//! # phishbuster
//!
//! Heuristic phishing-URL detection. Given any input string, the engine
//! parses it as a URL, runs a fixed battery of twelve independent detection
//! rules over its components, and returns a composite risk score (0..=100),
//! a discrete risk level, and the triggered findings sorted by severity.
//!
//! The engine is a pure, total function: no network lookups, no persistent
//! state, no error channel. Unparsable input yields a normal "invalid"
//! result value, never a panic or an `Err`.
//!
//! ```
//! use phishbuster::{analyze, RiskLevel};
//!
//! let report = analyze("https://paytm-secure-login.xyz/update");
//! assert_eq!(report.risk_level, RiskLevel::High);
//! assert!(report.findings.iter().any(|f| f.id == "brand-misuse"));
//! ```

pub mod core;
pub mod logging;

pub use core::analyzer::analyze;
pub use core::models::{AnalysisResult, RiskLevel, Severity, ThreatFinding};
