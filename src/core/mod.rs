// src/core/mod.rs

// Root of the `core` module: the heuristic engine itself, with no
// presentation concerns. Everything a caller needs flows through
// `analyzer::analyze`.

/// Data structures shared across the engine: `Severity`, `RiskLevel`,
/// `ThreatFinding`, `DecomposedUrl`, and the `AnalysisResult` output.
pub mod models;

/// Static TLD/brand/keyword intelligence the rules match against.
pub mod knowledge_base;

/// Splits raw input into the structural URL parts the rules inspect.
pub mod decomposer;

/// The fixed, ordered battery of twelve independent detection rules.
pub mod rules;

/// Aggregation and classification: runs the battery, caps the composite
/// score, derives the risk level, and sorts findings by severity.
pub mod analyzer;
