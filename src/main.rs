// src/main.rs

use clap::Parser;
use color_eyre::eyre::Result;

use phishbuster::core::analyzer::analyze;
use phishbuster::core::models::AnalysisResult;
use phishbuster::logging::initialize_logging;

const DISCLAIMER: &str =
    "Heuristic analysis only. Results are indicative, not definitive - always \
     verify with additional sources before trusting any URL.";

#[derive(Parser)]
#[command(name = "phishbuster")]
#[command(about = "Scores one or more URLs for phishing indicators", long_about = None)]
struct Args {
    /// URLs to analyze
    #[arg(required = true)]
    urls: Vec<String>,

    /// Output the full analysis as pretty-printed JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    initialize_logging()?;

    let args = Args::parse();

    for url in &args.urls {
        let result = analyze(url);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            print_report(&result);
        }
    }

    Ok(())
}

fn print_report(result: &AnalysisResult) {
    println!("URL: {}", result.url);
    println!(
        "Risk: {}/100  [{}]",
        result.risk_score,
        result.risk_level.gauge_label()
    );
    println!(
        "Indicators ({}), analyzed at {}:",
        result.findings.len(),
        result.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    for finding in &result.findings {
        println!(
            "  [{:>8}] {} (+{})",
            finding.severity, finding.label, finding.score
        );
        println!("             {}", finding.description);
    }
    println!();
    println!("{DISCLAIMER}");
}
