//! Score command - show how one address scores against one text.
//!
//! Useful for understanding why an address did or did not win a ranking.

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::address::CandidateAddress;
use crate::core::text::RecognizedText;
use crate::matching::scoring::{BoostPolicy, CandidateScore};

/// Arguments for the score command
#[derive(Args)]
pub struct ScoreArgs {
    /// Recognized text
    #[arg(required = true)]
    pub text: String,

    /// Candidate address (normalized before scoring)
    #[arg(required = true)]
    pub address: String,
}

/// Execute the score command
///
/// # Errors
///
/// Returns an error if the address is blank or JSON output fails.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ScoreArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let text = RecognizedText::from_lines(args.text.lines());
    let address = CandidateAddress::new(&args.address)
        .ok_or_else(|| anyhow::anyhow!("Address is blank"))?;

    let policy = BoostPolicy::default();
    let score = CandidateScore::calculate(text.as_str(), address.as_str(), &policy);

    match format {
        OutputFormat::Text => print_text_score(&text, &address, &score, &policy),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "text": text.as_str(),
                "address": address.as_str(),
                "score": score,
                "boost": policy,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("text\taddress\tsequence\tsubstring\tboosted_substring\tcomposite");
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                text,
                address,
                score.sequence,
                score.substring,
                score.boosted_substring,
                score.composite
            );
        }
    }

    Ok(())
}

fn print_text_score(
    text: &RecognizedText,
    address: &CandidateAddress,
    score: &CandidateScore,
    policy: &BoostPolicy,
) {
    println!("Score Breakdown");
    println!("{}", "=".repeat(60));
    println!("\nText:    {text}");
    println!("Address: {address}");

    let boost = policy
        .band(score.substring)
        .map_or_else(|| "none".to_string(), |multiplier| format!("x{multiplier}"));

    println!("\nLongest common subsequence: {}", score.sequence);
    println!("Longest common substring:   {}", score.substring);
    println!(
        "Substring boost:            {boost} -> {}",
        score.boosted_substring
    );
    println!("Composite score:            {}", score.composite);
}
