//! Shared output for commands that produce ranked addresses.

use crate::cli::OutputFormat;
use crate::pipeline::ScanOutcome;

/// Header line for TSV output
pub const TSV_HEADER: &str =
    "image\trank\taddress\tposition\tsequence\tsubstring\tboosted_substring\tcomposite";

/// Print one outcome in the requested format.
///
/// JSON is printed as a single pretty object; callers printing several
/// outcomes as one array should use [`outcome_json`] instead.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn print_outcome(
    outcome: &ScanOutcome,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_text_outcome(outcome, verbose),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome_json(outcome))?),
        OutputFormat::Tsv => {
            println!("{TSV_HEADER}");
            print_tsv_rows(outcome);
        }
    }
    Ok(())
}

pub fn print_text_outcome(outcome: &ScanOutcome, verbose: bool) {
    println!("OCR Reader Results:");
    println!("{}", outcome.recognized);

    let result = &outcome.result;
    if result.is_empty() {
        println!("No addresses to compare against.");
        return;
    }

    if !result.has_overlap() {
        println!(
            "Warning: no address shares any characters with the recognized text; all {} are tied at score 0.",
            result.len()
        );
    }

    println!("Predicted possible addresses:");
    for (i, ranked) in result.ties.iter().enumerate() {
        if verbose {
            println!(
                "{}. {}  [score {} = sequence {} + substring {} -> {}]",
                i + 1,
                ranked.address,
                ranked.score.composite,
                ranked.score.sequence,
                ranked.score.substring,
                ranked.score.boosted_substring,
            );
        } else {
            println!("{}. {}", i + 1, ranked.address);
        }
    }

    if verbose {
        println!(
            "Best score {} across {} addresses",
            result.max_score, result.candidates_scored
        );
    }
}

#[must_use]
pub fn outcome_json(outcome: &ScanOutcome) -> serde_json::Value {
    let result = &outcome.result;
    serde_json::json!({
        "image": outcome.image.as_ref().map(|p| p.display().to_string()),
        "mode": outcome.mode,
        "recognized_text": outcome.recognized.as_str(),
        "max_score": result.max_score,
        "candidates_scored": result.candidates_scored,
        "has_overlap": result.has_overlap(),
        "matches": result.ties,
    })
}

pub fn print_tsv_rows(outcome: &ScanOutcome) {
    let image = outcome
        .image
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    for (i, ranked) in outcome.result.ties.iter().enumerate() {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            image,
            i + 1,
            ranked.address,
            ranked.position,
            ranked.score.sequence,
            ranked.score.substring,
            ranked.score.boosted_substring,
            ranked.score.composite,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::address::CandidateAddress;
    use crate::core::text::RecognizedText;
    use crate::core::types::ReadMode;
    use crate::matching::engine::MatchingEngine;
    use crate::AddressCatalog;

    #[test]
    fn test_outcome_json_fields() {
        let catalog: AddressCatalog = ["123 Main Street", "456 Oak Ave"]
            .into_iter()
            .filter_map(CandidateAddress::new)
            .collect();
        let recognized = RecognizedText::new("456 oak av");
        let outcome = ScanOutcome {
            image: Some("scan.png".into()),
            mode: Some(ReadMode::Accurate),
            result: MatchingEngine::new(&catalog).find_matches(&recognized),
            recognized,
        };

        let json = outcome_json(&outcome);
        assert_eq!(json["image"], "scan.png");
        assert_eq!(json["mode"], "accurate");
        assert_eq!(json["recognized_text"], "456 OAK AV");
        assert_eq!(json["has_overlap"], true);
        assert_eq!(json["matches"][0]["address"], "456 OAK AVE");
        assert_eq!(json["matches"][0]["position"], 1);
    }
}
