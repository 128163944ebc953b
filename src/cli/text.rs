use std::io::{self, Read};

use clap::Args;

use crate::cli::report::print_outcome;
use crate::cli::{AddressListArgs, OutputFormat};
use crate::core::text::RecognizedText;
use crate::matching::engine::MatchingEngine;
use crate::pipeline::ScanOutcome;

#[derive(Args)]
pub struct TextArgs {
    /// Recognized text to match. Use '-' to read lines from stdin
    #[arg(required = true)]
    pub text: String,

    #[command(flatten)]
    pub address_list: AddressListArgs,
}

/// Execute text subcommand
///
/// # Errors
///
/// Returns an error if stdin or the address list cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: TextArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let raw = if args.text == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        args.text.clone()
    };
    let recognized = RecognizedText::from_lines(raw.lines());

    let catalog = args.address_list.load(verbose)?;
    if catalog.is_empty() {
        eprintln!("Warning: Address list is empty, no addresses to match against.");
    }

    let engine = MatchingEngine::new(&catalog);
    let outcome = ScanOutcome::rank(&engine, recognized);

    print_outcome(&outcome, format, verbose)
}
