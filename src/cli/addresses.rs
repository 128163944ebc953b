use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::{AddressListArgs, OutputFormat};

#[derive(Args)]
pub struct AddressesArgs {
    #[command(subcommand)]
    pub command: AddressesCommands,
}

#[derive(Subcommand)]
pub enum AddressesCommands {
    /// List the normalized addresses
    List {
        #[command(flatten)]
        address_list: AddressListArgs,

        /// Only show the first N addresses
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Export the normalized addresses as a JSON catalog
    Export {
        #[command(flatten)]
        address_list: AddressListArgs,

        /// Output file path
        #[arg(short, long, required = true)]
        output: PathBuf,
    },
}

/// Execute addresses subcommand
///
/// # Errors
///
/// Returns an error if the list cannot be loaded or the export cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AddressesArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        AddressesCommands::List {
            address_list,
            limit,
        } => {
            let catalog = address_list.load(verbose)?;
            let shown = limit.unwrap_or(catalog.len()).min(catalog.len());

            match format {
                OutputFormat::Text => {
                    println!("{} addresses", catalog.len());
                    for (i, address) in catalog.iter().take(shown).enumerate() {
                        println!("{:>6}. {}", i + 1, address);
                    }
                    if shown < catalog.len() {
                        println!("... {} more", catalog.len() - shown);
                    }
                }
                OutputFormat::Json => {
                    let output: Vec<&str> =
                        catalog.iter().take(shown).map(|a| a.as_str()).collect();
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Tsv => {
                    println!("position\taddress");
                    for (i, address) in catalog.iter().take(shown).enumerate() {
                        println!("{i}\t{address}");
                    }
                }
            }
        }
        AddressesCommands::Export {
            address_list,
            output,
        } => {
            let catalog = address_list.load(verbose)?;
            std::fs::write(&output, catalog.to_json()?)?;
            eprintln!(
                "Exported {} addresses to {}",
                catalog.len(),
                output.display()
            );
        }
    }

    Ok(())
}
