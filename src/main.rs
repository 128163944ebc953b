use clap::Parser;
use tracing_subscriber::EnvFilter;

use postal_ocr::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("postal_ocr=debug,info")
    } else {
        EnvFilter::new("postal_ocr=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Scan(args) => {
            cli::scan::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Text(args) => {
            cli::text::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Score(args) => {
            cli::score::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Addresses(args) => {
            cli::addresses::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
