use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod comparison;
mod core;
mod matching;
mod parsing;
mod reporting;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("truss_compare=debug,info")
    } else {
        EnvFilter::new("truss_compare=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Compare(args) => {
            cli::compare::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Report(args) => {
            cli::report::run(args, cli.verbose)?;
        }
    }

    Ok(())
}
