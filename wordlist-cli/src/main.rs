use std::{io, path::PathBuf};

use clap::Parser;
use wordlist::Options;

mod error;

/// Normalize a wordlist: strip all whitespace from each line, drop `#` comments and
/// entries shorter than two characters, sort, and write the result to `output.txt`
/// in the working directory.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Wordlist file to normalize
    file: PathBuf,
}

fn setup_logging() {
    use tracing_subscriber::{EnvFilter, prelude::*};

    let env_filter = EnvFilter::try_from_env("WORDLIST_LOG");

    if let Ok(filter) = env_filter {
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(io::IsTerminal::is_terminal(&io::stderr()))
            .with_timer(tracing_subscriber::fmt::time::Uptime::default())
            .with_filter(filter);

        tracing_subscriber::registry().with(layer).init();
    }
}

fn main() -> miette::Result<()> {
    setup_logging();

    let args = Args::parse();
    let options = Options::default();

    let summary = wordlist::run(&args.file, &options).map_err(error::RunError::from)?;
    tracing::info!(
        input = %args.file.display(),
        output = %options.output.display(),
        %summary,
        "wrote wordlist",
    );
    Ok(())
}
