use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use libbdic::bdic::{assemble, assemble_unsorted, read_wordlist, WordlistFormat};
use tracing::info;

#[derive(Parser)]
#[command(name = "bdic", about = "Compile a word list into a BDic dictionary", version)]
struct Cli {
    /// Word list to read
    input: PathBuf,

    /// Path of the .bdic file to write
    output: PathBuf,

    /// Layout of the input file
    #[arg(long, value_enum, default_value_t = WordlistFormat::Dic)]
    format: WordlistFormat,

    /// Fail on unsorted input instead of sorting it
    #[arg(long)]
    require_sorted: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    quiet: bool,
}

fn init_tracing(cli: &Cli) {
    // --quiet silences everything; --verbose honours RUST_LOG, else info.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let words = read_wordlist(&cli.input, cli.format)
        .with_context(|| format!("failed to read word list {}", cli.input.display()))?;
    info!(words = words.len(), input = %cli.input.display(), "loaded word list");

    let bdic = if cli.require_sorted {
        assemble(&words)
    } else {
        assemble_unsorted(&words)
    }
    .context("failed to build dictionary")?;

    fs::write(&cli.output, &bdic)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    info!(bytes = bdic.len(), output = %cli.output.display(), "wrote dictionary");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
