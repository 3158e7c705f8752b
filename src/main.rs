use anyhow::Result;
use clap::Parser;
use kb_extract::KbConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version="0.1.0", about="Batch PDF text extractor - build a JSON knowledge base", long_about = None)]
struct Args {
    /// Directory to scan for *.pdf files
    directory: Option<PathBuf>,

    /// Output file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Suppress per-file progress lines
    #[arg(short, long)]
    quiet: bool,
}

fn apply_args(config: &mut KbConfig, args: Args) {
    if let Some(d) = args.directory {
        config.directory = d;
    }
    if let Some(o) = args.output {
        config.output = o;
    }
    if args.quiet {
        config.quiet = true;
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load from file or default
    let mut config = KbConfig::load_from_file().unwrap_or_default();

    // 2. Override with CLI args
    apply_args(&mut config, args);

    kb_extract::run(&config)?;

    Ok(())
}
