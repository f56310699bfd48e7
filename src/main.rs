use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use followback::cli;
use followback::config::{
    Paths, DEFAULT_FOLLOWERS_FILE, DEFAULT_FOLLOWING_FILE, DEFAULT_OUTPUT_FILE,
};

/// followback — list accounts you follow that don't follow you back.
#[derive(Parser)]
#[command(name = "followback", version, about)]
struct Cli {
    /// Directory holding the export files and receiving the outputs.
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Followers export, relative to --dir.
    #[arg(long, default_value = DEFAULT_FOLLOWERS_FILE)]
    followers: PathBuf,

    /// Following export, relative to --dir.
    #[arg(long, default_value = DEFAULT_FOLLOWING_FILE)]
    following: PathBuf,

    /// Report file, relative to --dir. Overwritten on every run.
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Cli::parse();

    let paths = Paths {
        base_dir: args.dir,
        followers_file: args.followers,
        following_file: args.following,
        output_file: args.output,
    };

    print!("{}", cli::cmd_compare(&paths)?);
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
