// Command line flags

use std::path::PathBuf;

use clap::Parser;

/// Random one-bar strumming patterns to practise against a metronome
#[derive(Debug, Default, Clone, PartialEq, Eq, Parser)]
#[command(name = "strummer", version)]
pub struct Args {
    /// Line prompt instead of the terminal UI
    #[arg(long)]
    pub plain: bool,

    /// Start with muted strums enabled
    #[arg(long)]
    pub mutes: bool,

    /// Use plain characters instead of arrow emoji
    #[arg(long)]
    pub ascii: bool,

    /// Seed the generator for repeatable patterns
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Read settings from PATH
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
