use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "codecompass")]
#[command(author, version, about = "Sandboxed read-only code inspection")]
#[command(long_about = "Search, read and explain code inside configured repository roots.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Operation error (bad path, bad pattern, unreadable file)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search for text or a regex across the repository roots
    Search(SearchArgs),

    /// Read a file, optionally paginated by byte offset and length
    Read(ReadArgs),

    /// Explain a range of code with heuristic analysis
    Explain(ExplainArgs),

    /// List taxonomy comments (TODO, FIXME, ...) across the roots
    Todos(TodosArgs),

    /// Show metadata for a single file or directory
    Info(InfoArgs),

    /// List files under a directory
    List(ListArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Text or pattern to search for
    pub query: String,

    /// Treat the query as a regular expression
    #[arg(short, long)]
    pub regex: bool,

    /// Match case-sensitively
    #[arg(short = 's', long)]
    pub case_sensitive: bool,

    /// Restrict the search to paths under this prefix
    #[arg(short, long, default_value = "")]
    pub path: String,

    /// Maximum number of matches to return
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Parser, Debug)]
pub struct ReadArgs {
    /// File to read
    pub path: String,

    /// Byte offset to start reading from
    #[arg(short, long, default_value_t = 0)]
    pub offset: usize,

    /// Maximum number of bytes to return
    #[arg(short, long, default_value_t = 1024 * 1024)]
    pub length: usize,
}

#[derive(Parser, Debug)]
pub struct ExplainArgs {
    /// File containing the code to explain
    pub path: String,

    /// First line of the range (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub start: usize,

    /// Last line of the range (inclusive)
    #[arg(short, long, default_value_t = usize::MAX)]
    pub end: usize,
}

#[derive(Parser, Debug)]
pub struct TodosArgs {
    /// Restrict the scan to paths under this prefix
    #[arg(short, long, default_value = "")]
    pub path: String,
}

#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// File or directory to inspect
    pub path: String,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Directory to list
    #[arg(default_value = ".")]
    pub path: String,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Include hidden files and directories
    #[arg(long)]
    pub hidden: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = ".codecompass.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
