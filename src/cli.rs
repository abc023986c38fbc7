//! Command-line interface for the codemod.

use std::path::PathBuf;

use clap::Parser;
use defc::ParserChoice;
use defc::RunOptions;
use defc::discover::DEFAULT_EXTENSIONS;

#[derive(Parser)]
#[command(name = "defc")]
#[command(
    about = "Rewrite React.FC component declarations into plain functions with typed props",
    long_about = None
)]
pub struct Cli {
    /// Files or directories to rewrite
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Compute the rewrites without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Print rewritten sources to stdout
    #[arg(long)]
    pub print: bool,

    /// Syntax dialect to parse sources as
    #[arg(long, value_enum, default_value_t = ParserChoice::Auto)]
    pub parser: ParserChoice,

    /// File extensions to pick up when walking directories
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()))]
    pub extensions: Vec<String>,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Number of worker threads
    #[arg(short, long)]
    pub jobs: Option<usize>,
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            dry_run: self.dry_run,
            keep_output: self.print,
            parser: self.parser,
            extensions: self.extensions.clone(),
            jobs: self.jobs,
        }
    }
}
