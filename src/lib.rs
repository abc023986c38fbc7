//! Batch runner for the `React.FC` codemod.
//!
//! The rewrite itself lives in [`defc_rewrite`]; this crate finds the files,
//! runs the rewrite over them in parallel and writes the results back.

pub mod discover;
pub mod error;
pub mod runner;
pub mod tracing_config;

pub use defc_rewrite::{Dialect, transform, try_transform};
pub use error::RunError;
pub use runner::{
    FileOutcome, FileReport, ParserChoice, RunOptions, Summary, process_file, run, write_atomically,
};
