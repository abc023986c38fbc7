//! `defc` CLI entry point.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use defc::{FileOutcome, Summary};

fn main() -> ExitCode {
    defc::tracing_config::init_tracing();
    let cli = Cli::parse();

    let summary = match defc::run(&cli.paths, &cli.run_options()) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("defc: {e}");
            return ExitCode::from(2);
        }
    };

    if cli.print {
        print_outputs(&summary);
    }

    if cli.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("defc: cannot serialize summary: {e}");
                return ExitCode::from(2);
            }
        }
    } else {
        print_summary(&summary, cli.dry_run);
    }

    if summary.has_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_outputs(summary: &Summary) {
    let outputs: Vec<_> = summary
        .files
        .iter()
        .filter_map(|report| Some((&report.path, report.output.as_ref()?)))
        .collect();
    let with_headers = outputs.len() > 1;
    for (path, output) in outputs {
        if with_headers {
            println!("==> {} <==", path.display());
        }
        print!("{output}");
        if !output.ends_with('\n') {
            println!();
        }
    }
}

fn print_summary(summary: &Summary, dry_run: bool) {
    for report in &summary.files {
        if let FileOutcome::Failed { reason } = &report.outcome {
            eprintln!("  failed: {}: {reason}", report.path.display());
        }
    }
    let verb = if dry_run { "would modify" } else { "modified" };
    eprintln!(
        "{verb} {}, unchanged {}, failed {}",
        summary.modified, summary.unmodified, summary.failed
    );
}
