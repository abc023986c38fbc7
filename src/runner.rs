//! Running the rewrite over many files.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use defc_rewrite::{Dialect, try_transform};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::discover::{DEFAULT_EXTENSIONS, discover_files};
use crate::error::RunError;

/// How to pick the dialect of each file.
#[derive(clap::ValueEnum, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParserChoice {
    /// `ts` for `.ts`/`.mts`/`.cts`, `tsx` for everything else.
    #[default]
    Auto,
    Tsx,
    Ts,
}

impl ParserChoice {
    pub fn dialect_for(self, path: &Path) -> Dialect {
        match self {
            ParserChoice::Auto => Dialect::for_path(path),
            ParserChoice::Tsx => Dialect::Tsx,
            ParserChoice::Ts => Dialect::TypeScript,
        }
    }
}

/// Options for a batch run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Compute rewrites without writing them back.
    pub dry_run: bool,
    /// Keep the rewritten text in each report.
    pub keep_output: bool,
    pub parser: ParserChoice,
    pub extensions: Vec<String>,
    /// Worker threads; `None` uses rayon's default.
    pub jobs: Option<usize>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            keep_output: false,
            parser: ParserChoice::Auto,
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            jobs: None,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FileOutcome {
    Modified,
    Unmodified,
    Failed { reason: String },
}

#[derive(Serialize, Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: FileOutcome,
    #[serde(skip)]
    pub output: Option<String>,
}

/// The outcome of a batch run, one report per file in path order.
#[derive(Serialize, Debug, Clone, Default)]
pub struct Summary {
    pub modified: usize,
    pub unmodified: usize,
    pub failed: usize,
    pub files: Vec<FileReport>,
}

impl Summary {
    fn from_reports(files: Vec<FileReport>) -> Self {
        let mut summary = Summary::default();
        for report in &files {
            match report.outcome {
                FileOutcome::Modified => summary.modified += 1,
                FileOutcome::Unmodified => summary.unmodified += 1,
                FileOutcome::Failed { .. } => summary.failed += 1,
            }
        }
        summary.files = files;
        summary
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Rewrite every file under `paths`.
pub fn run(paths: &[PathBuf], options: &RunOptions) -> Result<Summary, RunError> {
    let files = discover_files(paths, &options.extensions)?;
    debug!(count = files.len(), "discovered files");

    let mut pool = rayon::ThreadPoolBuilder::new();
    if let Some(jobs) = options.jobs {
        pool = pool.num_threads(jobs);
    }
    let pool = pool
        .build()
        .map_err(|source| RunError::ThreadPool { source })?;

    let reports = pool.install(|| {
        files
            .par_iter()
            .map(|path| process_file(path, options))
            .collect::<Vec<_>>()
    });

    let summary = Summary::from_reports(reports);
    info!(
        modified = summary.modified,
        unmodified = summary.unmodified,
        failed = summary.failed,
        "run finished"
    );
    Ok(summary)
}

/// Rewrite a single file. Failures are captured in the report.
pub fn process_file(path: &Path, options: &RunOptions) -> FileReport {
    let report = |outcome, output| FileReport {
        path: path.to_path_buf(),
        outcome,
        output,
    };

    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            warn!(path = %path.display(), %error, "cannot read file");
            return report(failed(error), None);
        }
    };

    let dialect = options.parser.dialect_for(path);
    let rewritten = match try_transform(&source, dialect) {
        Ok(Some(rewritten)) => rewritten,
        Ok(None) => {
            debug!(path = %path.display(), "no component declarations");
            return report(FileOutcome::Unmodified, None);
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "leaving file unchanged");
            return report(failed(error), None);
        }
    };

    if !options.dry_run
        && let Err(error) = write_atomically(path, &rewritten)
    {
        warn!(path = %path.display(), %error, "cannot write file");
        return report(failed(error), None);
    }

    debug!(path = %path.display(), dry_run = options.dry_run, "rewrote file");
    let output = options.keep_output.then_some(rewritten);
    report(FileOutcome::Modified, output)
}

/// Replace the contents of `path` without ever leaving it partly written.
///
/// The text goes to a temporary file in the same directory, which takes over
/// the original's permissions and is then renamed over it. On error the
/// original is untouched and the temporary file is removed.
pub fn write_atomically(path: &Path, contents: &str) -> io::Result<()> {
    // Replace the link target, not the link.
    let path = std::fs::canonicalize(path)?;
    let permissions = std::fs::metadata(&path)?.permissions();
    let dir = path.parent().unwrap_or(Path::new("."));

    let mut tmp = tempfile::Builder::new()
        .prefix(".defc.")
        .tempfile_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.flush()?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.persist(&path)?;
    Ok(())
}

fn failed(error: impl std::fmt::Display) -> FileOutcome {
    FileOutcome::Failed {
        reason: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_choice() {
        let path = Path::new("src/App.ts");
        assert_eq!(ParserChoice::Auto.dialect_for(path), Dialect::TypeScript);
        assert_eq!(ParserChoice::Tsx.dialect_for(path), Dialect::Tsx);
        assert_eq!(ParserChoice::Ts.dialect_for(Path::new("App.tsx")), Dialect::TypeScript);
    }

    #[test]
    fn test_summary_counts() {
        let report = |outcome| FileReport {
            path: PathBuf::from("a.tsx"),
            outcome,
            output: None,
        };
        let summary = Summary::from_reports(vec![
            report(FileOutcome::Modified),
            report(FileOutcome::Unmodified),
            report(FileOutcome::Unmodified),
            report(FileOutcome::Failed {
                reason: "syntax error at byte 3".into(),
            }),
        ]);
        assert_eq!(
            (summary.modified, summary.unmodified, summary.failed),
            (1, 2, 1)
        );
        assert!(summary.has_failures());
    }

    #[test]
    fn test_write_atomically_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("App.tsx");
        std::fs::write(&path, "const X: FC = () => null\n").unwrap();

        write_atomically(&path, "const X = () => null\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "const X = () => null\n");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomically_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("App.tsx");
        std::fs::write(&path, "old").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).unwrap();

        write_atomically(&path, "new").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }

    #[test]
    fn test_failed_rename_leaves_target_and_no_temp_file() {
        // A non-empty directory cannot be replaced by a file.
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("App.tsx");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep"), "kept").unwrap();

        assert!(write_atomically(&target, "new").is_err());
        assert_eq!(std::fs::read_to_string(target.join("keep")).unwrap(), "kept");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_report_serialization() {
        let report = FileReport {
            path: PathBuf::from("a.tsx"),
            outcome: FileOutcome::Failed {
                reason: "boom".into(),
            },
            output: Some("ignored".into()),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "path": "a.tsx", "status": "failed", "reason": "boom" })
        );
    }
}
