use std::path::{Path, PathBuf};
use std::process::ExitCode;

use changelog_bot::changelog::{Outcome, process, validate_record};
use changelog_bot::config::{ChangelogConfig, ConfigError, load_config};
use changelog_bot::labels::suggested_labels;
use changelog_bot::types::ChangelogRecord;
use changelog_bot::webhooks::{ExtractError, extract_facts};
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: changelog-bot <pull-request-event.json> [existing-record.json]";

#[derive(Debug, Error)]
enum AppError {
    #[error("wrong number of arguments")]
    Usage,

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid pull request payload: {0}")]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid changelog record: {0}")]
    Record(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "changelog_bot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(std::env::args_os().skip(1).map(PathBuf::from).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Usage) => {
            eprintln!("{USAGE}");
            ExitCode::from(2)
        }
        Err(e) => {
            error!(error = %e, "Failed to process pull request");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<PathBuf>) -> Result<(), AppError> {
    let (payload_path, record_path) = match args.as_slice() {
        [payload] => (payload, None),
        [payload, record] => (payload, Some(record)),
        _ => return Err(AppError::Usage),
    };

    let config = match std::env::var_os("CHANGELOG_CONFIG") {
        Some(path) => {
            info!(path = %Path::new(&path).display(), "Loading config");
            load_config(Path::new(&path))?
        }
        None => ChangelogConfig::default(),
    };

    let facts = extract_facts(&read(payload_path)?)?;
    let existing = match record_path {
        Some(path) => read_existing_record(path)?,
        None => None,
    };

    let suggestions = suggested_labels(&facts.labels, &config);
    if !suggestions.is_empty() {
        info!(pr = %facts.number, ?suggestions, "PR is missing suggested labels");
    }

    let outcome = process(&facts, existing, &config);
    if let Outcome::Skipped(reason) = &outcome {
        info!(pr = %facts.number, %reason, "No changelog record written");
        return Ok(());
    }

    if let Some(record) = outcome.into_record() {
        if let Err(errors) = validate_record(&record, &config.taxonomy) {
            for e in errors {
                warn!(pr = %record.pr, error = %e, "Changelog record fails validation");
            }
        }
        println!("{}", serde_json::to_string_pretty(&record)?);
    }
    Ok(())
}

/// Reads an existing record. A missing file means the PR has no record yet.
fn read_existing_record(path: &Path) -> Result<Option<ChangelogRecord>, AppError> {
    if !path.exists() {
        info!(
            path = %path.display(),
            "No existing changelog record at path, a new one will be created"
        );
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(&read(path)?)?))
}

fn read(path: &Path) -> Result<Vec<u8>, AppError> {
    std::fs::read(path).map_err(|source| AppError::Io {
        path: path.display().to_string(),
        source,
    })
}
