//! hh.ru listing fetcher
//!
//! Downloads an employer's vacancies (or its employer card paired with each
//! vacancy) and saves them as JSON, by default under data/.

use clap::{Parser, Subcommand};
use fetcher::config::{AppConfig, ConfigError};
use fetcher::telemetry::{self, TelemetryError};
use fetcher::{FetchError, ListingFetcher, ReqwestTransport};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "fetcher",
    about = "Fetch vacancy and employer listings from the hh.ru API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every vacancy an employer has open in the configured area
    Vacancies {
        employer_id: String,
        /// Write here instead of <HH_OUTPUT_DIR>/vacancies_<id>.json
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Fetch the employer card, one record per open vacancy
    Employers {
        employer_id: String,
        /// Write here instead of <HH_OUTPUT_DIR>/employers_<id>.json
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Error)]
enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),
    #[error("could not serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let transport = ReqwestTransport::new(&config.api)?;
    let fetcher = ListingFetcher::new(transport, config.api.clone());

    match cli.command {
        Command::Vacancies {
            employer_id,
            output,
        } => {
            let vacancies = fetcher.get_vacancies(&employer_id)?;
            let path = output.unwrap_or_else(|| {
                config
                    .output_dir
                    .join(format!("vacancies_{employer_id}.json"))
            });
            save(&path, &vacancies)?;
            info!(count = vacancies.len(), path = %path.display(), "saved vacancies");
        }
        Command::Employers {
            employer_id,
            output,
        } => {
            let employers = fetcher.get_employers(&employer_id)?;
            let path = output.unwrap_or_else(|| {
                config
                    .output_dir
                    .join(format!("employers_{employer_id}.json"))
            });
            save(&path, &employers)?;
            info!(count = employers.len(), path = %path.display(), "saved employer records");
        }
    }

    Ok(())
}

fn save<T: Serialize>(path: &Path, records: &[T]) -> Result<(), AppError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|source| AppError::Write {
                path: dir.to_path_buf(),
                source,
            })?;
            info!(dir = %dir.display(), "created output directory");
        }
    }

    let json_output = serde_json::to_string_pretty(records)?;
    fs::write(path, json_output).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })
}
