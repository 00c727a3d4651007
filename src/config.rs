use crate::cli::command::Cli;
use crate::prelude::AppError;
use crate::storage::StorageMediums;

/// Settings for one run, resolved from flags, the environment and `.env`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub storage: StorageMediums,
    pub storage_path: String,
    pub log_spec: String,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        let storage_path = cli.storage_path.trim();
        if storage_path.is_empty() {
            return Err(AppError::Validation(
                "Storage path must not be empty".to_string(),
            ));
        }

        Ok(Self {
            storage: StorageMediums::from(&cli.storage)?,
            storage_path: storage_path.to_string(),
            log_spec: cli.log.clone(),
        })
    }
}
