use crate::prelude::AppError;
use flexi_logger::{Logger, LoggerHandle, WriteMode};
use log::info;
use once_cell::sync::OnceCell;

pub const DEFAULT_LOG_SPEC: &str = "warn";

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

// Logs go to stderr; a second call is a no-op.
pub fn init(spec: &str) -> Result<(), AppError> {
    LOGGER.get_or_try_init(|| -> Result<LoggerHandle, AppError> {
        let spec = normalize_spec(spec);
        let handle = Logger::try_with_str(spec)?
            .log_to_stderr()
            .write_mode(WriteMode::Direct)
            .start()?;

        info!("logging started with spec `{}`", spec);
        Ok(handle)
    })?;
    Ok(())
}

fn normalize_spec(spec: &str) -> &str {
    let trimmed = spec.trim();
    if trimmed.is_empty() {
        DEFAULT_LOG_SPEC
    } else {
        trimmed
    }
}
