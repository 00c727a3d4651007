use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Json(serde_json::Error),
    DuplicateName(String),
    NotFound(String),
    Validation(String),
    Logging(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<flexi_logger::FlexiLoggerError> for AppError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        AppError::Logging(err.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "Invalid JSON data: {}", e)
            }
            AppError::DuplicateName(name) => {
                write!(f, "{} is already in contacts.", name)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
            AppError::Logging(msg) => {
                write!(f, "Logger setup failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_duplicate_name_message() {
        let err = AppError::DuplicateName("Rosie Simpson".to_string());

        assert_eq!(format!("{}", err), "Rosie Simpson is already in contacts.");
    }

    #[test]
    fn confirm_json_error_message() {
        let bad_json = serde_json::from_str::<Vec<String>>("[oops").unwrap_err();
        let err = AppError::from(bad_json);

        assert!(format!("{}", err).starts_with("Invalid JSON data: "));
    }

    #[test]
    fn confirm_not_found_message() {
        let err = AppError::NotFound("Contact".to_string());

        assert_eq!(format!("{}", err), "Contact Not found");
    }
}
