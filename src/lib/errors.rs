use thiserror::Error;

/// Infrastructure failures surfaced to the portal views. Field validation
/// failures are not errors; they are `ValidationResult`s.
#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn display_includes_status_and_message() {
        let err = AppError::Http {
            status: 403,
            message: "CSRF verification failed.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Request failed (403): CSRF verification failed."
        );
        assert_eq!(
            AppError::Config("missing".to_string()).to_string(),
            "Config error: missing"
        );
    }
}
