use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslatorError {
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl TranslatorError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            TranslatorError::HttpError(_) => "Could not build the upstream HTTP client".to_string(),
            TranslatorError::IoError(e) => format!("I/O failure: {}", e),
            TranslatorError::ConfigError { message } => message.clone(),
            TranslatorError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TranslatorError::HttpError(_) => "Check TLS support and the configured timeout",
            TranslatorError::IoError(_) => "Check that the address is free and files are readable",
            TranslatorError::ConfigError { .. }
            | TranslatorError::InvalidConfigValueError { .. } => {
                "Review the CLI flags, environment variables and config file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TranslatorError>;
