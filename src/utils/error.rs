use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurveyError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{source_name} responded with {status} for {url}")]
    HttpStatusError {
        source_name: String,
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Missing credential: environment variable {variable} is not set")]
    MissingCredentialError { variable: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SurveyError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            SurveyError::ApiError(e) if e.is_timeout() => {
                "The job-search API did not answer in time".to_string()
            }
            SurveyError::ApiError(_) => "Could not reach the job-search API".to_string(),
            SurveyError::HttpStatusError {
                source_name,
                status,
                ..
            } => format!("{} rejected the search request ({})", source_name, status),
            SurveyError::MissingCredentialError { variable } => {
                format!("{} must be set (in the environment or a .env file)", variable)
            }
            SurveyError::IoError(e) => format!("File access failed: {}", e),
            SurveyError::SerializationError(_) => {
                "The job-search API returned an unexpected payload".to_string()
            }
            SurveyError::ConfigError { message } => format!("Invalid configuration: {}", message),
            SurveyError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration value for {}: {}", field, reason)
            }
        }
    }

    /// 程序退出碼：設定問題 2，其餘（網路/API）1
    pub fn exit_code(&self) -> i32 {
        match self {
            SurveyError::MissingCredentialError { .. }
            | SurveyError::ConfigError { .. }
            | SurveyError::InvalidConfigValueError { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SurveyError>;
