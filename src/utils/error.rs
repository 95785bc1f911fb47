use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Missing field '{field}' in record {record}")]
    MissingField { field: String, record: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown skin type '{value}' (available: {})", .available.join(", "))]
    InvalidSkinType {
        value: String,
        available: Vec<String>,
    },

    #[error("Input closed before a skin type was chosen")]
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Io,
    Config,
    Interaction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::NotFound { .. } => ErrorCategory::Input,
            EtlError::ParseError(_) | EtlError::MissingField { .. } => ErrorCategory::Data,
            EtlError::IoError(_) => ErrorCategory::Io,
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            EtlError::InvalidSkinType { .. } | EtlError::InputClosed => {
                ErrorCategory::Interaction
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 寫入中途失敗可能留下損毀的輸出檔
            EtlError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::NotFound { path } => {
                format!("Check that '{}' exists or pass a different path", path)
            }
            EtlError::ParseError(_) => {
                "Make sure the data file is a JSON array of animal objects".to_string()
            }
            EtlError::MissingField { field, .. } => {
                format!("Add the '{}' field to the record in the data file", field)
            }
            EtlError::IoError(_) => {
                "Check permissions on the template and output locations".to_string()
            }
            EtlError::ConfigError { .. } => "Make sure the file is valid TOML".to_string(),
            EtlError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}'", field)
            }
            EtlError::InvalidSkinType { available, .. } => {
                format!("Use one of: {}", available.join(", "))
            }
            EtlError::InputClosed => {
                "Run interactively or pass --skin-type".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::NotFound { path } => format!("Could not find '{}'", path),
            EtlError::ParseError(e) => format!("The animal data could not be read: {}", e),
            EtlError::MissingField { field, record } => {
                format!("Animal {} has no '{}'", record, field)
            }
            EtlError::IoError(e) => format!("Could not read or write a file: {}", e),
            EtlError::InvalidSkinType { value, .. } => {
                format!("'{}' is not a known skin type", value)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
