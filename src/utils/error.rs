use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Activity not found: {activity}")]
    NotFound { activity: String },

    #[error("{email} is already signed up for {activity}")]
    AlreadyEnrolled { activity: String, email: String },

    #[error("{email} is not signed up for {activity}")]
    NotEnrolled { activity: String, email: String },

    #[error("{activity} is full ({max_participants} participants)")]
    CapacityExceeded {
        activity: String,
        max_participants: u32,
    },

    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid catalog entry '{field}': {reason}")]
    InvalidCatalog { field: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Server returned {status}: {detail}")]
    Api { status: u16, detail: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    Conflict,
    Validation,
    Configuration,
    Network,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RosterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RosterError::NotFound { .. } => ErrorCategory::Lookup,
            RosterError::AlreadyEnrolled { .. }
            | RosterError::NotEnrolled { .. }
            | RosterError::CapacityExceeded { .. } => ErrorCategory::Conflict,
            RosterError::InvalidInput { .. } => ErrorCategory::Validation,
            RosterError::InvalidCatalog { .. }
            | RosterError::ConfigError { .. }
            | RosterError::InvalidConfigValueError { .. }
            | RosterError::TomlError(_) => ErrorCategory::Configuration,
            RosterError::HttpError(_) | RosterError::Api { .. } => ErrorCategory::Network,
            RosterError::IoError(_) | RosterError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 使用者請求層級的錯誤，不影響服務
            ErrorCategory::Lookup | ErrorCategory::Conflict | ErrorCategory::Validation => {
                ErrorSeverity::Low
            }
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Message returned to API callers in the `detail` field.
    pub fn user_friendly_message(&self) -> String {
        match self {
            RosterError::NotFound { .. } => "Activity not found".to_string(),
            RosterError::AlreadyEnrolled { .. } => {
                "Student is already signed up for this activity".to_string()
            }
            RosterError::NotEnrolled { .. } => {
                "Student is not signed up for this activity".to_string()
            }
            RosterError::CapacityExceeded { .. } => "Activity is full".to_string(),
            RosterError::InvalidInput { field, reason } => format!("{}: {}", field, reason),
            RosterError::Api { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RosterError::NotFound { .. } => "Check the activity name with `roster-client list`",
            RosterError::AlreadyEnrolled { .. } => "No action needed, the student is enrolled",
            RosterError::NotEnrolled { .. } => "Check the email spelling; emails are case-sensitive",
            RosterError::CapacityExceeded { .. } => "Choose another activity or withdraw someone first",
            RosterError::InvalidInput { .. } => "Provide a non-empty activity name and email",
            RosterError::InvalidCatalog { .. } => "Fix the [[activities]] entries in the catalog file",
            RosterError::ConfigError { .. }
            | RosterError::InvalidConfigValueError { .. }
            | RosterError::TomlError(_) => "Check the command-line flags and the TOML file",
            RosterError::HttpError(_) | RosterError::Api { .. } => {
                "Make sure the server is running and the base URL is correct"
            }
            RosterError::IoError(_) | RosterError::SerializationError(_) => {
                "Check file permissions and disk space"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
