use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Advisory service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to analyze skill gap (HTTP {status})")]
    ServiceStatus { status: u16 },

    #[error("{message}")]
    ServiceReported { message: String },

    #[error("Malformed advisory response: {message}")]
    Decode { message: String },

    #[error("A skill gap analysis is already in progress")]
    AnalysisInFlight,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required setting: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Service,
    Data,
    Configuration,
    Usage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AdvisorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AdvisorError::Transport(_) => ErrorCategory::Network,
            AdvisorError::ServiceStatus { .. } | AdvisorError::ServiceReported { .. } => {
                ErrorCategory::Service
            }
            AdvisorError::Decode { .. }
            | AdvisorError::SerializationError(_)
            | AdvisorError::ValidationError { .. } => ErrorCategory::Data,
            AdvisorError::IoError(_)
            | AdvisorError::ConfigError { .. }
            | AdvisorError::InvalidConfigValueError { .. }
            | AdvisorError::MissingConfigError { .. } => ErrorCategory::Configuration,
            AdvisorError::AnalysisInFlight => ErrorCategory::Usage,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AdvisorError::AnalysisInFlight => ErrorSeverity::Low,
            // the user can simply run the analysis again
            AdvisorError::Transport(_)
            | AdvisorError::ServiceStatus { .. }
            | AdvisorError::ServiceReported { .. } => ErrorSeverity::Medium,
            AdvisorError::Decode { .. }
            | AdvisorError::SerializationError(_)
            | AdvisorError::ValidationError { .. } => ErrorSeverity::High,
            AdvisorError::IoError(_)
            | AdvisorError::ConfigError { .. }
            | AdvisorError::InvalidConfigValueError { .. }
            | AdvisorError::MissingConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AdvisorError::Transport(_) => {
                "Check that the advisory service is running and the endpoint is correct".to_string()
            }
            AdvisorError::ServiceStatus { status } if *status >= 500 => {
                "The advisory service failed internally; try again later".to_string()
            }
            AdvisorError::ServiceStatus { .. } => {
                "The advisory service rejected the request; check the role and skills".to_string()
            }
            AdvisorError::ServiceReported { .. } => {
                "Adjust the target role or profile skills and retry".to_string()
            }
            AdvisorError::Decode { .. } => {
                "The service and client disagree on the response format; check versions".to_string()
            }
            AdvisorError::AnalysisInFlight => {
                "Wait for the running analysis to finish".to_string()
            }
            AdvisorError::IoError(_) => "Check that the file exists and is readable".to_string(),
            AdvisorError::SerializationError(_) => {
                "Check that the catalog file contains valid JSON".to_string()
            }
            AdvisorError::ConfigError { .. } | AdvisorError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again".to_string()
            }
            AdvisorError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            AdvisorError::ValidationError { .. } => "Correct the input values".to_string(),
        }
    }

    /// Message suitable for showing to the end user. Service-reported errors
    /// pass through verbatim.
    pub fn user_friendly_message(&self) -> String {
        match self {
            AdvisorError::Transport(_) => "Could not reach the skill gap service".to_string(),
            AdvisorError::ServiceStatus { .. } => "Failed to analyze skill gap".to_string(),
            AdvisorError::ServiceReported { message } => message.clone(),
            AdvisorError::Decode { .. } => {
                "The skill gap service returned an unexpected response".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
