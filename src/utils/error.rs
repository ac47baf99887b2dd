use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid input: factorial is undefined for negative number {value}")]
    InvalidInput { value: i64 },

    #[error("Invalid digit sequence: {value:?}")]
    InvalidDigitSequence { value: String },

    #[error("Number {value} is out of range: must be between {min} and {max}")]
    OutOfRange { value: i64, min: i64, max: i64 },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl CalcError {
    /// Caller contract violations, as opposed to failures inside the host.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::InvalidDigitSequence { .. }
                | CalcError::OutOfRange { .. }
                | CalcError::InvalidRequest { .. }
        )
    }

    pub fn status_code(&self) -> u16 {
        if self.is_client_error() {
            400
        } else {
            500
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InvalidInput { .. } => {
                "Factorial is only defined for non-negative numbers".to_string()
            }
            CalcError::InvalidDigitSequence { value } => {
                format!("'{}' is not a non-negative decimal number", value)
            }
            CalcError::OutOfRange { min, max, .. } => {
                format!("Number must be between {} and {}", min, max)
            }
            CalcError::InvalidRequest { message } => message.clone(),
            CalcError::ConfigError { .. } | CalcError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            CalcError::IoError(_) | CalcError::SerializationError(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
