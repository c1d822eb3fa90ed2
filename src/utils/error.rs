use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
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

    #[error("Arithmetic overflow: {a} + {b} does not fit in i64")]
    ArithmeticOverflow { a: i64, b: i64 },
}

impl CheckError {
    /// Process exit code for this error: 2 for bad input, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::ArithmeticOverflow { .. } => 2,
            CheckError::SerializationError(_)
            | CheckError::IoError(_)
            | CheckError::ConfigError { .. }
            | CheckError::InvalidConfigValueError { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
