use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, GreetError>;
