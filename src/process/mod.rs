use std::fmt;

pub mod executor;

pub use executor::CommandExecutor;

#[derive(Debug)]
pub enum ProcessError {
    ForkFailed(String),
    InvalidArgument(String),
    Other(String),
}

impl From<std::io::Error> for ProcessError {
    fn from(e: std::io::Error) -> Self {
        ProcessError::Other(e.to_string())
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::ForkFailed(msg) => write!(f, "Could not fork: {}", msg),
            ProcessError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            ProcessError::Other(msg) => write!(f, "Other error: {}", msg),
        }
    }
}
