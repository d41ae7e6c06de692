use crate::process::ProcessError;
use crate::shell::vars::VariableError;

#[derive(Debug)]
pub enum ShellError {
    Io(std::io::Error),
    InvalidCommand,
    FlagError(String),
    Variable(VariableError),
    Process(ProcessError),
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<VariableError> for ShellError {
    fn from(err: VariableError) -> Self {
        ShellError::Variable(err)
    }
}

impl From<ProcessError> for ShellError {
    fn from(err: ProcessError) -> Self {
        ShellError::Process(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::InvalidCommand => write!(f, "Invalid command"),
            ShellError::FlagError(msg) => write!(f, "Flag error: {}", msg),
            ShellError::Variable(e) => write!(f, "Variable error: {}", e),
            ShellError::Process(e) => write!(f, "Process error: {}", e),
        }
    }
}

impl std::error::Error for ShellError {}
