use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("{0} not found. Please ensure it is installed and in your system's PATH.")]
    ToolNotFound(String),
    #[error("{program} command timed out after {}s.", .timeout.as_secs())]
    TimedOut { program: String, timeout: Duration },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
