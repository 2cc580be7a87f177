use thiserror::Error;

/// Failures that happen before the API produced a response.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Transport(_) => super::EXIT_TRANSPORT,
        }
    }
}
