use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    /// Request never completed or the reply wasn't readable JSON.
    #[error("form relay unreachable: {0}")]
    Transport(String),
    /// Relay answered but refused the submission.
    #[error("form relay rejected submission: {}", .0.as_deref().unwrap_or("no reason given"))]
    Application(Option<String>),
}
