use thiserror::Error;

#[derive(Error, Debug)]
pub enum DifflyError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No git repository found")]
    NotARepository,

    #[error("VCS command failed: {0}")]
    VcsCommand(String),

    #[error("Stored view state corrupted: {0}")]
    CorruptedState(String),
}

pub type Result<T> = std::result::Result<T, DifflyError>;
