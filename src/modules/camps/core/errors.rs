use thiserror::Error;

use crate::modules::camps::core::repository::RepositoryError;
use crate::modules::camps::core::speaker::SpeakerId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("a speaker is required")]
    SpeakerMissing,

    #[error("speaker {0} could not be found")]
    SpeakerNotFound(SpeakerId),

    #[error("could not build a location for {0}")]
    UnaddressableResource(String),

    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersistenceFailure {
    #[error(transparent)]
    Store(RepositoryError),

    #[error("commit persisted no changes")]
    NothingCommitted,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CampsError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error(transparent)]
    Persistence(#[from] PersistenceFailure),
}

impl From<RepositoryError> for CampsError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::UniqueViolation { moniker } => {
                CampsError::Conflict(format!("moniker {moniker} is already in use"))
            }
            other => CampsError::Persistence(PersistenceFailure::Store(other)),
        }
    }
}

/// Turns a commit outcome into a handler result: `false` is a failure
/// whenever the caller staged a change.
pub fn require_committed(committed: bool) -> Result<(), CampsError> {
    if committed {
        Ok(())
    } else {
        Err(PersistenceFailure::NothingCommitted.into())
    }
}
