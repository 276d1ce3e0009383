use catalog_client::TransportError;
use catalog_core::ValidationErrors;

/// Failure of a create or update.
///
/// Callers tell the two kinds apart by variant: `Invalid` never reached the
/// network and carries the per-field messages to render inline; `Transport`
/// has also been written to the view-model's error slot.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The form is missing required fields. No request was sent.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    /// The store API request failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SaveError {
    /// Field messages, if this is a validation failure.
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            SaveError::Invalid(errors) => Some(errors),
            SaveError::Transport(_) => None,
        }
    }
}
