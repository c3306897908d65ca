use crate::exceptions::DrynessError;
use crate::models::Prediction;

/// Progress of a single upload, from selection to verdict.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UploadState {
    #[default]
    Idle,
    Loading {
        filename: String,
    },
    Done(Prediction),
    Failed(String),
}

impl UploadState {
    /// Starting a new upload discards whatever result or error was shown before.
    pub fn begin(&mut self, filename: &str) {
        *self = UploadState::Loading {
            filename: filename.to_string(),
        };
    }

    /// Only a loading state can finish; anything else is left untouched.
    pub fn finish(&mut self, outcome: Result<Prediction, DrynessError>) {
        if !self.is_loading() {
            tracing::debug!("Ignoring upload outcome while not loading");
            return;
        }
        *self = match outcome {
            Ok(prediction) => UploadState::Done(prediction),
            Err(e) => UploadState::Failed(e.to_string()),
        };
    }

    pub fn reset(&mut self) {
        *self = UploadState::Idle;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UploadState::Loading { .. })
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            UploadState::Done(p) => Some(p),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UploadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
