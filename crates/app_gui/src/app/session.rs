//! Selection, loading, and outcome state for the classification flow.

use pollen_core::{ClassifyError, Prediction, UploadedImage};

/// The one stateful coordinator: holds the current selection and the outcome
/// of its classification attempt.
///
/// Supersession is enforced with a monotonically increasing request token
/// rather than by cancelling workers: every `begin` or `clear` bumps `seq`,
/// and an outcome only lands if it carries the current token. All mutation
/// happens on the UI thread, so no locking is involved.
#[derive(Default)]
pub struct AnalysisSession {
    selection: Option<UploadedImage>,
    loading: bool,
    result: Option<Prediction>,
    error: Option<String>,
    seq: u64,
}

impl AnalysisSession {
    /// Starts a new classification attempt for `image` and returns the token
    /// its outcome must present. Any previous result or error is cleared.
    pub fn begin(&mut self, image: UploadedImage) -> u64 {
        self.seq += 1;
        self.selection = Some(image);
        self.loading = true;
        self.result = None;
        self.error = None;
        self.seq
    }

    /// Resets to the empty snapshot. Outstanding requests become stale.
    pub fn clear(&mut self) {
        self.seq += 1;
        self.selection = None;
        self.loading = false;
        self.result = None;
        self.error = None;
    }

    /// Applies a finished request. Returns `false` without touching state
    /// when the token is stale (a newer selection has won).
    pub fn apply(&mut self, token: u64, outcome: Result<Prediction, ClassifyError>) -> bool {
        if token != self.seq {
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(prediction) => self.result = Some(prediction),
            Err(err) => self.error = Some(err.to_string()),
        }
        true
    }

    pub fn selection(&self) -> Option<&UploadedImage> {
        self.selection.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&Prediction> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
