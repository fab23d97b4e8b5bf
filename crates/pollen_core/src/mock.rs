//! Stand-in classifier used until a real model server is available.
//!
//! It never looks at pixel data: after a simulated processing delay it
//! validates the upload's metadata and returns a random catalog record.

use crate::{Classifier, ClassifyError, MAX_UPLOAD_BYTES, Prediction, UploadedImage, catalog};
use rand::seq::SliceRandom;
use rand::{Rng, thread_rng};
use std::ops::Range;
use std::thread;
use std::time::Duration;

/// Simulated processing latency, uniform over this window.
const DEFAULT_LATENCY_MS: Range<u64> = 2000..3500;

pub struct MockClassifier {
    latency_ms: Range<u64>,
}

impl MockClassifier {
    pub fn new() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY_MS,
        }
    }

    /// Same behavior with a custom latency window; pass `0..0` to skip the
    /// delay entirely (tests).
    pub fn with_latency(latency_ms: Range<u64>) -> Self {
        Self { latency_ms }
    }

    fn simulate_processing(&self) {
        if self.latency_ms.is_empty() {
            return;
        }
        let wait = thread_rng().gen_range(self.latency_ms.clone());
        thread::sleep(Duration::from_millis(wait));
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for MockClassifier {
    fn classify(&self, image: &UploadedImage) -> Result<Prediction, ClassifyError> {
        self.simulate_processing();

        if !image.mime_type.starts_with("image/") {
            return Err(ClassifyError::InvalidFileType);
        }
        if image.size_bytes > MAX_UPLOAD_BYTES {
            return Err(ClassifyError::FileTooLarge);
        }

        // An empty catalog would be a packaging fault; surface it as the
        // generic internal failure rather than panicking across the boundary.
        catalog::species_catalog()
            .choose(&mut thread_rng())
            .cloned()
            .ok_or(ClassifyError::Internal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Instant;

    fn upload(name: &str, mime: &str, size_bytes: u64) -> UploadedImage {
        UploadedImage {
            path: PathBuf::from(name),
            name: name.to_string(),
            size_bytes,
            mime_type: mime.to_string(),
        }
    }

    fn instant_mock() -> MockClassifier {
        MockClassifier::with_latency(0..0)
    }

    #[test]
    fn non_image_mime_is_rejected_with_exact_message() {
        let err = instant_mock()
            .classify(&upload("notes.txt", "text/plain", 100))
            .unwrap_err();
        assert_eq!(err, ClassifyError::InvalidFileType);
        assert_eq!(
            err.to_string(),
            "Please upload a valid image file (JPG, PNG, WebP)"
        );
    }

    #[test]
    fn oversized_image_is_rejected_with_exact_message() {
        let err = instant_mock()
            .classify(&upload("big.png", "image/png", MAX_UPLOAD_BYTES + 1))
            .unwrap_err();
        assert_eq!(err, ClassifyError::FileTooLarge);
        assert_eq!(
            err.to_string(),
            "Image file is too large. Please upload an image smaller than 10MB"
        );
    }

    #[test]
    fn type_check_wins_over_size_check() {
        let err = instant_mock()
            .classify(&upload("huge.bin", "application/octet-stream", 50_000_000))
            .unwrap_err();
        assert_eq!(err, ClassifyError::InvalidFileType);
    }

    #[test]
    fn exactly_ten_megabytes_is_accepted() {
        let result = instant_mock().classify(&upload("edge.jpg", "image/jpeg", MAX_UPLOAD_BYTES));
        assert!(result.is_ok());
    }

    #[test]
    fn valid_image_yields_a_catalog_record() {
        let mock = instant_mock();
        for _ in 0..32 {
            let prediction = mock
                .classify(&upload("grain.jpg", "image/jpeg", 2 * 1024 * 1024))
                .unwrap();
            assert!(
                catalog::species_catalog().contains(&prediction),
                "unexpected record: {}",
                prediction.label
            );
            assert!((0.0..=1.0).contains(&prediction.confidence));
            let probs = prediction.probabilities.as_ref().unwrap();
            assert!(probs.iter().any(|(s, _)| *s == prediction.label));
        }
    }

    #[test]
    fn latency_window_lower_bound_is_respected() {
        let mock = MockClassifier::with_latency(50..80);
        let start = Instant::now();
        let _ = mock.classify(&upload("grain.jpg", "image/jpeg", 1024));
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
