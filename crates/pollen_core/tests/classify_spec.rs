//! End-to-end scenarios for the classification service, driven through real
//! files on disk.

use anyhow::Result;
use pollen_core::{Classifier, ClassifyError, MockClassifier, UploadedImage, catalog};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, size: usize) -> Result<PathBuf> {
    let path = dir.path().join(name);
    let mut f = File::create(&path)?;
    f.write_all(&vec![0u8; size])?;
    Ok(path)
}

#[test]
fn two_megabyte_jpeg_resolves_to_a_catalog_species() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_file(&dir, "grain.jpg", 2 * 1024 * 1024)?;
    let image = UploadedImage::from_path(&path)?;

    let prediction = MockClassifier::with_latency(0..0)
        .classify(&image)
        .expect("valid image classifies");

    assert!(catalog::species_catalog().contains(&prediction));
    assert!((0.85..=0.96).contains(&prediction.confidence));

    // Descending by probability, the winning species leads the table.
    let mut probs = prediction.probabilities.clone().unwrap();
    probs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    assert_eq!(probs[0].0, prediction.label);
    assert_eq!(probs[0].1, prediction.confidence);
    Ok(())
}

#[test]
fn eleven_megabyte_png_reports_the_size_error() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_file(&dir, "huge.png", 11 * 1024 * 1024)?;
    let image = UploadedImage::from_path(&path)?;
    assert!(image.is_image());

    let err = MockClassifier::with_latency(0..0)
        .classify(&image)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Image file is too large. Please upload an image smaller than 10MB"
    );
    Ok(())
}

#[test]
fn text_file_is_rejected_at_capture_and_at_the_service() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_file(&dir, "notes.txt", 64)?;
    let image = UploadedImage::from_path(&path)?;

    // Upload capture filters on this and never forwards the file.
    assert!(!image.is_image());

    // Even if invoked directly, the service fails with the type message.
    let err = MockClassifier::with_latency(0..0)
        .classify(&image)
        .unwrap_err();
    assert_eq!(err, ClassifyError::InvalidFileType);
    assert_eq!(
        err.to_string(),
        "Please upload a valid image file (JPG, PNG, WebP)"
    );
    Ok(())
}
