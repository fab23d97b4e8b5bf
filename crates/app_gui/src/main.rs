use anyhow::Result;
use eframe::NativeOptions;
use pollen_core::{Classifier, HttpClassifier, MockClassifier};
use std::sync::Arc;

mod app;

use app::UiApp;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let classifier = classifier_from_env();
    let options = NativeOptions::default();
    eframe::run_native(
        "Pollen Vision",
        options,
        Box::new(move |_cc| {
            Ok::<_, Box<dyn std::error::Error + Send + Sync>>(Box::new(UiApp::new(classifier)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("application stopped with error: {e}"))?;
    Ok(())
}

/// Picks the classifier backend: a model server when `POLLEN_API_URL` is set,
/// the built-in mock otherwise.
fn classifier_from_env() -> Arc<dyn Classifier> {
    match std::env::var("POLLEN_API_URL") {
        Ok(url) if !url.trim().is_empty() => {
            tracing::info!("classifying against model server at {url}");
            Arc::new(HttpClassifier::new(url))
        }
        _ => {
            tracing::info!("POLLEN_API_URL not set; using the built-in mock classifier");
            Arc::new(MockClassifier::new())
        }
    }
}
