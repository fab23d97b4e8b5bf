//! Application state and frame loop for the pollen analysis UI.

mod results;
mod session;
mod upload;

use eframe::{App, Frame, egui};
use pollen_core::{Classifier, ClassifyError, Prediction, UploadedImage};
use session::AnalysisSession;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

/// Resolution of one classification request, tagged with its token.
type Outcome = (u64, Result<Prediction, ClassifyError>);

const PREVIEW_SIZE: u32 = 512;

pub struct UiApp {
    classifier: Arc<dyn Classifier>,
    session: AnalysisSession,
    // At most one live preview texture; replaced on re-selection.
    preview: Option<egui::TextureHandle>,
    outcome_tx: Sender<Outcome>,
    outcome_rx: Receiver<Outcome>,
}

impl UiApp {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        let (outcome_tx, outcome_rx) = channel();
        Self {
            classifier,
            session: AnalysisSession::default(),
            preview: None,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Single entry point for both capture sources. `None` clears the
    /// selection; non-image files are dropped without surfacing an error.
    fn select_file(&mut self, ctx: &egui::Context, image: Option<UploadedImage>) {
        let Some(image) = image else {
            self.session.clear();
            self.preview = None;
            return;
        };
        if !image.is_image() {
            tracing::debug!("ignoring non-image selection: {}", image.name);
            return;
        }
        tracing::info!("analyzing {} ({} bytes)", image.name, image.size_bytes);
        self.load_preview(ctx, &image);
        let token = self.session.begin(image.clone());
        self.spawn_classification(ctx.clone(), token, image);
    }

    fn spawn_classification(&self, ctx: egui::Context, token: u64, image: UploadedImage) {
        let classifier = Arc::clone(&self.classifier);
        let tx = self.outcome_tx.clone();
        thread::spawn(move || {
            // A panicking classifier must still resolve its request.
            let outcome = catch_unwind(AssertUnwindSafe(|| classifier.classify(&image)))
                .unwrap_or(Err(ClassifyError::Network));
            if tx.send((token, outcome)).is_ok() {
                ctx.request_repaint();
            }
        });
    }

    fn load_preview(&mut self, ctx: &egui::Context, image: &UploadedImage) {
        // Release the previous texture before decoding the replacement.
        self.preview = None;
        match image::open(&image.path) {
            Ok(img) => {
                let scaled = image::imageops::thumbnail(&img, PREVIEW_SIZE, PREVIEW_SIZE);
                let (w, h) = scaled.dimensions();
                let pixels = scaled.into_raw();
                let color =
                    egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels);
                let name = format!("preview:{}", image.path.display());
                self.preview = Some(ctx.load_texture(name, color, egui::TextureOptions::LINEAR));
            }
            Err(e) => {
                tracing::warn!("failed to load preview for {}: {e}", image.path.display());
            }
        }
    }

    fn drain_outcomes(&mut self) {
        while let Ok((token, outcome)) = self.outcome_rx.try_recv() {
            if !self.session.apply(token, outcome) {
                tracing::debug!("dropping outcome of superseded request {token}");
            }
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        // Only the first file of a drop is considered.
        if let Some(path) = dropped.into_iter().filter_map(|f| f.path).next() {
            match UploadedImage::from_path(&path) {
                Ok(image) => self.select_file(ctx, Some(image)),
                Err(e) => tracing::warn!("cannot read dropped file: {e:#}"),
            }
        }
    }
}

impl App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.drain_outcomes();
        self.handle_dropped_files(ctx);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Pollen Vision");
                ui.label("Cerrado pollen species identification");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(format!("v{}", env!("POLLEN_VISION_VERSION")));
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |cols| {
                self.render_upload_panel(ctx, &mut cols[0]);
                self.render_results_panel(&mut cols[1]);
            });
        });
    }
}
