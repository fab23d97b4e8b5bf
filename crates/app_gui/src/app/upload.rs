//! Upload capture: drag-drop target, file picker, and the selected-file card.

use super::UiApp;
use eframe::egui;
use pollen_core::UploadedImage;
use rfd::FileDialog;

const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

impl UiApp {
    pub(super) fn render_upload_panel(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.heading("Upload pollen sample");
        ui.add_space(8.0);
        match self.session.selection().cloned() {
            None => self.render_drop_zone(ctx, ui),
            Some(image) => self.render_selected_card(ctx, ui, &image),
        }
    }

    fn render_drop_zone(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());
        let stroke = if hovering {
            egui::Stroke::new(2.0, ui.visuals().selection.stroke.color)
        } else {
            egui::Stroke::new(1.0, egui::Color32::DARK_GRAY)
        };

        egui::Frame::group(ui.style())
            .stroke(stroke)
            .inner_margin(egui::Margin::same(24))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("Drop your pollen image here").strong());
                    ui.label("or browse your files");
                    ui.add_space(8.0);
                    if ui.button("Browse...").clicked()
                        && let Some(path) = FileDialog::new()
                            .add_filter("Images", &IMAGE_EXTENSIONS)
                            .pick_file()
                    {
                        match UploadedImage::from_path(&path) {
                            Ok(image) => self.select_file(ctx, Some(image)),
                            Err(e) => tracing::warn!("cannot read picked file: {e:#}"),
                        }
                    }
                    ui.add_space(8.0);
                    ui.weak("Supports JPG, PNG, WebP, max 10MB");
                });
            });
    }

    fn render_selected_card(
        &mut self,
        ctx: &egui::Context,
        ui: &mut egui::Ui,
        image: &UploadedImage,
    ) {
        if let Some(texture) = &self.preview {
            let size = texture.size_vec2();
            let scale = (ui.available_width() / size.x).min(1.0);
            let (resp, painter) = ui.allocate_painter(size * scale, egui::Sense::hover());
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            painter.image(texture.id(), uv, resp.rect, egui::Color32::WHITE);
        } else {
            // Decode failed; show a placeholder frame instead of the preview.
            let (resp, painter) =
                ui.allocate_painter(egui::Vec2::splat(120.0), egui::Sense::hover());
            painter.rect_filled(resp.rect, 4.0, egui::Color32::from_gray(40));
            painter.rect_stroke(
                resp.rect,
                4.0,
                egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
                egui::StrokeKind::Inside,
            );
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&image.name).strong());
                ui.weak(format!(
                    "{:.2} MB, ready for analysis",
                    image.size_bytes as f64 / 1024.0 / 1024.0
                ));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Remove").clicked() {
                    self.select_file(ctx, None);
                }
            });
        });
        ui.add_space(4.0);
        ui.weak("Drop another image to replace this sample.");
    }
}
