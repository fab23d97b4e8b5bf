//! Result presentation. Renders exactly one of: the loading view, the error
//! view, the result card, or (with no selection) the empty-state card.

use super::UiApp;
use eframe::egui;
use pollen_core::Prediction;
use std::cmp::Ordering;

impl UiApp {
    pub(super) fn render_results_panel(&self, ui: &mut egui::Ui) {
        ui.heading("Analysis results");
        ui.add_space(8.0);

        if self.session.is_loading() {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.add(egui::Spinner::new().size(32.0));
                ui.add_space(8.0);
                ui.label(egui::RichText::new("Analyzing Pollen Sample").strong());
                ui.weak("Processing morphological features...");
            });
            return;
        }

        if let Some(message) = self.session.error() {
            let error_color = ui.visuals().error_fg_color;
            egui::Frame::group(ui.style())
                .stroke(egui::Stroke::new(1.0, error_color))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new("Analysis Failed")
                            .color(error_color)
                            .strong(),
                    );
                    ui.label(message);
                });
            return;
        }

        if let Some(prediction) = self.session.result() {
            render_prediction(ui, prediction);
            return;
        }

        if self.session.selection().is_none() {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(egui::RichText::new("Ready for Analysis").strong());
                ui.weak(
                    "Upload a microscopic pollen grain image to begin species \
                     identification for the Brazilian Cerrado.",
                );
            });
        }
    }
}

fn render_prediction(ui: &mut egui::Ui, prediction: &Prediction) {
    ui.label(egui::RichText::new("Analysis Complete").strong());
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(&prediction.label).heading().italics());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!(
                "{} confidence",
                format_percent(prediction.confidence)
            ));
        });
    });

    let ranked = sorted_probabilities(prediction);
    if !ranked.is_empty() {
        ui.add_space(12.0);
        ui.label(egui::RichText::new("Probability distribution").strong());
        ui.add_space(4.0);
        for (species, probability) in ranked {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(species).italics());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format_percent(probability));
                });
            });
            ui.add(egui::ProgressBar::new(probability).desired_height(6.0));
            ui.add_space(4.0);
        }
    }
}

/// Probability entries in descending order. The sort is stable, so equal
/// probabilities keep the order the model emitted them in.
fn sorted_probabilities(prediction: &Prediction) -> Vec<(&str, f32)> {
    let mut entries: Vec<(&str, f32)> = prediction
        .probabilities
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|(species, p)| (species.as_str(), *p))
        .collect();
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    entries
}

fn format_percent(probability: f32) -> String {
    format!("{:.1}%", probability * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pollen_core::catalog;
    use rstest::rstest;

    #[rstest]
    #[case(0.92, "92.0%")]
    #[case(0.855, "85.5%")]
    #[case(0.0, "0.0%")]
    #[case(1.0, "100.0%")]
    #[case(0.0449, "4.5%")]
    fn percentages_use_one_decimal_place(#[case] p: f32, #[case] expected: &str) {
        assert_eq!(format_percent(p), expected);
    }

    #[test]
    fn probability_list_is_non_increasing_for_every_catalog_record() {
        for record in catalog::species_catalog() {
            let ranked = sorted_probabilities(record);
            assert!(!ranked.is_empty(), "{}", record.label);
            assert!(
                ranked.windows(2).all(|w| w[0].1 >= w[1].1),
                "{} is not sorted",
                record.label
            );
            assert_eq!(ranked[0].0, record.label);
            assert_eq!(ranked[0].1, record.confidence);
        }
    }

    #[test]
    fn ties_keep_emitted_order() {
        let prediction = Prediction {
            label: "Mauritia flexuosa".to_string(),
            confidence: 0.96,
            probabilities: Some(vec![
                ("Mauritia flexuosa".to_string(), 0.96),
                ("Syagrus oleracea".to_string(), 0.02),
                ("Attalea speciosa".to_string(), 0.01),
                ("Acrocomia aculeata".to_string(), 0.01),
            ]),
        };
        let ranked = sorted_probabilities(&prediction);
        let names: Vec<&str> = ranked.iter().map(|(s, _)| *s).collect();
        assert_eq!(
            names,
            vec![
                "Mauritia flexuosa",
                "Syagrus oleracea",
                "Attalea speciosa",
                "Acrocomia aculeata"
            ]
        );
    }

    #[test]
    fn missing_probabilities_yield_an_empty_list() {
        let prediction = Prediction {
            label: "Dipteryx alata".to_string(),
            confidence: 0.87,
            probabilities: None,
        };
        assert!(sorted_probabilities(&prediction).is_empty());
    }
}
