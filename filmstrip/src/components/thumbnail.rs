//! Thumbnail Placeholder
//!
//! Stands in for a participant's video. Real thumbnails are rendered by the
//! media layer; the filmstrip only reserves their space.

use crate::models::Participant;
use egui::{Color32, FontId, RichText, Vec2};

const THUMBNAIL_FILL: Color32 = Color32::from_rgb(45, 55, 72);

/// Renders a placeholder tile with the participant's name and role
pub fn render_thumbnail(ui: &mut egui::Ui, participant: &Participant, size: Vec2, is_local: bool) {
    let caption = if is_local {
        format!("{} (You)", participant.name)
    } else {
        participant.name.clone()
    };

    egui::Frame::new()
        .fill(THUMBNAIL_FILL)
        .corner_radius(6.0)
        .show(ui, |ui| {
            ui.set_min_size(size);
            ui.set_max_width(size.x);
            ui.vertical_centered(|ui| {
                ui.add_space((size.y / 2.0 - 18.0).max(0.0));
                ui.label(
                    RichText::new(caption)
                        .font(FontId::proportional(14.0))
                        .color(Color32::WHITE),
                );
                ui.label(
                    RichText::new(participant.role.label())
                        .font(FontId::proportional(11.0))
                        .color(Color32::GRAY),
                );
            });
        });
}

/// Renders an empty tile with a short message
pub fn render_empty_tile(ui: &mut egui::Ui, size: Vec2, text: &str) {
    egui::Frame::new()
        .fill(THUMBNAIL_FILL)
        .corner_radius(6.0)
        .show(ui, |ui| {
            ui.set_min_size(size);
            ui.set_max_width(size.x);
            ui.vertical_centered(|ui| {
                ui.add_space((size.y / 2.0 - 10.0).max(0.0));
                ui.label(RichText::new(text).size(12.0).color(Color32::GRAY));
            });
        });
}
