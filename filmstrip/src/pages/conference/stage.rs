//! Stage
//!
//! Read-out of the values the filmstrip is driven by.

use crate::models::SessionState;
use crate::visibility::VisibilityFlags;
use egui::{Color32, FontId, RichText};

pub fn render_stage(
    ui: &mut egui::Ui,
    state: &SessionState,
    flags: &VisibilityFlags,
    hover_pending: bool,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.label(
            RichText::new("Filmstrip")
                .font(FontId::proportional(28.0))
                .color(Color32::WHITE),
        );
        ui.add_space(20.0);
    });

    egui::Frame::new()
        .fill(Color32::from_rgb(31, 41, 55))
        .corner_radius(8.0)
        .inner_margin(20.0)
        .show(ui, |ui| {
            egui::Grid::new("stage_values")
                .num_columns(2)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    row(ui, "filmstrip.hovered", state.filmstrip.hovered);
                    row(ui, "toolbox.docked", state.toolbox.docked);
                    row(ui, "notify pending", hover_pending);
                    row(ui, "add to call", flags.is_add_to_call_available);
                    row(ui, "dial out", flags.is_dial_out_available);
                    row(ui, "hide invite", flags.hide_invite_button);
                    row(ui, "toolbox visible", flags.toolbox_visible);
                    row(ui, "remote videos", flags.remote_videos_visible);
                });
        });
}

fn row(ui: &mut egui::Ui, name: &str, value: bool) {
    let color = if value {
        Color32::from_rgb(100, 220, 120)
    } else {
        Color32::GRAY
    };
    ui.label(RichText::new(name).monospace().color(Color32::LIGHT_GRAY));
    ui.label(RichText::new(value.to_string()).monospace().color(color));
    ui.end_row();
}
