//! Filmstrip View
//!
//! Renders the strip from the projected flags. The two thumbnail regions are
//! measured after layout so the controller can turn pointer containment into
//! hover edges.

use super::PageOutput;
use crate::components::{render_empty_tile, render_invite_button, render_thumbnail, render_toolbox};
use crate::config::InterfaceConfig;
use crate::models::SessionState;
use crate::visibility::{FilmstripLayout, VisibilityFlags};
use egui::{Color32, RichText, Vec2};

pub const FILMSTRIP_WIDTH: f32 = 220.0;

const THUMBNAIL_HEIGHT: f32 = 120.0;
const REDUCED_THUMBNAIL_HEIGHT: f32 = 90.0;

/// Renders the filmstrip container and its children
pub fn render_filmstrip(
    ui: &mut egui::Ui,
    state: &SessionState,
    flags: &VisibilityFlags,
    config: &InterfaceConfig,
) -> PageOutput {
    let layout = FilmstripLayout::derive(flags, config);
    let mut output = PageOutput::default();

    let tile_height = if layout.reduced_height {
        REDUCED_THUMBNAIL_HEIGHT
    } else {
        THUMBNAIL_HEIGHT
    };
    let tile_size = Vec2::new(FILMSTRIP_WIDTH - 24.0, tile_height);

    ui.add_space(8.0);
    ui.label(
        RichText::new(layout.class_names())
            .monospace()
            .size(11.0)
            .color(Color32::GRAY),
    );
    ui.add_space(8.0);

    if layout.show_toolbox {
        output.command = render_toolbox(ui, &config.toolbar_buttons, state.toolbox.docked);
        ui.add_space(8.0);
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        let remote = ui.scope(|ui| render_remote_thumbnails(ui, state, &layout, tile_size));
        output.remote_hovered = ui.rect_contains_pointer(remote.response.rect);

        ui.add_space(12.0);

        let local = ui.scope(|ui| {
            let mut command = None;
            if layout.show_invite_button {
                command = render_invite_button(ui, flags);
                ui.add_space(6.0);
            }
            match &state.local_participant {
                Some(participant) => render_thumbnail(ui, participant, tile_size, true),
                None => render_empty_tile(ui, tile_size, "Not joined"),
            }
            command
        });
        output.local_hovered = ui.rect_contains_pointer(local.response.rect);
        if local.inner.is_some() {
            output.command = local.inner;
        }
    });

    output
}

fn render_remote_thumbnails(
    ui: &mut egui::Ui,
    state: &SessionState,
    layout: &FilmstripLayout,
    tile_size: Vec2,
) {
    if layout.video_hidden {
        render_empty_tile(ui, Vec2::new(tile_size.x, 32.0), "Remote videos hidden");
        return;
    }

    if state.remote_participants.is_empty() {
        render_empty_tile(ui, tile_size, "Nobody else is here");
        return;
    }

    for participant in &state.remote_participants {
        render_thumbnail(ui, participant, tile_size, false);
        ui.add_space(6.0);
    }
}
