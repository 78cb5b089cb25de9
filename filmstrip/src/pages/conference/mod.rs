//! Conference Page
//!
//! Session controls on the left, the filmstrip on the right and a stage in
//! between that shows what the store currently holds.

mod filmstrip;
mod session_controls;
mod stage;

use crate::config::InterfaceConfig;
use crate::events::UiCommand;
use crate::models::SessionState;
use crate::visibility::VisibilityFlags;

pub use filmstrip::FILMSTRIP_WIDTH;

/// What one frame of the page produced
#[derive(Debug, Default)]
pub struct PageOutput {
    pub command: Option<UiCommand>,
    /// Pointer is inside the local thumbnail region
    pub local_hovered: bool,
    /// Pointer is inside the remote thumbnails region
    pub remote_hovered: bool,
}

pub struct ConferencePage;

impl ConferencePage {
    pub fn show(
        ui: &mut egui::Ui,
        state: &SessionState,
        flags: &VisibilityFlags,
        config: &InterfaceConfig,
        hover_pending: bool,
    ) -> PageOutput {
        let mut output = PageOutput::default();

        egui::SidePanel::left("session_controls")
            .resizable(false)
            .exact_width(session_controls::CONTROLS_WIDTH)
            .show_inside(ui, |ui| {
                output.command = session_controls::render_session_controls(ui, state);
            });

        egui::SidePanel::right("filmstrip")
            .resizable(false)
            .exact_width(FILMSTRIP_WIDTH)
            .show_inside(ui, |ui| {
                let strip = filmstrip::render_filmstrip(ui, state, flags, config);
                output.local_hovered = strip.local_hovered;
                output.remote_hovered = strip.remote_hovered;
                if strip.command.is_some() {
                    output.command = strip.command;
                }
            });

        egui::CentralPanel::default().show_inside(ui, |ui| {
            stage::render_stage(ui, state, flags, hover_pending);
        });

        output
    }
}
