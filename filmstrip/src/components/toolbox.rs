//! Embedded Toolbox
//!
//! The toolbar variant rendered inside the filmstrip when the client shows
//! nothing but the filmstrip.

use super::{Button, ButtonVariant};
use crate::events::UiCommand;
use egui::{Color32, RichText, Vec2};

/// Renders one button per configured toolbar entry
pub fn render_toolbox(ui: &mut egui::Ui, buttons: &[String], docked: bool) -> Option<UiCommand> {
    let mut command = None;

    ui.horizontal_wrapped(|ui| {
        for name in buttons {
            if Button::new(name)
                .variant(ButtonVariant::Ghost)
                .min_size(Vec2::new(64.0, 28.0))
                .text_size(12.0)
                .show(ui)
                .clicked()
            {
                command = Some(UiCommand::ToolbarButton(name.clone()));
            }
        }
    });

    let state = if docked { "docked" } else { "floating" };
    ui.label(RichText::new(state).size(11.0).color(Color32::GRAY));

    command
}
