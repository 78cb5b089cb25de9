//! Invite Button
//!
//! Entry point to the invite dialog, shown above the local thumbnail.

use super::{Button, ButtonVariant};
use crate::events::UiCommand;
use crate::visibility::VisibilityFlags;
use egui::Vec2;

/// Renders the invite affordance; returns a command when clicked
pub fn render_invite_button(ui: &mut egui::Ui, flags: &VisibilityFlags) -> Option<UiCommand> {
    let tooltip = match (flags.is_add_to_call_available, flags.is_dial_out_available) {
        (true, true) => "Invite people or dial a phone number",
        (false, true) => "Dial a phone number",
        _ => "Invite people",
    };

    let clicked = Button::new("＋ Invite")
        .variant(ButtonVariant::Primary)
        .min_size(Vec2::new(ui.available_width(), 32.0))
        .tooltip(tooltip)
        .show(ui)
        .clicked();

    clicked.then_some(UiCommand::OpenInvite)
}
