//! Session Controls
//!
//! Stands in for the parts of the client that normally feed the store
//! (signaling, authentication, the toolbox). Every change is sent back as an
//! action.

use crate::components::{Button, ButtonVariant};
use crate::events::{Action, UiCommand};
use crate::models::{ConferenceInfo, Participant, ParticipantRole, SessionConfig, SessionState};
use egui::{Color32, FontId, RichText, Vec2};

pub const CONTROLS_WIDTH: f32 = 280.0;

const DEFAULT_ROOM: &str = "demo-room";

/// Renders the controls and returns the action for whatever changed
pub fn render_session_controls(ui: &mut egui::Ui, state: &SessionState) -> Option<UiCommand> {
    let mut action = None;

    egui::Frame::new()
        .fill(Color32::from_rgb(31, 41, 55))
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_min_height(ui.available_height());
            render_header(ui);

            section(ui, "Local participant");
            action = action.take().or(render_role_selector(ui, state));
            action = action.take().or(render_guest_toggle(ui, state));

            section(ui, "Conference");
            action = action.take().or(render_conference_toggles(ui, state));

            section(ui, "Session config");
            action = action.take().or(render_session_config(ui, state.config));

            section(ui, "Layout");
            action = action.take().or(render_layout_toggles(ui, state));

            section(ui, "Remote participants");
            action = action.take().or(render_participant_buttons(ui, state));
        });

    action.map(UiCommand::Dispatch)
}

fn render_header(ui: &mut egui::Ui) {
    ui.label(
        RichText::new("⚙ Session")
            .font(FontId::proportional(22.0))
            .color(Color32::WHITE),
    );
    ui.add_space(6.0);
    ui.separator();
}

fn section(ui: &mut egui::Ui, title: &str) {
    ui.add_space(12.0);
    ui.label(
        RichText::new(title)
            .font(FontId::proportional(14.0))
            .color(Color32::LIGHT_GRAY),
    );
    ui.add_space(4.0);
}

fn render_role_selector(ui: &mut egui::Ui, state: &SessionState) -> Option<Action> {
    let Some(local) = &state.local_participant else {
        ui.label(RichText::new("No local participant").color(Color32::GRAY));
        return None;
    };

    let mut role = local.role;
    ui.horizontal(|ui| {
        for option in [
            ParticipantRole::Moderator,
            ParticipantRole::Participant,
            ParticipantRole::Visitor,
        ] {
            ui.radio_value(&mut role, option, option.label());
        }
    });

    (role != local.role).then(|| {
        Action::SetLocalParticipant(Participant {
            role,
            ..local.clone()
        })
    })
}

fn render_guest_toggle(ui: &mut egui::Ui, state: &SessionState) -> Option<Action> {
    let mut is_guest = state.is_guest;
    ui.checkbox(&mut is_guest, "Guest");
    (is_guest != state.is_guest).then_some(Action::SetGuest(is_guest))
}

fn render_conference_toggles(ui: &mut egui::Ui, state: &SessionState) -> Option<Action> {
    let joined = state.conference.is_some();
    let supports_sip = state.conference_supports_sip();
    let room_name = state
        .conference
        .as_ref()
        .map(|conference| conference.room_name().to_string())
        .unwrap_or_else(|| DEFAULT_ROOM.to_string());

    let mut want_joined = joined;
    let mut want_sip = supports_sip;
    ui.checkbox(&mut want_joined, format!("Joined {}", room_name));
    ui.add_enabled_ui(joined, |ui| {
        ui.checkbox(&mut want_sip, "SIP gateway");
    });

    if want_joined != joined {
        return Some(if want_joined {
            Action::ConferenceJoined(ConferenceInfo::new(room_name, want_sip).into_handle())
        } else {
            Action::ConferenceLeft
        });
    }
    (want_sip != supports_sip)
        .then(|| Action::ConferenceJoined(ConferenceInfo::new(room_name, want_sip).into_handle()))
}

fn render_session_config(ui: &mut egui::Ui, current: SessionConfig) -> Option<Action> {
    let mut config = current;
    ui.checkbox(
        &mut config.enable_user_roles_based_on_token,
        "Roles from token",
    );
    ui.checkbox(&mut config.i_am_recorder, "Recorder session");
    (config != current).then_some(Action::UpdateSessionConfig(config))
}

fn render_layout_toggles(ui: &mut egui::Ui, state: &SessionState) -> Option<Action> {
    let mut toolbox_visible = state.toolbox.visible;
    let mut remote_videos_visible = state.filmstrip.remote_videos_visible;
    ui.checkbox(&mut toolbox_visible, "Toolbox visible");
    ui.checkbox(&mut remote_videos_visible, "Remote videos visible");

    if toolbox_visible != state.toolbox.visible {
        return Some(Action::SetToolboxVisible(toolbox_visible));
    }
    (remote_videos_visible != state.filmstrip.remote_videos_visible)
        .then_some(Action::SetRemoteVideosVisible(remote_videos_visible))
}

fn render_participant_buttons(ui: &mut egui::Ui, state: &SessionState) -> Option<Action> {
    let mut action = None;
    let count = state.remote_participants.len();

    ui.horizontal(|ui| {
        if Button::new("Add")
            .variant(ButtonVariant::Secondary)
            .min_size(Vec2::new(70.0, 28.0))
            .show(ui)
            .clicked()
        {
            let number = next_guest_number(state);
            action = Some(Action::ParticipantJoined(Participant::new(
                format!("remote-{}", number),
                format!("Guest {}", number),
                ParticipantRole::Participant,
            )));
        }

        let last = state.remote_participants.last();
        let remove = ui
            .add_enabled(last.is_some(), egui::Button::new("Remove last"))
            .clicked();
        if remove {
            action = last.map(|participant| Action::ParticipantLeft(participant.id.clone()));
        }

        ui.label(RichText::new(format!("{} in call", count)).color(Color32::GRAY));
    });

    action
}

/// Smallest guest number whose id is not taken
fn next_guest_number(state: &SessionState) -> usize {
    (1..)
        .find(|n| state.remote_participant(&format!("remote-{}", n)).is_none())
        .unwrap_or(1)
}
