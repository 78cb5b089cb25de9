//! Reducer
//!
//! Applies one [`Action`] to the session state and reports whether anything
//! actually changed.

use crate::events::Action;
use crate::models::SessionState;
use std::sync::Arc;

/// Sets `slot` to `value`, returning true if it was different
fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

pub(super) fn reduce(state: &mut SessionState, action: &Action) -> bool {
    match action {
        Action::SetFilmstripHovered(hovered) => replace(&mut state.filmstrip.hovered, *hovered),
        Action::SetRemoteVideosVisible(visible) => {
            replace(&mut state.filmstrip.remote_videos_visible, *visible)
        }
        Action::DockToolbox(docked) => replace(&mut state.toolbox.docked, *docked),
        Action::SetToolboxVisible(visible) => replace(&mut state.toolbox.visible, *visible),
        Action::SetLocalParticipant(participant) => {
            replace(&mut state.local_participant, Some(participant.clone()))
        }
        Action::SetGuest(is_guest) => replace(&mut state.is_guest, *is_guest),
        Action::UpdateSessionConfig(config) => replace(&mut state.config, *config),
        Action::ConferenceJoined(handle) => {
            let same = state
                .conference
                .as_ref()
                .is_some_and(|current| Arc::ptr_eq(current, handle));
            if !same {
                state.conference = Some(Arc::clone(handle));
            }
            !same
        }
        Action::ConferenceLeft => {
            let changed = state.conference.take().is_some() || !state.remote_participants.is_empty();
            state.remote_participants.clear();
            changed
        }
        Action::ParticipantJoined(participant) => {
            match state
                .remote_participants
                .iter_mut()
                .find(|p| p.id == participant.id)
            {
                Some(existing) => replace(existing, participant.clone()),
                None => {
                    state.remote_participants.push(participant.clone());
                    true
                }
            }
        }
        Action::ParticipantLeft(id) => {
            let before = state.remote_participants.len();
            state.remote_participants.retain(|p| &p.id != id);
            state.remote_participants.len() != before
        }
    }
}
