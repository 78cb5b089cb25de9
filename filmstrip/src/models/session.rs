//! Session State
//!
//! Snapshot of everything the filmstrip reads from the shared store.

use super::conference::ConferenceHandle;
use super::participant::{Participant, ParticipantRole};

/// Deployment flags that travel with the session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Apply role restrictions derived from the authentication token
    pub enable_user_roles_based_on_token: bool,
    /// This client is a recorder bot rather than a person
    pub i_am_recorder: bool,
}

/// Filmstrip slice of the shared state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilmstripState {
    /// Last hover value pushed by the filmstrip (or set by another actor)
    pub hovered: bool,
    /// Whether remote thumbnails should be shown at all
    pub remote_videos_visible: bool,
}

/// Toolbox slice of the shared state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToolboxState {
    pub visible: bool,
    pub docked: bool,
}

/// Shared session state held by the store.
///
/// Every field may be absent or default; readers treat missing data as false.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub conference: Option<ConferenceHandle>,
    pub config: SessionConfig,
    pub is_guest: bool,
    pub local_participant: Option<Participant>,
    pub remote_participants: Vec<Participant>,
    pub filmstrip: FilmstripState,
    pub toolbox: ToolboxState,
}

impl SessionState {
    /// Role of the local participant, if one has been set
    pub fn local_role(&self) -> Option<ParticipantRole> {
        self.local_participant.as_ref().map(|p| p.role)
    }

    /// SIP support of the active conference; false when there is none
    pub fn conference_supports_sip(&self) -> bool {
        self.conference
            .as_ref()
            .is_some_and(|conference| conference.is_sip_calling_supported())
    }

    pub fn remote_participant(&self, id: &str) -> Option<&Participant> {
        self.remote_participants.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConferenceInfo;

    #[test]
    fn test_default_state_is_all_falsy() {
        let state = SessionState::default();
        assert!(state.local_role().is_none());
        assert!(!state.conference_supports_sip());
        assert!(!state.filmstrip.hovered);
        assert!(!state.toolbox.visible);
    }

    #[test]
    fn test_conference_supports_sip() {
        let state = SessionState {
            conference: Some(ConferenceInfo::new("room", true).into_handle()),
            ..Default::default()
        };
        assert!(state.conference_supports_sip());
    }
}
