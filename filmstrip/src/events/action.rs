use crate::models::{ConferenceHandle, Participant, SessionConfig};
use std::sync::Arc;

/// State updates dispatched to the shared store
#[derive(Clone, Debug)]
pub enum Action {
    // --- Filmstrip ---
    SetFilmstripHovered(bool),
    SetRemoteVideosVisible(bool),

    // --- Toolbox ---
    /// Attach (true) or release (false) the toolbox
    DockToolbox(bool),
    SetToolboxVisible(bool),

    // --- Session ---
    SetLocalParticipant(Participant),
    SetGuest(bool),
    UpdateSessionConfig(SessionConfig),

    // --- Conference ---
    ConferenceJoined(ConferenceHandle),
    ConferenceLeft,
    ParticipantJoined(Participant),
    ParticipantLeft(String), // participant id
}

impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        use Action::*;
        match (self, other) {
            (SetFilmstripHovered(a), SetFilmstripHovered(b))
            | (SetRemoteVideosVisible(a), SetRemoteVideosVisible(b))
            | (DockToolbox(a), DockToolbox(b))
            | (SetToolboxVisible(a), SetToolboxVisible(b))
            | (SetGuest(a), SetGuest(b)) => a == b,
            (SetLocalParticipant(a), SetLocalParticipant(b))
            | (ParticipantJoined(a), ParticipantJoined(b)) => a == b,
            (UpdateSessionConfig(a), UpdateSessionConfig(b)) => a == b,
            (ConferenceJoined(a), ConferenceJoined(b)) => Arc::ptr_eq(a, b),
            (ConferenceLeft, ConferenceLeft) => true,
            (ParticipantLeft(a), ParticipantLeft(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConferenceInfo;

    #[test]
    fn test_bool_actions_compare_by_variant_and_value() {
        assert_eq!(Action::DockToolbox(true), Action::DockToolbox(true));
        assert_ne!(Action::DockToolbox(true), Action::DockToolbox(false));
        assert_ne!(
            Action::DockToolbox(true),
            Action::SetFilmstripHovered(true)
        );
    }

    #[test]
    fn test_conference_actions_compare_by_handle() {
        let handle = ConferenceInfo::new("room", false).into_handle();
        let same = Action::ConferenceJoined(Arc::clone(&handle));
        let other = Action::ConferenceJoined(ConferenceInfo::new("room", false).into_handle());

        assert_eq!(Action::ConferenceJoined(handle), same);
        assert_ne!(same, other);
    }
}
