//! Visibility Projector
//!
//! Maps a session snapshot plus the interface configuration to the flags the
//! filmstrip renders from. Pure: no caching, no side effects, and missing data
//! (no conference, no local participant) simply reads as false.

use crate::config::InterfaceConfig;
use crate::models::SessionState;

/// Display decisions for one render of the filmstrip
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityFlags {
    pub hide_invite_button: bool,
    pub is_add_to_call_available: bool,
    pub is_dial_out_available: bool,
    pub remote_videos_visible: bool,
    pub toolbox_visible: bool,
}

/// Guests cannot add people to the call
pub fn is_add_to_call_available(state: &SessionState) -> bool {
    !state.is_guest
}

/// Dial-out needs a moderator, a conference with a SIP gateway, and, when
/// token-based roles are enforced, a non-guest.
pub fn is_dial_out_available(state: &SessionState) -> bool {
    state.local_role().is_some_and(|role| role.is_moderator())
        && state.conference_supports_sip()
        && (!state.config.enable_user_roles_based_on_token || !state.is_guest)
}

/// Computes the filmstrip's visibility flags
pub fn project(state: &SessionState, config: &InterfaceConfig) -> VisibilityFlags {
    let is_add_to_call_available = is_add_to_call_available(state);
    let is_dial_out_available = is_dial_out_available(state);

    VisibilityFlags {
        hide_invite_button: state.config.i_am_recorder
            || (!is_add_to_call_available && !is_dial_out_available)
            || config.new_toolbox_enabled,
        is_add_to_call_available,
        is_dial_out_available,
        remote_videos_visible: state.filmstrip.remote_videos_visible,
        toolbox_visible: state.toolbox.visible,
    }
}
