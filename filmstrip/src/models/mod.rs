//! Data models for the application
//!
//! Plain data read by the filmstrip: participants, the conference handle and
//! the shared session snapshot.

mod conference;
mod participant;
mod session;

pub use conference::{Conference, ConferenceHandle, ConferenceInfo};
pub use participant::{Participant, ParticipantRole};
pub use session::{FilmstripState, SessionConfig, SessionState, ToolboxState};
