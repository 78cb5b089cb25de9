//! Participant Models
//!
//! Defines participant data and conference roles.

/// Role granted to a participant by the conference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParticipantRole {
    /// Can manage the conference and dial out to phone numbers.
    Moderator,
    /// Regular participant.
    #[default]
    Participant,
    /// Joined with restricted, view-only rights.
    Visitor,
}

impl ParticipantRole {
    /// Human-readable label for the role
    pub fn label(&self) -> &'static str {
        match self {
            ParticipantRole::Moderator => "Moderator",
            ParticipantRole::Participant => "Participant",
            ParticipantRole::Visitor => "Visitor",
        }
    }

    pub fn is_moderator(&self) -> bool {
        matches!(self, ParticipantRole::Moderator)
    }
}

/// Participant information
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub role: ParticipantRole,
}

impl Participant {
    /// Creates a new participant
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: ParticipantRole) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
        }
    }
}
