//! Conference Handle
//!
//! The active conference is owned by the signaling layer; this module only
//! describes what the filmstrip needs to ask it.

use std::fmt;
use std::sync::Arc;

/// Read-only view of the active conference.
pub trait Conference: fmt::Debug + Send + Sync {
    /// Name of the conference room
    fn room_name(&self) -> &str;

    /// Whether a SIP gateway is available for placing outbound calls
    fn is_sip_calling_supported(&self) -> bool;
}

/// Shared handle to the active conference
pub type ConferenceHandle = Arc<dyn Conference>;

/// Conference metadata as reported when the conference is joined
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConferenceInfo {
    pub room_name: String,
    pub sip_gateway_enabled: bool,
}

impl ConferenceInfo {
    pub fn new(room_name: impl Into<String>, sip_gateway_enabled: bool) -> Self {
        Self {
            room_name: room_name.into(),
            sip_gateway_enabled,
        }
    }

    /// Wraps the info in a shareable handle
    pub fn into_handle(self) -> ConferenceHandle {
        Arc::new(self)
    }
}

impl Conference for ConferenceInfo {
    fn room_name(&self) -> &str {
        &self.room_name
    }

    fn is_sip_calling_supported(&self) -> bool {
        self.sip_gateway_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_exposes_sip_support() {
        let handle = ConferenceInfo::new("standup", true).into_handle();
        assert_eq!(handle.room_name(), "standup");
        assert!(handle.is_sip_calling_supported());
    }
}
