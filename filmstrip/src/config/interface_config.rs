//! Interface Configuration
//!
//! Read-only layout and feature flags, loaded once at startup and injected
//! wherever they are needed.

/// Toolbar buttons used when the configuration does not list any
const DEFAULT_TOOLBAR_BUTTONS: [&str; 4] = ["microphone", "camera", "desktop", "hangup"];

/// Layout and feature flags for the filmstrip and its toolbar
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterfaceConfig {
    /// Buttons configured for the toolbar; only the count matters for layout
    pub toolbar_buttons: Vec<String>,
    /// Use the alternate toolbox, which never hosts the invite button
    pub new_toolbox_enabled: bool,
    /// Client shows nothing but the filmstrip: embeds the toolbar in it and
    /// docks the toolbox while the filmstrip is hovered
    pub filmstrip_only: bool,
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            toolbar_buttons: DEFAULT_TOOLBAR_BUTTONS
                .iter()
                .map(|b| b.to_string())
                .collect(),
            new_toolbox_enabled: false,
            filmstrip_only: false,
        }
    }
}

impl InterfaceConfig {
    pub fn has_toolbar_buttons(&self) -> bool {
        !self.toolbar_buttons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_buttons() {
        let config = InterfaceConfig::default();
        assert_eq!(config.toolbar_buttons.len(), 4);
        assert!(config.has_toolbar_buttons());
        assert!(!config.filmstrip_only);
    }
}
