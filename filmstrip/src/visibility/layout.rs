//! Filmstrip Layout
//!
//! Class-level layout decisions: which state classes the container carries
//! and which optional children are rendered.

use super::projector::VisibilityFlags;
use crate::config::InterfaceConfig;

pub const CLASS_FILMSTRIP: &str = "filmstrip";
pub const CLASS_HIDE_VIDEOS: &str = "hide-videos";
pub const CLASS_REDUCE_HEIGHT: &str = "reduce-height";

/// Layout derived from the visibility flags and interface configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilmstripLayout {
    /// Remote thumbnails are hidden
    pub video_hidden: bool,
    /// The toolbox takes room from the filmstrip
    pub reduced_height: bool,
    /// The embedded toolbar is rendered inside the filmstrip
    pub show_toolbox: bool,
    pub show_invite_button: bool,
}

impl FilmstripLayout {
    pub fn derive(flags: &VisibilityFlags, config: &InterfaceConfig) -> Self {
        Self {
            video_hidden: !flags.remote_videos_visible,
            reduced_height: flags.toolbox_visible && config.has_toolbar_buttons(),
            show_toolbox: config.filmstrip_only,
            show_invite_button: !config.filmstrip_only && !flags.hide_invite_button,
        }
    }

    /// Space-separated container classes, e.g. `filmstrip hide-videos`
    pub fn class_names(&self) -> String {
        let mut classes = vec![CLASS_FILMSTRIP];
        if self.video_hidden {
            classes.push(CLASS_HIDE_VIDEOS);
        }
        if self.reduced_height {
            classes.push(CLASS_REDUCE_HEIGHT);
        }
        classes.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(toolbox_visible: bool, remote_videos_visible: bool) -> VisibilityFlags {
        VisibilityFlags {
            toolbox_visible,
            remote_videos_visible,
            ..Default::default()
        }
    }

    #[test]
    fn test_reduced_height_needs_visible_toolbox_and_buttons() {
        let config = InterfaceConfig::default();
        assert!(FilmstripLayout::derive(&flags(true, true), &config).reduced_height);
        assert!(!FilmstripLayout::derive(&flags(false, true), &config).reduced_height);

        let no_buttons = InterfaceConfig {
            toolbar_buttons: Vec::new(),
            ..Default::default()
        };
        assert!(!FilmstripLayout::derive(&flags(true, true), &no_buttons).reduced_height);
        assert!(!FilmstripLayout::derive(&flags(false, true), &no_buttons).reduced_height);
    }

    #[test]
    fn test_video_hidden_follows_remote_visibility() {
        let config = InterfaceConfig::default();
        assert!(FilmstripLayout::derive(&flags(false, false), &config).video_hidden);
        assert!(!FilmstripLayout::derive(&flags(false, true), &config).video_hidden);
    }

    #[test]
    fn test_class_names() {
        let config = InterfaceConfig::default();
        assert_eq!(
            FilmstripLayout::derive(&flags(false, true), &config).class_names(),
            "filmstrip"
        );
        assert_eq!(
            FilmstripLayout::derive(&flags(true, false), &config).class_names(),
            "filmstrip hide-videos reduce-height"
        );
    }

    #[test]
    fn test_filmstrip_only_swaps_invite_for_toolbox() {
        let visible = VisibilityFlags::default();
        let normal = FilmstripLayout::derive(&visible, &InterfaceConfig::default());
        assert!(normal.show_invite_button);
        assert!(!normal.show_toolbox);

        let filmstrip_only = InterfaceConfig {
            filmstrip_only: true,
            ..Default::default()
        };
        let embedded = FilmstripLayout::derive(&visible, &filmstrip_only);
        assert!(!embedded.show_invite_button);
        assert!(embedded.show_toolbox);
    }

    #[test]
    fn test_hidden_invite_is_not_shown() {
        let hidden = VisibilityFlags {
            hide_invite_button: true,
            ..Default::default()
        };
        assert!(!FilmstripLayout::derive(&hidden, &InterfaceConfig::default()).show_invite_button);
    }
}
