//! Visibility Module
//!
//! Everything the filmstrip derives from shared state: the flags, the
//! layout classes, and the subscription that keeps them current.

mod feed;
mod layout;
mod projector;

pub use feed::VisibilityFeed;
pub use layout::{CLASS_FILMSTRIP, CLASS_HIDE_VIDEOS, CLASS_REDUCE_HEIGHT, FilmstripLayout};
pub use projector::{VisibilityFlags, is_add_to_call_available, is_dial_out_available, project};
