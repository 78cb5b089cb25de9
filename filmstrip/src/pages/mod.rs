pub mod conference;

pub use conference::{ConferencePage, PageOutput};
