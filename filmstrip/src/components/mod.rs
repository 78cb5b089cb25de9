//! Reusable UI components

mod button;
mod invite_button;
mod thumbnail;
mod toast;
mod toolbox;

pub use button::{Button, ButtonVariant};
pub use invite_button::render_invite_button;
pub use thumbnail::{render_empty_tile, render_thumbnail};
pub use toast::{Toast, ToastType};
pub use toolbox::render_toolbox;
