mod action;
mod ui_command;

pub use action::Action;
pub use ui_command::UiCommand;
