//! UI Command Handler
//!
//! Dispatches commands raised by the view. State changes go to the store;
//! invite and toolbar clicks are acknowledged with a toast, since the invite
//! dialog and the toolbar actions live outside the filmstrip.

use super::state::App;
use crate::components::Toast;
use crate::events::UiCommand;
use crate::store::StateContainer;
use crate::visibility::{is_add_to_call_available, is_dial_out_available};
use std::time::Instant;

impl App {
    /// Dispatches UI commands to appropriate handlers
    pub(super) fn handle_ui_command(&mut self, command: UiCommand, now: Instant) {
        self.logger
            .debug(&format!("[UI] Handling command: {:?}", command));
        match command {
            UiCommand::OpenInvite => self.handle_open_invite(now),
            UiCommand::ToolbarButton(name) => self.handle_toolbar_button(name, now),
            UiCommand::Dispatch(action) => self.store.dispatch(action),
        }
    }

    fn handle_open_invite(&mut self, now: Instant) {
        let state = self.store.state();
        let add_to_call = is_add_to_call_available(state);
        let dial_out = is_dial_out_available(state);

        self.logger.info(&format!(
            "[INVITE] Invite requested - add to call: {}, dial out: {}",
            add_to_call, dial_out
        ));

        let message = match (add_to_call, dial_out) {
            (true, true) => "Invite people or dial out",
            (true, false) => "Invite people",
            (false, true) => "Dial out",
            (false, false) => "Inviting is not available",
        };
        self.current_toast = Some(if add_to_call || dial_out {
            Toast::info(message, now)
        } else {
            Toast::warning(message, now)
        });
    }

    fn handle_toolbar_button(&mut self, name: String, now: Instant) {
        self.logger
            .info(&format!("[TOOLBOX] Button '{}' pressed", name));
        self.current_toast = Some(Toast::info(format!("{} pressed", name), now));
    }
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::components::ToastType;
    use crate::config::AppConfig;
    use crate::events::{Action, UiCommand};
    use crate::store::StateContainer;
    use logging::{LogLevel, Logger};
    use std::time::Instant;

    #[test]
    fn test_dispatch_command_reaches_store() {
        let (logger, _) = Logger::in_memory(LogLevel::Debug);
        let mut app = App::new(AppConfig::default(), logger);

        app.handle_ui_command(UiCommand::Dispatch(Action::SetGuest(true)), Instant::now());

        assert!(app.store.state().is_guest);
        assert!(app.current_flags().is_dial_out_available);
    }

    #[test]
    fn test_invite_logs_availability() {
        let (logger, capture) = Logger::in_memory(LogLevel::Debug);
        let mut app = App::new(AppConfig::default(), logger);

        app.handle_ui_command(UiCommand::OpenInvite, Instant::now());

        assert!(capture.contains("[INVITE] Invite requested - add to call: true, dial out: true"));
        assert_eq!(
            app.current_toast.as_ref().map(|toast| toast.toast_type),
            Some(ToastType::Info)
        );
    }

    #[test]
    fn test_toolbar_button_is_logged() {
        let (logger, capture) = Logger::in_memory(LogLevel::Info);
        let mut app = App::new(AppConfig::default(), logger);

        app.handle_ui_command(UiCommand::ToolbarButton("camera".into()), Instant::now());

        assert!(capture.contains("[TOOLBOX] Button 'camera' pressed"));
    }
}
