use super::Action;

/// Commands initiated by the UI (View -> Controller)
/// These are "requests" to perform actions.
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    /// Invite button in the filmstrip was clicked
    OpenInvite,
    /// A button of the embedded toolbox was clicked
    ToolbarButton(String),
    /// Forward a state update to the store
    Dispatch(Action),
}
