//! Application Module - MVU Controller
//!
//! Coordinates the store, the hover reconciler and the view.
//!
//! # Structure
//!
//! - `state.rs`: Application state, initial session and the MVU loop
//! - `ui_handler.rs`: Command dispatcher for UI actions
//!
//! # Communication Flow
//!
//! ```text
//! View (pages) --> UiCommand --> ui_handler --> Store::dispatch
//! View (pages) --> pointer containment --> RegionHover --> HoverReconciler --> Store::dispatch
//!
//! Store --> subscription --> VisibilityFeed --> View
//! ```

mod state;
mod ui_handler;

pub use state::{App, initial_session};
