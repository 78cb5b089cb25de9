//! Filmstrip
//!
//! Hover reconciliation and visibility projection for the thumbnail strip of
//! a conferencing client, plus the egui view that hosts them.

pub mod app;
pub mod components;
pub mod config;
pub mod events;
pub mod hover;
pub mod models;
pub mod pages;
pub mod store;
pub mod visibility;
