//! Application State
//!
//! The `App` struct owns the shared store and everything that talks to it.
//!
//! # MVU Loop
//!
//! The `eframe::App::update()` implementation follows this flow:
//! 1. Poll the hover reconciler; a due notify dispatches to the store
//! 2. Drain projected visibility flags from the store subscription
//! 3. Render the page (pure function of state and flags)
//! 4. Turn region containment into hover edges for the reconciler
//! 5. Handle UI commands from the view
//! 6. Schedule a repaint for the pending notify, if any

use crate::components::Toast;
use crate::config::AppConfig;
use crate::hover::{HoverReconciler, RegionHover, route_edges};
use crate::models::{
    ConferenceInfo, FilmstripState, Participant, ParticipantRole, SessionState, ToolboxState,
};
use crate::pages::ConferencePage;
use crate::store::{StateContainer, Store};
use crate::visibility::{VisibilityFeed, VisibilityFlags, project};
use logging::Logger;
use std::time::Instant;

const DEMO_ROOM: &str = "demo-room";

/// Main application state - MVU Controller
pub struct App {
    pub(super) config: AppConfig,
    pub(super) logger: Logger,

    // Shared state and its readers
    pub(super) store: Store,
    pub(super) feed: Option<VisibilityFeed>,

    // Pointer tracking
    pub(super) hover: HoverReconciler,
    pub(super) regions: RegionHover,

    // UI State
    pub(super) current_toast: Option<Toast>,
}

/// Session the demo starts with: a moderator in a SIP-capable room with two
/// remote participants.
pub fn initial_session(config: &AppConfig) -> SessionState {
    SessionState {
        conference: Some(ConferenceInfo::new(DEMO_ROOM, true).into_handle()),
        config: config.session,
        is_guest: false,
        local_participant: Some(Participant::new("local", "You", ParticipantRole::Moderator)),
        remote_participants: vec![
            Participant::new("remote-1", "Guest 1", ParticipantRole::Participant),
            Participant::new("remote-2", "Guest 2", ParticipantRole::Visitor),
        ],
        filmstrip: FilmstripState {
            hovered: false,
            remote_videos_visible: true,
        },
        toolbox: ToolboxState {
            visible: true,
            docked: false,
        },
    }
}

impl App {
    /// Creates the application around an already configured logger
    pub fn new(config: AppConfig, logger: Logger) -> Self {
        logger.info("[APP] Initializing application...");
        logger.info(&format!(
            "[APP] Interface - filmstrip_only: {}, new_toolbox_enabled: {}, toolbar_buttons: {:?}",
            config.interface.filmstrip_only,
            config.interface.new_toolbox_enabled,
            config.interface.toolbar_buttons
        ));

        let mut store = Store::new(initial_session(&config), logger.clone());
        let feed = VisibilityFeed::connect(&mut store, config.interface.clone());
        let hover = HoverReconciler::new(config.interface.filmstrip_only, logger.clone());

        logger.info("[APP] Application initialized successfully");

        Self {
            config,
            logger,
            store,
            feed: Some(feed),
            hover,
            regions: RegionHover::new(),
            current_toast: None,
        }
    }

    /// Latest projection, straight from the store if the feed is gone
    pub(super) fn current_flags(&mut self) -> VisibilityFlags {
        match self.feed.as_mut() {
            Some(feed) => feed.latest(),
            None => project(self.store.state(), &self.config.interface),
        }
    }

    /// Routes this frame's region containment into the reconciler
    pub(super) fn track_pointer(&mut self, local: bool, remote: bool, now: Instant) {
        let edges = self.regions.update(local, remote);
        if edges.is_empty() {
            return;
        }

        self.logger
            .debug(&format!("[POINTER] Region edges: {:?}", edges));
        route_edges(&edges, &mut self.hover, now);
    }

    /// Cancels pending work and detaches from the store
    pub(super) fn shutdown(&mut self) {
        self.hover.teardown();
        if let Some(feed) = self.feed.take() {
            feed.disconnect(&mut self.store);
        }
    }

    fn render_toast(&mut self, ctx: &egui::Context, now: Instant) {
        let dismissed = self
            .current_toast
            .as_ref()
            .is_some_and(|toast| toast.show(ctx, now));
        if dismissed {
            self.current_toast = None;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --- MVU UPDATE LOOP ---
        let now = Instant::now();

        // 1. Run the hover notify if its window has elapsed
        self.hover.poll(now, &mut self.store);

        // 2. Pick up projections published by the store
        let flags = self.current_flags();

        // 3. Render the view and collect pointer containment and commands
        let hover_pending = self.hover.is_notify_pending();
        let output = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ConferencePage::show(
                    ui,
                    self.store.state(),
                    &flags,
                    &self.config.interface,
                    hover_pending,
                )
            })
            .inner;

        // 4. Feed region edges to the reconciler
        self.track_pointer(output.local_hovered, output.remote_hovered, now);

        // 5. Process UI command (if any)
        if let Some(command) = output.command {
            self.handle_ui_command(command, now);
        }

        self.render_toast(ctx, now);

        // 6. Wake up when the pending notify is due
        if let Some(wait) = self.hover.time_until_notify(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }

    /// Called when the app is about to close
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.logger.info("[APP] Application shutting down...");
        self.shutdown();
        self.logger.info("[APP] Shutdown complete");
    }
}
