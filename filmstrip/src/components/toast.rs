//! Toast notifications for short feedback on invite and toolbar clicks.

use std::time::{Duration, Instant};

const TOAST_LIFETIME: Duration = Duration::from_secs(3);

/// Toast notification type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastType {
    Info,
    Warning,
}

impl ToastType {
    fn accent(&self) -> egui::Color32 {
        match self {
            ToastType::Info => egui::Color32::from_rgb(100, 150, 255),
            ToastType::Warning => egui::Color32::from_rgb(255, 200, 100),
        }
    }

    fn background(&self) -> egui::Color32 {
        match self {
            ToastType::Info => egui::Color32::from_rgba_premultiplied(30, 50, 80, 230),
            ToastType::Warning => egui::Color32::from_rgba_premultiplied(80, 70, 30, 230),
        }
    }
}

/// A message shown in the corner until it expires or is dismissed
#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub toast_type: ToastType,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, toast_type: ToastType, now: Instant) -> Self {
        Self {
            message: message.into(),
            toast_type,
            created_at: now,
        }
    }

    pub fn info(message: impl Into<String>, now: Instant) -> Self {
        Self::new(message, ToastType::Info, now)
    }

    pub fn warning(message: impl Into<String>, now: Instant) -> Self {
        Self::new(message, ToastType::Warning, now)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= TOAST_LIFETIME
    }

    /// Time left before the toast expires
    pub fn remaining(&self, now: Instant) -> Duration {
        TOAST_LIFETIME.saturating_sub(now.saturating_duration_since(self.created_at))
    }

    /// Renders the toast and returns true if it should be dismissed
    pub fn show(&self, ctx: &egui::Context, now: Instant) -> bool {
        if self.is_expired(now) {
            return true;
        }

        let mut dismiss = false;

        egui::Window::new("toast")
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-20.0, -20.0))
            .fixed_size(egui::vec2(280.0, 40.0))
            .frame(
                egui::Frame::window(&ctx.style())
                    .fill(self.toast_type.background())
                    .stroke(egui::Stroke::new(1.0, self.toast_type.accent()))
                    .corner_radius(8.0),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&self.message)
                            .size(14.0)
                            .color(egui::Color32::WHITE),
                    );
                    if ui.small_button("✕").clicked() {
                        dismiss = true;
                    }
                });
            });

        ctx.request_repaint_after(self.remaining(now));
        dismiss
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_lifetime() {
        let now = Instant::now();
        let toast = Toast::info("Invite opened", now);

        assert!(!toast.is_expired(now));
        assert_eq!(toast.remaining(now + Duration::from_secs(1)), Duration::from_secs(2));
        assert!(toast.is_expired(now + TOAST_LIFETIME));
        assert_eq!(toast.remaining(now + Duration::from_secs(10)), Duration::ZERO);
    }
}
