//! Button Component
//!
//! Flat buttons shared by the filmstrip and the session controls.

use egui::{Color32, RichText, Stroke, Vec2};

/// Visual weight of a button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Main call to action, e.g. the invite button
    Primary,
    Secondary,
    /// Toolbar entries: dark fill with an outline
    Ghost,
}

impl ButtonVariant {
    fn fill(self) -> Color32 {
        match self {
            ButtonVariant::Primary => Color32::from_rgb(37, 99, 235),
            ButtonVariant::Secondary => Color32::from_rgb(75, 85, 99),
            ButtonVariant::Ghost => Color32::from_rgb(17, 24, 39),
        }
    }

    fn stroke(self) -> Stroke {
        match self {
            ButtonVariant::Ghost => Stroke::new(1.0, Color32::from_rgb(75, 85, 99)),
            _ => Stroke::NONE,
        }
    }
}

/// Builder for a styled `egui::Button`
pub struct Button {
    label: String,
    variant: ButtonVariant,
    font_size: f32,
    min_size: Vec2,
    tooltip: Option<String>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::Primary,
            font_size: 14.0,
            min_size: Vec2::ZERO,
            tooltip: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn min_size(mut self, min_size: Vec2) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn text_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Text shown while the pointer rests on the button
    pub fn tooltip(mut self, text: impl Into<String>) -> Self {
        self.tooltip = Some(text.into());
        self
    }

    /// Adds the button to `ui`
    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let text = RichText::new(self.label)
            .size(self.font_size)
            .color(Color32::WHITE);
        let widget = egui::Button::new(text)
            .fill(self.variant.fill())
            .stroke(self.variant.stroke())
            .corner_radius(6.0)
            .min_size(self.min_size);

        let response = ui.add(widget);
        match self.tooltip {
            Some(tooltip) => response.on_hover_text(tooltip),
            None => response,
        }
    }
}
