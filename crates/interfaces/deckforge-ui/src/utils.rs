use crate::theme::*;
use eframe::egui::{self, Color32, RichText, Stroke};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// The one action a screen leads to (select, build).
    Primary,
    Secondary,
    /// Discards work (start over, dismiss).
    Destructive,
}

impl ButtonKind {
    fn ink(self) -> Color32 {
        match self {
            ButtonKind::Primary | ButtonKind::Secondary => COL_ACCENT,
            ButtonKind::Destructive => COL_ERROR,
        }
    }
}

pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).size(10.0).color(COL_TEXT_DIM).strong());
}

pub fn cmd_button(
    ui: &mut egui::Ui,
    label: &str,
    kind: ButtonKind,
    enabled: bool,
) -> egui::Response {
    let ink = if enabled { kind.ink() } else { COL_BORDER };
    let filled = enabled && kind == ButtonKind::Primary;

    let text = RichText::new(label).size(10.0).color(match (enabled, filled) {
        (false, _) => COL_TEXT_DIM,
        (true, true) => COL_BG,
        (true, false) => ink,
    });
    let button = egui::Button::new(text)
        .min_size(egui::vec2(96.0, 24.0))
        .fill(if filled { ink } else { Color32::TRANSPARENT })
        .stroke(Stroke::new(1.0, ink));

    ui.add_enabled(enabled, button)
}
