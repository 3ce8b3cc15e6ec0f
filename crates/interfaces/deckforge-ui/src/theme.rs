use deckforge_app_core::FieldStatus;
use eframe::egui::{self, Color32, FontFamily, FontId, Stroke, TextStyle};

pub const COL_BG: Color32 = Color32::from_rgb(8, 7, 10);
/// Cards, banners and deck sections.
pub const COL_PANEL: Color32 = Color32::from_rgb(14, 12, 18);
pub const COL_BORDER: Color32 = Color32::from_rgb(38, 34, 46);
pub const COL_TEXT: Color32 = Color32::from_rgb(229, 231, 235);
pub const COL_TEXT_DIM: Color32 = Color32::from_rgb(156, 152, 168);
pub const COL_ACCENT: Color32 = Color32::from_rgb(196, 160, 255);
pub const COL_WARN: Color32 = Color32::from_rgb(250, 204, 21);
pub const COL_ERROR: Color32 = Color32::from_rgb(225, 29, 72);
pub const COL_SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);

/// Colour of the status tag next to a commander or partner field.
pub fn field_status(status: FieldStatus) -> Color32 {
    match status {
        FieldStatus::Validating => COL_WARN,
        FieldStatus::Confirmed => COL_SUCCESS,
        FieldStatus::Empty | FieldStatus::Unconfirmed => COL_TEXT_DIM,
    }
}

fn mono(size: f32) -> FontId {
    FontId::new(size, FontFamily::Monospace)
}

pub fn setup(ctx: &egui::Context) {
    ctx.style_mut(|style| {
        let v = &mut style.visuals;
        *v = egui::Visuals::dark();
        v.panel_fill = COL_BG;
        v.window_fill = COL_PANEL;
        v.extreme_bg_color = COL_PANEL;
        v.selection.bg_fill = COL_ACCENT.linear_multiply(0.3);
        v.selection.stroke = Stroke::new(1.0, COL_ACCENT);

        let w = &mut v.widgets;
        w.noninteractive.bg_stroke = Stroke::new(1.0, COL_BORDER);
        w.inactive.bg_fill = COL_PANEL;
        w.inactive.fg_stroke = Stroke::new(1.0, COL_TEXT_DIM);
        for state in [&mut w.hovered, &mut w.open] {
            state.bg_fill = COL_ACCENT.linear_multiply(0.1);
            state.bg_stroke = Stroke::new(1.0, COL_ACCENT);
            state.fg_stroke = Stroke::new(1.0, COL_ACCENT);
        }
        w.active.bg_fill = COL_ACCENT;
        w.active.fg_stroke = Stroke::new(1.0, COL_BG);

        // Card lists are column-aligned, so every style is monospace.
        style.text_styles = [
            (TextStyle::Heading, mono(15.0)),
            (TextStyle::Body, mono(12.0)),
            (TextStyle::Monospace, mono(12.0)),
            (TextStyle::Button, mono(10.0)),
            (TextStyle::Small, mono(9.0)),
        ]
        .into();
        style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        style.spacing.button_padding = egui::vec2(8.0, 3.0);
    });
}
