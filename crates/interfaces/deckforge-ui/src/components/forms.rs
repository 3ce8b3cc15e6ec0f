use crate::theme;
use crate::utils::section_label;
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use deckforge_app_core::CommanderFieldVm;

pub fn text_field<'a>(
    tui: impl TuiBuilderLogic<'a>,
    label: &str,
    value: &mut String,
    hint: &str,
) -> bool {
    let mut changed = false;
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(2.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| section_label(ui, label));
        changed = tui
            .ui_add(
                egui::TextEdit::singleline(value)
                    .hint_text(hint)
                    .desired_width(f32::INFINITY)
                    .font(egui::FontId::monospace(12.0)),
            )
            .changed();
    });
    changed
}

/// Edit buffer for a name that is only sent once the user commits it.
#[derive(Default)]
pub struct NameInput {
    buffer: String,
    synced: String,
}

impl NameInput {
    /// Picks up changes made by the workflow, such as a rejected name being cleared.
    pub fn sync(&mut self, draft: &str) {
        if self.synced != draft {
            self.synced = draft.to_string();
            self.buffer = draft.to_string();
        }
    }

    /// Draws the field and returns the name once the user presses enter or leaves it.
    pub fn draw<'a>(
        &mut self,
        tui: impl TuiBuilderLogic<'a>,
        label: &str,
        hint: &str,
        field: &CommanderFieldVm,
    ) -> Option<String> {
        self.sync(&field.value);
        let mut committed = None;

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            gap: length(2.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                justify_content: Some(taffy::JustifyContent::SpaceBetween),
                align_items: Some(taffy::AlignItems::Center),
                size: taffy::Size {
                    width: percent(1.),
                    height: auto(),
                },
                ..Default::default()
            })
            .add(|tui| {
                tui.ui(|ui| section_label(ui, label));
                tui.colored_label(theme::field_status(field.status), field.status.label());
            });

            let resp = tui.ui_add(
                egui::TextEdit::singleline(&mut self.buffer)
                    .hint_text(hint)
                    .desired_width(f32::INFINITY)
                    .font(egui::FontId::monospace(12.0)),
            );
            if resp.lost_focus() && self.buffer.trim() != self.synced.trim() {
                committed = Some(self.buffer.clone());
            }
        });

        committed
    }
}
