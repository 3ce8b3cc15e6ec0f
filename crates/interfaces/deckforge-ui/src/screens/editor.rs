use crate::components::forms::{text_field, NameInput};
use crate::theme::*;
use crate::utils::{cmd_button, section_label, ButtonKind};
use camino::Utf8PathBuf;
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use deckforge_app_core::{AppCommand, DeckBuilderApp, DeckFormat, EditorVm, WorkflowState};

#[derive(Default)]
pub struct CommanderInputs {
    pub commander: NameInput,
    pub partner: NameInput,
}

fn pick_card_file() -> Option<Utf8PathBuf> {
    let path = rfd::FileDialog::new()
        .add_filter("Card list", deckforge_config::CARD_LIST_EXTENSIONS)
        .pick_file()?;
    match Utf8PathBuf::from_path_buf(path) {
        Ok(path) => Some(path),
        Err(path) => {
            tracing::warn!("Ignoring non UTF-8 card list path {}", path.display());
            None
        }
    }
}

pub fn draw<'a>(
    tui: impl TuiBuilderLogic<'a>,
    vm: &EditorVm,
    state: &WorkflowState,
    inputs: &mut CommanderInputs,
    app: &mut DeckBuilderApp,
) {
    let mut commands = Vec::new();

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(10.0),
        size: percent(1.),
        overflow: taffy::Point {
            x: taffy::Overflow::Hidden,
            y: taffy::Overflow::Scroll,
        },
        min_size: taffy::Size {
            width: length(0.0),
            height: length(0.0),
        },
        ..Default::default()
    })
    .add(|tui| {
        // Format row
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
            tui.label(
                egui::RichText::new(format!("FORMAT: {}", vm.format.label().to_uppercase()))
                    .size(13.0)
                    .strong()
                    .color(COL_TEXT),
            );
            for other in DeckFormat::ALL.into_iter().filter(|f| *f != vm.format) {
                let label = format!("SWITCH TO {}", other.label().to_uppercase());
                if tui
                    .ui(|ui| cmd_button(ui, &label, ButtonKind::Secondary, true))
                    .clicked()
                {
                    commands.push(AppCommand::SelectFormat(other));
                }
            }
        });

        tui.separator();

        // Card list
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            gap: length(4.0),
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
                tui.ui(|ui| section_label(ui, "CARD LIST"));
                tui.colored_label(COL_TEXT_DIM, &vm.pool_label);
                let label = if vm.loading_file { "READING…" } else { "LOAD FILE" };
                if tui
                    .ui(|ui| cmd_button(ui, label, ButtonKind::Secondary, !vm.loading_file))
                    .clicked()
                {
                    if let Some(path) = pick_card_file() {
                        commands.push(AppCommand::LoadCardFile(path));
                    }
                }
            });

            let mut card_list = state.card_list.clone();
            if tui
                .ui_add(
                    egui::TextEdit::multiline(&mut card_list)
                        .hint_text("1x Sol Ring\n4x Lightning Bolt\nIsland")
                        .desired_rows(12)
                        .desired_width(f32::INFINITY)
                        .font(egui::FontId::monospace(12.0)),
                )
                .changed()
            {
                commands.push(AppCommand::EditCardList(card_list));
            }
        });

        // Commanders
        if let Some(field) = &vm.commander {
            if let Some(name) =
                inputs
                    .commander
                    .draw(&mut *tui, "COMMANDER", "Atraxa, Praetors' Voice", field)
            {
                commands.push(AppCommand::EnterCommander(name));
            }
            if let Some(colors) = &vm.commander_colors {
                tui.colored_label(COL_TEXT_DIM, format!("COLOR IDENTITY: {colors}"));
            }
        }
        if let Some(field) = &vm.partner {
            if let Some(name) =
                inputs
                    .partner
                    .draw(&mut *tui, "PARTNER", "Partner commander (optional)", field)
            {
                commands.push(AppCommand::EnterPartner(name));
            }
        }

        let mut goal = state.deck_goal.clone();
        if text_field(
            &mut *tui,
            "DECK GOAL",
            &mut goal,
            "e.g. aggressive tokens, spellslinger",
        ) {
            commands.push(AppCommand::EditDeckGoal(goal));
        }

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            justify_content: Some(taffy::JustifyContent::FlexEnd),
            margin: taffy::Rect {
                left: length(0.0),
                right: length(0.0),
                top: length(8.0),
                bottom: length(0.0),
            },
            size: taffy::Size {
                width: percent(1.),
                height: taffy::Dimension::Auto,
            },
            ..Default::default()
        })
        .add(|tui| {
            if tui
                .ui(|ui| cmd_button(ui, vm.submit_label, ButtonKind::Primary, vm.can_submit))
                .clicked()
            {
                commands.push(AppCommand::SubmitBuild);
            }
        });
    });

    for cmd in commands {
        app.dispatch(cmd);
    }
}
