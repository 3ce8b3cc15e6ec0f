use crate::components::deck_list;
use crate::theme::*;
use crate::utils::{cmd_button, ButtonKind};
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use deckforge_app_core::{AppCommand, DeckBuilderApp, ResultsVm};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, vm: &ResultsVm, app: &mut DeckBuilderApp) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(8.0),
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
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            justify_content: Some(taffy::JustifyContent::SpaceBetween),
            align_items: Some(taffy::AlignItems::Center),
            ..Default::default()
        })
        .add(|tui| {
            let title = match vm.format {
                Some(format) => {
                    format!("{} DECK // {}", format.label().to_uppercase(), vm.total_label)
                }
                None => vm.total_label.to_uppercase(),
            };
            tui.label(egui::RichText::new(title).size(14.0).strong().color(COL_TEXT));

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                gap: length(8.0),
                ..Default::default()
            })
            .add(|tui| {
                if tui
                    .ui(|ui| cmd_button(ui, "EDIT AGAIN", ButtonKind::Secondary, true))
                    .clicked()
                {
                    app.dispatch(AppCommand::EditAgain);
                }
                if tui
                    .ui(|ui| cmd_button(ui, "START OVER", ButtonKind::Destructive, true))
                    .clicked()
                {
                    app.dispatch(AppCommand::StartOver);
                }
            });
        });

        tui.separator();

        if vm.sections.is_empty() {
            tui.colored_label(COL_TEXT_DIM, "The service returned an empty deck.");
        } else {
            deck_list::draw(&mut *tui, &vm.sections);
        }
    });
}
