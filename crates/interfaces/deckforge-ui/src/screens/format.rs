use crate::theme::*;
use crate::utils::{cmd_button, section_label, ButtonKind};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use deckforge_app_core::{AppCommand, DeckBuilderApp, DeckFormat};

fn blurb(format: DeckFormat) -> &'static str {
    match format {
        DeckFormat::Standard => "60-card constructed deck from your pool.",
        DeckFormat::Commander => "100-card singleton deck led by a legendary commander.",
    }
}

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut DeckBuilderApp) {
    let mut picked = None;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(10.0),
        size: percent(1.),
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| section_label(ui, "CHOOSE A FORMAT"));

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            gap: length(10.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            for format in DeckFormat::ALL {
                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    flex_grow: 1.0,
                    flex_basis: length(0.0),
                    gap: length(6.0),
                    padding: length(10.0),
                    ..Default::default()
                })
                .bg_add(
                    TuiBackground::new()
                        .with_background_color(COL_PANEL)
                        .with_border_color(COL_BORDER)
                        .with_border_width(1.0),
                    |tui| {
                        tui.label(
                            egui::RichText::new(format.label().to_uppercase())
                                .size(13.0)
                                .strong()
                                .color(COL_TEXT),
                        );
                        tui.label(
                            egui::RichText::new(blurb(format))
                                .size(10.0)
                                .color(COL_TEXT_DIM),
                        );
                        if tui
                            .ui(|ui| cmd_button(ui, "SELECT", ButtonKind::Primary, true))
                            .clicked()
                        {
                            picked = Some(format);
                        }
                    },
                );
            }
        });
    });

    if let Some(format) = picked {
        app.dispatch(AppCommand::SelectFormat(format));
    }
}
