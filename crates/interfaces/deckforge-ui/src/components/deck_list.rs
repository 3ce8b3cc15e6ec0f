use crate::theme::*;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use deckforge_app_core::{CardRowVm, DeckSectionVm};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, sections: &[DeckSectionVm]) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(10.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        for section in sections {
            draw_section(&mut *tui, section);
        }
    });
}

fn draw_section<'a>(tui: impl TuiBuilderLogic<'a>, section: &DeckSectionVm) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(2.0),
        padding: length(6.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_PANEL)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.label(
                egui::RichText::new(&section.heading)
                    .size(11.0)
                    .strong()
                    .color(COL_ACCENT),
            );
            for row in &section.rows {
                draw_row(&mut *tui, row);
            }
        },
    );
}

fn draw_row<'a>(tui: impl TuiBuilderLogic<'a>, row: &CardRowVm) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Center),
        gap: length(8.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.label(egui::RichText::new(&row.name).size(11.0).color(COL_TEXT));

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            gap: length(8.0),
            ..Default::default()
        })
        .add(|tui| {
            tui.label(
                egui::RichText::new(&row.type_line)
                    .size(9.0)
                    .color(COL_TEXT_DIM),
            );
            if let Some(cmc) = &row.cmc {
                tui.label(
                    egui::RichText::new(format!("CMC {cmc}"))
                        .size(9.0)
                        .color(COL_TEXT_DIM),
                );
            }
        });
    });
}
