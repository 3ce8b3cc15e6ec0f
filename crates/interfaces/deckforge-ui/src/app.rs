use crate::components::header;
use crate::screens::editor::CommanderInputs;
use crate::screens::{editor, format, results};
use crate::theme::*;
use crate::utils::{cmd_button, ButtonKind};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};

use deckforge_app_core::{viewmodel, AppCommand, DeckBuilderApp, Step};

pub struct DeckForgeUiApp {
    core: DeckBuilderApp,
    api_url: String,
    inputs: CommanderInputs,
}

impl DeckForgeUiApp {
    pub fn new(core: DeckBuilderApp, api_url: String) -> Self {
        Self {
            core,
            api_url,
            inputs: CommanderInputs::default(),
        }
    }
}

impl eframe::App for DeckForgeUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.core.tick();

        ctx.options_mut(|options| {
            options.max_passes = std::num::NonZeroUsize::MIN.saturating_add(2);
        });
        ctx.style_mut(|style| {
            // Width-independent text measurement for the taffy multi-pass layout.
            style.wrap_mode = Some(egui::TextWrapMode::Extend);
        });

        let state = self.core.state();
        let workflow = viewmodel::workflow_vm(&state);

        egui::CentralPanel::default().show(ctx, |ui| {
            tui(ui, ui.id().with("root"))
                .reserve_available_space()
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    size: percent(1.),
                    min_size: taffy::Size {
                        width: percent(1.),
                        height: length(0.0),
                    },
                    ..Default::default()
                })
                .show(|tui| {
                    tui.style(taffy::Style {
                        size: taffy::Size {
                            width: percent(1.),
                            height: length(28.0),
                        },
                        flex_shrink: 0.0,
                        ..Default::default()
                    })
                    .add(|tui| header::draw(tui, &workflow, &self.api_url));

                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        flex_grow: 1.0,
                        flex_basis: length(0.0),
                        size: taffy::Size {
                            width: percent(1.),
                            height: auto(),
                        },
                        min_size: taffy::Size {
                            width: length(0.0),
                            height: length(0.0),
                        },
                        overflow: taffy::Point {
                            x: taffy::Overflow::Hidden,
                            y: taffy::Overflow::Hidden,
                        },
                        padding: length(12.0),
                        gap: length(8.0),
                        ..Default::default()
                    })
                    .add(|tui| {
                        if let Some(err) = &workflow.error {
                            let mut dismissed = false;
                            tui.style(taffy::Style {
                                flex_direction: taffy::FlexDirection::Row,
                                justify_content: Some(taffy::JustifyContent::SpaceBetween),
                                align_items: Some(taffy::AlignItems::Center),
                                padding: length(6.0),
                                size: taffy::Size {
                                    width: percent(1.),
                                    height: auto(),
                                },
                                flex_shrink: 0.0,
                                ..Default::default()
                            })
                            .bg_add(
                                TuiBackground::new()
                                    .with_background_color(COL_PANEL)
                                    .with_border_color(COL_ERROR)
                                    .with_border_width(1.0),
                                |tui| {
                                    tui.colored_label(COL_ERROR, err);
                                    dismissed = tui
                                        .ui(|ui| {
                                            cmd_button(ui, "DISMISS", ButtonKind::Destructive, true)
                                        })
                                        .clicked();
                                },
                            );
                            if dismissed {
                                self.core.dispatch(AppCommand::DismissError);
                            }
                        }

                        match workflow.step {
                            Step::SelectFormat => format::draw(tui, &mut self.core),
                            Step::EnterCards => match viewmodel::editor_vm(&state) {
                                Some(vm) => editor::draw(
                                    tui,
                                    &vm,
                                    &state,
                                    &mut self.inputs,
                                    &mut self.core,
                                ),
                                None => {
                                    tui.colored_label(COL_TEXT_DIM, "NO FORMAT SELECTED");
                                }
                            },
                            Step::Results => match viewmodel::results_vm(&state) {
                                Some(vm) => results::draw(tui, &vm, &mut self.core),
                                None => {
                                    tui.colored_label(COL_TEXT_DIM, "NO DECK BUILT");
                                }
                            },
                        }
                    });
                });
        });

        if workflow.is_loading {
            ctx.request_repaint();
        }
    }
}
