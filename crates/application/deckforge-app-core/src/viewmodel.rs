use deckforge_core::{render_deck_list, Card, CardPoolSummary, DeckFormat};

use crate::domain::{StagedName, Step, WorkflowState};

fn format_cmc(cmc: Option<f64>) -> Option<String> {
    let cmc = cmc?;
    Some(if cmc.fract() == 0.0 {
        format!("{cmc:.0}")
    } else {
        format!("{cmc}")
    })
}

fn pool_label(summary: CardPoolSummary) -> String {
    match summary.entries {
        0 => "No cards entered".into(),
        1 => format!("1 entry, {} cards", summary.total_quantity),
        n => format!("{n} entries, {} cards", summary.total_quantity),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Empty,
    Validating,
    Confirmed,
    Unconfirmed,
}

impl FieldStatus {
    fn of(name: &StagedName, in_flight: bool) -> Self {
        if name.is_empty() {
            FieldStatus::Empty
        } else if in_flight {
            FieldStatus::Validating
        } else if name.confirmed {
            FieldStatus::Confirmed
        } else {
            FieldStatus::Unconfirmed
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldStatus::Empty => "",
            FieldStatus::Validating => "Validating…",
            FieldStatus::Confirmed => "Valid",
            FieldStatus::Unconfirmed => "Not validated",
        }
    }
}

#[derive(Debug, Clone)]
pub struct WorkflowVm {
    pub step: Step,
    pub step_label: String,
    pub is_loading: bool,
    pub error: Option<String>,
}

pub fn workflow_vm(state: &WorkflowState) -> WorkflowVm {
    let title = match state.step {
        Step::SelectFormat => "Select format",
        Step::EnterCards if state.use_commander() => "Cards & commander",
        Step::EnterCards => "Cards",
        Step::Results => "Your deck",
    };
    WorkflowVm {
        step: state.step,
        step_label: format!("STEP {} // {}", state.step.number(), title.to_uppercase()),
        is_loading: state.is_loading(),
        error: state.error.clone(),
    }
}

#[derive(Debug, Clone)]
pub struct CommanderFieldVm {
    pub value: String,
    pub status: FieldStatus,
}

#[derive(Debug, Clone)]
pub struct EditorVm {
    pub format: DeckFormat,
    pub pool_label: String,
    pub loading_file: bool,
    /// `None` for formats without commanders.
    pub commander: Option<CommanderFieldVm>,
    /// `None` unless the validated commander has Partner.
    pub partner: Option<CommanderFieldVm>,
    pub commander_colors: Option<String>,
    pub can_submit: bool,
    pub submit_label: &'static str,
}

pub fn editor_vm(state: &WorkflowState) -> Option<EditorVm> {
    if state.step != Step::EnterCards {
        return None;
    }
    let format = state.format?;

    let commander = format.uses_commander().then(|| CommanderFieldVm {
        value: state.commander.draft.clone(),
        status: FieldStatus::of(&state.commander, state.requests.commander.is_in_flight()),
    });
    let partner = state.partner_available().then(|| CommanderFieldVm {
        value: state.partner.draft.clone(),
        status: FieldStatus::of(&state.partner, state.requests.partner.is_in_flight()),
    });

    let commander_colors = state
        .commander_info
        .as_ref()
        .and_then(|info| info.color_identity.as_ref())
        .map(|colors| {
            if colors.is_empty() {
                "Colorless".to_string()
            } else {
                colors.join("")
            }
        });

    let building = state.requests.build.is_in_flight();

    Some(EditorVm {
        format,
        pool_label: pool_label(CardPoolSummary::of(&state.card_list)),
        loading_file: state.requests.card_file.is_in_flight(),
        commander,
        partner,
        commander_colors,
        can_submit: !state.is_loading() && state.build_request().is_ok(),
        submit_label: if building { "BUILDING…" } else { "BUILD DECK" },
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardRowVm {
    pub name: String,
    pub type_line: String,
    pub cmc: Option<String>,
}

impl From<&Card> for CardRowVm {
    fn from(c: &Card) -> Self {
        Self {
            name: c.name.clone(),
            type_line: c.type_line.clone().unwrap_or_default(),
            cmc: format_cmc(c.cmc),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeckSectionVm {
    pub heading: String,
    pub rows: Vec<CardRowVm>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsVm {
    pub format: Option<DeckFormat>,
    pub total_label: String,
    pub sections: Vec<DeckSectionVm>,
}

pub fn results_vm(state: &WorkflowState) -> Option<ResultsVm> {
    if state.step != Step::Results {
        return None;
    }
    let deck = state.result.as_ref()?;

    let sections = render_deck_list(deck)
        .into_iter()
        .map(|section| DeckSectionVm {
            heading: section.heading(),
            rows: section.cards.iter().map(CardRowVm::from).collect(),
        })
        .collect();

    Some(ResultsVm {
        format: state.format,
        total_label: format!("{} cards", deck.total_cards()),
        sections,
    })
}
