use crate::domain::{is_blank, StagedName, Step, WorkflowState};
use crate::messages;

use super::events::DomainEvent;

pub fn reduce(mut state: WorkflowState, ev: DomainEvent) -> WorkflowState {
    match ev {
        DomainEvent::FormatSelected(format) => {
            state.format = Some(format);
            state.step = Step::EnterCards;
            state.result = None;
            clear_commanders(&mut state);
            // An in-flight build was assembled for the previous format.
            state.requests.build.supersede();
        }

        DomainEvent::CardListEdited(text) => {
            state.card_list = text;
            state.error = None;
            state.requests.card_file.supersede();
        }
        DomainEvent::CardFileLoadStarted { seq } => state.requests.card_file.begin(seq),
        DomainEvent::CardFileLoaded { seq, text } => {
            if state.requests.card_file.settle(seq) {
                state.card_list = text;
                state.error = None;
            }
        }
        DomainEvent::CardFileFailed { seq } => {
            if state.requests.card_file.settle(seq) {
                state.error = Some(messages::FILE_READ_FAILED.into());
            }
        }
        DomainEvent::DeckGoalEdited(goal) => state.deck_goal = goal,

        DomainEvent::CommanderEntered { name, seq } => {
            state.error = None;
            if state.commander.draft.trim() != name.trim() {
                // A partner pairing was checked against the previous commander.
                state.partner = StagedName::default();
                state.requests.partner.supersede();
            }
            state.has_partner_ability = false;
            state.commander_info = None;
            if is_blank(&name) {
                state.requests.commander.supersede();
            } else {
                state.requests.commander.begin(seq);
            }
            state.commander = StagedName::draft(name);
        }
        DomainEvent::CommanderValidated { seq, info } => {
            if state.requests.commander.settle(seq) {
                state.has_partner_ability = info.has_partner;
                state.commander_info = Some(info);
                state.commander.confirmed = true;
                state.error = None;
            }
        }
        DomainEvent::CommanderRejected { seq, detail } => {
            if state.requests.commander.settle(seq) {
                clear_commanders(&mut state);
                state.error = Some(messages::commander_error(&detail));
            }
        }

        DomainEvent::PartnerEntered { name, seq } => {
            state.error = None;
            if is_blank(&name) {
                state.requests.partner.supersede();
            } else {
                state.requests.partner.begin(seq);
            }
            state.partner = StagedName::draft(name);
        }
        DomainEvent::PartnerAccepted { seq } => {
            if state.requests.partner.settle(seq) {
                state.partner.confirmed = true;
                state.error = None;
            }
        }
        DomainEvent::PartnerIncompatible { seq, reason } => {
            if state.requests.partner.settle(seq) {
                state.partner = StagedName::default();
                state.error = Some(
                    reason
                        .filter(|r| !is_blank(r))
                        .unwrap_or_else(|| messages::PARTNERS_INCOMPATIBLE.into()),
                );
            }
        }
        DomainEvent::PartnerRejected { seq, detail } => {
            if state.requests.partner.settle(seq) {
                state.partner = StagedName::default();
                state.error = Some(messages::commander_error(&detail));
            }
        }

        DomainEvent::BuildStarted { seq } => {
            state.error = None;
            state.requests.build.begin(seq);
        }
        DomainEvent::DeckBuilt { seq, deck } => {
            if state.requests.build.settle(seq) {
                state.result = Some(deck);
                state.step = Step::Results;
                state.error = None;
            }
        }
        DomainEvent::BuildFailed { seq, detail } => {
            if state.requests.build.settle(seq) {
                state.error = Some(messages::build_error(&detail));
            }
        }

        DomainEvent::EditAgain => {
            if state.step == Step::Results {
                state.step = Step::EnterCards;
                state.result = None;
            }
        }
        DomainEvent::StartedOver => {
            // Keep the trackers so late completions stay recognisably stale.
            let mut requests = state.requests;
            requests.supersede_all();
            state = WorkflowState {
                requests,
                ..WorkflowState::default()
            };
        }

        DomainEvent::UserError(msg) => state.error = Some(msg),
        DomainEvent::ErrorDismissed => state.error = None,
    }
    state
}

fn clear_commanders(state: &mut WorkflowState) {
    state.commander = StagedName::default();
    state.partner = StagedName::default();
    state.has_partner_ability = false;
    state.commander_info = None;
    state.requests.commander.supersede();
    state.requests.partner.supersede();
}
