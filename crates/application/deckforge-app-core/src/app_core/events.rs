use deckforge_core::{BuiltDeck, CommanderInfo, DeckFormat};

use crate::domain::RequestSeq;

#[derive(Debug, Clone)]
pub enum DomainEvent {
    // Format
    FormatSelected(DeckFormat),

    // Card pool
    CardListEdited(String),
    CardFileLoadStarted {
        seq: RequestSeq,
    },
    CardFileLoaded {
        seq: RequestSeq,
        text: String,
    },
    CardFileFailed {
        seq: RequestSeq,
    },
    DeckGoalEdited(String),

    // Commander validation
    CommanderEntered {
        name: String,
        seq: RequestSeq,
    },
    CommanderValidated {
        seq: RequestSeq,
        info: CommanderInfo,
    },
    CommanderRejected {
        seq: RequestSeq,
        detail: String,
    },

    // Partner validation + compatibility
    PartnerEntered {
        name: String,
        seq: RequestSeq,
    },
    PartnerAccepted {
        seq: RequestSeq,
    },
    PartnerIncompatible {
        seq: RequestSeq,
        reason: Option<String>,
    },
    PartnerRejected {
        seq: RequestSeq,
        detail: String,
    },

    // Build
    BuildStarted {
        seq: RequestSeq,
    },
    DeckBuilt {
        seq: RequestSeq,
        deck: BuiltDeck,
    },
    BuildFailed {
        seq: RequestSeq,
        detail: String,
    },

    // Navigation
    EditAgain,
    StartedOver,

    // User-visible errors
    UserError(String),
    ErrorDismissed,
}
