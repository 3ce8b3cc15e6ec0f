use deckforge_core::{BuildDeckRequest, BuiltDeck, CommanderInfo, DeckFormat};

use crate::messages;

/// Sequence number tagging an outgoing request for one field.
pub type RequestSeq = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    SelectFormat,
    EnterCards,
    Results,
}

impl Step {
    /// Form step number as shown to the user. Commander selection shares step 2.
    pub fn number(self) -> u8 {
        match self {
            Step::SelectFormat => 1,
            Step::EnterCards => 2,
            Step::Results => 4,
        }
    }
}

/// A name shown as soon as it is typed, confirmed only once the service accepts it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StagedName {
    pub draft: String,
    pub confirmed: bool,
}

impl StagedName {
    pub fn draft(name: impl Into<String>) -> Self {
        Self {
            draft: name.into(),
            confirmed: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        is_blank(&self.draft)
    }

    pub fn value(&self) -> &str {
        self.draft.trim()
    }
}

pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Latest-request-wins bookkeeping for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestTracker {
    latest: RequestSeq,
    in_flight: bool,
}

impl RequestTracker {
    pub fn latest(&self) -> RequestSeq {
        self.latest
    }

    pub fn next_seq(&self) -> RequestSeq {
        self.latest + 1
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Records a newly issued request. Completions for older ones become stale.
    pub fn begin(&mut self, seq: RequestSeq) {
        self.latest = self.latest.max(seq);
        self.in_flight = true;
    }

    /// Makes every outstanding request stale without issuing a new one.
    pub fn supersede(&mut self) {
        self.latest += 1;
        self.in_flight = false;
    }

    /// Accepts a completion only if it answers the latest in-flight request.
    pub fn settle(&mut self, seq: RequestSeq) -> bool {
        if self.in_flight && seq == self.latest {
            self.in_flight = false;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestField {
    Commander,
    Partner,
    CardFile,
    Build,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Requests {
    pub commander: RequestTracker,
    pub partner: RequestTracker,
    pub card_file: RequestTracker,
    pub build: RequestTracker,
}

impl Requests {
    pub const FIELDS: [RequestField; 4] = [
        RequestField::Commander,
        RequestField::Partner,
        RequestField::CardFile,
        RequestField::Build,
    ];

    pub fn get(&self, field: RequestField) -> &RequestTracker {
        match field {
            RequestField::Commander => &self.commander,
            RequestField::Partner => &self.partner,
            RequestField::CardFile => &self.card_file,
            RequestField::Build => &self.build,
        }
    }

    pub fn get_mut(&mut self, field: RequestField) -> &mut RequestTracker {
        match field {
            RequestField::Commander => &mut self.commander,
            RequestField::Partner => &mut self.partner,
            RequestField::CardFile => &mut self.card_file,
            RequestField::Build => &mut self.build,
        }
    }

    pub fn any_in_flight(&self) -> bool {
        Self::FIELDS.iter().any(|f| self.get(*f).is_in_flight())
    }

    pub fn supersede_all(&mut self) {
        for field in Self::FIELDS {
            self.get_mut(field).supersede();
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowState {
    pub step: Step,
    pub format: Option<DeckFormat>,
    pub card_list: String,
    pub commander: StagedName,
    pub partner: StagedName,
    pub has_partner_ability: bool,
    pub commander_info: Option<CommanderInfo>,
    pub deck_goal: String,
    pub error: Option<String>,
    pub result: Option<BuiltDeck>,
    pub requests: Requests,
}

impl Default for WorkflowState {
    fn default() -> Self {
        Self {
            step: Step::SelectFormat,
            format: None,
            card_list: String::new(),
            commander: StagedName::default(),
            partner: StagedName::default(),
            has_partner_ability: false,
            commander_info: None,
            deck_goal: String::new(),
            error: None,
            result: None,
            requests: Requests::default(),
        }
    }
}

impl WorkflowState {
    /// True while any request or file read is outstanding.
    pub fn is_loading(&self) -> bool {
        self.requests.any_in_flight()
    }

    pub fn use_commander(&self) -> bool {
        self.format.is_some_and(DeckFormat::uses_commander)
    }

    /// Whether the partner field applies: a commander format with a named
    /// commander the service says has Partner.
    pub fn partner_available(&self) -> bool {
        self.use_commander() && !self.commander.is_empty() && self.has_partner_ability
    }

    /// Assembles the build request, or the message explaining why it cannot be sent.
    pub fn build_request(&self) -> Result<BuildDeckRequest, &'static str> {
        if is_blank(&self.card_list) {
            return Err(messages::MISSING_CARD_LIST);
        }
        let format = self.format.ok_or(messages::MISSING_FORMAT)?;
        if format.uses_commander() && self.commander.is_empty() {
            return Err(messages::MISSING_COMMANDER);
        }

        let partner = if self.partner_available() {
            self.partner.value()
        } else {
            ""
        };

        Ok(BuildDeckRequest::from_form(
            format,
            &self.card_list,
            self.commander.value(),
            partner,
            &self.deck_goal,
        ))
    }
}
