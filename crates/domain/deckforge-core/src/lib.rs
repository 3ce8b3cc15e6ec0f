use serde::{Deserialize, Deserializer, Serialize};

pub mod api;
pub mod cardlist;
pub mod categorize;

pub use api::{BuildDeckRequest, CheckPartnerRequest, ValidateCommanderRequest};
pub use cardlist::{parse_card_line, parse_card_list, CardEntry, CardPoolSummary};
pub use categorize::{render_deck_list, DeckCategory, DeckSection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckFormat {
    Standard,
    Commander,
}

impl DeckFormat {
    pub const ALL: [DeckFormat; 2] = [DeckFormat::Standard, DeckFormat::Commander];

    pub fn as_str(self) -> &'static str {
        match self {
            DeckFormat::Standard => "standard",
            DeckFormat::Commander => "commander",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DeckFormat::Standard => "Standard",
            DeckFormat::Commander => "Commander",
        }
    }

    /// Whether decks in this format are led by a commander (and optional partner).
    pub fn uses_commander(self) -> bool {
        matches!(self, DeckFormat::Commander)
    }
}

impl std::fmt::Display for DeckFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub cmc: Option<f64>,
}

impl Card {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_line: None,
            cmc: None,
        }
    }

    pub fn new(name: impl Into<String>, type_line: impl Into<String>, cmc: f64) -> Self {
        Self {
            name: name.into(),
            type_line: Some(type_line.into()),
            cmc: Some(cmc),
        }
    }
}

// The build endpoint reports commanders either as a bare name or as a card object.
#[derive(Deserialize)]
#[serde(untagged)]
enum CardRepr {
    Name(String),
    Full(Card),
}

fn deserialize_card_ref<'de, D>(deserializer: D) -> Result<Option<Card>, D::Error>
where
    D: Deserializer<'de>,
{
    let repr = Option::<CardRepr>::deserialize(deserializer)?;
    Ok(repr.and_then(|r| match r {
        CardRepr::Name(name) if name.trim().is_empty() => None,
        CardRepr::Name(name) => Some(Card::named(name)),
        CardRepr::Full(card) => Some(card),
    }))
}

/// A deck as returned by the build endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BuiltDeck {
    #[serde(default, deserialize_with = "deserialize_card_ref")]
    pub commander: Option<Card>,
    #[serde(default, deserialize_with = "deserialize_card_ref")]
    pub partner: Option<Card>,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_size: Option<usize>,
}

impl BuiltDeck {
    /// Cards in the main deck plus any commanders.
    pub fn total_cards(&self) -> usize {
        self.deck_size.unwrap_or(self.cards.len())
            + usize::from(self.commander.is_some())
            + usize::from(self.partner.is_some())
    }
}

/// Details the validation endpoint reports about an accepted commander.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommanderInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub color_identity: Option<Vec<String>>,
    #[serde(default)]
    pub has_partner: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerCompatibility {
    pub is_compatible: bool,
    #[serde(default)]
    pub reason: Option<String>,
}
