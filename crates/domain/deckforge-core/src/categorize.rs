use crate::{BuiltDeck, Card};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeckCategory {
    Commander,
    Partner,
    Creatures,
    Instants,
    Sorceries,
    Artifacts,
    Enchantments,
    Planeswalkers,
    Lands,
}

impl DeckCategory {
    /// Display order. Type matching for main-deck cards follows the same order,
    /// so the first matching category wins.
    pub const ORDER: [DeckCategory; 9] = [
        DeckCategory::Commander,
        DeckCategory::Partner,
        DeckCategory::Creatures,
        DeckCategory::Instants,
        DeckCategory::Sorceries,
        DeckCategory::Artifacts,
        DeckCategory::Enchantments,
        DeckCategory::Planeswalkers,
        DeckCategory::Lands,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DeckCategory::Commander => "Commander",
            DeckCategory::Partner => "Partner",
            DeckCategory::Creatures => "Creatures",
            DeckCategory::Instants => "Instants",
            DeckCategory::Sorceries => "Sorceries",
            DeckCategory::Artifacts => "Artifacts",
            DeckCategory::Enchantments => "Enchantments",
            DeckCategory::Planeswalkers => "Planeswalkers",
            DeckCategory::Lands => "Lands",
        }
    }

    // Commander and Partner are filled from the deck's commander slots, never by type.
    fn type_needle(self) -> Option<&'static str> {
        match self {
            DeckCategory::Commander | DeckCategory::Partner => None,
            DeckCategory::Creatures => Some("creature"),
            DeckCategory::Instants => Some("instant"),
            DeckCategory::Sorceries => Some("sorcery"),
            DeckCategory::Artifacts => Some("artifact"),
            DeckCategory::Enchantments => Some("enchantment"),
            DeckCategory::Planeswalkers => Some("planeswalker"),
            DeckCategory::Lands => Some("land"),
        }
    }

    /// Main-deck category for a type line, or `None` if no listed type matches.
    pub fn classify(type_line: &str) -> Option<DeckCategory> {
        let lowered = type_line.to_lowercase();
        Self::ORDER.into_iter().find(|category| {
            category
                .type_needle()
                .is_some_and(|needle| lowered.contains(needle))
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeckSection {
    pub category: DeckCategory,
    pub cards: Vec<Card>,
}

impl DeckSection {
    pub fn heading(&self) -> String {
        format!("{} ({})", self.category.label(), self.cards.len())
    }
}

/// Groups a built deck into display sections.
///
/// Sections follow [`DeckCategory::ORDER`], empty ones are omitted, and cards
/// keep the order the server sent them in. Cards whose type matches no
/// category are not shown.
pub fn render_deck_list(deck: &BuiltDeck) -> Vec<DeckSection> {
    let mut buckets: Vec<(DeckCategory, Vec<Card>)> = DeckCategory::ORDER
        .into_iter()
        .map(|category| (category, Vec::new()))
        .collect();

    let mut push = |category: DeckCategory, card: &Card| {
        if let Some((_, cards)) = buckets.iter_mut().find(|(c, _)| *c == category) {
            cards.push(card.clone());
        }
    };

    if let Some(commander) = &deck.commander {
        push(DeckCategory::Commander, commander);
    }
    if let Some(partner) = &deck.partner {
        push(DeckCategory::Partner, partner);
    }
    for card in &deck.cards {
        if let Some(category) = card.type_line.as_deref().and_then(DeckCategory::classify) {
            push(category, card);
        }
    }

    buckets
        .into_iter()
        .filter(|(_, cards)| !cards.is_empty())
        .map(|(category, cards)| DeckSection { category, cards })
        .collect()
}
