use deckforge_core::{render_deck_list, BuiltDeck, Card, DeckCategory};

fn headings(deck: &BuiltDeck) -> Vec<String> {
    render_deck_list(deck).iter().map(|s| s.heading()).collect()
}

#[test]
fn commander_deck_sections_follow_fixed_order() {
    let deck = BuiltDeck {
        commander: Some(Card::named("Atraxa")),
        partner: None,
        cards: vec![
            Card::new("Bolt", "Instant", 1.0),
            Card::new("Bear", "Creature", 2.0),
        ],
        deck_size: None,
    };

    assert_eq!(
        headings(&deck),
        vec!["Commander (1)", "Creatures (1)", "Instants (1)"]
    );
}

#[test]
fn first_matching_type_wins() {
    let deck = BuiltDeck {
        cards: vec![
            Card::new("Solemn Simulacrum", "Artifact Creature — Golem", 4.0),
            Card::new("Dryad Arbor", "Land Creature — Forest Dryad", 1.0),
            Card::new("Sol Ring", "Artifact", 1.0),
        ],
        ..Default::default()
    };

    let sections = render_deck_list(&deck);
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].category, DeckCategory::Creatures);
    assert_eq!(
        sections[0]
            .cards
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>(),
        vec!["Solemn Simulacrum", "Dryad Arbor"]
    );
    assert_eq!(sections[1].category, DeckCategory::Artifacts);
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(
        DeckCategory::classify("LEGENDARY PLANESWALKER — Jace"),
        Some(DeckCategory::Planeswalkers)
    );
    assert_eq!(DeckCategory::classify("basic land — island"), Some(DeckCategory::Lands));
    assert_eq!(DeckCategory::classify("Sorcery"), Some(DeckCategory::Sorceries));
}

#[test]
fn unmatched_and_untyped_cards_are_dropped() {
    let deck = BuiltDeck {
        cards: vec![
            Card::new("Some Battle", "Battle — Siege", 3.0),
            Card::named("Mystery"),
            Card::new("Island", "Basic Land — Island", 0.0),
        ],
        ..Default::default()
    };

    let sections = render_deck_list(&deck);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].heading(), "Lands (1)");
}

#[test]
fn commander_slots_are_not_taken_from_card_list() {
    // A legendary creature in the main list stays a creature; the Commander
    // section only reflects the deck's commander slots.
    let deck = BuiltDeck {
        commander: Some(Card::new("Tymna the Weaver", "Legendary Creature — Human Cleric", 3.0)),
        partner: Some(Card::named("Thrasios, Triton Hero")),
        cards: vec![Card::new("Kraum", "Legendary Creature — Zombie Horror", 5.0)],
        deck_size: Some(1),
    };

    assert_eq!(
        headings(&deck),
        vec!["Commander (1)", "Partner (1)", "Creatures (1)"]
    );
}

#[test]
fn server_order_is_preserved_within_sections() {
    let names = ["Zebra", "Aardvark", "Mongoose", "Badger"];
    let deck = BuiltDeck {
        cards: names
            .iter()
            .enumerate()
            .map(|(i, n)| Card::new(*n, "Creature — Beast", i as f64))
            .collect(),
        ..Default::default()
    };

    let sections = render_deck_list(&deck);
    let got: Vec<&str> = sections[0].cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(got, names);
}

#[test]
fn every_single_category_card_is_listed_once() {
    let types = [
        "Creature", "Instant", "Sorcery", "Artifact", "Enchantment", "Planeswalker", "Land",
    ];
    let deck = BuiltDeck {
        cards: types
            .iter()
            .cycle()
            .take(20)
            .enumerate()
            .map(|(i, t)| Card::new(format!("card-{i}"), *t, 1.0))
            .collect(),
        ..Default::default()
    };

    let sections = render_deck_list(&deck);
    let listed: usize = sections.iter().map(|s| s.cards.len()).sum();
    assert_eq!(listed, 20);

    let order: Vec<DeckCategory> = sections.iter().map(|s| s.category).collect();
    let expected: Vec<DeckCategory> = DeckCategory::ORDER
        .into_iter()
        .filter(|c| order.contains(c))
        .collect();
    assert_eq!(order, expected);
}

#[test]
fn commander_accepts_bare_name_or_card_object() {
    let from_name: BuiltDeck = serde_json::from_str(
        r#"{"commander":"Atraxa, Praetors' Voice","partner":null,"deck_size":1,
            "cards":[{"name":"Sol Ring","type":"Artifact","cmc":1.0}]}"#,
    )
    .unwrap();
    assert_eq!(from_name.commander, Some(Card::named("Atraxa, Praetors' Voice")));
    assert_eq!(from_name.partner, None);

    let from_object: BuiltDeck = serde_json::from_str(
        r#"{"commander":{"name":"Atraxa","type":"Legendary Creature","cmc":4},
            "cards":[{"name":"Mystery","type":null,"cmc":null}]}"#,
    )
    .unwrap();
    assert_eq!(
        from_object.commander,
        Some(Card::new("Atraxa", "Legendary Creature", 4.0))
    );
    assert_eq!(from_object.cards[0].type_line, None);
}
