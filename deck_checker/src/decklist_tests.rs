//! Unit tests for decklist parsing.

use super::*;

mod entry_extraction {
    use super::*;

    #[test]
    fn parses_simple_entry() {
        let deck = parse("2 Weedle A2b 1");

        assert_eq!(deck.required.len(), 1);
        assert!(deck.invalid_lines.is_empty());

        let card = &deck.required[0];
        assert_eq!(card.key, "A2b-1");
        assert_eq!(card.name(), "Weedle");
        assert_eq!(card.set_code(), "A2b");
        assert_eq!(card.card_number(), "1");
        assert_eq!(card.needed_qty, 2);
    }

    #[test]
    fn name_keeps_inner_spaces() {
        let deck = parse("1 Beedrill ex A2b 3");
        assert_eq!(deck.required[0].name(), "Beedrill ex");
        assert_eq!(deck.required[0].key, "A2b-3");
    }

    #[test]
    fn collapses_repeated_whitespace_in_name() {
        let deck = parse("2   Professor’s \t Research   PROMO  7");
        let card = &deck.required[0];
        assert_eq!(card.name(), "Professor’s Research");
        assert_eq!(card.key, "PROMO-7");
    }

    #[test]
    fn accepts_special_characters() {
        let deck = parse("2 Poké Ball PROMO 5");
        assert_eq!(deck.required[0].name(), "Poké Ball");
    }

    #[test]
    fn key_is_not_normalized() {
        let deck = parse("1 Red a2B 071");
        assert_eq!(deck.required[0].key, "a2B-071");
    }

    #[test]
    fn quantity_reads_leading_digits() {
        let deck = parse("2x Weedle A2b 1");
        assert_eq!(deck.required[0].needed_qty, 2);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let deck = parse("   1 Pinsir A2b 4   \r");
        assert_eq!(deck.required.len(), 1);
        assert_eq!(deck.required[0].key, "A2b-4");
    }
}

mod invalid_lines {
    use super::*;

    #[test]
    fn zero_quantity_is_invalid() {
        let deck = parse("0 Weedle A2b 1");
        assert!(deck.required.is_empty());
        assert_eq!(deck.invalid_lines, vec!["0 Weedle A2b 1".to_string()]);
    }

    #[test]
    fn missing_name_is_invalid() {
        let deck = parse("2 A2b 1");
        assert!(deck.required.is_empty());
        assert_eq!(deck.invalid_lines.len(), 1);
    }

    #[test]
    fn missing_set_and_number_is_invalid() {
        let deck = parse("2 Weedle\n3");
        assert!(deck.required.is_empty());
        assert_eq!(deck.invalid_lines, vec!["2 Weedle".to_string(), "3".to_string()]);
    }

    #[test]
    fn invalid_lines_are_kept_verbatim() {
        let deck = parse("Pokemon\n  0 Weedle A2b 1  \n");
        assert_eq!(deck.invalid_lines, vec!["  0 Weedle A2b 1  ".to_string()]);
    }

    #[test]
    fn overflowing_quantity_is_invalid() {
        let deck = parse("99999999999 Weedle A2b 1");
        assert!(deck.required.is_empty());
        assert_eq!(deck.invalid_lines.len(), 1);
    }
}

mod skipped_lines {
    use super::*;

    #[test]
    fn line_without_leading_digit_is_skipped_entirely() {
        let deck = parse("abc DEF 12");
        assert!(deck.required.is_empty());
        assert!(deck.invalid_lines.is_empty());
    }

    #[test]
    fn section_headers_never_appear_as_invalid() {
        let deck = parse(DEFAULT_DECK);
        for header in ["Pokemon", "Supporter", "Item"] {
            assert!(!deck.invalid_lines.iter().any(|l| l.contains(header)));
            assert!(!deck.required.iter().any(|c| c.name() == header));
        }
    }

    #[test]
    fn blank_and_empty_input() {
        assert_eq!(parse(""), ParsedDeck::default());
        assert_eq!(parse("\n\n   \n"), ParsedDeck::default());
    }
}

#[test]
fn default_deck_parses_fully() {
    let deck = parse(DEFAULT_DECK);

    assert_eq!(deck.required.len(), 13);
    assert!(deck.invalid_lines.is_empty());
    assert_eq!(deck.total_needed(), 20);
    assert_eq!(deck.required[0].key, "A2b-1");
    assert_eq!(deck.required[12].name(), "Poké Ball");
}

#[test]
fn keys_and_names_are_well_formed() {
    let deck = parse(DEFAULT_DECK);
    for card in &deck.required {
        assert_eq!(card.key, format!("{}-{}", card.set_code(), card.card_number()));
        assert_eq!(card.name(), card.name().trim());
    }
}

#[test]
fn parsing_is_deterministic() {
    let text = format!("{}\n0 Broken A1 1\nnot a card", DEFAULT_DECK);
    assert_eq!(parse(&text), parse(&text));
}

#[test]
fn preserves_input_order() {
    let deck = parse("1 Lopunny A2b 67\n2 Buneary A2b 66");
    let keys: Vec<&str> = deck.required.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["A2b-67", "A2b-66"]);
}
