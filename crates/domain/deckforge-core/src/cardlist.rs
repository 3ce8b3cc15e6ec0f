//! Card pool text parsing, used for display summaries only. The raw text is
//! what gets sent to the build service.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardEntry {
    pub quantity: u32,
    pub name: String,
}

/// Parses one pool line: `2x Card Name (SET) 123` or a bare `Card Name`.
///
/// The quantity defaults to 1. Anything from the first `(` or `*` on (set
/// codes, collector numbers, foil markers) is ignored. Blank lines yield `None`.
pub fn parse_card_line(line: &str) -> Option<CardEntry> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some((quantity, rest)) = split_quantity(line) {
        let name = strip_annotations(rest);
        if !name.is_empty() {
            return Some(CardEntry {
                quantity,
                name: name.to_string(),
            });
        }
    }

    let name = strip_annotations(line);
    Some(CardEntry {
        quantity: 1,
        name: if name.is_empty() { line } else { name }.to_string(),
    })
}

pub fn parse_card_list(text: &str) -> Vec<CardEntry> {
    text.lines().filter_map(parse_card_line).collect()
}

fn split_quantity(line: &str) -> Option<(u32, &str)> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix(['x', 'X'])?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let quantity = line[..digits].parse().ok()?;
    Some((quantity, rest))
}

fn strip_annotations(s: &str) -> &str {
    let end = s.find(['(', '*']).unwrap_or(s.len());
    s[..end].trim()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardPoolSummary {
    pub entries: usize,
    pub total_quantity: u32,
}

impl CardPoolSummary {
    pub fn of(text: &str) -> Self {
        parse_card_list(text)
            .iter()
            .fold(Self::default(), |acc, entry| Self {
                entries: acc.entries + 1,
                total_quantity: acc.total_quantity.saturating_add(entry.quantity),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(quantity: u32, name: &str) -> Option<CardEntry> {
        Some(CardEntry {
            quantity,
            name: name.to_string(),
        })
    }

    #[test]
    fn parses_quantity_prefix_and_drops_set_code() {
        assert_eq!(parse_card_line("2x Lightning Bolt (M10) 146"), entry(2, "Lightning Bolt"));
        assert_eq!(parse_card_line("  10x Forest  "), entry(10, "Forest"));
    }

    #[test]
    fn uppercase_quantity_marker_is_accepted() {
        assert_eq!(parse_card_line("2X Forest"), entry(2, "Forest"));
        assert_eq!(CardPoolSummary::of("2X Forest\n3x Island").total_quantity, 5);
    }

    #[test]
    fn bare_names_default_to_one_copy() {
        assert_eq!(parse_card_line("Sol Ring"), entry(1, "Sol Ring"));
        assert_eq!(parse_card_line("Sol Ring *F*"), entry(1, "Sol Ring"));
    }

    #[test]
    fn quantity_needs_the_x_and_a_space() {
        // "Xenagos" must not be read as a quantity-less "x" prefix, and
        // "3xForest" is taken literally.
        assert_eq!(parse_card_line("Xenagos, the Reveler"), entry(1, "Xenagos, the Reveler"));
        assert_eq!(parse_card_line("3xForest"), entry(1, "3xForest"));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let entries = parse_card_list("1x Island\n\n   \n2x Swamp\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], CardEntry { quantity: 2, name: "Swamp".into() });
    }

    #[test]
    fn summary_counts_entries_and_copies() {
        let summary = CardPoolSummary::of("4x Shock\n2x Opt (XLN)\nIsland\n");
        assert_eq!(
            summary,
            CardPoolSummary {
                entries: 3,
                total_quantity: 7
            }
        );
        assert_eq!(CardPoolSummary::of(""), CardPoolSummary::default());
    }
}
