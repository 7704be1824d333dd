//! Deterministic sender colors.
//!
//! Colors are handed out round-robin in the order senders first appear, so
//! the same conversation always renders with the same colors.
//!
//! ```
//! use chatscroll::core::colors::assign_colors;
//! use chatscroll::config::Palette;
//!
//! let colors = assign_colors(["Alice", "Bob"], Palette::Classic.colors());
//! assert_eq!(colors.get("Alice"), Some("rgba(173, 216, 230, 0.8)"));
//! ```

use std::collections::HashMap;

use crate::core::models::NormalizedMessage;

/// Seven pastel colors.
pub const CLASSIC_PALETTE: &[&str] = &[
    "rgba(173, 216, 230, 0.8)", // light blue
    "rgba(240, 128, 128, 0.8)", // light coral
    "rgba(144, 238, 144, 0.8)", // light green
    "rgba(255, 182, 193, 0.8)", // light pink
    "rgba(255, 255, 224, 0.8)", // light yellow
    "rgba(221, 160, 221, 0.8)", // plum
    "rgba(255, 222, 173, 0.8)", // navajo white
];

/// Thirty-one distinct colors for large spaces.
pub const EXTENDED_PALETTE: &[&str] = &[
    "rgba(173, 216, 230, 0.8)",
    "rgba(240, 128, 128, 0.8)",
    "rgba(144, 238, 144, 0.8)",
    "rgba(255, 182, 193, 0.8)",
    "rgba(255, 255, 224, 0.8)",
    "rgba(221, 160, 221, 0.8)",
    "rgba(255, 222, 173, 0.8)",
    "rgba(175, 238, 238, 0.8)",
    "rgba(250, 128, 114, 0.8)",
    "rgba(152, 251, 152, 0.8)",
    "rgba(255, 192, 203, 0.8)",
    "rgba(250, 250, 210, 0.8)",
    "rgba(216, 191, 216, 0.8)",
    "rgba(245, 222, 179, 0.8)",
    "rgba(176, 224, 230, 0.8)",
    "rgba(255, 160, 122, 0.8)",
    "rgba(189, 252, 201, 0.8)",
    "rgba(255, 228, 225, 0.8)",
    "rgba(255, 250, 205, 0.8)",
    "rgba(230, 230, 250, 0.8)",
    "rgba(255, 218, 185, 0.8)",
    "rgba(135, 206, 250, 0.8)",
    "rgba(233, 150, 122, 0.8)",
    "rgba(143, 188, 143, 0.8)",
    "rgba(219, 112, 147, 0.8)",
    "rgba(240, 230, 140, 0.8)",
    "rgba(186, 85, 211, 0.8)",
    "rgba(244, 164, 96, 0.8)",
    "rgba(127, 255, 212, 0.8)",
    "rgba(210, 180, 140, 0.8)",
    "rgba(188, 143, 143, 0.8)",
];

/// Mapping from sender display name to color.
///
/// Keeps first-seen order for iteration; lookups go through an index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorAssignment {
    entries: Vec<(String, &'static str)>,
    index: HashMap<String, usize>,
}

impl ColorAssignment {
    /// Color assigned to `name`.
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.index.get(name).map(|&i| self.entries[i].1)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.entries.iter().map(|(name, color)| (name.as_str(), *color))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns distinct sender names in order of first appearance.
pub fn distinct_senders(messages: &[NormalizedMessage]) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    messages
        .iter()
        .map(|msg| msg.sender.name.as_str())
        .filter(|name| seen.insert(*name))
        .collect()
}

/// Assigns palette colors to `names`, cycling when names outnumber colors.
///
/// Repeated names keep their first color. An empty palette yields an empty
/// assignment.
pub fn assign_colors<I, S>(names: I, palette: &[&'static str]) -> ColorAssignment
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut assignment = ColorAssignment::default();
    if palette.is_empty() {
        return assignment;
    }

    for name in names {
        let name = name.as_ref();
        if assignment.index.contains_key(name) {
            continue;
        }
        let color = palette[assignment.entries.len() % palette.len()];
        assignment
            .index
            .insert(name.to_string(), assignment.entries.len());
        assignment.entries.push((name.to_string(), color));
    }

    assignment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Content, Sender};
    use std::collections::HashSet;

    fn msg(sender: &str) -> NormalizedMessage {
        NormalizedMessage::new(
            "01/January/2024 13:02:03",
            Sender::new(sender, "x@example.com"),
            Content::Text("hi".into()),
        )
    }

    #[test]
    fn test_palettes_are_distinct() {
        for palette in [CLASSIC_PALETTE, EXTENDED_PALETTE] {
            let unique: HashSet<_> = palette.iter().collect();
            assert_eq!(unique.len(), palette.len());
        }
        assert_eq!(CLASSIC_PALETTE.len(), 7);
        assert_eq!(EXTENDED_PALETTE.len(), 31);
    }

    #[test]
    fn test_first_seen_order() {
        let messages = vec![msg("Bob"), msg("Alice"), msg("Bob"), msg("Carol")];
        assert_eq!(distinct_senders(&messages), vec!["Bob", "Alice", "Carol"]);

        let colors = assign_colors(distinct_senders(&messages), CLASSIC_PALETTE);
        assert_eq!(colors.get("Bob"), Some(CLASSIC_PALETTE[0]));
        assert_eq!(colors.get("Alice"), Some(CLASSIC_PALETTE[1]));
        assert_eq!(colors.get("Carol"), Some(CLASSIC_PALETTE[2]));
    }

    #[test]
    fn test_cycles_past_palette_length() {
        let names: Vec<String> = (0..10).map(|i| format!("user{i}")).collect();
        let colors = assign_colors(&names, CLASSIC_PALETTE);
        assert_eq!(colors.len(), 10);
        assert_eq!(colors.get("user7"), colors.get("user0"));
        assert_eq!(colors.get("user9"), Some(CLASSIC_PALETTE[2]));
    }

    #[test]
    fn test_duplicate_names_keep_first_color() {
        let colors = assign_colors(["A", "B", "A"], CLASSIC_PALETTE);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors.get("A"), Some(CLASSIC_PALETTE[0]));
    }

    #[test]
    fn test_empty_palette() {
        assert!(assign_colors(["A"], &[]).is_empty());
    }

    #[test]
    fn test_iter_preserves_order() {
        let colors = assign_colors(["Zed", "Amy"], EXTENDED_PALETTE);
        let names: Vec<&str> = colors.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
    }
}
