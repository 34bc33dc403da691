//! Genre chips.

use crate::models::media::Genre;
use colored::Colorize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub label: String,
    /// `None` is the "All" chip.
    pub genre: Option<u64>,
    pub selected: bool,
}

/// "All" followed by one chip per genre.
pub fn chips(genres: &[Genre], selected: Option<u64>) -> Vec<Chip> {
    std::iter::once(Chip {
        label: "All".to_string(),
        genre: None,
        selected: selected.is_none(),
    })
    .chain(genres.iter().map(|g| Chip {
        label: g.name.clone(),
        genre: Some(g.id),
        selected: selected == Some(g.id),
    }))
    .collect()
}

/// Parse a chip selection typed by the user: "all" or a genre id or name.
pub fn select(genres: &[Genre], input: &str) -> Option<Option<u64>> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("all") {
        return Some(None);
    }
    genres
        .iter()
        .find(|g| g.id.to_string() == input || g.name.eq_ignore_ascii_case(input))
        .map(|g| Some(g.id))
}

pub fn render(chips: &[Chip]) -> String {
    chips
        .iter()
        .map(|chip| {
            let text = match chip.genre {
                Some(id) => format!("({}) {}", id, chip.label),
                None => chip.label.clone(),
            };
            if chip.selected {
                format!("[{}]", text).red().bold().to_string()
            } else {
                format!(" {} ", text).dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
