//! Loading placeholders.

use colored::Colorize;

/// Number of placeholder tiles a loading grid shows.
pub const GRID_PLACEHOLDERS: usize = 12;

/// One placeholder grid tile.
pub fn tile() -> String {
    format!("{}  {}", "▒▒▒▒".dimmed(), "░░░░░░░░░░░░░░░░".dimmed())
}

/// Sections of the detail page with their slot counts.
const DETAIL_SECTIONS: &[(&str, usize)] = &[
    ("Cast", 6),
    ("Screenshots", 6),
    ("Trailer", 1),
    ("Reviews", 3),
    ("Similar", 6),
];

/// Whole-page placeholder shown until a title's details arrive.
pub fn detail_page() -> String {
    let bar = |width: usize| "░".repeat(width).dimmed().to_string();
    let mut lines = vec![bar(24), bar(60), bar(52), bar(44), String::new()];
    for (section, slots) in DETAIL_SECTIONS {
        lines.push(format!("{}", section.dimmed()));
        lines.push(
            std::iter::repeat("▒▒▒▒")
                .take(*slots)
                .collect::<Vec<_>>()
                .join(" ")
                .dimmed()
                .to_string(),
        );
    }
    lines.join("\n")
}
