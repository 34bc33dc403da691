//! Prev/Next pagination control.

use colored::Colorize;

/// Stateless pagination control for `page` of `total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub total_pages: u32,
}

impl Pagination {
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self { page, total_pages }
    }

    pub fn label(&self) -> String {
        format!("{} / {}", self.page, self.total_pages)
    }

    pub fn prev_enabled(&self) -> bool {
        self.page != 1
    }

    pub fn next_enabled(&self) -> bool {
        self.page != self.total_pages
    }

    /// Page reported by clicking Prev; nothing while it is disabled.
    pub fn prev(&self) -> Option<u32> {
        self.prev_enabled().then(|| self.page - 1)
    }

    /// Page reported by clicking Next; nothing while it is disabled.
    pub fn next(&self) -> Option<u32> {
        self.next_enabled().then(|| self.page + 1)
    }

    pub fn render(&self) -> String {
        let button = |label: &str, enabled: bool| {
            if enabled {
                format!("[{}]", label).bold().to_string()
            } else {
                format!("[{}]", label).dimmed().to_string()
            }
        };
        format!(
            "{}  {}  {}",
            button("Prev", self.prev_enabled()),
            self.label(),
            button("Next", self.next_enabled())
        )
    }
}
