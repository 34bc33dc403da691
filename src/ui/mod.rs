//! Terminal rendering of pages and their shared controls.

pub mod card;
pub mod detail;
pub mod genre_filter;
pub mod page;
pub mod pagination;
pub mod skeleton;
