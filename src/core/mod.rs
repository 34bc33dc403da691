//! Page controllers: state, fetch orchestration and view-state rules.

pub mod browse;
pub mod detail;
pub mod navigator;
pub mod page_state;
pub mod route;
pub mod search;
