//! External services.

pub mod images;
pub mod tmdb;
