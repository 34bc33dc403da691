//! CineVerse Library
//!
//! A terminal movie and TV catalog browser backed by TMDB.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod preflight;
pub mod services;
pub mod ui;

pub use error::{Error, Result};
