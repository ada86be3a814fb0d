//! Velt - a terminal reader for static forum archives
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod format;
pub mod freshness;
pub mod loader;
pub mod logging;
pub mod models;
pub mod nav;
pub mod pagination;
pub mod resolver;
pub mod terminal;
pub mod traits;
pub mod ui;
