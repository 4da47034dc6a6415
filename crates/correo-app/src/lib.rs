//! Application service layer - use cases, demo data, preferences

pub mod app;
pub mod config;
pub mod constants;
