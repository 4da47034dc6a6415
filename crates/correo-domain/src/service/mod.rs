//! Domain services

pub mod cost_calculator;
pub mod tracking;

pub use cost_calculator::{calculate, format_currency, quote_announcement, validate_form};
pub use tracking::{
    estimated_delivery, format_short_date, found_announcement, not_found_announcement,
};
