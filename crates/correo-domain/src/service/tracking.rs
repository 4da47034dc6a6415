//! Derived display rules for tracking results

use chrono::{Duration, NaiveDate};
use correo_types::TrackingCode;

/// Days ahead quoted as the estimated delivery
const DELIVERY_OFFSET_DAYS: i64 = 2;

/// Estimated delivery date: two calendar days after the given date.
/// This is a function of "today", not of the last event's date; the
/// demo dataset only carries display-formatted date strings.
pub fn estimated_delivery(today: NaiveDate) -> NaiveDate {
    today + Duration::days(DELIVERY_OFFSET_DAYS)
}

/// Short date in es-AR form: day and month without zero padding,
/// e.g. "27/8/2026"
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}

/// Screen-reader announcement for a successful lookup
pub fn found_announcement(code: &TrackingCode) -> String {
    format!("Resultados de rastreo encontrados para {}", code)
}

/// Screen-reader announcement when no record matches the code
pub fn not_found_announcement(code: &TrackingCode) -> String {
    format!(
        "No se encontraron resultados para el número de tracking {}",
        code
    )
}
