//! Tracking service - the shipment lookup use case
//!
//! Validates a raw code, resolves it against the demo dataset, and
//! assembles the view the UI layer renders:
//! 1. Normalize and validate the code
//! 2. Exact-match lookup
//! 3. Classify the latest status and derive the timeline markers
//! 4. Attach the estimated delivery date

use crate::constants::tracking_data;
use chrono::{Local, NaiveDate};
use correo_domain::model::{LookupResult, TimelineItem};
use correo_domain::service::tracking::{
    estimated_delivery, format_short_date, found_announcement, not_found_announcement,
};
use correo_types::{ShipmentStatus, TrackingCode, ValidationError};
use serde::Serialize;

/// Resolved view of a found shipment, ready for rendering
#[derive(Debug, Clone, Serialize)]
pub struct TrackingReport {
    pub code: TrackingCode,

    /// Raw status text of the latest event
    pub current_status: String,

    /// Classified state of the latest event
    pub status: ShipmentStatus,

    /// Estimated delivery as an es-AR short date
    pub estimated_delivery: String,

    pub timeline: Vec<TimelineItem>,
}

/// Outcome of a tracking request
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum TrackingOutcome {
    Found(TrackingReport),
    NotFound { code: TrackingCode },
}

impl TrackingOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, TrackingOutcome::Found(_))
    }

    /// Screen-reader announcement for this outcome
    pub fn announcement(&self) -> String {
        match self {
            TrackingOutcome::Found(report) => found_announcement(&report.code),
            TrackingOutcome::NotFound { code } => not_found_announcement(code),
        }
    }
}

/// Validate a raw code and resolve it against the demo dataset
pub fn track_shipment(raw_code: &str) -> Result<TrackingOutcome, ValidationError> {
    Ok(resolve_tracking(&TrackingCode::parse(raw_code)?))
}

/// Same as [`track_shipment`] with an explicit "today" for the delivery
/// estimate
pub fn track_shipment_on(
    raw_code: &str,
    today: NaiveDate,
) -> Result<TrackingOutcome, ValidationError> {
    Ok(resolve_tracking_on(&TrackingCode::parse(raw_code)?, today))
}

/// Resolve an already-validated code
pub fn resolve_tracking(code: &TrackingCode) -> TrackingOutcome {
    resolve_tracking_on(code, Local::now().date_naive())
}

/// Resolve an already-validated code with an explicit "today"
pub fn resolve_tracking_on(code: &TrackingCode, today: NaiveDate) -> TrackingOutcome {
    match tracking_data::lookup(code) {
        LookupResult::Found(record) => {
            let current_status = record
                .last_event()
                .map(|event| event.status.clone())
                .unwrap_or_default();

            TrackingOutcome::Found(TrackingReport {
                code: code.clone(),
                status: ShipmentStatus::classify(&current_status),
                current_status,
                estimated_delivery: format_short_date(estimated_delivery(today)),
                timeline: record.timeline(),
            })
        }
        LookupResult::NotFound(code) => TrackingOutcome::NotFound { code },
    }
}
