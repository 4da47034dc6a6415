use serde::{Deserialize, Serialize};

/// One point in a shipment's history. Dates are preformatted display
/// strings in the site's locale (e.g. "15 Ene, 10:30").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingEvent {
    pub status: String,
    pub date: String,
    pub location: String,
}
