use super::TrackingEvent;
use correo_types::TrackingCode;
use serde::{Deserialize, Serialize};

/// Ordered event history for one tracking code. Events are stored in
/// ascending time order; the last one is the current status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingRecord {
    pub events: Vec<TrackingEvent>,
}

impl TrackingRecord {
    pub fn new(events: Vec<TrackingEvent>) -> Self {
        Self { events }
    }

    /// Latest event. None only for an empty record, which the seed data
    /// never contains.
    pub fn last_event(&self) -> Option<&TrackingEvent> {
        self.events.last()
    }

    /// Timeline view with progress markers: every event except the last
    /// is completed, the last one is active.
    pub fn timeline(&self) -> Vec<TimelineItem> {
        let last = self.events.len().saturating_sub(1);
        self.events
            .iter()
            .enumerate()
            .map(|(i, event)| TimelineItem {
                event: event.clone(),
                completed: i < last,
                active: i == last,
            })
            .collect()
    }
}

/// One timeline row ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineItem {
    pub event: TrackingEvent,
    pub completed: bool,
    pub active: bool,
}

/// Outcome of a dataset lookup: the full record, or the queried code for
/// the not-found notification. Produced fresh per call, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LookupResult {
    Found(TrackingRecord),
    NotFound(TrackingCode),
}

impl LookupResult {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found(_))
    }
}
