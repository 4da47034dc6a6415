//! Domain model types

pub mod tracking_event;
pub mod tracking_record;

pub use tracking_event::TrackingEvent;
pub use tracking_record::{LookupResult, TimelineItem, TrackingRecord};
