//! Constants for the demo services

pub mod tracking_data;

pub use tracking_data::{get_tracking_record, lookup};
