//! Use case services

pub mod tracking_service;

pub use tracking_service::{
    resolve_tracking, resolve_tracking_on, track_shipment, track_shipment_on, TrackingOutcome,
    TrackingReport,
};
