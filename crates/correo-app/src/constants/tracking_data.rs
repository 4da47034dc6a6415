//! Static demo shipment dataset
//!
//! The informational site ships with a handful of demo codes; events are
//! stored in ascending time order per shipment.

use correo_domain::model::{LookupResult, TrackingEvent, TrackingRecord};
use correo_types::TrackingCode;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Demo shipments keyed by tracking code
pub static TRACKING_DATA: LazyLock<HashMap<&'static str, TrackingRecord>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert(
        "RA123456789AR",
        TrackingRecord::new(vec![
            TrackingEvent {
                status: "Envío recibido".to_string(),
                date: "15 Ene, 10:30".to_string(),
                location: "Sucursal Central".to_string(),
            },
            TrackingEvent {
                status: "En proceso de clasificación".to_string(),
                date: "15 Ene, 14:15".to_string(),
                location: "Centro de Distribución".to_string(),
            },
            TrackingEvent {
                status: "En tránsito".to_string(),
                date: "16 Ene, 08:45".to_string(),
                location: "Hacia destino final".to_string(),
            },
            TrackingEvent {
                status: "Entregado".to_string(),
                date: "17 Ene, 14:20".to_string(),
                location: "Sucursal destino".to_string(),
            },
        ]),
    );

    m.insert(
        "RB987654321AR",
        TrackingRecord::new(vec![
            TrackingEvent {
                status: "Envío recibido".to_string(),
                date: "14 Ene, 09:15".to_string(),
                location: "Sucursal Norte".to_string(),
            },
            TrackingEvent {
                status: "En proceso de clasificación".to_string(),
                date: "14 Ene, 16:30".to_string(),
                location: "Centro de Distribución".to_string(),
            },
            TrackingEvent {
                status: "En tránsito".to_string(),
                date: "15 Ene, 11:00".to_string(),
                location: "Hacia destino final".to_string(),
            },
        ]),
    );

    m.insert(
        "RC555666777AR",
        TrackingRecord::new(vec![
            TrackingEvent {
                status: "Envío recibido".to_string(),
                date: "16 Ene, 13:45".to_string(),
                location: "Sucursal Oeste".to_string(),
            },
            TrackingEvent {
                status: "En proceso de clasificación".to_string(),
                date: "16 Ene, 17:20".to_string(),
                location: "Centro de Distribución".to_string(),
            },
        ]),
    );

    m
});

/// Get the demo record for a code
pub fn get_tracking_record(code: &TrackingCode) -> Option<&'static TrackingRecord> {
    TRACKING_DATA.get(code.as_str())
}

/// Exact-match lookup against the demo dataset. Produces a fresh result
/// per call; no fuzzy matching, no partial codes.
pub fn lookup(code: &TrackingCode) -> LookupResult {
    match get_tracking_record(code) {
        Some(record) => LookupResult::Found(record.clone()),
        None => LookupResult::NotFound(code.clone()),
    }
}
