//! Shared types for tracking lookups and shipping quotes

use crate::ValidationError;
use serde::{Deserialize, Serialize};

/// Length of every valid tracking code
pub const TRACKING_CODE_LEN: usize = 13;

/// Validated, normalized tracking code: exactly 13 uppercase
/// alphanumeric characters. Construction goes through [`TrackingCode::parse`],
/// so an existing value is always fully validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TrackingCode(String);

impl TrackingCode {
    /// Normalize and validate raw user input.
    ///
    /// Steps, in order: trim and uppercase; reject empty input; reject
    /// length other than 13; reject characters outside A-Z0-9.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let normalized = raw.trim().to_uppercase();

        if normalized.is_empty() {
            return Err(ValidationError::Empty);
        }

        if normalized.chars().count() != TRACKING_CODE_LEN {
            return Err(ValidationError::InvalidLength);
        }

        if !normalized
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(ValidationError::InvalidCharacters);
        }

        Ok(TrackingCode(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TrackingCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shipment state derived from the latest status text.
///
/// Classification is substring containment, case sensitive, first match
/// wins: "Entregado" before "tránsito" before "recibido"/"clasificación".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Delivered,
    InTransit,
    Processing,
    Unknown,
}

impl ShipmentStatus {
    pub fn classify(status_text: &str) -> Self {
        if status_text.contains("Entregado") {
            ShipmentStatus::Delivered
        } else if status_text.contains("tránsito") {
            ShipmentStatus::InTransit
        } else if status_text.contains("recibido") || status_text.contains("clasificación") {
            ShipmentStatus::Processing
        } else {
            ShipmentStatus::Unknown
        }
    }

    /// Display label (es-AR)
    pub fn label(&self) -> &'static str {
        match self {
            ShipmentStatus::Delivered => "Entregado",
            ShipmentStatus::InTransit => "En tránsito",
            ShipmentStatus::Processing => "En proceso",
            ShipmentStatus::Unknown => "Desconocido",
        }
    }
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Shipping speed class; drives the cost multiplier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceTier {
    #[default]
    #[serde(rename = "estandar")]
    Standard,
    #[serde(rename = "express")]
    Express,
    #[serde(rename = "prioritario")]
    Priority,
}

impl ServiceTier {
    /// Parse the value posted by the service-type select. Unrecognized
    /// values fall back to Standard, matching the fail-open pricing of
    /// the calculator.
    pub fn from_form_value(value: &str) -> Self {
        match value.trim() {
            "express" => ServiceTier::Express,
            "prioritario" => ServiceTier::Priority,
            _ => ServiceTier::Standard,
        }
    }

    /// Multiplier applied to the weight-tier base cost
    pub fn multiplier(&self) -> f64 {
        match self {
            ServiceTier::Standard => 1.0,
            ServiceTier::Express => 1.5,
            ServiceTier::Priority => 2.0,
        }
    }

    /// Display label (es-AR)
    pub fn label(&self) -> &'static str {
        match self {
            ServiceTier::Standard => "Estándar",
            ServiceTier::Express => "Express",
            ServiceTier::Priority => "Prioritario",
        }
    }
}

impl std::fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raw field values handed over by the shipping form, before validation.
/// The weight stays a string here: number inputs post an empty value for
/// non-numeric text, and the validator decides what the rest means.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShippingForm {
    pub origin: String,
    pub destination: String,
    pub weight: String,
    /// Service tier form value (estandar, express, prioritario)
    pub service_tier: String,
    pub insured: bool,
}

/// Validated shipping request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingRequest {
    pub origin: String,
    pub destination: String,
    pub weight_kg: f64,
    pub tier: ServiceTier,
    pub insured: bool,
}

impl ShippingRequest {
    /// Cross-route shipments (origin differs from destination, compared
    /// case sensitively) carry a flat distance surcharge.
    pub fn is_cross_route(&self) -> bool {
        self.origin != self.destination
    }
}

/// Computed cost breakdown for one shipping request. Derived and
/// immutable; recomputed on every request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingQuote {
    pub base_cost: f64,
    pub insurance_cost: f64,
    pub total_cost: f64,
    pub request: ShippingRequest,
}
