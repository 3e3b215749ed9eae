//! # Value Objects
//!
//! Caller identity, operation payloads and organization policy.
//!
//! Caller identity is passed explicitly into every operation rather than
//! resolved from ambient invocation state, so the core stays testable
//! without a live host runtime.

use serde::{Deserialize, Serialize};

/// The resolved identity of the invoking client.
///
/// Resolved once per invocation by the host's identity layer and immutable
/// for the invocation's duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// Opaque unique client identity (e.g. an x509 subject string).
    pub id: String,
    /// Organization affiliation tag.
    pub org: String,
}

impl Caller {
    pub fn new(id: impl Into<String>, org: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            org: org.into(),
        }
    }
}

/// A geographic coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Environmental telemetry captured during transit.
///
/// Defaults to zero for steps that carry no telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TelemetryReading {
    pub temperature: f64,
    pub humidity: f64,
}

impl TelemetryReading {
    pub fn new(temperature: f64, humidity: f64) -> Self {
        Self {
            temperature,
            humidity,
        }
    }
}

/// Immutable descriptive attributes supplied at batch creation.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSpec {
    pub batch_id: String,
    pub farmer_id: String,
    pub farmer_name: String,
    pub agri_stack_id: String,
    pub crop: String,
    pub variety: String,
    pub quantity: f64,
    pub unit: String,
    pub harvest_date: String,
    pub origin: GeoPoint,
    pub origin_address: String,
}

/// Organization role gating a lifecycle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgRole {
    /// Farmer organization: creates batches.
    Producer,
    /// Driver organization: pickup, transit updates, delivery.
    Carrier,
    /// Retailer organization: receipt and sale.
    Retailer,
}

/// Maps transition roles to concrete organization tags.
///
/// The defaults match the organization names embedded in existing stored
/// documents; hosts with a different membership layout override them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgPolicy {
    pub producer: String,
    pub carrier: String,
    pub retailer: String,
}

impl Default for OrgPolicy {
    fn default() -> Self {
        Self {
            producer: "FarmerOrgMSP".to_string(),
            carrier: "DriverOrgMSP".to_string(),
            retailer: "RetailerOrgMSP".to_string(),
        }
    }
}

impl OrgPolicy {
    /// The organization tag required for a role.
    pub fn org_for(&self, role: OrgRole) -> &str {
        match role {
            OrgRole::Producer => &self.producer,
            OrgRole::Carrier => &self.carrier,
            OrgRole::Retailer => &self.retailer,
        }
    }
}
