//! Persistence Service Wire Types
//!
//! JSON bodies of `/itinerarydata`. The partition is stored verbatim as the
//! `data` field of a trip document; every save replaces the stored copy
//! wholesale (last write wins, no merge).

use serde::{Deserialize, Serialize};

use crate::partition::Partition;

/// Body of `POST /itinerarydata`. Upserts by email, or by (email, tripID)
/// in multi-trip mode. `tripName`/`description` are only sent when creating
/// a trip record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRequest {
    pub email: String,
    #[serde(rename = "tripID", default, skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<String>,
    #[serde(rename = "tripName", default, skip_serializing_if = "Option::is_none")]
    pub trip_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub data: Partition,
}

/// A stored trip document as the service echoes it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripDocument {
    pub email: String,
    #[serde(rename = "tripID", default)]
    pub trip_id: Option<String>,
    #[serde(rename = "tripName", default)]
    pub trip_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub data: Partition,
}

/// Envelope of GET and POST responses: `{ success, data: <document> }`.
/// Error responses carry `success: false` and no document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FetchResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<TripDocument>,
    #[serde(default)]
    pub message: Option<String>,
}
