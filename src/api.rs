//! Persistence Service Client
//!
//! HTTP bindings for `/itinerarydata`. Every save transmits the whole
//! partition and the service replaces its stored copy wholesale; loads
//! replace the local partition wholesale. Failures are reported to the
//! caller as strings and logged, never surfaced as blocking dialogs.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use itinerary_core::wire::{FetchResponse, SaveRequest};
use itinerary_core::Partition;

const ITINERARY_ENDPOINT: &str = "/api/itinerarydata";

fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

fn fetch_url(email: &str, trip_id: Option<&str>) -> String {
    let mut url = format!("{ITINERARY_ENDPOINT}?email={}", encode(email));
    if let Some(id) = trip_id {
        url.push_str(&format!("&tripID={}", encode(id)));
    }
    url
}

fn delete_url(trip_id: &str) -> String {
    format!("{ITINERARY_ENDPOINT}?tripID={}", encode(trip_id))
}

/// Fetch the stored partition for this owner (and trip, in multi-trip
/// mode). `Ok(None)` means the service has nothing saved yet and the caller
/// should seed a default partition.
pub async fn fetch_itinerary(
    email: &str,
    trip_id: Option<&str>,
) -> Result<Option<Partition>, String> {
    let url = fetch_url(email, trip_id);

    let response = reqwest::get(&url).await.map_err(|e| e.to_string())?;
    match response.status().as_u16() {
        200 => {
            let body: FetchResponse = response.json().await.map_err(|e| e.to_string())?;
            Ok(body.data.map(|doc| doc.data))
        }
        // Some service variants answer an empty account with 201 instead of 404.
        201 | 404 => Ok(None),
        status => Err(format!("itinerary fetch failed with status {status}")),
    }
}

/// Upsert the full partition for this owner/trip.
pub async fn save_itinerary(request: &SaveRequest) -> Result<(), String> {
    let response = reqwest::Client::new()
        .post(ITINERARY_ENDPOINT)
        .json(request)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    // 200 updated an existing record, 201 created one
    if response.status().is_success() {
        Ok(())
    } else {
        Err(format!("itinerary save rejected with status {}", response.status()))
    }
}

/// Remove a trip record entirely.
pub async fn delete_trip(trip_id: &str) -> Result<(), String> {
    let response = reqwest::Client::new()
        .delete(&delete_url(trip_id))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(format!("trip deletion rejected with status {}", response.status()))
    }
}
