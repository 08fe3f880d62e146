#![allow(non_snake_case)]
use serde::{Deserialize, Serialize};

/// Envelope shared by the login, stop-detail and arrivals endpoints. The
/// shape of `data` varies per endpoint and is only deserialized after the
/// `code` check passes.
#[derive(Serialize, Deserialize)]
pub struct EmtApiResponse {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[derive(Serialize, Deserialize)]
pub struct LoginData {
    pub accessToken: String,
}

#[derive(Serialize, Deserialize)]
pub struct StopDetailData {
    pub stops: Vec<StopDetail>,
}

#[derive(Serialize, Deserialize)]
pub struct StopDetail {
    pub stop: String,
    pub name: String,
    pub geometry: StopGeometry,
    pub postalAddress: String,
    pub dataLine: Vec<LineRecord>,
}

#[derive(Serialize, Deserialize)]
pub struct StopGeometry {
    pub coordinates: [f64; 2],
}

#[derive(Serialize, Deserialize)]
pub struct LineRecord {
    pub label: String,
    pub direction: String,
    pub headerA: String,
    pub headerB: String,
    pub maxFreq: String,
    pub minFreq: String,
    pub startTime: String,
    pub stopTime: String,
    pub dayType: String,
}

#[derive(Serialize, Deserialize)]
pub struct ArrivalsData {
    #[serde(default)]
    pub Arrive: Vec<ArrivalRecord>,
}

#[derive(Serialize, Deserialize)]
pub struct ArrivalRecord {
    pub line: String,
    pub estimateArrive: u64,
    pub DistanceBus: f64,
}

#[derive(Serialize, Deserialize)]
pub struct ArrivalsRequest {
    pub stopId: String,
    pub Text_EstimationsRequired_YN: String,
}
