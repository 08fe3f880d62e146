use std::collections::HashMap;

use super::types::emt_api_response::{
    ArrivalsData, EmtApiResponse, LineRecord, LoginData, StopDetailData,
};
use super::types::emt_service_error::EmtServiceError;
use super::types::stop_snapshot::{LineInfo, StopSnapshot};

const CODE_LOGIN_OK: &str = "01";
const CODE_STOP_DISABLED: &str = "90";
const CODE_INVALID_TOKEN: &str = "80";

// Arrivals past this point are reported as "45" by the EMT displays.
const MAX_ARRIVAL_MINUTES: u64 = 45;

pub fn parse_token(response: &EmtApiResponse) -> Result<String, EmtServiceError> {
    if response.code != CODE_LOGIN_OK {
        return Err(EmtServiceError::InvalidCredentials);
    }

    let data: Vec<LoginData> = serde_json::from_value(response.data.clone())
        .map_err(|e| EmtServiceError::Malformed(format!("login data: {}", e)))?;

    data.into_iter()
        .next()
        .map(|entry| entry.accessToken)
        .ok_or_else(|| EmtServiceError::Malformed("login data is empty".to_string()))
}

pub fn parse_stop_info(
    response: &EmtApiResponse,
    snapshot: &mut StopSnapshot,
) -> Result<(), EmtServiceError> {
    match response.code.as_str() {
        CODE_STOP_DISABLED => return Err(EmtServiceError::StopDisabled),
        CODE_INVALID_TOKEN => return Err(EmtServiceError::InvalidToken),
        _ => {}
    }

    let data: Vec<StopDetailData> = serde_json::from_value(response.data.clone())
        .map_err(|e| EmtServiceError::Malformed(format!("stop detail data: {}", e)))?;

    let detail = data
        .into_iter()
        .next()
        .and_then(|entry| entry.stops.into_iter().next())
        .ok_or_else(|| EmtServiceError::Malformed("stop detail data has no stop".to_string()))?;

    snapshot.stop_id = Some(detail.stop);
    snapshot.stop_name = Some(detail.name);
    snapshot.coordinates = Some(detail.geometry.coordinates);
    snapshot.address = Some(detail.postalAddress);
    snapshot.lines = parse_lines(detail.dataLine)?;

    Ok(())
}

fn parse_lines(records: Vec<LineRecord>) -> Result<HashMap<String, LineInfo>, EmtServiceError> {
    let mut lines = HashMap::new();

    for record in records {
        let (destination, origin) = if record.direction == "A" {
            (record.headerA, record.headerB)
        } else {
            (record.headerB, record.headerA)
        };

        lines.insert(
            record.label,
            LineInfo {
                destination: Some(destination),
                origin: Some(origin),
                max_freq: Some(parse_freq(&record.maxFreq)?),
                min_freq: Some(parse_freq(&record.minFreq)?),
                start_time: Some(record.startTime),
                end_time: Some(record.stopTime),
                day_type: Some(record.dayType),
                distance: Vec::new(),
                arrivals: Vec::new(),
            },
        );
    }

    Ok(lines)
}

fn parse_freq(value: &str) -> Result<u32, EmtServiceError> {
    value
        .trim()
        .parse()
        .map_err(|_| EmtServiceError::Malformed(format!("frequency is not an integer: {}", value)))
}

pub fn parse_arrivals(
    response: &EmtApiResponse,
    snapshot: &mut StopSnapshot,
) -> Result<(), EmtServiceError> {
    // Code "80" is shared by two failure modes on this endpoint; the
    // description substring is the only way the API tells them apart.
    if response.code == CODE_INVALID_TOKEN {
        if response
            .description
            .as_deref()
            .is_some_and(|description| description.contains("token"))
        {
            return Err(EmtServiceError::InvalidToken);
        }
        return Err(EmtServiceError::StopDisabled);
    }

    for line in snapshot.lines.values_mut() {
        line.arrivals.clear();
        line.distance.clear();
    }

    let data: Vec<ArrivalsData> = serde_json::from_value(response.data.clone())
        .map_err(|e| EmtServiceError::Malformed(format!("arrivals data: {}", e)))?;

    let arrivals = data
        .into_iter()
        .next()
        .ok_or_else(|| EmtServiceError::Malformed("arrivals data is empty".to_string()))?;

    for record in arrivals.Arrive {
        // Records for lines not serving this stop are dropped.
        if let Some(line) = snapshot.lines.get_mut(&record.line) {
            let minutes = (record.estimateArrive / 60).min(MAX_ARRIVAL_MINUTES) as u32;
            line.arrivals.push(Some(minutes));
            line.distance.push(Some(record.DistanceBus));
        }
    }

    Ok(())
}
