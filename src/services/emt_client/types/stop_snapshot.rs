use std::collections::HashMap;

/// In-memory view of one bus stop: static metadata plus the live arrival
/// estimates of every line serving it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StopSnapshot {
    pub stop_id: Option<String>,
    pub stop_name: Option<String>,
    pub coordinates: Option<[f64; 2]>,
    pub address: Option<String>,
    pub lines: HashMap<String, LineInfo>,
}

/// `arrivals` and `distance` are parallel, index-aligned sequences. Both are
/// cleared together and rebuilt from each arrivals fetch, never appended
/// across fetches.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineInfo {
    pub destination: Option<String>,
    pub origin: Option<String>,
    pub max_freq: Option<u32>,
    pub min_freq: Option<u32>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub day_type: Option<String>,
    pub distance: Vec<Option<f64>>,
    pub arrivals: Vec<Option<u32>>,
}
