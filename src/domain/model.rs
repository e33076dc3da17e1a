use crate::utils::error::EtlError;
use serde::{Deserialize, Serialize};

/// One country as returned by the World Bank API. Immutable once parsed;
/// written out verbatim in fetch order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub iso_code: String,
    pub name: String,
    pub capital: String,
    pub region: String,
    pub income_level: String,
}

/// Tagged result of fetching one country code. The engine pattern-matches
/// on the tag; per-item errors never unwind past this type.
#[derive(Debug)]
pub enum FetchOutcome {
    Country(CountryRecord),
    NoData { url: String },
    Failed { url: String, error: EtlError },
}

/// What one run produced. `output_path` is `None` when the save step
/// failed (the run is still considered finished).
#[derive(Debug, Clone)]
pub struct RunReport {
    pub output_path: Option<String>,
    pub record_count: usize,
    pub no_data: Vec<String>,
}
