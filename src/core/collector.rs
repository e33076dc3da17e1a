use crate::domain::model::{CountryRecord, FetchOutcome};
use crate::utils::error::EtlError;

/// Accumulates fetch outcomes in arrival order. Failed outcomes are
/// logged with the offending URL and dropped; they are neither records
/// nor no-data entries.
#[derive(Debug, Default)]
pub struct ResultSet {
    records: Vec<CountryRecord>,
    no_data: Vec<String>,
}

impl ResultSet {
    pub fn absorb(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Country(record) => self.records.push(record),
            FetchOutcome::NoData { url } => self.no_data.push(url),
            FetchOutcome::Failed { url, error } => match &error {
                EtlError::ApiError(_) => {
                    tracing::error!("request error for {}: {}", url, error);
                }
                EtlError::XmlError(_) | EtlError::MissingElement(_) => {
                    tracing::error!("parse error for {}: {}", url, error);
                }
                _ => {
                    tracing::error!("unexpected error for {}: {}", url, error);
                }
            },
        }
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn no_data(&self) -> &[String] {
        &self.no_data
    }

    pub fn into_parts(self) -> (Vec<CountryRecord>, Vec<String>) {
        (self.records, self.no_data)
    }
}
