use crate::domain::model::CountryRecord;
use crate::utils::error::{EtlError, Result};

pub const CSV_HEADER: [&str; 5] = [
    "CountryIsoCode",
    "CountryName",
    "Capital",
    "Region",
    "IncomeLevel",
];

/// Serializes records to CSV bytes: header first, then one row per record
/// in collection order. The header is present even with zero records.
pub fn to_csv(records: &[CountryRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record([
            record.iso_code.as_str(),
            record.name.as_str(),
            record.capital.as_str(),
            record.region.as_str(),
            record.income_level.as_str(),
        ])?;
    }
    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| EtlError::IoError(std::io::Error::other(e.to_string())))
}
