use crate::utils::error::{EtlError, Result};
use std::collections::HashSet;

/// Parses the country codes file: CSV with a header row, codes in the
/// first column. Exact-duplicate rows are dropped, first occurrence wins;
/// the surviving first-column values are returned in file order.
pub fn parse_codes(raw: &[u8], path: &str) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_reader(raw);
    let mut seen = HashSet::new();
    let mut codes = Vec::new();

    for row in reader.records() {
        let row = row.map_err(|e| EtlError::SourceRead {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        let key: Vec<String> = row.iter().map(str::to_string).collect();
        if !seen.insert(key) {
            continue;
        }

        if let Some(code) = row.get(0) {
            let code = code.trim();
            if !code.is_empty() {
                codes.push(code.to_string());
            }
        }
    }

    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_first_column_in_order() {
        let raw = b"CountryCode,Name\nUS,United States\nBR,Brazil\nDE,Germany\n";
        let codes = parse_codes(raw, "codes.csv").unwrap();
        assert_eq!(codes, vec!["US", "BR", "DE"]);
    }

    #[test]
    fn test_header_row_is_not_a_code() {
        let raw = b"CountryCode\nUS\n";
        let codes = parse_codes(raw, "codes.csv").unwrap();
        assert_eq!(codes, vec!["US"]);
    }

    #[test]
    fn test_duplicate_rows_removed_first_occurrence_wins() {
        let raw = b"CountryCode\nUS\nBR\nUS\nBR\nUS\n";
        let codes = parse_codes(raw, "codes.csv").unwrap();
        assert_eq!(codes, vec!["US", "BR"]);
    }

    #[test]
    fn test_rows_differing_outside_first_column_are_kept() {
        // Only exact-duplicate rows are removed, so the same code can
        // still appear twice when another column differs.
        let raw = b"CountryCode,Note\nUS,a\nUS,b\n";
        let codes = parse_codes(raw, "codes.csv").unwrap();
        assert_eq!(codes, vec!["US", "US"]);
    }

    #[test]
    fn test_header_only_file_yields_no_codes() {
        let raw = b"CountryCode\n";
        let codes = parse_codes(raw, "codes.csv").unwrap();
        assert!(codes.is_empty());
    }

    #[test]
    fn test_blank_codes_are_skipped() {
        let raw = b"CountryCode\nUS\n  \nBR\n";
        let codes = parse_codes(raw, "codes.csv").unwrap();
        assert_eq!(codes, vec!["US", "BR"]);
    }

    #[test]
    fn test_ragged_rows_fail_with_source_read() {
        let raw = b"CountryCode\nUS,unexpected-extra-field\n";
        let err = parse_codes(raw, "codes.csv").unwrap_err();
        match err {
            EtlError::SourceRead { path, .. } => assert_eq!(path, "codes.csv"),
            other => panic!("expected SourceRead, got {:?}", other),
        }
    }
}
