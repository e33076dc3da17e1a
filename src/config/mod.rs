#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_file_extension, validate_path, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// Every flag defaults to the values the scraper has always used, so a
/// plain `country-etl` invocation needs no arguments.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "country-etl")]
#[command(about = "Fetches World Bank country metadata into a CSV file")]
pub struct CliConfig {
    #[arg(long, default_value = "http://api.worldbank.org/v2/countries")]
    pub api_endpoint: String,

    #[arg(long, default_value = "country_iso_codes.csv")]
    pub codes_file: String,

    #[arg(long, default_value = "WorldBank_data.csv")]
    pub output_file: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process resource usage")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn codes_file(&self) -> &str {
        &self.codes_file
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_path("codes_file", &self.codes_file)?;
        validate_path("output_file", &self.output_file)?;
        validate_file_extension("codes_file", &self.codes_file, &["csv"])?;
        validate_file_extension("output_file", &self.output_file, &["csv"])?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn default_config() -> CliConfig {
        CliConfig::parse_from(["country-etl"])
    }

    #[test]
    fn test_parameterless_invocation_uses_original_constants() {
        let config = default_config();
        assert_eq!(config.api_endpoint, "http://api.worldbank.org/v2/countries");
        assert_eq!(config.codes_file, "country_iso_codes.csv");
        assert_eq!(config.output_file, "WorldBank_data.csv");
        assert!(!config.verbose);
        assert!(!config.monitor);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(default_config().validate().is_ok());
    }

    #[test]
    fn test_non_http_endpoint_is_rejected() {
        let mut config = default_config();
        config.api_endpoint = "ftp://api.worldbank.org".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_csv_output_is_rejected() {
        let mut config = default_config();
        config.output_file = "WorldBank_data.json".to_string();
        assert!(config.validate().is_err());
    }
}
