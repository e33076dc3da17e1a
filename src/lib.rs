pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::LocalStorage, CliConfig};

pub use crate::core::{etl::EtlEngine, pipeline::CountryPipeline};
pub use crate::domain::model::{CountryRecord, FetchOutcome, RunReport};
pub use crate::utils::error::{EtlError, Result};
