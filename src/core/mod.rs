pub mod codes;
pub mod collector;
pub mod etl;
pub mod fetcher;
pub mod pipeline;
pub mod writer;
pub mod xml;

pub use crate::domain::model::{CountryRecord, FetchOutcome, RunReport};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
pub use collector::ResultSet;
