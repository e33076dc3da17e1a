use crate::domain::model::{CountryRecord, FetchOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn codes_file(&self) -> &str;
    fn output_file(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn load_codes(&self) -> Result<Vec<String>>;
    async fn fetch(&self, code: &str) -> FetchOutcome;
    async fn save(&self, records: &[CountryRecord]) -> Result<String>;
}
