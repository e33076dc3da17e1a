use crate::core::fetcher::RecordFetcher;
use crate::core::{codes, writer, ConfigProvider, Pipeline, Storage};
use crate::domain::model::{CountryRecord, FetchOutcome};
use crate::utils::error::{EtlError, Result};

/// The concrete fetch-parse-save pipeline: codes CSV in, country CSV out.
pub struct CountryPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    fetcher: RecordFetcher,
}

impl<S: Storage, C: ConfigProvider> CountryPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let fetcher = RecordFetcher::new(config.api_endpoint());
        Self {
            storage,
            config,
            fetcher,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CountryPipeline<S, C> {
    async fn load_codes(&self) -> Result<Vec<String>> {
        let path = self.config.codes_file();
        let raw = self.storage.read_file(path).await.map_err(|e| match e {
            EtlError::IoError(ref io) if io.kind() == std::io::ErrorKind::NotFound => {
                EtlError::SourceNotFound(path.to_string())
            }
            other => other,
        })?;
        codes::parse_codes(&raw, path)
    }

    async fn fetch(&self, code: &str) -> FetchOutcome {
        self.fetcher.fetch(code).await
    }

    async fn save(&self, records: &[CountryRecord]) -> Result<String> {
        let data = writer::to_csv(records)?;
        self.storage
            .write_file(self.config.output_file(), &data)
            .await?;
        Ok(self.config.output_file().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn put_file(&self, path: &str, data: &[u8]) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                EtlError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("file not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        api_endpoint: String,
    }

    impl ConfigProvider for MockConfig {
        fn api_endpoint(&self) -> &str {
            &self.api_endpoint
        }

        fn codes_file(&self) -> &str {
            "codes.csv"
        }

        fn output_file(&self) -> &str {
            "out.csv"
        }
    }

    fn pipeline_with(
        storage: MockStorage,
        endpoint: String,
    ) -> CountryPipeline<MockStorage, MockConfig> {
        CountryPipeline::new(
            storage,
            MockConfig {
                api_endpoint: endpoint,
            },
        )
    }

    #[tokio::test]
    async fn test_load_codes_deduplicates() {
        let storage = MockStorage::new();
        storage
            .put_file("codes.csv", b"CountryCode\nUS\nBR\nUS\n")
            .await;

        let pipeline = pipeline_with(storage, "http://unused".to_string());
        let codes = pipeline.load_codes().await.unwrap();
        assert_eq!(codes, vec!["US", "BR"]);
    }

    #[tokio::test]
    async fn test_load_codes_missing_file_is_source_not_found() {
        let pipeline = pipeline_with(MockStorage::new(), "http://unused".to_string());
        let err = pipeline.load_codes().await.unwrap_err();
        match err {
            EtlError::SourceNotFound(path) => assert_eq!(path, "codes.csv"),
            other => panic!("expected SourceNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_goes_through_configured_endpoint() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v2/countries/CL");
            then.status(200).header("Content-Type", "application/xml").body(
                r#"<wb:countries xmlns:wb="http://www.worldbank.org">
  <wb:country id="CHL">
    <wb:name>Chile</wb:name>
    <wb:region id="LCN">Latin America</wb:region>
    <wb:incomeLevel id="HIC">High income</wb:incomeLevel>
    <wb:capitalCity>Santiago</wb:capitalCity>
  </wb:country>
</wb:countries>"#,
            );
        });

        let pipeline = pipeline_with(MockStorage::new(), server.url("/v2/countries"));
        let outcome = pipeline.fetch("CL").await;

        mock.assert();
        match outcome {
            FetchOutcome::Country(record) => assert_eq!(record.iso_code, "CHL"),
            other => panic!("expected Country, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_save_writes_csv_to_storage() {
        let storage = MockStorage::new();
        let pipeline = pipeline_with(storage.clone(), "http://unused".to_string());

        let records = vec![CountryRecord {
            iso_code: "CHL".to_string(),
            name: "Chile".to_string(),
            capital: "Santiago".to_string(),
            region: "Latin America".to_string(),
            income_level: "High income".to_string(),
        }];

        let path = pipeline.save(&records).await.unwrap();
        assert_eq!(path, "out.csv");

        let data = storage.get_file("out.csv").await.unwrap();
        assert_eq!(
            String::from_utf8(data).unwrap(),
            "CountryIsoCode,CountryName,Capital,Region,IncomeLevel\n\
             CHL,Chile,Santiago,Latin America,High income\n"
        );
    }

    #[tokio::test]
    async fn test_save_empty_set_still_writes_header() {
        let storage = MockStorage::new();
        let pipeline = pipeline_with(storage.clone(), "http://unused".to_string());

        pipeline.save(&[]).await.unwrap();

        let data = storage.get_file("out.csv").await.unwrap();
        assert_eq!(
            String::from_utf8(data).unwrap(),
            "CountryIsoCode,CountryName,Capital,Region,IncomeLevel\n"
        );
    }
}
