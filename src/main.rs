use clap::Parser;
use country_etl::utils::{logger, validation::Validate};
use country_etl::{CliConfig, CountryPipeline, EtlEngine, LocalStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("starting country-etl");
    if config.verbose {
        tracing::debug!("config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    let storage = LocalStorage::new();
    let pipeline = CountryPipeline::new(storage, config);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    // Run-level failures are logged, never raised: the process exits 0
    // either way.
    match engine.run().await {
        Ok(report) => {
            if let Some(path) = &report.output_path {
                println!("{} record(s) saved to {}", report.record_count, path);
            }
            if !report.no_data.is_empty() {
                println!("{} request(s) returned no data", report.no_data.len());
            }
        }
        Err(e) => {
            tracing::error!("{}", e);
        }
    }

    Ok(())
}
