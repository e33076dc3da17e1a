use crate::core::{Pipeline, ResultSet};
use crate::domain::model::RunReport;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use indicatif::{ProgressBar, ProgressStyle};

/// Drives one run end to end: load codes, fetch each code once in input
/// order, save, report the no-data gaps. Only a codes-file failure aborts
/// the run; everything downstream is log-and-continue.
pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<RunReport> {
        let codes = self.pipeline.load_codes().await?;
        tracing::info!("loaded {} country codes", codes.len());

        let progress = ProgressBar::new(codes.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        progress.set_message("fetching country data");

        let mut results = ResultSet::default();
        for code in &codes {
            let outcome = self.pipeline.fetch(code).await;
            results.absorb(outcome);
            progress.inc(1);
        }
        progress.finish_and_clear();
        self.monitor.log_stats("fetch");

        let (records, no_data) = results.into_parts();
        tracing::info!("fetched {} records", records.len());

        let save_progress = ProgressBar::new(1);
        save_progress.set_message("saving data to CSV");
        let output_path = match self.pipeline.save(&records).await {
            Ok(path) => {
                save_progress.inc(1);
                tracing::info!("data successfully saved to {}", path);
                Some(path)
            }
            Err(e) => {
                tracing::error!("error saving data to CSV: {}", e);
                None
            }
        };
        save_progress.finish_and_clear();

        if !no_data.is_empty() {
            tracing::warn!("no data found for {} request(s):", no_data.len());
            for url in &no_data {
                tracing::warn!("  {}", url);
            }
        }
        self.monitor.log_final_stats();

        Ok(RunReport {
            output_path,
            record_count: records.len(),
            no_data,
        })
    }
}
