mod job;
mod settings;

use anyhow::Context;
use cafeteria_sources::{default_sources, find_source, HttpPageFetcher, PageFetcher};
use job::{write_json_lines, CrawlJob};
use menu_enrichment::{KeywordCategorizer, MenuNormalizer};
use settings::Settings;
use shared_kernel::configuration::config;
use shared_kernel::date_time::SeoulDate;
use std::fs::File;
use std::io::BufWriter;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared_kernel::tracing::config_telemetry("crawl_job")?;
    start().await
}

async fn start() -> anyhow::Result<()> {
    let settings = config::<Settings>()?.crawl;

    let normalizer = MenuNormalizer::from_path(&settings.dictionary_path).with_context(|| {
        format!(
            "Failed to load normalization dictionary {}",
            settings.dictionary_path.display()
        )
    })?;

    let registry = default_sources();
    let descriptors = match &settings.sources {
        Some(keys) => keys
            .iter()
            .map(|key| find_source(&registry, key).copied())
            .collect::<Result<Vec<_>, _>>()?,
        None => registry.clone(),
    };

    let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpPageFetcher);
    let sources = descriptors
        .iter()
        .map(|descriptor| descriptor.build(Arc::clone(&fetcher)))
        .collect();

    let job = CrawlJob::new(
        sources,
        Arc::new(normalizer),
        Arc::new(KeywordCategorizer::default()),
    );
    let schedules = job.run(SeoulDate::today(), settings.days).await;
    info!(schedules = schedules.len(), "crawl finished");

    match settings.output_path {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_json_lines(&schedules, BufWriter::new(file))
        }
        None => write_json_lines(&schedules, std::io::stdout().lock()),
    }
}
