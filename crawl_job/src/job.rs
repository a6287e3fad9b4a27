use anyhow::Context;
use cafeteria_sources::{Source, SourceError};
use chrono::NaiveDate;
use entities::menu::Schedule;
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use itertools::Itertools;
use menu_enrichment::{MenuClassifier, MenuNormalizer};
use shared_kernel::date_time::SeoulDate;
use std::io::Write;
use std::sync::Arc;
use tracing::{error, info};

/// One fetch and parse of a single source for a single date.
struct CrawlUnit<'a> {
    source: &'a dyn Source,
    date: NaiveDate,
}

pub struct CrawlJob {
    sources: Vec<Box<dyn Source>>,
    normalizer: Arc<MenuNormalizer>,
    classifier: Arc<dyn MenuClassifier>,
}

#[tracing::instrument(skip(source), fields(source = source.key()))]
async fn crawl_unit(source: &dyn Source, date: NaiveDate) -> Result<Vec<Schedule>, SourceError> {
    let schedules = source.crawl(date).await?;
    info!(schedules = schedules.len(), "crawled");
    Ok(schedules)
}

impl CrawlJob {
    pub fn new(
        sources: Vec<Box<dyn Source>>,
        normalizer: Arc<MenuNormalizer>,
        classifier: Arc<dyn MenuClassifier>,
    ) -> Self {
        Self {
            sources,
            normalizer,
            classifier,
        }
    }

    /// Sources that cannot select a date only ever show the current period,
    /// so they get a single unit for today.
    fn units(&self, today: SeoulDate, days: u64) -> Vec<CrawlUnit<'_>> {
        self.sources
            .iter()
            .flat_map(|source| {
                let dates = if source.supports_date() {
                    today.upcoming(days)
                } else {
                    vec![today]
                };
                dates.into_iter().map(move |date| CrawlUnit {
                    source: source.as_ref(),
                    date: date.date(),
                })
            })
            .collect()
    }

    /// Runs every unit concurrently. A failed unit is logged and left out;
    /// the others are returned in unit order.
    pub async fn crawl(&self, today: SeoulDate, days: u64) -> Vec<Schedule> {
        let units = self.units(today, days);

        let mut futures: FuturesUnordered<_> = units
            .iter()
            .enumerate()
            .map(|(position, unit)| async move {
                (position, crawl_unit(unit.source, unit.date).await)
            })
            .collect();

        let mut crawled = vec![];
        while let Some((position, result)) = futures.next().await {
            match result {
                Ok(schedules) => crawled.push((position, schedules)),
                Err(e) => {
                    let unit = &units[position];
                    error!(
                        source = unit.source.key(),
                        date = %unit.date,
                        "Failed to crawl unit: {e:?}"
                    );
                }
            }
        }

        crawled
            .into_iter()
            .sorted_by_key(|(position, _)| *position)
            .flat_map(|(_, schedules)| schedules)
            .collect()
    }

    /// Fills in canonical names, then categories from the canonical name
    /// when there is one and the raw name otherwise.
    pub fn enrich(&self, schedules: &mut [Schedule]) {
        for schedule in schedules.iter_mut() {
            let menu = &mut schedule.menu;
            menu.canonical_name = self.normalizer.normalize(&menu.name).map(str::to_string);
            menu.category = Some(self.classifier.categorize(menu.best_name()));
        }
    }

    pub async fn run(&self, today: SeoulDate, days: u64) -> Vec<Schedule> {
        let mut schedules = self.crawl(today, days).await;
        self.enrich(&mut schedules);
        schedules
    }
}

pub fn write_json_lines(schedules: &[Schedule], mut writer: impl Write) -> anyhow::Result<()> {
    for schedule in schedules {
        serde_json::to_writer(&mut writer, schedule).context("Failed to serialize schedule")?;
        writeln!(writer).context("Failed to write schedule")?;
    }
    writer.flush().context("Failed to flush schedules")
}
