pub mod errors;
pub mod fetcher;
mod markup;
pub mod registry;
pub mod schedule;
pub mod sources;

use async_trait::async_trait;
use chrono::NaiveDate;
use entities::menu::Schedule;

pub use errors::SourceError;
pub use fetcher::{HttpPageFetcher, PageFetcher};
pub use registry::{default_sources, find_source, SourceDescriptor};

/// A cafeteria menu provider. Each provider has its own page layout and
/// text conventions; `parse` turns one fetched page into dated schedules.
#[async_trait]
pub trait Source: Send + Sync {
    fn key(&self) -> &'static str;

    fn base_url(&self) -> &'static str;

    /// Without date selection a page only ever reflects the current period.
    fn supports_date(&self) -> bool;

    async fn fetch(&self, date: Option<NaiveDate>) -> Result<String, SourceError>;

    fn parse(&self, html: &str, date: NaiveDate) -> Result<Vec<Schedule>, SourceError>;

    async fn crawl(&self, date: NaiveDate) -> Result<Vec<Schedule>, SourceError> {
        let requested = self.supports_date().then_some(date);
        let html = self.fetch(requested).await?;
        self.parse(&html, date)
    }
}
