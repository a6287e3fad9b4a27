use crate::errors::SourceError;
use crate::fetcher::PageFetcher;
use crate::schedule::assemble;
use crate::sources::{fetch_page, menu_table_rows};
use crate::Source;
use async_trait::async_trait;
use chrono::NaiveDate;
use entities::menu::Schedule;
use menu_text_parser::{parse_dormitory_block, MenuBlock};
use std::sync::Arc;

const KEY: &str = "snudorm";
const BASE_URL: &str = "https://snudorm.snu.ac.kr/foodmenu/";

/// Dormitory cafeterias. Same table layout as the co-op page, no corners.
pub struct SnudormSource {
    fetcher: Arc<dyn PageFetcher>,
}

impl SnudormSource {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl Source for SnudormSource {
    fn key(&self) -> &'static str {
        KEY
    }

    fn base_url(&self) -> &'static str {
        BASE_URL
    }

    fn supports_date(&self) -> bool {
        true
    }

    async fn fetch(&self, date: Option<NaiveDate>) -> Result<String, SourceError> {
        fetch_page(self.fetcher.as_ref(), KEY, BASE_URL, date).await
    }

    fn parse(&self, html: &str, date: NaiveDate) -> Result<Vec<Schedule>, SourceError> {
        let mut schedules = Vec::new();
        for row in menu_table_rows(html, KEY)? {
            for (meal_type, text) in &row.meals {
                let block = MenuBlock {
                    text,
                    meal_type: *meal_type,
                    cafeteria_name: &row.title,
                    cafeteria_tel: None,
                };
                schedules.extend(assemble(parse_dormitory_block(&block), date, *meal_type));
            }
        }
        Ok(schedules)
    }
}
