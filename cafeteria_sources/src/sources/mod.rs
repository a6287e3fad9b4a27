pub mod snuco;
pub mod snudorm;
pub mod snuvet;

use crate::errors::SourceError;
use crate::fetcher::PageFetcher;
use crate::markup::{elements, first_with_class, Tag};
use anyhow::Context;
use chrono::NaiveDate;
use entities::meal_type::MealType;
use tracing::debug;
use url::Url;

fn page_url(base_url: &str, date: Option<NaiveDate>) -> anyhow::Result<Url> {
    let mut url = Url::parse(base_url).context("Invalid URL")?;
    if let Some(date) = date {
        url.query_pairs_mut()
            .append_pair("date", &date.format("%Y-%m-%d").to_string());
    }
    Ok(url)
}

async fn fetch_page(
    fetcher: &dyn PageFetcher,
    source_key: &'static str,
    base_url: &'static str,
    date: Option<NaiveDate>,
) -> Result<String, SourceError> {
    let url = page_url(base_url, date).map_err(|error| SourceError::Fetch {
        source_key,
        url: base_url.to_string(),
        error,
    })?;
    fetcher
        .fetch_text(url.clone())
        .await
        .map_err(|error| SourceError::Fetch {
            source_key,
            url: url.to_string(),
            error,
        })
}

const MEAL_CELLS: [(MealType, &str); 3] = [
    (MealType::Breakfast, "breakfast"),
    (MealType::Lunch, "lunch"),
    (MealType::Dinner, "dinner"),
];

/// One row of the daily menu table: the cafeteria title cell and the text
/// of each meal cell present.
#[derive(Debug)]
struct CafeteriaRow {
    title: String,
    meals: Vec<(MealType, String)>,
}

/// Rows of the `menu-table` layout shared by the co-op and dormitory pages.
fn menu_table_rows(html: &str, source_key: &'static str) -> Result<Vec<CafeteriaRow>, SourceError> {
    let table = first_with_class(html, Tag::Table, "menu-table").ok_or(SourceError::Markup {
        source_key,
        missing: "menu table",
    })?;
    let body = elements(table.inner, Tag::Tbody)
        .next()
        .map_or(table.inner, |body| body.inner);

    let rows = elements(body, Tag::Tr)
        .filter_map(|row| {
            let Some(title) = first_with_class(row.inner, Tag::Td, "title") else {
                debug!(source_key, "skipping menu table row without a title cell");
                return None;
            };
            let meals = MEAL_CELLS
                .iter()
                .filter_map(|(meal_type, class)| {
                    first_with_class(row.inner, Tag::Td, class)
                        .map(|cell| (*meal_type, cell.text()))
                })
                .collect();
            Some(CafeteriaRow {
                title: title.text(),
                meals,
            })
        })
        .collect();
    Ok(rows)
}

/// Text after the first colon, trimmed.
fn value_after_colon(text: &str) -> Option<String> {
    text.split_once(':')
        .map(|(_, value)| value.trim().to_string())
}
