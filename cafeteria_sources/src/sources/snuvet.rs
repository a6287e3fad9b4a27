use crate::errors::SourceError;
use crate::fetcher::PageFetcher;
use crate::markup::{elements, Element, Tag};
use crate::schedule::assemble;
use crate::sources::{fetch_page, value_after_colon};
use crate::Source;
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use entities::cafeteria::CafeteriaCorner;
use entities::meal_type::MealType;
use entities::menu::{Menu, Schedule};
use lazy_static::lazy_static;
use regex::Regex;
use std::sync::Arc;
use tracing::debug;

const KEY: &str = "snuvet";
const BASE_URL: &str = "https://vet.snu.ac.kr/금주의-식단/";

const CAFETERIA_NAME: &str = "수의대 식당";
const WEEKLY_MENU_HEADING: &str = "금주의 식단";
const MEAL_HOURS: &str = "식사시간";
const DINNER_MENU: &str = "저녁메뉴";
const RESERVATION_PHONE: &str = "예약전화";

/// Veterinary college cafeteria. The page is a weekly lunch table followed
/// by a list describing the single dinner menu; there is no breakfast and
/// no way to ask for another week.
pub struct SnuvetSource {
    fetcher: Arc<dyn PageFetcher>,
}

impl SnuvetSource {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }
}

/// Month and day of a weekly table row label such as `3/24(월)`, `3월 24일`
/// or `2025.3.24`. A leading four digit year is skipped.
fn row_month_day(label: &str) -> Option<(u32, u32)> {
    lazy_static! {
        static ref ROW_DATE: Regex = Regex::new(
            r"(?:\d{4}\s*(?:[./-]|년)\s*)?(\d{1,2})\s*(?:[./-]|월)\s*(\d{1,2})"
        )
        .expect("ROW_DATE regex to compile");
    }
    let captures = ROW_DATE.captures(label)?;
    Some((captures[1].parse().ok()?, captures[2].parse().ok()?))
}

/// Lunch of the requested date. When the row labels carry no recognisable
/// date every row's lunch is returned.
fn weekly_lunches(table: &Element, date: NaiveDate) -> Vec<String> {
    let rows = elements(table.inner, Tag::Tr)
        .skip(1)
        .filter_map(|row| {
            let cells = elements(row.inner, Tag::Td)
                .map(|cell| cell.text())
                .collect::<Vec<_>>();
            match cells.as_slice() {
                [label, lunch, ..] => Some((label.clone(), lunch.clone())),
                _ => None,
            }
        })
        .filter(|(_, lunch)| !lunch.is_empty())
        .collect::<Vec<_>>();

    let dated = rows
        .iter()
        .filter_map(|(label, lunch)| row_month_day(label).map(|month_day| (month_day, lunch)))
        .collect::<Vec<_>>();

    if dated.is_empty() {
        debug!(source_key = KEY, "weekly table rows carry no dates");
        return rows.into_iter().map(|(_, lunch)| lunch).collect();
    }

    dated
        .into_iter()
        .filter(|(month_day, _)| *month_day == (date.month(), date.day()))
        .map(|(_, lunch)| lunch.clone())
        .collect()
}

#[async_trait]
impl Source for SnuvetSource {
    fn key(&self) -> &'static str {
        KEY
    }

    fn base_url(&self) -> &'static str {
        BASE_URL
    }

    fn supports_date(&self) -> bool {
        false
    }

    async fn fetch(&self, _date: Option<NaiveDate>) -> Result<String, SourceError> {
        fetch_page(self.fetcher.as_ref(), KEY, BASE_URL, None).await
    }

    fn parse(&self, html: &str, date: NaiveDate) -> Result<Vec<Schedule>, SourceError> {
        let heading = elements(html, Tag::H2)
            .find(|heading| heading.text() == WEEKLY_MENU_HEADING)
            .ok_or(SourceError::Markup {
                source_key: KEY,
                missing: "weekly menu heading",
            })?;
        let after_heading = &html[heading.end..];
        let table = elements(after_heading, Tag::Table)
            .next()
            .ok_or(SourceError::Markup {
                source_key: KEY,
                missing: "weekly menu table",
            })?;
        let dinner_items = elements(&after_heading[table.end..], Tag::Ul)
            .next()
            .map(|list| elements(list.inner, Tag::Li).map(|item| item.text()).collect())
            .unwrap_or_else(Vec::new);

        let mut corner = CafeteriaCorner::new(CAFETERIA_NAME, CAFETERIA_NAME);
        let mut dinners = Vec::new();
        for item in dinner_items {
            if item.contains(MEAL_HOURS) {
                let hours = corner.operating_hours.entry(MealType::Dinner);
                hours.open_hours = value_after_colon(&item);
            } else if item.contains(DINNER_MENU) {
                dinners.extend(value_after_colon(&item).filter(|name| !name.is_empty()));
            } else if item.contains(RESERVATION_PHONE) {
                corner.cafeteria_tel = value_after_colon(&item);
            }
        }

        let corner = Arc::new(corner);
        let menus = |names: Vec<String>| {
            names
                .into_iter()
                .map(|name| Menu::new(name, Arc::clone(&corner)))
                .collect::<Vec<_>>()
        };

        let mut schedules = assemble(menus(weekly_lunches(&table, date)), date, MealType::Lunch);
        schedules.extend(assemble(menus(dinners), date, MealType::Dinner));
        Ok(schedules)
    }
}
