use crate::errors::SourceError;
use crate::fetcher::PageFetcher;
use crate::schedule::assemble;
use crate::sources::{fetch_page, menu_table_rows};
use crate::Source;
use async_trait::async_trait;
use chrono::NaiveDate;
use entities::menu::Schedule;
use lazy_static::lazy_static;
use menu_text_parser::{parse_cornered_block, MenuBlock, SNUCO_RULES};
use regex::Regex;
use std::sync::Arc;

const KEY: &str = "snuco";
const BASE_URL: &str = "https://snuco.snu.ac.kr/foodmenu/";

/// Campus co-op cafeterias, one table row per cafeteria.
pub struct SnucoSource {
    fetcher: Arc<dyn PageFetcher>,
}

impl SnucoSource {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }
}

/// `학생회관식당 (880-5543)` -> (`학생회관식당`, `Some("880-5543")`)
fn split_title(title: &str) -> (String, Option<String>) {
    lazy_static! {
        static ref CAFETERIA_TITLE: Regex =
            Regex::new(r"^(.*?)\s*(?:\((.*?)\))?$").expect("CAFETERIA_TITLE regex to compile");
    }

    match CAFETERIA_TITLE.captures(title) {
        Some(captures) => {
            let name = captures.get(1).map_or(title, |name| name.as_str());
            let tel = captures
                .get(2)
                .map(|tel| tel.as_str().to_string())
                .filter(|tel| !tel.is_empty());
            (name.to_string(), tel)
        }
        None => (title.to_string(), None),
    }
}

#[async_trait]
impl Source for SnucoSource {
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
            let (cafeteria_name, cafeteria_tel) = split_title(&row.title);
            for (meal_type, text) in &row.meals {
                let block = MenuBlock {
                    text,
                    meal_type: *meal_type,
                    cafeteria_name: &cafeteria_name,
                    cafeteria_tel: cafeteria_tel.as_deref(),
                };
                let menus = parse_cornered_block(&block, &SNUCO_RULES);
                schedules.extend(assemble(menus, date, *meal_type));
            }
        }
        Ok(schedules)
    }
}

#[cfg(test)]
mod tests {
    use super::{split_title, SnucoSource};
    use crate::fetcher::PageFetcher;
    use crate::Source;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use entities::meal_type::MealType;
    use rstest::rstest;
    use std::sync::{Arc, Mutex};
    use url::Url;

    const PAGE: &str = r#"
<html><body>
<table class="menu-table">
  <thead><tr><th>식당</th><th>아침</th><th>점심</th><th>저녁</th></tr></thead>
  <tbody>
    <tr>
      <td class="title">학생회관식당 (880-5543)</td>
      <td class="breakfast">※ 08:00~ 소진시까지 ※<br>토스트 : 2,000원</td>
      <td class="lunch">&lt;뷔페&gt; 6,500원<br>제육볶음<br>두부조림(#)<br>※ 운영시간 : 11:00~14:00</td>
      <td class="dinner"></td>
    </tr>
    <tr>
      <td class="title">예술계식당</td>
      <td class="breakfast"></td>
      <td class="lunch">&lt;A코너&gt;뚝배기 제육콩나물비빔밥,감자채팽이버섯전,고구마맛탕 : 6,000원</td>
      <td class="dinner">카레라이스,우동 : 5,000원<br>&lt; 위 메뉴외에도 다양한 메뉴가 준비되어 있습니다&gt;</td>
    </tr>
  </tbody>
</table>
</body></html>"#;

    struct RecordingFetcher {
        urls: Mutex<Vec<Url>>,
    }

    #[async_trait]
    impl PageFetcher for RecordingFetcher {
        async fn fetch_text(&self, url: Url) -> anyhow::Result<String> {
            self.urls.lock().unwrap().push(url);
            Ok(PAGE.to_string())
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 24).unwrap()
    }

    #[rstest]
    #[case("학생회관식당 (880-5543)", "학생회관식당", Some("880-5543"))]
    #[case("75-1동 4층 푸드코트", "75-1동 4층 푸드코트", None)]
    #[case("두레미담 ()", "두레미담", None)]
    fn test_split_title(#[case] title: &str, #[case] name: &str, #[case] tel: Option<&str>) {
        let (parsed_name, parsed_tel) = split_title(title);
        assert_eq!(parsed_name, name);
        assert_eq!(parsed_tel.as_deref(), tel);
    }

    #[tokio::test]
    async fn test_crawl_requests_the_date_and_parses_rows() {
        let fetcher = Arc::new(RecordingFetcher {
            urls: Mutex::new(vec![]),
        });
        let source = SnucoSource::new(fetcher.clone());

        let schedules = source.crawl(date()).await.unwrap();

        let urls = fetcher.urls.lock().unwrap();
        assert_eq!(urls[0].as_str(), "https://snuco.snu.ac.kr/foodmenu/?date=2025-03-24");

        let menus = schedules
            .iter()
            .map(|schedule| (schedule.meal_type, schedule.menu.name.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            menus,
            vec![
                (MealType::Breakfast, "토스트"),
                (MealType::Lunch, "제육볶음"),
                (MealType::Lunch, "두부조림"),
                (MealType::Lunch, "뚝배기 제육콩나물비빔밥"),
                (MealType::Lunch, "감자채팽이버섯전"),
                (MealType::Lunch, "고구마맛탕"),
                (MealType::Dinner, "카레라이스"),
                (MealType::Dinner, "우동"),
            ]
        );
        assert!(schedules.iter().all(|schedule| schedule.date == date()));
    }

    #[test]
    fn test_parse_keeps_corner_details() {
        let source = SnucoSource::new(Arc::new(RecordingFetcher {
            urls: Mutex::new(vec![]),
        }));
        let schedules = source.parse(PAGE, date()).unwrap();

        let breakfast = &schedules[0].menu;
        let hours = breakfast
            .cafeteria_corner
            .operating_hours
            .get(MealType::Breakfast)
            .unwrap();
        assert_eq!(hours.open_hours.as_deref(), Some("08:00~ 소진시까지"));
        assert_eq!(breakfast.price.as_deref(), Some("2,000원"));

        let buffet = &schedules[1].menu;
        assert_eq!(buffet.cafeteria_corner.name, "뷔페");
        assert_eq!(buffet.cafeteria_corner.price.as_deref(), Some("6,500원"));
        assert_eq!(buffet.cafeteria_corner.cafeteria_tel.as_deref(), Some("880-5543"));
        assert!(schedules[2].menu.vegetarian);
    }
}
