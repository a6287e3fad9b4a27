use chrono::{DateTime, Days, NaiveDate, Utc};
use chrono_tz::Asia::Seoul;
use serde::{Deserialize, Serialize};

/// Calendar date as observed in Seoul. Cafeteria menus are published per
/// local day, so "today" must not follow the host's timezone.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct SeoulDate(NaiveDate);

impl SeoulDate {
    pub fn today() -> Self {
        Self::from(Utc::now())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// `days` consecutive dates starting from this one.
    pub fn upcoming(&self, days: u64) -> Vec<SeoulDate> {
        (0..days)
            .filter_map(|offset| self.0.checked_add_days(Days::new(offset)))
            .map(SeoulDate)
            .collect()
    }
}

impl From<DateTime<Utc>> for SeoulDate {
    fn from(data: DateTime<Utc>) -> SeoulDate {
        SeoulDate(data.with_timezone(&Seoul).date_naive())
    }
}

impl From<NaiveDate> for SeoulDate {
    fn from(date: NaiveDate) -> SeoulDate {
        SeoulDate(date)
    }
}
