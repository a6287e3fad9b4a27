mod operating_hours;

pub use operating_hours::{MealHours, OperatingHours};

use serde::Serialize;
use std::hash::{Hash, Hasher};

/// A serving station inside a cafeteria. Two corners with the same corner
/// and cafeteria names are the same corner, whatever else they carry.
#[derive(Debug, Clone, Serialize)]
pub struct CafeteriaCorner {
    pub name: String,
    pub cafeteria_name: String,
    pub cafeteria_tel: Option<String>,
    pub grouped: bool,
    pub price: Option<String>,
    pub operating_hours: MealHours,
}

impl CafeteriaCorner {
    pub fn new(name: impl Into<String>, cafeteria_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cafeteria_name: cafeteria_name.into(),
            cafeteria_tel: None,
            grouped: false,
            price: None,
            operating_hours: MealHours::default(),
        }
    }
}

impl PartialEq for CafeteriaCorner {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.cafeteria_name == other.cafeteria_name
    }
}

impl Eq for CafeteriaCorner {}

impl Hash for CafeteriaCorner {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.cafeteria_name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::CafeteriaCorner;
    use std::collections::HashSet;

    #[test]
    fn test_corners_are_identified_by_name_and_cafeteria() {
        let mut priced = CafeteriaCorner::new("뷔페", "302동식당");
        priced.price = Some("6,500원".to_string());
        let plain = CafeteriaCorner::new("뷔페", "302동식당");
        let elsewhere = CafeteriaCorner::new("뷔페", "학생회관식당");

        let corners = [priced, plain, elsewhere].into_iter().collect::<HashSet<_>>();
        assert_eq!(corners.len(), 2);
    }
}
