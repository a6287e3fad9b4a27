use crate::cafeteria::CafeteriaCorner;
use crate::category::Category;
use crate::meal_type::MealType;
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct Menu {
    pub name: String,
    pub canonical_name: Option<String>,
    pub price: Option<String>,
    pub vegetarian: bool,
    pub category: Option<Category>,
    pub cafeteria_corner: Arc<CafeteriaCorner>,
}

impl Menu {
    pub fn new(name: impl Into<String>, cafeteria_corner: Arc<CafeteriaCorner>) -> Self {
        Self {
            name: name.into(),
            canonical_name: None,
            price: None,
            vegetarian: false,
            category: None,
            cafeteria_corner,
        }
    }

    /// Canonical name when normalization found one, else the raw name.
    pub fn best_name(&self) -> &str {
        self.canonical_name.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub menu: Menu,
}
