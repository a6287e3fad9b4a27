use chrono::NaiveDate;
use entities::meal_type::MealType;
use entities::menu::{Menu, Schedule};

/// One schedule per menu, in menu order.
pub fn assemble(menus: Vec<Menu>, date: NaiveDate, meal_type: MealType) -> Vec<Schedule> {
    menus
        .into_iter()
        .map(|menu| Schedule {
            date,
            meal_type,
            menu,
        })
        .collect()
}
