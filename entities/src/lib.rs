pub mod cafeteria;
pub mod category;
pub mod meal_type;
pub mod menu;
