use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum MealType {
    #[serde(rename = "BR")]
    Breakfast,
    #[serde(rename = "LU")]
    Lunch,
    #[serde(rename = "DN")]
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub(crate) fn index(self) -> usize {
        match self {
            MealType::Breakfast => 0,
            MealType::Lunch => 1,
            MealType::Dinner => 2,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            MealType::Breakfast => "BR",
            MealType::Lunch => "LU",
            MealType::Dinner => "DN",
        }
    }
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
