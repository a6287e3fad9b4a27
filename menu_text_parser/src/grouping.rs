//! Which corners list several dishes on one comma separated line.
use entities::meal_type::MealType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerKey {
    pub cafeteria_name: &'static str,
    pub corner_name: Option<&'static str>,
    pub meal_type: MealType,
}

impl CornerKey {
    pub const fn new(
        cafeteria_name: &'static str,
        corner_name: Option<&'static str>,
        meal_type: MealType,
    ) -> Self {
        Self {
            cafeteria_name,
            corner_name,
            meal_type,
        }
    }

    fn matches(
        &self,
        cafeteria_name: &str,
        corner_name: Option<&str>,
        meal_type: MealType,
    ) -> bool {
        self.cafeteria_name == cafeteria_name
            && self.corner_name == corner_name
            && self.meal_type == meal_type
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GroupingTables {
    /// Corners whose menu line must become one menu per comma separated dish.
    pub grouped: &'static [CornerKey],
    /// Exact overrides that keep a single menu despite being grouped.
    pub should_not_split: &'static [CornerKey],
}

impl GroupingTables {
    pub fn is_grouped(
        &self,
        cafeteria_name: &str,
        corner_name: Option<&str>,
        meal_type: MealType,
    ) -> bool {
        self.grouped
            .iter()
            .any(|key| key.matches(cafeteria_name, corner_name, meal_type))
    }

    pub fn should_not_split(
        &self,
        cafeteria_name: &str,
        corner_name: Option<&str>,
        meal_type: MealType,
    ) -> bool {
        self.should_not_split
            .iter()
            .any(|key| key.matches(cafeteria_name, corner_name, meal_type))
    }
}

const SNUCO_GROUPED: [CornerKey; 6] = [
    CornerKey::new("자하연식당 3층", Some("+세미뷔페"), MealType::Lunch),
    CornerKey::new("302동식당", Some("뷔페"), MealType::Lunch),
    CornerKey::new("예술계식당", Some("A코너"), MealType::Lunch),
    CornerKey::new("예술계식당", Some("B코너"), MealType::Lunch),
    CornerKey::new("예술계식당", Some("C코너"), MealType::Lunch),
    CornerKey::new("예술계식당", None, MealType::Dinner),
];

const SNUCO_SHOULD_NOT_SPLIT: [CornerKey; 1] =
    [CornerKey::new("예술계식당", Some("C코너"), MealType::Lunch)];

pub const SNUCO_GROUPING: GroupingTables = GroupingTables {
    grouped: &SNUCO_GROUPED,
    should_not_split: &SNUCO_SHOULD_NOT_SPLIT,
};

#[cfg(test)]
mod tests {
    use super::SNUCO_GROUPING;
    use entities::meal_type::MealType;
    use rstest::rstest;

    #[rstest]
    #[case("302동식당", Some("뷔페"), MealType::Lunch, true)]
    #[case("302동식당", Some("뷔페"), MealType::Dinner, false)]
    #[case("예술계식당", None, MealType::Dinner, true)]
    #[case("예술계식당", Some("A코너"), MealType::Dinner, false)]
    #[case("학생회관식당", None, MealType::Lunch, false)]
    fn test_is_grouped(
        #[case] cafeteria: &str,
        #[case] corner: Option<&str>,
        #[case] meal_type: MealType,
        #[case] expected: bool,
    ) {
        assert_eq!(SNUCO_GROUPING.is_grouped(cafeteria, corner, meal_type), expected);
    }

    #[test]
    fn test_should_not_split_requires_the_exact_corner() {
        assert!(SNUCO_GROUPING.should_not_split("예술계식당", Some("C코너"), MealType::Lunch));
        assert!(!SNUCO_GROUPING.should_not_split("예술계식당", None, MealType::Lunch));
    }
}
