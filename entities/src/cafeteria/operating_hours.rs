use crate::meal_type::MealType;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct OperatingHours {
    pub open_hours: Option<String>,
    pub rush_hours: Option<String>,
    pub last_order: Option<String>,
    pub break_hours: Option<String>,
    pub additional_info: Vec<String>,
}

/// Operating hours of one corner, one slot per meal. A slot only exists
/// once something has been recorded for that meal.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct MealHours([Option<OperatingHours>; 3]);

impl MealHours {
    pub fn get(&self, meal_type: MealType) -> Option<&OperatingHours> {
        self.0[meal_type.index()].as_ref()
    }

    /// Slot for `meal_type`, created empty on first access.
    pub fn entry(&mut self, meal_type: MealType) -> &mut OperatingHours {
        self.0[meal_type.index()].get_or_insert_with(OperatingHours::default)
    }

    pub fn contains(&self, meal_type: MealType) -> bool {
        self.get(meal_type).is_some()
    }

    pub fn insert(&mut self, meal_type: MealType, hours: OperatingHours) {
        self.0[meal_type.index()] = Some(hours);
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MealType, &OperatingHours)> {
        MealType::ALL
            .into_iter()
            .filter_map(|meal_type| self.get(meal_type).map(|hours| (meal_type, hours)))
    }
}

impl Serialize for MealHours {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.iter().collect::<Vec<_>>();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (meal_type, hours) in entries {
            map.serialize_entry(&meal_type, hours)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::MealHours;
    use crate::meal_type::MealType;

    #[test]
    fn test_entry_is_created_lazily() {
        let mut hours = MealHours::default();
        assert!(hours.is_empty());

        hours.entry(MealType::Lunch).open_hours = Some("11:00-14:00".to_string());

        assert!(hours.contains(MealType::Lunch));
        assert!(!hours.contains(MealType::Dinner));
        assert_eq!(hours.iter().count(), 1);
    }

    #[test]
    fn test_serializes_only_present_meals() {
        let mut hours = MealHours::default();
        hours.entry(MealType::Dinner).last_order = Some("18:30".to_string());
        let json = serde_json::to_value(&hours).unwrap();
        assert_eq!(json["DN"]["last_order"], "18:30");
        assert!(json.get("BR").is_none());
    }
}
