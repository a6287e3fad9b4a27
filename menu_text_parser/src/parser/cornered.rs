use crate::grammar::match_cornered;
use crate::grouping::{GroupingTables, SNUCO_GROUPING};
use crate::hours::{classify, is_hours_line};
use crate::parser::{BlockState, MenuBlock};
use entities::cafeteria::CafeteriaCorner;
use entities::meal_type::MealType;
use entities::menu::Menu;
use tracing::debug;

/// Provider conventions for pages that head dishes with `<corner>` tokens.
#[derive(Debug, Clone, Copy)]
pub struct CorneredRules {
    pub grouping: GroupingTables,
    /// Lines whose name or corner text contains one of these are
    /// boilerplate, not dishes.
    pub disqualified_texts: &'static [&'static str],
    pub vegetarian_marker: &'static str,
    /// Hours stated under this corner apply to the others except for the
    /// last order time.
    pub order_type_corner: &'static str,
}

impl CorneredRules {
    fn is_disqualified(&self, menu_name: &str) -> bool {
        self.disqualified_texts
            .iter()
            .any(|text| menu_name.contains(text))
    }
}

pub const SNUCO_RULES: CorneredRules = CorneredRules {
    grouping: SNUCO_GROUPING,
    disqualified_texts: &["다양한 메뉴가 준비되어 있습니다"],
    vegetarian_marker: "(#)",
    order_type_corner: "주문식 메뉴",
};

pub fn parse_cornered_block(block: &MenuBlock, rules: &CorneredRules) -> Vec<Menu> {
    let cafeteria_name = block.cafeteria_name;
    let meal_type = block.meal_type;
    let mut state = BlockState::new(
        block,
        rules.grouping.is_grouped(cafeteria_name, None, meal_type),
    );

    for line in block.text.split('\n') {
        if is_hours_line(line) {
            classify(line).record(state.current_hours());
            continue;
        }

        let Some(menu_line) = match_cornered(line) else {
            debug!(line, cafeteria_name, "skipping unrecognised menu line");
            continue;
        };

        let boilerplate = menu_line
            .name
            .into_iter()
            .chain(menu_line.corner)
            .any(|text| rules.is_disqualified(text));
        if boilerplate {
            debug!(line, cafeteria_name, "skipping boilerplate line");
            continue;
        }

        if let Some(corner_name) = menu_line.corner {
            let grouped = rules
                .grouping
                .is_grouped(cafeteria_name, Some(corner_name), meal_type);
            let corner_price = menu_line.price.filter(|_| menu_line.name.is_none());
            state.open_corner(corner_name, grouped, corner_price);
        }

        let Some(menu_name) = menu_line.name else {
            continue;
        };

        let vegetarian = menu_name.contains(rules.vegetarian_marker);
        let menu_name = menu_name.replace(rules.vegetarian_marker, "");
        let split = state.current_corner().grouped
            && !rules
                .grouping
                .should_not_split(cafeteria_name, menu_line.corner, meal_type);

        if split {
            menu_name
                .split(',')
                .map(str::trim)
                .filter(|dish| !dish.is_empty())
                .for_each(|dish| state.push_menu(dish, menu_line.price, vegetarian));
        } else {
            let menu_name = menu_name.trim();
            if !menu_name.is_empty() {
                state.push_menu(menu_name, menu_line.price, vegetarian);
            }
        }
    }

    propagate_hours(&mut state.corners, meal_type, rules.order_type_corner);
    state.into_menus()
}

/// Providers state the hours once, under the last corner of the block.
fn propagate_hours(corners: &mut [CafeteriaCorner], meal_type: MealType, order_type_corner: &str) {
    let Some((last, earlier)) = corners.split_last_mut() else {
        return;
    };
    let Some(hours) = last.operating_hours.get(meal_type) else {
        return;
    };

    for corner in earlier
        .iter_mut()
        .filter(|corner| !corner.operating_hours.contains(meal_type))
    {
        let mut hours = hours.clone();
        if last.name == order_type_corner {
            hours.last_order = None;
        }
        corner.operating_hours.insert(meal_type, hours);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_cornered_block, SNUCO_RULES};
    use crate::parser::MenuBlock;
    use entities::meal_type::MealType;
    use entities::menu::Menu;
    use rstest::rstest;

    fn parse(text: &str, cafeteria_name: &str, meal_type: MealType) -> Vec<Menu> {
        let block = MenuBlock {
            text,
            meal_type,
            cafeteria_name,
            cafeteria_tel: Some("880-5543"),
        };
        parse_cornered_block(&block, &SNUCO_RULES)
    }

    fn names(menus: &[Menu]) -> Vec<&str> {
        menus.iter().map(|menu| menu.name.as_str()).collect()
    }

    #[test]
    fn test_grouped_corner_is_split_on_commas() {
        let menus = parse(
            "<A코너>뚝배기 제육콩나물비빔밥,감자채팽이버섯전,고구마맛탕 : 6,000원",
            "예술계식당",
            MealType::Lunch,
        );

        assert_eq!(
            names(&menus),
            vec!["뚝배기 제육콩나물비빔밥", "감자채팽이버섯전", "고구마맛탕"]
        );
        for menu in &menus {
            assert_eq!(menu.price.as_deref(), Some("6,000원"));
            assert_eq!(menu.cafeteria_corner.name, "A코너");
            assert!(menu.cafeteria_corner.grouped);
        }
    }

    #[test]
    fn test_should_not_split_keeps_a_single_menu() {
        let menus = parse("<C코너>돈까스,샐러드,장국 : 6,500원", "예술계식당", MealType::Lunch);
        assert_eq!(names(&menus), vec!["돈까스,샐러드,장국"]);
        assert!(menus[0].cafeteria_corner.grouped);
    }

    #[rstest]
    #[case("a,b", 2)]
    #[case("a,b,c,d", 4)]
    #[case("a", 1)]
    fn test_comma_count_decides_menu_count(#[case] dishes: &str, #[case] expected: usize) {
        let text = format!("<뷔페>{dishes} : 5,000원");
        assert_eq!(parse(&text, "302동식당", MealType::Lunch).len(), expected);
    }

    #[test]
    fn test_ungrouped_corner_keeps_commas() {
        let menus = parse("<뷔페>a,b : 5,000원", "302동식당", MealType::Dinner);
        assert_eq!(names(&menus), vec!["a,b"]);
        assert!(!menus[0].cafeteria_corner.grouped);
    }

    #[test]
    fn test_priced_corner_line_has_no_menus() {
        let menus = parse("<뷔페> 6,500원\n제육볶음\n미역국", "302동식당", MealType::Dinner);

        assert_eq!(names(&menus), vec!["제육볶음", "미역국"]);
        let corner = &menus[0].cafeteria_corner;
        assert_eq!(corner.name, "뷔페");
        assert_eq!(corner.price.as_deref(), Some("6,500원"));
        assert_eq!(corner.cafeteria_tel.as_deref(), Some("880-5543"));
        assert!(menus[0].price.is_none());
    }

    #[test]
    fn test_vegetarian_marker_is_stripped() {
        let menus = parse("제육볶음(#)", "학생회관식당", MealType::Lunch);
        assert_eq!(names(&menus), vec!["제육볶음"]);
        assert!(menus[0].vegetarian);
        assert_eq!(menus[0].cafeteria_corner.name, "학생회관식당");
    }

    #[test]
    fn test_marker_only_name_produces_nothing() {
        assert!(parse("(#)", "학생회관식당", MealType::Lunch).is_empty());
    }

    #[test]
    fn test_default_corner_of_grouped_dinner_splits() {
        let menus = parse("카레라이스,우동", "예술계식당", MealType::Dinner);
        assert_eq!(names(&menus), vec!["카레라이스", "우동"]);
        assert_eq!(menus[0].cafeteria_corner.name, "예술계식당");
    }

    #[test]
    fn test_boilerplate_lines_are_dropped() {
        let menus = parse(
            "<A코너>김밥\n위 메뉴외에도 다양한 메뉴가 준비되어 있습니다\n<B코너>김밥:라면",
            "학생회관식당",
            MealType::Lunch,
        );
        assert_eq!(names(&menus), vec!["김밥"]);
    }

    #[test]
    fn test_bracketed_boilerplate_opens_no_corner() {
        let menus = parse(
            "<A코너>김밥\n<B코너>라면\n※ 운영시간 : 11:00~14:00\n< 위 메뉴외에도 다양한 메뉴가 준비되어 있습니다>",
            "학생회관식당",
            MealType::Lunch,
        );

        assert_eq!(names(&menus), vec!["김밥", "라면"]);
        assert_eq!(menus[0].cafeteria_corner.name, "A코너");
        assert!(menus[0]
            .cafeteria_corner
            .operating_hours
            .contains(MealType::Lunch));
    }

    #[test]
    fn test_hours_lines_are_not_menus() {
        let menus = parse(
            "김치찌개 : 5,000원\n※ 운영시간 : 11:00~14:00\n※ 혼잡시간 : 12:00~12:30\n※ 메뉴는 변경될 수 있습니다",
            "학생회관식당",
            MealType::Lunch,
        );

        assert_eq!(names(&menus), vec!["김치찌개"]);
        let hours = menus[0]
            .cafeteria_corner
            .operating_hours
            .get(MealType::Lunch)
            .unwrap();
        assert_eq!(hours.open_hours.as_deref(), Some("11:00~14:00"));
        assert_eq!(hours.rush_hours.as_deref(), Some("12:00~12:30"));
        assert_eq!(hours.additional_info, vec!["※ 메뉴는 변경될 수 있습니다"]);
    }

    #[test]
    fn test_hours_of_last_corner_propagate_to_earlier_corners() {
        let menus = parse(
            "<A코너>김치찌개\n<B코너>된장찌개\n※ 운영시간 : 11:00~14:00\n※ 라스트오더 : 13:30",
            "학생회관식당",
            MealType::Lunch,
        );

        let first = menus[0].cafeteria_corner.operating_hours.get(MealType::Lunch);
        let last = menus[1].cafeteria_corner.operating_hours.get(MealType::Lunch);
        assert!(first.is_some());
        assert_eq!(first, last);
    }

    #[test]
    fn test_order_type_corner_does_not_propagate_last_order() {
        let menus = parse(
            "<백반>제육볶음\n<주문식 메뉴>돈까스\n※ 운영시간 : 11:00~14:00\n※ 라스트오더 : 13:30",
            "두레미담",
            MealType::Lunch,
        );

        let first = menus[0]
            .cafeteria_corner
            .operating_hours
            .get(MealType::Lunch)
            .unwrap();
        let last = menus[1]
            .cafeteria_corner
            .operating_hours
            .get(MealType::Lunch)
            .unwrap();
        assert_eq!(first.open_hours.as_deref(), Some("11:00~14:00"));
        assert_eq!(first.last_order, None);
        assert_eq!(last.last_order.as_deref(), Some("13:30"));
    }

    #[test]
    fn test_corners_with_their_own_hours_keep_them() {
        let menus = parse(
            "<A코너>김치찌개\n※ 운영시간 : 11:00~13:00\n<B코너>된장찌개\n※ 운영시간 : 11:00~14:00",
            "학생회관식당",
            MealType::Lunch,
        );
        let first = menus[0]
            .cafeteria_corner
            .operating_hours
            .get(MealType::Lunch)
            .unwrap();
        assert_eq!(first.open_hours.as_deref(), Some("11:00~13:00"));
    }
}
