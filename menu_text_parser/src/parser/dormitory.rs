use crate::grammar::match_plain;
use crate::hours::{classify_open_hours_only, HOURS_MARKER};
use crate::parser::{BlockState, MenuBlock};
use entities::meal_type::MealType;
use entities::menu::Menu;
use tracing::debug;

/// Breakfast franchise whose price line names the set instead of a dish.
const SET_MENU_FRANCHISE: &str = "아워홈";

/// Dormitory pages carry no corner tokens. Hours may trail a dish on the
/// same line, and one franchise lists its breakfast set as a priced title
/// followed by the dishes.
pub fn parse_dormitory_block(block: &MenuBlock) -> Vec<Menu> {
    let is_breakfast = block.meal_type == MealType::Breakfast;
    let set_menu_breakfast = is_breakfast && block.cafeteria_name.contains(SET_MENU_FRANCHISE);
    let mut state = BlockState::new(block, is_breakfast);

    for raw_line in block.text.split('\n') {
        let mut line = raw_line.trim();

        if let Some(marker_at) = line.find(HOURS_MARKER) {
            let (dish, hours_text) = line.split_at(marker_at);
            classify_open_hours_only(hours_text).record(state.current_hours());
            let dish = dish.trim();
            if dish.is_empty() {
                continue;
            }
            line = dish;
        }

        let Some(menu_line) = match_plain(line) else {
            debug!(
                line,
                cafeteria_name = block.cafeteria_name,
                "skipping unrecognised menu line"
            );
            continue;
        };
        let Some(menu_name) = menu_line.name else {
            continue;
        };

        if !set_menu_breakfast {
            state.push_menu(menu_name, menu_line.price, false);
            continue;
        }

        match menu_line.price {
            Some(price) => {
                let corner = state.current_corner();
                corner.name = menu_name.to_string();
                corner.price = Some(price.to_string());
            }
            None => menu_name
                .split(',')
                .map(str::trim)
                .filter(|dish| !dish.is_empty())
                .for_each(|dish| state.push_menu(dish, None, false)),
        }
    }

    state.into_menus()
}

#[cfg(test)]
mod tests {
    use super::parse_dormitory_block;
    use crate::parser::MenuBlock;
    use entities::meal_type::MealType;
    use entities::menu::Menu;

    fn parse(text: &str, cafeteria_name: &str, meal_type: MealType) -> Vec<Menu> {
        let block = MenuBlock {
            text,
            meal_type,
            cafeteria_name,
            cafeteria_tel: None,
        };
        parse_dormitory_block(&block)
    }

    #[test]
    fn test_one_menu_per_line() {
        let menus = parse(
            "짬뽕순두부찌개&메밀고기전병 : 6,000원\n  돈까스 : 5,500원  \n",
            "919동 기숙사식당",
            MealType::Lunch,
        );

        let names = menus.iter().map(|menu| menu.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["짬뽕순두부찌개&메밀고기전병", "돈까스"]);
        assert_eq!(menus[1].price.as_deref(), Some("5,500원"));
        assert!(!menus[0].cafeteria_corner.grouped);
    }

    #[test]
    fn test_inline_hours_still_yield_the_dish() {
        let menus = parse(
            "제육덮밥 : 5,000원 ※운영시간 : 17:30~19:00\n※ 주말 미운영",
            "919동 기숙사식당",
            MealType::Dinner,
        );

        assert_eq!(menus.len(), 1);
        assert_eq!(menus[0].name, "제육덮밥");
        assert_eq!(menus[0].price.as_deref(), Some("5,000원"));
        let hours = menus[0]
            .cafeteria_corner
            .operating_hours
            .get(MealType::Dinner)
            .unwrap();
        assert_eq!(hours.open_hours.as_deref(), Some("17:30~19:00"));
        assert_eq!(hours.additional_info, vec!["※ 주말 미운영"]);
    }

    #[test]
    fn test_set_menu_breakfast_renames_the_corner() {
        let menus = parse(
            "아침정식 : 4,000원\n쌀밥,미역국, 계란말이,김치",
            "아워홈 기숙사식당",
            MealType::Breakfast,
        );

        let names = menus.iter().map(|menu| menu.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["쌀밥", "미역국", "계란말이", "김치"]);
        let corner = &menus[0].cafeteria_corner;
        assert_eq!(corner.name, "아침정식");
        assert_eq!(corner.price.as_deref(), Some("4,000원"));
        assert!(corner.grouped);
    }

    #[test]
    fn test_commas_are_kept_outside_set_menu_breakfast() {
        let menus = parse("쌀밥,미역국", "아워홈 기숙사식당", MealType::Lunch);
        assert_eq!(menus.len(), 1);
        assert_eq!(menus[0].name, "쌀밥,미역국");
    }
}
