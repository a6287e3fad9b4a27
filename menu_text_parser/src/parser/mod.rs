pub mod cornered;
pub mod dormitory;

use entities::cafeteria::{CafeteriaCorner, OperatingHours};
use entities::meal_type::MealType;
use entities::menu::Menu;
use std::sync::Arc;

/// One meal period of one cafeteria, as a block of lines.
#[derive(Debug, Clone, Copy)]
pub struct MenuBlock<'a> {
    pub text: &'a str,
    pub meal_type: MealType,
    pub cafeteria_name: &'a str,
    pub cafeteria_tel: Option<&'a str>,
}

#[derive(Debug)]
struct PendingMenu {
    name: String,
    price: Option<String>,
    vegetarian: bool,
    corner: usize,
}

/// Corners and menus of a block while it is being read. Corners stay
/// mutable until the block ends, then get shared by their menus.
struct BlockState<'a> {
    block: &'a MenuBlock<'a>,
    corners: Vec<CafeteriaCorner>,
    menus: Vec<PendingMenu>,
}

impl<'a> BlockState<'a> {
    /// Starts with a corner named after the cafeteria itself.
    fn new(block: &'a MenuBlock<'a>, grouped: bool) -> Self {
        let mut state = Self {
            block,
            corners: Vec::new(),
            menus: Vec::new(),
        };
        state.open_corner(block.cafeteria_name, grouped, None);
        state
    }

    fn open_corner(&mut self, name: &str, grouped: bool, price: Option<&str>) {
        let mut corner = CafeteriaCorner::new(name, self.block.cafeteria_name);
        corner.cafeteria_tel = self.block.cafeteria_tel.map(str::to_string);
        corner.grouped = grouped;
        corner.price = price.map(str::to_string);
        self.corners.push(corner);
    }

    fn current_index(&self) -> usize {
        self.corners.len() - 1
    }

    fn current_corner(&mut self) -> &mut CafeteriaCorner {
        let index = self.current_index();
        &mut self.corners[index]
    }

    fn current_hours(&mut self) -> &mut OperatingHours {
        let meal_type = self.block.meal_type;
        self.current_corner().operating_hours.entry(meal_type)
    }

    fn push_menu(&mut self, name: &str, price: Option<&str>, vegetarian: bool) {
        let corner = self.current_index();
        self.menus.push(PendingMenu {
            name: name.to_string(),
            price: price.map(str::to_string),
            vegetarian,
            corner,
        });
    }

    fn into_menus(self) -> Vec<Menu> {
        let corners = self.corners.into_iter().map(Arc::new).collect::<Vec<_>>();
        self.menus
            .into_iter()
            .map(|pending| {
                let mut menu = Menu::new(pending.name, Arc::clone(&corners[pending.corner]));
                menu.price = pending.price;
                menu.vegetarian = pending.vegetarian;
                menu
            })
            .collect()
    }
}
