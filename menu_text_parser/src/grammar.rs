//! Menu line grammar shared by the providers.
//!
//! A line is `<corner> name : price` where every part is optional. The
//! name must not start with a price token, so `<뷔페> 6,500원` is a priced
//! corner rather than a dish called `6,500원`. The first matching reading
//! wins, trying the corner reading before the plain one and the longest
//! whitespace run after the corner before shorter ones.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CORNER: Regex = Regex::new(r"^<([^<>]+)>").expect("CORNER regex to compile");
    static ref PRICE_PREFIX: Regex =
        Regex::new(r"^[\d,]+원").expect("PRICE_PREFIX regex to compile");
    static ref NAMED_TAIL: Regex = Regex::new(r"^(?:([^:]+?)\s*(?::\s*)?)?([\d,]+원)?\s*$")
        .expect("NAMED_TAIL regex to compile");
    static ref PRICE_ONLY_TAIL: Regex =
        Regex::new(r"^([\d,]+원)?\s*$").expect("PRICE_ONLY_TAIL regex to compile");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuLine<'a> {
    pub corner: Option<&'a str>,
    pub name: Option<&'a str>,
    pub price: Option<&'a str>,
}

fn match_tail(text: &str) -> Option<MenuLine<'_>> {
    let pattern: &Regex = if PRICE_PREFIX.is_match(text) {
        &PRICE_ONLY_TAIL
    } else {
        &NAMED_TAIL
    };
    let captures = pattern.captures(text)?;
    let (name, price) = if captures.len() == 3 {
        (captures.get(1), captures.get(2))
    } else {
        (None, captures.get(1))
    };
    Some(MenuLine {
        corner: None,
        name: name
            .map(|name| name.as_str().trim())
            .filter(|name| !name.is_empty()),
        price: price.map(|price| price.as_str().trim()),
    })
}

/// Line without a corner token.
pub fn match_plain(line: &str) -> Option<MenuLine<'_>> {
    match_tail(line)
}

pub fn match_cornered(line: &str) -> Option<MenuLine<'_>> {
    if let Some(captures) = CORNER.captures(line) {
        let corner = captures.get(1).map(|corner| corner.as_str());
        let after_corner = captures.get(0).map_or(0, |whole| whole.end());
        let rest = &line[after_corner..];
        let trimmed_len = rest.len() - rest.trim_start().len();

        let split_points = rest[..trimmed_len]
            .char_indices()
            .map(|(index, _)| index)
            .chain(std::iter::once(trimmed_len))
            .collect::<Vec<_>>();

        for split in split_points.into_iter().rev() {
            if let Some(tail) = match_tail(&rest[split..]) {
                return Some(MenuLine { corner, ..tail });
            }
        }
    }
    match_tail(line)
}
