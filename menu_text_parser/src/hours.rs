//! Operating-hours lines. Providers interleave schedule metadata with the
//! dishes, flagged by a marker symbol.
use entities::cafeteria::OperatingHours;

pub const HOURS_MARKER: char = '※';

const SOLD_OUT_KEYWORD: &str = "소진";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HoursField {
    Open,
    Rush,
    LastOrder,
    Break,
}

const KEYWORDS: [(&str, HoursField); 4] = [
    ("운영시간", HoursField::Open),
    ("혼잡시간", HoursField::Rush),
    ("라스트", HoursField::LastOrder),
    ("브레이크", HoursField::Break),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoursLine {
    OpenHours(String),
    RushHours(String),
    LastOrder(String),
    BreakHours(String),
    Note(String),
}

impl HoursLine {
    pub fn record(self, hours: &mut OperatingHours) {
        match self {
            HoursLine::OpenHours(value) => hours.open_hours = Some(value),
            HoursLine::RushHours(value) => hours.rush_hours = Some(value),
            HoursLine::LastOrder(value) => hours.last_order = Some(value),
            HoursLine::BreakHours(value) => hours.break_hours = Some(value),
            HoursLine::Note(value) => hours.additional_info.push(value),
        }
    }

    fn keyed(field: HoursField, value: String) -> Self {
        match field {
            HoursField::Open => HoursLine::OpenHours(value),
            HoursField::Rush => HoursLine::RushHours(value),
            HoursField::LastOrder => HoursLine::LastOrder(value),
            HoursField::Break => HoursLine::BreakHours(value),
        }
    }
}

pub fn is_hours_line(line: &str) -> bool {
    line.contains(HOURS_MARKER)
}

/// Value of a `keyword : value` line. A keyed line without a colon carries
/// no value and is kept as a note instead.
fn value_after_colon(line: &str) -> Option<String> {
    line.split_once(':').map(|(_, value)| value.trim().to_string())
}

/// Full keyword set used by the cafeteria co-op pages.
///
/// Breakfast at one cafeteria announces "served until sold out" instead of
/// opening hours; that text sits between the markers and is stored as the
/// opening hours.
pub fn classify(line: &str) -> HoursLine {
    let keyed = KEYWORDS
        .iter()
        .find(|(keyword, _)| line.contains(keyword))
        .map(|(_, field)| *field);

    match keyed {
        Some(field) => value_after_colon(line)
            .map(|value| HoursLine::keyed(field, value))
            .unwrap_or_else(|| HoursLine::Note(line.to_string())),
        None if line.contains(SOLD_OUT_KEYWORD) => {
            let value = line.split(HOURS_MARKER).nth(1).unwrap_or_default();
            HoursLine::OpenHours(value.trim().to_string())
        }
        None => HoursLine::Note(line.to_string()),
    }
}

/// Dormitory pages only ever state opening hours; everything else is a note.
pub fn classify_open_hours_only(line: &str) -> HoursLine {
    match KEYWORDS[0] {
        (keyword, field) if line.contains(keyword) => value_after_colon(line)
            .map(|value| HoursLine::keyed(field, value))
            .unwrap_or_else(|| HoursLine::Note(line.to_string())),
        _ => HoursLine::Note(line.to_string()),
    }
}
