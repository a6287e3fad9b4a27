//! Just enough HTML handling for the provider pages: locating elements by
//! tag and class, and reading a cell's text line by line.
use lazy_static::lazy_static;
use regex::{Captures, Regex};

fn element_regex(tag: &str) -> Regex {
    Regex::new(&format!(r"(?is)<{tag}\b([^>]*)>(.*?)</{tag}\s*>"))
        .expect("element regex to compile")
}

lazy_static! {
    static ref TABLE: Regex = element_regex("table");
    static ref TBODY: Regex = element_regex("tbody");
    static ref TR: Regex = element_regex("tr");
    static ref TD: Regex = element_regex("td");
    static ref H2: Regex = element_regex("h2");
    static ref UL: Regex = element_regex("ul");
    static ref LI: Regex = element_regex("li");
    static ref CLASS_ATTRIBUTE: Regex = Regex::new(r#"(?i)\bclass\s*=\s*["']([^"']*)["']"#)
        .expect("CLASS_ATTRIBUTE regex to compile");
    static ref LINE_BREAK: Regex =
        Regex::new(r"(?i)<br\s*/?>").expect("LINE_BREAK regex to compile");
    static ref TAG: Regex = Regex::new(r"(?s)<[^>]*>").expect("TAG regex to compile");
    static ref ENTITY: Regex =
        Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").expect("ENTITY regex to compile");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Table,
    Tbody,
    Tr,
    Td,
    H2,
    Ul,
    Li,
}

impl Tag {
    fn regex(&self) -> &'static Regex {
        match self {
            Tag::Table => &TABLE,
            Tag::Tbody => &TBODY,
            Tag::Tr => &TR,
            Tag::Td => &TD,
            Tag::H2 => &H2,
            Tag::Ul => &UL,
            Tag::Li => &LI,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    attributes: &'a str,
    pub inner: &'a str,
    /// Offset just past the closing tag, within the searched fragment.
    pub end: usize,
}

impl<'a> Element<'a> {
    pub fn has_class(&self, class: &str) -> bool {
        CLASS_ATTRIBUTE
            .captures(self.attributes)
            .and_then(|captures| captures.get(1))
            .is_some_and(|classes| classes.as_str().split_whitespace().any(|name| name == class))
    }

    pub fn text(&self) -> String {
        text(self.inner)
    }
}

/// Non-nested elements of `tag` in document order.
pub fn elements(html: &str, tag: Tag) -> impl Iterator<Item = Element<'_>> {
    tag.regex().captures_iter(html).filter_map(|captures| {
        let whole = captures.get(0)?;
        Some(Element {
            attributes: captures.get(1).map_or("", |attributes| attributes.as_str()),
            inner: captures.get(2).map_or("", |inner| inner.as_str()),
            end: whole.end(),
        })
    })
}

pub fn first_with_class<'a>(html: &'a str, tag: Tag, class: &str) -> Option<Element<'a>> {
    elements(html, tag).find(|element| element.has_class(class))
}

/// Text of a fragment with tags removed and entities decoded. `<br>` ends a
/// line, and every line is trimmed since indentation is not content.
pub fn text(fragment: &str) -> String {
    let with_breaks = LINE_BREAK.replace_all(fragment, "\n");
    let without_tags = TAG.replace_all(&with_breaks, "");
    let decoded = decode_entities(&without_tags);
    decoded
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |captures: &Captures| {
            let entity = &captures[1];
            let decoded = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some(' '),
                _ => entity
                    .strip_prefix("#x")
                    .or_else(|| entity.strip_prefix("#X"))
                    .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                    .or_else(|| entity.strip_prefix('#').and_then(|dec| dec.parse().ok()))
                    .and_then(char::from_u32),
            };
            decoded.map_or_else(|| captures[0].to_string(), String::from)
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::{elements, first_with_class, text, Tag};

    #[test]
    fn test_cell_text_keeps_line_structure() {
        let cell = "\n   &lt;A코너&gt;김밥 &amp; 라면<br/>\n  <span>※ 운영시간 : 11:00</span>  ";
        assert_eq!(text(cell), "<A코너>김밥 & 라면\n\n※ 운영시간 : 11:00");
    }

    #[test]
    fn test_numeric_entities() {
        assert_eq!(text("&#44608;&#xBC25;&unknown;"), "김밥&unknown;");
    }

    #[test]
    fn test_first_with_class_matches_whole_class_names() {
        let html = r#"<td class="lunch-title">x</td><td class="cell lunch">y</td>"#;
        let cell = first_with_class(html, Tag::Td, "lunch").unwrap();
        assert_eq!(cell.text(), "y");
    }

    #[test]
    fn test_elements_in_document_order() {
        let html = "<ul><li>a</li><LI>b</LI></ul>";
        let items = elements(html, Tag::Li).map(|li| li.text()).collect::<Vec<_>>();
        assert_eq!(items, vec!["a", "b"]);
    }
}
