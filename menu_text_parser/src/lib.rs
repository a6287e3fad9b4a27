mod grammar;
pub mod grouping;
pub mod hours;
mod parser;

pub use parser::cornered::{parse_cornered_block, CorneredRules, SNUCO_RULES};
pub use parser::dormitory::parse_dormitory_block;
pub use parser::MenuBlock;
