//! Weekly lunch menu extraction from the cafeteria announcement table.
//!
//! The markup is published by hand and changes shape between posts, so every
//! step here degrades to an empty or placeholder result instead of failing.

use std::sync::LazyLock;

use scraper::Selector;

pub mod columns;
pub mod extract;
pub mod locate;
pub mod rows;
pub mod text;

pub use extract::{ExtractError, day_labels, extract_from_table, extract_menu, try_extract_menu};

/// Number of weekday columns (Monday to Friday).
pub const DAYS: usize = 5;

/// Label of the leftmost "category" column.
pub const CATEGORY_TOKEN: &str = "구분";
/// Label of the trailing "operating info" column.
pub const OPERATING_INFO_TOKEN: &str = "운영정보";
/// Row label of the lunch meal.
pub const LUNCH_TOKEN: &str = "중식";

/// Lines containing any of these are notices, not dishes.
pub const ADMIN_WORDS: [&str; 5] = ["운영", "문의", "전화", "Open", "Close"];

pub(crate) static TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table"));
pub(crate) static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
pub(crate) static CELL: LazyLock<Selector> = LazyLock::new(|| selector("th, td"));

pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|err| panic!("invalid built-in selector {css:?}: {err}"))
}
