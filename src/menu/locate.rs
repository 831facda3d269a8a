//! Finds the weekly schedule table on a detail page.
//!
//! Strategies run in priority order and the first hit wins. The last one
//! accepts any table, so a page with at least one `<table>` always resolves.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::{ROW, TABLE, selector};

const WEEKDAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

static MARKED_TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table.con03_sub_2"));
static MONTH_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{1,2}\s*월\s*\d{1,2}\s*일").unwrap_or_else(|err| panic!("month/day: {err}"))
});

type Strategy = for<'a> fn(&'a Html) -> Option<ElementRef<'a>>;

const STRATEGIES: [(&str, Strategy); 3] = [
    ("class marker", by_class_marker),
    ("weekday header", by_weekday_header),
    ("first table", first_table),
];

pub fn find_menu_table(document: &Html) -> Option<ElementRef<'_>> {
    for (name, strategy) in STRATEGIES {
        if let Some(table) = strategy(document) {
            tracing::debug!(strategy = name, "located menu table");
            return Some(table);
        }
    }
    tracing::debug!("document has no table");
    None
}

fn by_class_marker(document: &Html) -> Option<ElementRef<'_>> {
    document.select(&MARKED_TABLE).next()
}

fn by_weekday_header(document: &Html) -> Option<ElementRef<'_>> {
    document.select(&TABLE).find(|table| {
        table
            .select(&ROW)
            .next()
            .is_some_and(|row| looks_like_day_header(&row_text(row)))
    })
}

fn first_table(document: &Html) -> Option<ElementRef<'_>> {
    document.select(&TABLE).next()
}

fn row_text(row: ElementRef<'_>) -> String {
    row.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn looks_like_day_header(text: &str) -> bool {
    WEEKDAYS.iter().any(|day| text.contains(day)) || MONTH_DAY.is_match(text)
}
