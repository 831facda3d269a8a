use scraper::ElementRef;

use super::text::cell_text;
use super::{CATEGORY_TOKEN, CELL, LUNCH_TOKEN, ROW};

/// Rows 0 and 1 carry weekday names and dates.
pub const HEADER_ROWS: usize = 2;

/// How many leading cells of a meal row may hold its label.
pub const LABEL_SCAN_WIDTH: usize = 2;

pub fn table_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    table.select(&ROW).collect()
}

pub fn row_cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    row.select(&CELL).collect()
}

/// The lunch row of a schedule table, or `None` when there is no body row.
///
/// A row is lunch when its label cells mention [`LUNCH_TOKEN`]. Posts that
/// omit the label list lunch first, so the first body row is used instead.
pub fn find_lunch_row<'a>(rows: &[ElementRef<'a>]) -> Option<ElementRef<'a>> {
    let body = rows.get(HEADER_ROWS..).filter(|body| !body.is_empty())?;

    let labelled = body.iter().copied().find(|row| {
        row_cells(*row)
            .into_iter()
            .take(LABEL_SCAN_WIDTH)
            .any(|cell| cell_text(cell).contains(LUNCH_TOKEN))
    });

    match labelled {
        Some(row) => Some(row),
        None => {
            tracing::warn!("no row labelled as lunch; assuming first body row");
            Some(body[0])
        }
    }
}

/// Number of leading label cells to skip in a meal row.
///
/// The last of the first [`LABEL_SCAN_WIDTH`] cells that mentions the
/// category or lunch token marks the end of the label; defaults to one.
pub fn label_offset(cells: &[ElementRef<'_>]) -> usize {
    cells
        .iter()
        .take(LABEL_SCAN_WIDTH)
        .enumerate()
        .filter(|(_, cell)| {
            let text = cell_text(**cell);
            text.contains(CATEGORY_TOKEN) || text.contains(LUNCH_TOKEN)
        })
        .map(|(i, _)| i + 1)
        .last()
        .unwrap_or(1)
}
