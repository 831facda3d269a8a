//! Picks the five weekday columns out of a header row.
//!
//! Both pickers may return fewer than [`DAYS`] cells; a missing column just
//! means that day has no label text.

use scraper::ElementRef;

use super::text::cell_text;
use super::{CATEGORY_TOKEN, DAYS, OPERATING_INFO_TOKEN};

/// Weekday-name row: skips blank, "category" and "operating info" cells.
pub fn pick_weekday_cells<'a>(cells: &[ElementRef<'a>]) -> Vec<ElementRef<'a>> {
    cells
        .iter()
        .copied()
        .filter(|cell| {
            let text = cell_text(*cell);
            !text.is_empty()
                && !text.contains(CATEGORY_TOKEN)
                && !text.contains(OPERATING_INFO_TOKEN)
        })
        .take(DAYS)
        .collect()
}

/// Date row: skips "operating info" cells and keeps the first five left.
pub fn pick_date_cells<'a>(cells: &[ElementRef<'a>]) -> Vec<ElementRef<'a>> {
    cells
        .iter()
        .copied()
        .filter(|cell| !cell_text(*cell).contains(OPERATING_INFO_TOKEN))
        .take(DAYS)
        .collect()
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;
    use crate::menu::CELL;

    fn texts(cells: &[ElementRef<'_>]) -> Vec<String> {
        cells.iter().map(|c| cell_text(*c)).collect()
    }

    #[test]
    fn weekday_picker_skips_label_and_blank_cells() {
        let html = Html::parse_fragment(
            "<table><tr><th>구분</th><th></th><th>Monday</th><th>Tuesday</th>\
             <th>Wednesday</th><th>Thursday</th><th>Friday</th><th>Saturday</th>\
             <th>운영정보</th></tr></table>",
        );
        let cells: Vec<_> = html.select(&CELL).collect();
        assert_eq!(
            texts(&pick_weekday_cells(&cells)),
            vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
        );
    }

    #[test]
    fn date_picker_keeps_blank_cells_in_position() {
        let html = Html::parse_fragment(
            "<table><tr><td></td><td>3월 10일</td><td>운영정보</td><td>3월 11일</td></tr></table>",
        );
        let cells: Vec<_> = html.select(&CELL).collect();
        assert_eq!(
            texts(&pick_date_cells(&cells)),
            vec!["", "3월 10일", "3월 11일"]
        );
    }

    #[test]
    fn short_rows_return_short_selections() {
        let html = Html::parse_fragment("<table><tr><th>구분</th><th>Monday</th></tr></table>");
        let cells: Vec<_> = html.select(&CELL).collect();
        assert_eq!(pick_weekday_cells(&cells).len(), 1);
        assert!(pick_weekday_cells(&[]).is_empty());
        assert!(pick_date_cells(&[]).is_empty());
    }
}
