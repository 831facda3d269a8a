use scraper::{ElementRef, Html};

use super::columns::{pick_date_cells, pick_weekday_cells};
use super::locate::find_menu_table;
use super::rows::{find_lunch_row, label_offset, row_cells, table_rows};
use super::text::{cell_text, dish_lines};
use super::{DAYS, OPERATING_INFO_TOKEN};
use crate::formats::MenuEntry;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("document contains no table")]
    TableNotFound,
}

/// Lunch entries of the menu table on `document`; empty when there is none.
pub fn extract_menu(document: &Html) -> Vec<MenuEntry> {
    try_extract_menu(document).unwrap_or_default()
}

/// Like [`extract_menu`], but reports a page without any table.
pub fn try_extract_menu(document: &Html) -> Result<Vec<MenuEntry>, ExtractError> {
    let table = find_menu_table(document).ok_or(ExtractError::TableNotFound)?;
    Ok(extract_from_table(table))
}

/// One label per weekday column, built from the two header rows.
///
/// Formats as `"{date} ({weekday})"` when both are known and the date does not
/// already mention the weekday. Falls back to `Day1`..`Day5`.
pub fn day_labels(table: ElementRef<'_>) -> [String; DAYS] {
    let rows = table_rows(table);
    let weekdays = header_texts(&rows, 0, pick_weekday_cells);
    let dates = header_texts(&rows, 1, pick_date_cells);

    std::array::from_fn(|i| {
        let date = dates.get(i).map(String::as_str).unwrap_or_default();
        let weekday = weekdays.get(i).map(String::as_str).unwrap_or_default();
        format_day_label(i, date, weekday)
    })
}

fn header_texts<'a>(
    rows: &[ElementRef<'a>],
    index: usize,
    pick: fn(&[ElementRef<'a>]) -> Vec<ElementRef<'a>>,
) -> Vec<String> {
    let cells = rows.get(index).map(|row| row_cells(*row)).unwrap_or_default();
    pick(&cells).into_iter().map(cell_text).collect()
}

pub fn format_day_label(index: usize, date: &str, weekday: &str) -> String {
    match (date.is_empty(), weekday.is_empty()) {
        (false, false) if !date.contains(weekday) => format!("{date} ({weekday})"),
        (false, _) => date.to_owned(),
        (true, false) => weekday.to_owned(),
        (true, true) => format!("Day{}", index + 1),
    }
}

/// Lunch entries of a located table, Monday to Friday, in cell line order.
pub fn extract_from_table(table: ElementRef<'_>) -> Vec<MenuEntry> {
    let rows = table_rows(table);
    let Some(lunch_row) = find_lunch_row(&rows) else {
        tracing::debug!(rows = rows.len(), "table has no body rows");
        return Vec::new();
    };
    let labels = day_labels(table);

    let cells = row_cells(lunch_row);
    let skip = label_offset(&cells);
    let menu_cells = cells
        .into_iter()
        .skip(skip)
        .filter(|cell| !cell_text(*cell).contains(OPERATING_INFO_TOKEN))
        .take(DAYS);

    let mut entries = Vec::new();
    for (label, cell) in labels.iter().zip(menu_cells) {
        for dish in dish_lines(cell) {
            entries.push(MenuEntry::new(label.clone(), dish));
        }
    }
    tracing::debug!(skip, entries = entries.len(), "extracted lunch row");
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEEKLY: &str = r#"<html><body>
<table class="notice"><tr><td>공지</td></tr></table>
<table class="con03_sub_2">
  <tr><th rowspan="2" colspan="2">구분</th><th>Monday</th><th>Tuesday</th><th>Wednesday</th><th>Thursday</th><th>Friday</th><th rowspan="2">운영정보</th></tr>
  <tr><td>3월 10일</td><td>3월 11일</td><td>3월 12일</td><td>3월 13일</td><td>3월 14일 Friday</td></tr>
  <tr><th>라일락</th><th>조식</th><td>토스트</td><td>토스트</td><td>토스트</td><td>토스트</td><td>토스트</td><td>08:00</td></tr>
  <tr><th>라일락</th><th>중식</th>
    <td><p>잡곡밥</p><span>/</span><p>현미밥</p><p>김치찌개</p></td>
    <td><p>돈까스</p><p>운영시간 변경 안내</p></td>
    <td></td>
    <td><p>비빔밥</p><br><p>Open 11:30</p></td>
    <td>카레라이스</td>
    <td>운영정보 문의 051-629-0000</td>
  </tr>
</table>
</body></html>"#;

    fn pairs(entries: &[MenuEntry]) -> Vec<(&str, &str)> {
        entries
            .iter()
            .map(|e| (e.day_text.as_str(), e.menu.as_str()))
            .collect()
    }

    #[test]
    fn extracts_lunch_row_of_marked_table() {
        let document = Html::parse_document(WEEKLY);
        let entries = extract_menu(&document);
        assert_eq!(
            pairs(&entries),
            vec![
                ("3월 10일 (Monday)", "잡곡밥/현미밥"),
                ("3월 10일 (Monday)", "김치찌개"),
                ("3월 11일 (Tuesday)", "돈까스"),
                ("3월 13일 (Thursday)", "비빔밥"),
                ("3월 14일 Friday", "카레라이스"),
            ]
        );
    }

    #[test]
    fn extraction_is_repeatable() {
        let document = Html::parse_document(WEEKLY);
        assert_eq!(extract_menu(&document), extract_menu(&document));
    }

    #[test]
    fn day_labels_cover_all_five_columns() -> anyhow::Result<()> {
        let document = Html::parse_document(WEEKLY);
        let table = find_menu_table(&document).ok_or_else(|| anyhow::anyhow!("no table"))?;
        let labels = day_labels(table);
        assert_eq!(labels[0], "3월 10일 (Monday)");
        assert_eq!(labels[4], "3월 14일 Friday");
        Ok(())
    }

    #[test]
    fn label_formatting_rules() {
        assert_eq!(format_day_label(0, "3월 10일", "Monday"), "3월 10일 (Monday)");
        assert_eq!(format_day_label(0, "3월 10일", ""), "3월 10일");
        assert_eq!(format_day_label(2, "", "Wednesday"), "Wednesday");
        assert_eq!(format_day_label(0, "", ""), "Day1");
        assert_eq!(format_day_label(4, "", ""), "Day5");
    }

    #[test]
    fn missing_headers_synthesize_placeholders() {
        let html = "<table><tr></tr><tr></tr><tr><td>중식</td><td>국수</td><td>우동</td></tr></table>";
        let document = Html::parse_document(html);
        assert_eq!(
            pairs(&extract_menu(&document)),
            vec![("Day1", "국수"), ("Day2", "우동")]
        );
    }

    #[test]
    fn header_only_table_extracts_nothing() {
        let html = "<table><tr><th>Monday</th></tr><tr><td>3월 10일</td></tr></table>";
        let document = Html::parse_document(html);
        assert_eq!(try_extract_menu(&document), Ok(Vec::new()));
    }

    #[test]
    fn page_without_table_is_reported() {
        let document = Html::parse_document("<p>식단 준비중</p>");
        assert_eq!(try_extract_menu(&document), Err(ExtractError::TableNotFound));
        assert!(extract_menu(&document).is_empty());
    }

    #[test]
    fn unlabelled_body_row_skips_one_label_cell() {
        let html = "<table>\
            <tr><th>Monday</th><th>Tuesday</th></tr>\
            <tr><td>3월 10일</td><td>3월 11일</td></tr>\
            <tr><td>라일락</td><td>순두부</td><td>냉면</td></tr></table>";
        let document = Html::parse_document(html);
        assert_eq!(
            pairs(&extract_menu(&document)),
            vec![("3월 10일 (Monday)", "순두부"), ("3월 11일 (Tuesday)", "냉면")]
        );
    }

    #[test]
    fn entry_count_matches_cleaned_lines() -> anyhow::Result<()> {
        let document = Html::parse_document(WEEKLY);
        let table = find_menu_table(&document).ok_or_else(|| anyhow::anyhow!("no table"))?;
        let rows = table_rows(table);
        let lunch = find_lunch_row(&rows).ok_or_else(|| anyhow::anyhow!("no lunch row"))?;
        let cells = row_cells(lunch);
        let expected: usize = cells
            .iter()
            .skip(label_offset(&cells))
            .filter(|c| !cell_text(**c).contains(OPERATING_INFO_TOKEN))
            .take(DAYS)
            .map(|c| dish_lines(*c).len())
            .sum();
        assert_eq!(extract_from_table(table).len(), expected);
        Ok(())
    }
}
