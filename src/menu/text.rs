use scraper::ElementRef;

use super::ADMIN_WORDS;

/// Visible text of a subtree, one text node per line.
///
/// Each text node is trimmed and empty nodes are dropped, so `<p>`, `<br>` and
/// `<span>` boundaries all become line breaks. Carriage returns are removed.
pub fn cell_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .replace('\r', "")
}

/// Ordered, trimmed, non-empty lines of a subtree's visible text.
pub fn cell_lines(el: ElementRef<'_>) -> Vec<String> {
    split_lines(&cell_text(el))
}

/// Splits on `\n`, trimming each line and dropping blank ones.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Re-joins `A`, `/`, `B` into `A/B`.
///
/// Some posts wrap the slash between alternatives in its own `<span>`. A slash
/// with nothing before or after it is kept as-is.
pub fn merge_slash_fragments(lines: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut iter = lines.into_iter();
    while let Some(line) = iter.next() {
        if line == "/"
            && let Some(prev) = out.last_mut()
            && let Some(next) = iter.next()
        {
            prev.push('/');
            prev.push_str(&next);
            continue;
        }
        out.push(line);
    }
    out
}

/// True when the line carries an operating-hours or contact notice.
pub fn is_admin_line(line: &str) -> bool {
    ADMIN_WORDS.iter().any(|word| line.contains(word))
}

/// Removes notice lines, keeping the rest in order.
pub fn drop_admin_lines(lines: Vec<String>) -> Vec<String> {
    lines.into_iter().filter(|line| !is_admin_line(line)).collect()
}

/// Dish names of one menu cell: lines, minus notices, with slash fragments merged.
pub fn dish_lines(el: ElementRef<'_>) -> Vec<String> {
    merge_slash_fragments(drop_admin_lines(cell_lines(el)))
}
