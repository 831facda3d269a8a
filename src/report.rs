use std::io::Write;

use anyhow::Context as _;
use serde::Serialize;

use crate::formats::{DayGroup, MenuEntry};

/// Groups dishes by day, keeping days in first-seen order.
pub fn group_by_day(entries: &[MenuEntry]) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    for entry in entries {
        match groups.iter_mut().find(|g| g.day_text == entry.day_text) {
            Some(group) => group.dishes.push(entry.menu.clone()),
            None => groups.push(DayGroup {
                day_text: entry.day_text.clone(),
                dishes: vec![entry.menu.clone()],
            }),
        }
    }
    groups
}

pub fn write_grouped(out: &mut impl Write, entries: &[MenuEntry]) -> anyhow::Result<()> {
    for group in group_by_day(entries) {
        writeln!(out, "{}:", group.day_text).context("write day heading")?;
        writeln!(out, " - {}", group.dishes.join(" · ")).context("write dishes")?;
        writeln!(out).context("write separator")?;
    }
    Ok(())
}

/// One JSON object per line.
pub fn write_jsonl<T: Serialize>(out: &mut impl Write, entries: &[T]) -> anyhow::Result<()> {
    for entry in entries {
        serde_json::to_writer(&mut *out, entry).context("serialize entry")?;
        out.write_all(b"\n").context("write jsonl newline")?;
    }
    Ok(())
}
