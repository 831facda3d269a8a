use serde::Serialize;

/// One dish served on one day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MenuEntry {
    pub day_text: String,
    pub menu: String,
}

impl MenuEntry {
    pub fn new(day_text: impl Into<String>, menu: impl Into<String>) -> Self {
        Self {
            day_text: day_text.into(),
            menu: menu.into(),
        }
    }
}

/// A stored entry together with the time it was first seen.
#[derive(Debug, Clone, Serialize)]
pub struct StoredEntry {
    #[serde(flatten)]
    pub entry: MenuEntry,
    pub seen_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    pub day_text: String,
    pub dishes: Vec<String>,
}
