use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single financial headline from the external feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headline {
    pub title: String,
    pub link: String,
    pub published: Option<NaiveDateTime>,
}

impl Headline {
    /// Publication time as `HH:MM`, empty when the feed gave no usable date
    pub fn time_label(&self) -> String {
        self.published
            .map(|dt| dt.format("%H:%M").to_string())
            .unwrap_or_default()
    }
}
