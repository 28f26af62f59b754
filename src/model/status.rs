use serde::Serialize;
use strum_macros::EnumString;

/// Display category derived from a match's started/completed state.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumString,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StatusCategory {
    Upcoming,
    Live,
    Completed,
    #[default]
    Unknown,
}

impl StatusCategory {
    /// Hex color the rendering layer paints this category with.
    pub fn color(self) -> &'static str {
        match self {
            StatusCategory::Upcoming => "#f39c12",
            StatusCategory::Live => "#2ecc71",
            StatusCategory::Completed => "#e74c3c",
            StatusCategory::Unknown => "#aaa",
        }
    }
}
