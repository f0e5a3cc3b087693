use serde::{Deserialize, Serialize};

use super::Point2D;

/// A primitive room: a name pinned to a label point.
///
/// The upstream pipeline does not produce room polygons; the label point
/// is a hint for where the name is drawn, with no enclosure guarantee.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomLabel {
    pub id: String,
    pub name: String,
    pub label: Point2D,
}

impl RoomLabel {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, label: Point2D) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            label,
        }
    }
}
