use crate::plan::DoorKind;

use super::edge::EdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a hole in the plan graph.
    pub struct HoleId;
}

/// Default door leaf width in centimetres.
pub const DOOR_WIDTH: f64 = 90.0;
/// Default door height in centimetres.
pub const DOOR_HEIGHT: f64 = 210.0;
/// Default window width in centimetres.
pub const WINDOW_WIDTH: f64 = 120.0;
/// Default window height in centimetres.
pub const WINDOW_HEIGHT: f64 = 120.0;
/// Default window sill height in centimetres.
pub const WINDOW_SILL: f64 = 90.0;

/// The kind of opening a hole represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoleKind {
    Door(DoorKind),
    Window,
}

/// Data associated with a hole: an opening cut into an edge.
///
/// Position is a normalized offset along the owning edge (0 at its start
/// vertex, 1 at its end vertex). Dimensions are convention defaults in
/// centimetres, never measured from the primitive geometry.
#[derive(Debug, Clone)]
pub struct HoleData {
    /// What sort of opening this is.
    pub kind: HoleKind,
    /// The edge this hole is cut into.
    pub edge: EdgeId,
    /// Normalized position along the owning edge, in `[0, 1]`.
    pub offset: f64,
    /// Opening width in centimetres.
    pub width: f64,
    /// Opening height in centimetres.
    pub height: f64,
    /// Height of the opening's lower edge above the floor, in centimetres.
    pub sill_height: f64,
}

impl HoleData {
    /// Creates a door hole with the default door dimensions.
    #[must_use]
    pub fn door(edge: EdgeId, offset: f64, door_kind: DoorKind) -> Self {
        Self {
            kind: HoleKind::Door(door_kind),
            edge,
            offset,
            width: DOOR_WIDTH,
            height: DOOR_HEIGHT,
            sill_height: 0.0,
        }
    }

    /// Creates a window hole with the default window dimensions.
    #[must_use]
    pub fn window(edge: EdgeId, offset: f64) -> Self {
        Self {
            kind: HoleKind::Window,
            edge,
            offset,
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            sill_height: WINDOW_SILL,
        }
    }
}
