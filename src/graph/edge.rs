use super::hole::HoleId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the plan graph.
    pub struct EdgeId;
}

/// Centerline thickness assigned to external walls, in pixels.
pub const EXTERNAL_THICKNESS: f64 = 16.0;

/// Centerline thickness assigned to internal walls, in pixels.
pub const INTERNAL_THICKNESS: f64 = 8.0;

/// Edges thicker than this read back as external walls.
pub const EXTERNAL_THRESHOLD: f64 = 12.0;

/// Data associated with a graph edge.
///
/// An edge connects two vertices and carries the wall thickness plus any
/// openings cut into it. Thickness is the only place the external flag
/// survives in the graph, which makes the reverse mapping lossy by
/// construction.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// Start vertex of the edge.
    pub start: VertexId,
    /// End vertex of the edge.
    pub end: VertexId,
    /// Wall thickness in pixels.
    pub thickness: f64,
    /// Openings attached to this edge, in insertion order.
    pub holes: Vec<HoleId>,
    /// Id of the primitive wall this edge came from, when known.
    pub source_id: Option<String>,
}

impl EdgeData {
    /// Creates an edge between two vertices with the given thickness.
    #[must_use]
    pub fn new(start: VertexId, end: VertexId, thickness: f64) -> Self {
        Self {
            start,
            end,
            thickness,
            holes: Vec::new(),
            source_id: None,
        }
    }

    /// Thickness encoding of the external flag.
    #[must_use]
    pub fn thickness_for(is_external: bool) -> f64 {
        if is_external {
            EXTERNAL_THICKNESS
        } else {
            INTERNAL_THICKNESS
        }
    }

    /// Decodes the external flag back out of the thickness.
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.thickness > EXTERNAL_THRESHOLD
    }
}
