use crate::math::Point2;

use super::edge::EdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the plan graph.
    pub struct VertexId;
}

/// Data associated with a graph vertex.
///
/// `edges` lists every edge incident to this vertex, maintained by the
/// graph's insertion methods.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// Position of the vertex in image-pixel space.
    pub point: Point2,
    /// Incident edges, in insertion order.
    pub edges: Vec<EdgeId>,
}

impl VertexData {
    /// Creates a new vertex at the given point with no incident edges.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self {
            point,
            edges: Vec::new(),
        }
    }
}
