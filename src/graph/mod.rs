pub mod area;
pub mod edge;
pub mod hole;
pub mod vertex;

pub use area::{AreaData, AreaId};
pub use edge::{EdgeData, EdgeId};
pub use hole::{HoleData, HoleId, HoleKind};
pub use vertex::{VertexData, VertexId};

use crate::error::GraphError;
use crate::math::Point2;
use slotmap::SlotMap;

/// Default distance under which two endpoint positions collapse into one
/// vertex, in pixels. The comparison is inclusive: a pair exactly this
/// far apart still merges.
pub const MERGE_TOLERANCE: f64 = 1.0;

/// Central arena that owns all graph entities.
///
/// Entities reference each other via typed IDs (generational indices),
/// avoiding self-referential structures and enabling safe mutation. The
/// insertion methods keep the back-references (vertex incidence lists,
/// per-edge hole lists) in sync with the forward references.
#[derive(Debug, Default)]
pub struct PlanGraph {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    holes: SlotMap<HoleId, HoleData>,
    areas: SlotMap<AreaId, AreaData>,
}

impl PlanGraph {
    /// Creates a new, empty plan graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        self.vertices.insert(data)
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the graph.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, GraphError> {
        self.vertices
            .get(id)
            .ok_or_else(|| GraphError::EntityNotFound("vertex".into()))
    }

    /// Returns a mutable reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the graph.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, GraphError> {
        self.vertices
            .get_mut(id)
            .ok_or_else(|| GraphError::EntityNotFound("vertex".into()))
    }

    /// Returns the vertex nearest to `point` within `tolerance`, if any.
    ///
    /// Linear scan by design: vertex identity is tolerance-based, so an
    /// exact-position map would miss near matches. The tolerance check is
    /// inclusive.
    #[must_use]
    pub fn find_vertex_near(&self, point: &Point2, tolerance: f64) -> Option<VertexId> {
        let tol_sq = tolerance * tolerance;
        let mut best: Option<(VertexId, f64)> = None;
        for (id, data) in &self.vertices {
            let dx = data.point.x - point.x;
            let dy = data.point.y - point.y;
            let dist_sq = dx * dx + dy * dy;
            if dist_sq <= tol_sq {
                match best {
                    Some((_, best_sq)) if best_sq <= dist_sq => {}
                    _ => best = Some((id, dist_sq)),
                }
            }
        }
        best.map(|(id, _)| id)
    }

    // --- Edge operations ---

    /// Inserts an edge and returns its ID, recording the edge in both
    /// endpoint vertices' incidence lists.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint vertex is not in the graph.
    pub fn add_edge(&mut self, data: EdgeData) -> Result<EdgeId, GraphError> {
        let (start, end) = (data.start, data.end);
        if !self.vertices.contains_key(start) {
            return Err(GraphError::EntityNotFound("edge start vertex".into()));
        }
        if !self.vertices.contains_key(end) {
            return Err(GraphError::EntityNotFound("edge end vertex".into()));
        }

        let id = self.edges.insert(data);
        self.vertices[start].edges.push(id);
        // Self-loops get a single incidence entry.
        if end != start {
            self.vertices[end].edges.push(id);
        }
        Ok(id)
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the graph.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, GraphError> {
        self.edges
            .get(id)
            .ok_or_else(|| GraphError::EntityNotFound("edge".into()))
    }

    /// Returns a mutable reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the graph.
    pub fn edge_mut(&mut self, id: EdgeId) -> Result<&mut EdgeData, GraphError> {
        self.edges
            .get_mut(id)
            .ok_or_else(|| GraphError::EntityNotFound("edge".into()))
    }

    /// Returns the positions of an edge's start and end vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge or either endpoint is not in the graph.
    pub fn edge_endpoints(&self, id: EdgeId) -> Result<(Point2, Point2), GraphError> {
        let edge = self.edge(id)?;
        let start = self.vertex(edge.start)?;
        let end = self.vertex(edge.end)?;
        Ok((start.point, end.point))
    }

    /// Returns the centerline length of an edge in pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge or either endpoint is not in the graph.
    pub fn edge_length(&self, id: EdgeId) -> Result<f64, GraphError> {
        let (start, end) = self.edge_endpoints(id)?;
        Ok(nalgebra::distance(&start, &end))
    }

    // --- Hole operations ---

    /// Inserts a hole and returns its ID, recording the hole in its
    /// owning edge's hole list.
    ///
    /// # Errors
    ///
    /// Returns an error if the owning edge is not in the graph, or if the
    /// offset is not a finite value in `[0, 1]`.
    pub fn add_hole(&mut self, data: HoleData) -> Result<HoleId, GraphError> {
        if !(data.offset.is_finite() && (0.0..=1.0).contains(&data.offset)) {
            return Err(GraphError::OffsetOutOfRange(data.offset));
        }
        let edge = data.edge;
        if !self.edges.contains_key(edge) {
            return Err(GraphError::EntityNotFound("hole edge".into()));
        }

        let id = self.holes.insert(data);
        self.edges[edge].holes.push(id);
        Ok(id)
    }

    /// Returns a reference to the hole data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the graph.
    pub fn hole(&self, id: HoleId) -> Result<&HoleData, GraphError> {
        self.holes
            .get(id)
            .ok_or_else(|| GraphError::EntityNotFound("hole".into()))
    }

    /// Returns a mutable reference to the hole data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the graph.
    pub fn hole_mut(&mut self, id: HoleId) -> Result<&mut HoleData, GraphError> {
        self.holes
            .get_mut(id)
            .ok_or_else(|| GraphError::EntityNotFound("hole".into()))
    }

    // --- Area operations ---

    /// Inserts an area and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if any boundary vertex is not in the graph.
    pub fn add_area(&mut self, data: AreaData) -> Result<AreaId, GraphError> {
        for &v in &data.boundary {
            if !self.vertices.contains_key(v) {
                return Err(GraphError::EntityNotFound("area boundary vertex".into()));
            }
        }
        Ok(self.areas.insert(data))
    }

    /// Returns a reference to the area data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the graph.
    pub fn area(&self, id: AreaId) -> Result<&AreaData, GraphError> {
        self.areas
            .get(id)
            .ok_or_else(|| GraphError::EntityNotFound("area".into()))
    }

    /// Returns a mutable reference to the area data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the graph.
    pub fn area_mut(&mut self, id: AreaId) -> Result<&mut AreaData, GraphError> {
        self.areas
            .get_mut(id)
            .ok_or_else(|| GraphError::EntityNotFound("area".into()))
    }

    // --- Iteration and counts ---

    /// Iterates over all vertices.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &VertexData)> {
        self.vertices.iter()
    }

    /// Iterates over all edges.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &EdgeData)> {
        self.edges.iter()
    }

    /// Iterates over all holes.
    pub fn holes(&self) -> impl Iterator<Item = (HoleId, &HoleData)> {
        self.holes.iter()
    }

    /// Iterates over all areas.
    pub fn areas(&self) -> impl Iterator<Item = (AreaId, &AreaData)> {
        self.areas.iter()
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    #[must_use]
    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    // --- Validation ---

    /// Checks that every cross-reference in the graph resolves and that
    /// the back-reference lists agree with the forward references.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Inconsistent`] describing the first problem
    /// found.
    pub fn validate(&self) -> Result<(), GraphError> {
        for (id, edge) in &self.edges {
            for (label, v) in [("start", edge.start), ("end", edge.end)] {
                let Some(vertex) = self.vertices.get(v) else {
                    return Err(GraphError::Inconsistent(format!(
                        "edge {id:?} references missing {label} vertex"
                    )));
                };
                if !vertex.edges.contains(&id) {
                    return Err(GraphError::Inconsistent(format!(
                        "edge {id:?} missing from its {label} vertex's incidence list"
                    )));
                }
            }
            for &h in &edge.holes {
                match self.holes.get(h) {
                    None => {
                        return Err(GraphError::Inconsistent(format!(
                            "edge {id:?} references missing hole"
                        )));
                    }
                    Some(hole) if hole.edge != id => {
                        return Err(GraphError::Inconsistent(format!(
                            "edge {id:?} lists a hole owned by {:?}",
                            hole.edge
                        )));
                    }
                    Some(_) => {}
                }
            }
        }

        for (id, vertex) in &self.vertices {
            for &e in &vertex.edges {
                let Some(edge) = self.edges.get(e) else {
                    return Err(GraphError::Inconsistent(format!(
                        "vertex {id:?} references missing edge"
                    )));
                };
                if edge.start != id && edge.end != id {
                    return Err(GraphError::Inconsistent(format!(
                        "vertex {id:?} lists edge {e:?} that does not touch it"
                    )));
                }
            }
        }

        for (id, hole) in &self.holes {
            let Some(edge) = self.edges.get(hole.edge) else {
                return Err(GraphError::Inconsistent(format!(
                    "hole {id:?} references missing edge"
                )));
            };
            if !edge.holes.contains(&id) {
                return Err(GraphError::Inconsistent(format!(
                    "hole {id:?} missing from its edge's hole list"
                )));
            }
            if !(hole.offset.is_finite() && (0.0..=1.0).contains(&hole.offset)) {
                return Err(GraphError::Inconsistent(format!(
                    "hole {id:?} has offset {} outside [0, 1]",
                    hole.offset
                )));
            }
        }

        for (id, area) in &self.areas {
            for &v in &area.boundary {
                if !self.vertices.contains_key(v) {
                    return Err(GraphError::Inconsistent(format!(
                        "area {id:?} references missing boundary vertex"
                    )));
                }
            }
        }

        Ok(())
    }
}
