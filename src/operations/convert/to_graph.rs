use crate::error::Result;
use crate::graph::{EdgeData, EdgeId, HoleData, PlanGraph, VertexData, VertexId, MERGE_TOLERANCE};
use crate::math::{distance_2d, offset_2d, Point2};
use crate::plan::{DoorKind, FloorPlan, Wall, WallKind};

/// Counts of primitives the conversion could not use.
///
/// `skipped_walls` counts primitives unusable as geometry (non-finite or
/// zero-length). `dropped_openings` counts well-formed doors and windows
/// with no structural edge to host them. Both are tolerated, not errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub skipped_walls: usize,
    pub dropped_openings: usize,
}

impl BuildReport {
    /// True when every primitive made it into the graph.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped_walls == 0 && self.dropped_openings == 0
    }
}

/// A freshly built graph together with its conversion diagnostics.
#[derive(Debug)]
pub struct GraphBuild {
    pub graph: PlanGraph,
    pub report: BuildReport,
}

/// Converts the flat primitive model into the vertex/edge graph.
///
/// Structural walls (kinds `Wall` and `Opening`) become edges between
/// tolerance-deduplicated vertices; doors and windows become holes on the
/// structural edge nearest their midpoint. `Opening` is structural on
/// purpose: an open passage still takes part in wall connectivity. Rooms
/// are not converted; areas stay empty.
///
/// The graph is rebuilt wholesale on every execution. Edge and vertex
/// identity is run-scoped: arena keys are only meaningful within the
/// graph they came from, while the originating wall ids survive as
/// `source_id` on each edge.
#[derive(Debug)]
pub struct ToGraph {
    merge_tolerance: f64,
}

impl Default for ToGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl ToGraph {
    /// Creates a conversion with the default merge tolerance.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tolerance(MERGE_TOLERANCE)
    }

    /// Creates a conversion with a caller-chosen merge tolerance.
    #[must_use]
    pub fn with_tolerance(merge_tolerance: f64) -> Self {
        Self { merge_tolerance }
    }

    /// Executes the conversion.
    ///
    /// # Errors
    ///
    /// Malformed primitives never error: degenerate walls and unhosted
    /// openings are counted in the report instead. An error can only come
    /// from the graph arena rejecting an insertion.
    pub fn execute(&self, plan: &FloorPlan) -> Result<GraphBuild> {
        let mut graph = PlanGraph::new();
        let mut report = BuildReport::default();

        // Step 1: structural walls become edges between shared vertices.
        for wall in plan.walls.iter().filter(|w| w.is_structural()) {
            if wall.is_degenerate() {
                report.skipped_walls += 1;
                continue;
            }
            let start = self.resolve_vertex(&mut graph, &wall.start.to_nalgebra());
            let end = self.resolve_vertex(&mut graph, &wall.end.to_nalgebra());

            let mut edge = EdgeData::new(start, end, EdgeData::thickness_for(wall.is_external));
            edge.source_id = Some(wall.id.clone());
            graph.add_edge(edge)?;
        }

        // Step 2: doors and windows attach to their nearest structural edge.
        for wall in plan.walls.iter().filter(|w| !w.is_structural()) {
            if wall.is_degenerate() {
                report.skipped_walls += 1;
                continue;
            }
            let midpoint = wall.midpoint();
            let Some((host, host_start, host_end)) = nearest_edge(&graph, &midpoint) else {
                report.dropped_openings += 1;
                continue;
            };

            let offset = offset_2d::segment_offset_of_point(&host_start, &host_end, &midpoint);
            graph.add_hole(hole_for(wall, host, offset))?;
        }

        Ok(GraphBuild { graph, report })
    }

    /// Finds a vertex within the merge tolerance of `point`, or inserts a
    /// new one. Existing vertices are never repositioned.
    fn resolve_vertex(&self, graph: &mut PlanGraph, point: &Point2) -> VertexId {
        match graph.find_vertex_near(point, self.merge_tolerance) {
            Some(id) => id,
            None => graph.add_vertex(VertexData::new(*point)),
        }
    }
}

/// The structural edge whose centerline is nearest to `point`, with its
/// endpoint positions.
fn nearest_edge(graph: &PlanGraph, point: &Point2) -> Option<(EdgeId, Point2, Point2)> {
    let mut best: Option<(EdgeId, Point2, Point2, f64)> = None;
    for (id, edge) in graph.edges() {
        let (Ok(start), Ok(end)) = (graph.vertex(edge.start), graph.vertex(edge.end)) else {
            continue;
        };
        let dist = distance_2d::point_to_segment_dist(point, &start.point, &end.point);
        match best {
            Some((_, _, _, best_dist)) if best_dist <= dist => {}
            _ => best = Some((id, start.point, end.point, dist)),
        }
    }
    best.map(|(id, start, end, _)| (id, start, end))
}

/// Builds the hole for an opening primitive. Doors without a subtype
/// fall back to single-leaf.
fn hole_for(wall: &Wall, host: EdgeId, offset: f64) -> HoleData {
    match wall.kind {
        WallKind::Door => HoleData::door(host, offset, wall.door_kind.unwrap_or(DoorKind::Single)),
        _ => HoleData::window(host, offset),
    }
}
