use crate::error::Result;
use crate::graph::{HoleKind, PlanGraph};
use crate::math::{offset_2d, Vector2, TOLERANCE};
use crate::plan::{FloorPlan, Point2D, Wall, WallKind};

/// Default half-length in pixels of the segment an opening flattens
/// back to.
///
/// Holes only store a normalized offset, so the flattened door or window
/// is an approximate fixed-size stub around that point, not the original
/// primitive extent.
pub const STUB_HALF_LENGTH: f64 = 5.0;

/// Run-scoped id source for primitives minted during flattening.
///
/// A plain counter: ids are stable and unique within one execution, with
/// no clock or randomness involved.
#[derive(Debug, Default)]
struct IdGen {
    next: usize,
}

impl IdGen {
    fn mint(&mut self, prefix: &str) -> String {
        let n = self.next;
        self.next += 1;
        format!("{prefix}{n}")
    }
}

/// Flattens the graph back into the primitive model.
///
/// Every edge becomes a `Wall`-kind primitive; the external flag is
/// decoded from the edge thickness. Every hole becomes a short door or
/// window segment centered on its offset along the host edge. Areas are
/// dropped and the room list comes back empty, so the round trip is
/// deliberately lossy in that direction.
#[derive(Debug)]
pub struct FromGraph {
    stub_half_length: f64,
}

impl Default for FromGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl FromGraph {
    /// Creates a flattening with the default stub half-length.
    #[must_use]
    pub fn new() -> Self {
        Self::with_stub_half_length(STUB_HALF_LENGTH)
    }

    /// Creates a flattening with a caller-chosen stub half-length.
    #[must_use]
    pub fn with_stub_half_length(stub_half_length: f64) -> Self {
        Self { stub_half_length }
    }

    /// Executes the flattening.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge or hole references a vertex or edge
    /// that is no longer in the graph. The adapter never invents geometry
    /// for dangling references.
    pub fn execute(&self, graph: &PlanGraph) -> Result<FloorPlan> {
        let mut ids = IdGen::default();
        let mut plan = FloorPlan::new();

        // Step 1: edges flatten to structural walls.
        for (_, edge) in graph.edges() {
            let start = graph.vertex(edge.start)?.point;
            let end = graph.vertex(edge.end)?.point;
            let id = match &edge.source_id {
                Some(source) => source.clone(),
                None => ids.mint("w"),
            };
            plan.walls.push(Wall::new(
                id,
                Point2D::from_nalgebra(&start),
                Point2D::from_nalgebra(&end),
                WallKind::Wall,
                edge.is_external(),
            ));
        }

        // Step 2: holes flatten to short opening segments on their host.
        for (_, hole) in graph.holes() {
            let host = graph.edge(hole.edge)?;
            let (start, end) = graph.edge_endpoints(hole.edge)?;
            let center = offset_2d::point_at_offset(&start, &end, hole.offset);

            let delta = end - start;
            let len = delta.norm();
            // Zero-length host: fall back to a horizontal stub.
            let dir = if len < TOLERANCE {
                Vector2::new(1.0, 0.0)
            } else {
                delta / len
            };

            let (kind, door_kind) = match hole.kind {
                HoleKind::Door(subtype) => (WallKind::Door, Some(subtype)),
                HoleKind::Window => (WallKind::Window, None),
            };

            let mut wall = Wall::new(
                ids.mint("o"),
                Point2D::from_nalgebra(&(center - dir * self.stub_half_length)),
                Point2D::from_nalgebra(&(center + dir * self.stub_half_length)),
                kind,
                host.is_external(),
            );
            wall.door_kind = door_kind;
            plan.walls.push(wall);
        }

        // Step 3: no room information survives in the graph.
        Ok(plan)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::graph::{EdgeData, HoleData, VertexData, VertexId};
    use crate::math::Point2;
    use crate::operations::convert::ToGraph;
    use crate::plan::DoorKind;

    fn straight_wall_graph() -> (PlanGraph, crate::graph::EdgeId) {
        let mut g = PlanGraph::new();
        let a = g.add_vertex(VertexData::new(Point2::new(0.0, 0.0)));
        let b = g.add_vertex(VertexData::new(Point2::new(100.0, 0.0)));
        let e = g.add_edge(EdgeData::new(a, b, 16.0)).unwrap();
        (g, e)
    }

    #[test]
    fn edges_flatten_to_walls_with_decoded_external_flag() {
        let (mut g, _) = straight_wall_graph();
        let c = g.add_vertex(VertexData::new(Point2::new(0.0, 50.0)));
        let d = g.add_vertex(VertexData::new(Point2::new(100.0, 50.0)));
        g.add_edge(EdgeData::new(c, d, 8.0)).unwrap();

        let plan = FromGraph::new().execute(&g).unwrap();
        assert_eq!(plan.walls.len(), 2);
        assert!(plan.walls.iter().all(|w| w.kind == WallKind::Wall));
        let externals: Vec<_> = plan.walls.iter().map(|w| w.is_external).collect();
        assert_eq!(externals, vec![true, false]);
    }

    #[test]
    fn hole_flattens_to_a_short_stub_around_its_offset() {
        let (mut g, e) = straight_wall_graph();
        g.add_hole(HoleData::window(e, 0.5)).unwrap();

        let plan = FromGraph::new().execute(&g).unwrap();
        let stub = plan
            .walls
            .iter()
            .find(|w| w.kind == WallKind::Window)
            .unwrap();
        assert!((stub.start.x - 45.0).abs() < 1e-10, "start={:?}", stub.start);
        assert!((stub.end.x - 55.0).abs() < 1e-10, "end={:?}", stub.end);
        assert!(stub.start.y.abs() < 1e-10 && stub.end.y.abs() < 1e-10);
        assert!((stub.length() - 2.0 * STUB_HALF_LENGTH).abs() < 1e-10);
    }

    #[test]
    fn custom_stub_half_length_widens_the_stub() {
        let (mut g, e) = straight_wall_graph();
        g.add_hole(HoleData::window(e, 0.5)).unwrap();

        let plan = FromGraph::with_stub_half_length(20.0).execute(&g).unwrap();
        let stub = plan
            .walls
            .iter()
            .find(|w| w.kind == WallKind::Window)
            .unwrap();
        assert!((stub.length() - 40.0).abs() < 1e-10);
    }

    #[test]
    fn door_subtype_survives_flattening() {
        let (mut g, e) = straight_wall_graph();
        g.add_hole(HoleData::door(e, 0.25, DoorKind::Double)).unwrap();

        let plan = FromGraph::new().execute(&g).unwrap();
        let stub = plan
            .walls
            .iter()
            .find(|w| w.kind == WallKind::Door)
            .unwrap();
        assert_eq!(stub.door_kind, Some(DoorKind::Double));
    }

    #[test]
    fn preserved_source_ids_win_over_minted_ones() {
        let (mut g, e) = straight_wall_graph();
        g.edge_mut(e).unwrap().source_id = Some("w42".to_owned());

        let plan = FromGraph::new().execute(&g).unwrap();
        assert_eq!(plan.walls[0].id, "w42");
    }

    #[test]
    fn minted_ids_are_monotonic_within_a_run() {
        let mut g = PlanGraph::new();
        let a = g.add_vertex(VertexData::new(Point2::new(0.0, 0.0)));
        let b = g.add_vertex(VertexData::new(Point2::new(100.0, 0.0)));
        let c = g.add_vertex(VertexData::new(Point2::new(100.0, 100.0)));
        let e = g.add_edge(EdgeData::new(a, b, 8.0)).unwrap();
        g.add_edge(EdgeData::new(b, c, 8.0)).unwrap();
        g.add_hole(HoleData::window(e, 0.5)).unwrap();

        let plan = FromGraph::new().execute(&g).unwrap();
        let ids: Vec<_> = plan.walls.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["w0", "w1", "o2"]);
    }

    #[test]
    fn rooms_come_back_empty() {
        let (g, _) = straight_wall_graph();
        let plan = FromGraph::new().execute(&g).unwrap();
        assert!(plan.rooms.is_empty());
    }

    #[test]
    fn dangling_vertex_reference_is_an_error() {
        let (mut g, e) = straight_wall_graph();
        g.edge_mut(e).unwrap().start = VertexId::default();

        let err = FromGraph::new().execute(&g);
        assert!(err.is_err(), "{err:?}");
    }

    // ── round-trip tests ──

    fn square_plan() -> FloorPlan {
        let mut plan = FloorPlan::new();
        for (id, start, end) in [
            ("w1", (0.0, 0.0), (100.0, 0.0)),
            ("w2", (100.0, 0.0), (100.0, 100.0)),
            ("w3", (100.0, 100.0), (0.0, 100.0)),
            ("w4", (0.0, 100.0), (0.0, 0.0)),
        ] {
            let mut w = Wall::new(
                id,
                Point2D::new(start.0, start.1),
                Point2D::new(end.0, end.1),
                WallKind::Wall,
                true,
            );
            w.is_load_bearing = Some(true);
            plan.walls.push(w);
        }
        plan
    }

    #[test]
    fn round_trip_preserves_wall_count_and_classification() {
        let original = square_plan();
        let build = ToGraph::new().execute(&original).unwrap();
        let flattened = FromGraph::new().execute(&build.graph).unwrap();

        assert_eq!(flattened.walls.len(), original.walls.len());
        assert!(flattened.walls.iter().all(|w| w.is_external));
        let mut ids: Vec<_> = flattened.walls.iter().map(|w| w.id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["w1", "w2", "w3", "w4"]);
    }

    #[test]
    fn round_trip_preserves_endpoint_adjacency() {
        let original = square_plan();
        let build = ToGraph::new().execute(&original).unwrap();
        let flattened = FromGraph::new().execute(&build.graph).unwrap();

        // Coordinates may shift within the merge tolerance; compare rounded.
        let pair_of = |w: &Wall| {
            let mut pair = [
                format!("{:.0},{:.0}", w.start.x, w.start.y),
                format!("{:.0},{:.0}", w.end.x, w.end.y),
            ];
            pair.sort_unstable();
            pair
        };
        let mut original_pairs: Vec<_> = original.walls.iter().map(pair_of).collect();
        let mut flattened_pairs: Vec<_> = flattened.walls.iter().map(pair_of).collect();
        original_pairs.sort_unstable();
        flattened_pairs.sort_unstable();
        assert_eq!(original_pairs, flattened_pairs);
    }

    #[test]
    fn round_trip_does_not_preserve_opening_extent() {
        let mut plan = square_plan();
        // A wide door on the bottom wall.
        plan.walls.push(Wall::new(
            "d1",
            Point2D::new(20.0, 0.0),
            Point2D::new(80.0, 0.0),
            WallKind::Door,
            false,
        ));

        let build = ToGraph::new().execute(&plan).unwrap();
        let flattened = FromGraph::new().execute(&build.graph).unwrap();

        let stub = flattened
            .walls
            .iter()
            .find(|w| w.kind == WallKind::Door)
            .unwrap();
        // 60 px of door collapse to the fixed stub length around (50, 0).
        assert!((stub.length() - 2.0 * STUB_HALF_LENGTH).abs() < 1e-10);
        let mid = stub.midpoint();
        assert!((mid.x - 50.0).abs() < 1e-10 && mid.y.abs() < 1e-10, "mid={mid:?}");
    }
}
