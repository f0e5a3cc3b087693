use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an area in the plan graph.
    pub struct AreaId;
}

/// Data associated with an area: a named room polygon over graph vertices.
///
/// Part of the graph schema for editors that trace room boundaries by
/// hand. The forward pass never creates areas, and the flattening pass
/// drops them.
#[derive(Debug, Clone)]
pub struct AreaData {
    /// Display name of the room.
    pub name: String,
    /// Boundary vertices, in walk order.
    pub boundary: Vec<VertexId>,
}

impl AreaData {
    /// Creates a named area over the given boundary vertices.
    #[must_use]
    pub fn new(name: impl Into<String>, boundary: Vec<VertexId>) -> Self {
        Self {
            name: name.into(),
            boundary,
        }
    }
}
