mod nearest_wall;
mod room_size;

pub use nearest_wall::{NearestWall, NearestWallResult};
pub use room_size::{RoomExtent, RoomSize};
