//! Plankit debug harness: runs a plan through the full digitization
//! round trip and prints what came out.
//!
//! Usage:
//! ```text
//! cargo run --example debug                 # built-in sample plan
//! cargo run --example debug -- plan.json    # plan from a JSON file
//! ```

use std::fs;

use plankit::operations::convert::{FromGraph, ToGraph};
use plankit::operations::query::{NearestWall, RoomSize};
use plankit::plan::{DoorKind, FloorPlan, Point2D, Wall, WallKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default: WARN for everything, INFO for plankit.
    // Override with RUST_LOG env var (e.g. RUST_LOG=plankit=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("debug=info".parse().unwrap_or_default())
        .add_directive("plankit=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let plan: FloorPlan = match std::env::args().nth(1) {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => sample_plan(),
    };

    let build = ToGraph::new().execute(&plan)?;
    build.graph.validate()?;

    println!("walls in:  {}", plan.walls.len());
    println!("vertices:  {}", build.graph.vertex_count());
    println!("edges:     {}", build.graph.edge_count());
    println!("holes:     {}", build.graph.hole_count());
    println!(
        "unusable:  {} walls, {} openings",
        build.report.skipped_walls, build.report.dropped_openings
    );

    if let Some(bounds) = plan.bounds() {
        println!("bounds:    {:.0} x {:.0} px", bounds.width(), bounds.height());
    }

    for room in &plan.rooms {
        let probe = room.label.to_nalgebra();
        let extent = RoomSize::new(probe, 20.0).execute(&plan)?;
        print!("room {:10} estimate at 20 px/unit: {extent}", room.name);
        if let Some(nearest) = NearestWall::new(probe).execute(&plan) {
            let wall = &plan.walls[nearest.index];
            print!("  (nearest wall {} at {:.1} px)", wall.id, nearest.distance);
        }
        println!();
    }

    let flattened = FromGraph::new().execute(&build.graph)?;
    println!("walls out: {}", flattened.walls.len());

    Ok(())
}

/// Two rooms split by an internal wall, with a connecting door and one
/// window on the street side.
fn sample_plan() -> FloorPlan {
    let mut plan = FloorPlan::new();

    for (id, start, end) in [
        ("w1", (0.0, 0.0), (400.0, 0.0)),
        ("w2", (400.0, 0.0), (400.0, 300.0)),
        ("w3", (400.0, 300.0), (0.0, 300.0)),
        ("w4", (0.0, 300.0), (0.0, 0.0)),
    ] {
        plan.walls.push(Wall::new(
            id,
            Point2D::new(start.0, start.1),
            Point2D::new(end.0, end.1),
            WallKind::Wall,
            true,
        ));
    }
    plan.walls.push(Wall::new(
        "w5",
        Point2D::new(200.0, 0.0),
        Point2D::new(200.0, 300.0),
        WallKind::Wall,
        false,
    ));

    let mut door = Wall::new(
        "d1",
        Point2D::new(200.0, 130.0),
        Point2D::new(200.0, 190.0),
        WallKind::Door,
        false,
    );
    door.door_kind = Some(DoorKind::Single);
    plan.walls.push(door);
    plan.walls.push(Wall::new(
        "n1",
        Point2D::new(60.0, 0.0),
        Point2D::new(140.0, 0.0),
        WallKind::Window,
        true,
    ));

    plan.rooms.push(plankit::plan::RoomLabel::new(
        "r1",
        "Studio",
        Point2D::new(100.0, 150.0),
    ));
    plan.rooms.push(plankit::plan::RoomLabel::new(
        "r2",
        "Bedroom",
        Point2D::new(300.0, 150.0),
    ));

    plan
}
