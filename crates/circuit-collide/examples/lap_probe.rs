//! One simulated lap on a round two-rail track.
//!
//! Purpose
//! - Reproducible timing for one tick of a 32-car field: ring edges against
//!   the walls, sensor fans against the walls, and gate progress.
//! - Shows the full host loop in one place: rails → walls/gates, car polygon →
//!   ring segments, sensors → vision ratios.

use std::time::Instant;

use circuit_collide::ellipse::Ellipse;
use circuit_collide::geom::{GeomCfg, Point2};
use circuit_collide::query::{nearest_wall_distances, shape_collisions};
use circuit_collide::sector::{classify_sectors, to_track_frame, TrackBoundary};
use circuit_collide::track::{
    gates_crossed, sector_gates, sensor_fan, shape_ring_segments, vision_ratios,
    walls_from_rails, SensorCfg,
};

const CARS: usize = 32;
const SECTORS: usize = 36;

/// Axis-aligned car rectangle centered on `p`.
fn car_at(p: Point2) -> Vec<Point2> {
    let (hw, hh) = (4.0, 2.0);
    vec![
        Point2::new(p.x - hw, p.y - hh),
        Point2::new(p.x + hw, p.y - hh),
        Point2::new(p.x + hw, p.y + hh),
        Point2::new(p.x - hw, p.y + hh),
    ]
}

fn main() {
    let center = Point2::new(400.0, 300.0);
    let outer = Ellipse::new(center, 350.0, 250.0).outline(SECTORS);
    let inner = Ellipse::new(center, 200.0, 120.0).outline(SECTORS);
    let walls = walls_from_rails(&outer, &inner, 0.0);
    let gates = sector_gates(&outer, &inner);
    let track = TrackBoundary::new(outer.clone(), inner.clone()).expect("rails match");

    // cars spread along the lane centerline
    let lane: Vec<Point2> = outer
        .iter()
        .zip(&inner)
        .map(|(o, i)| (o + i) / 2.0)
        .collect();
    let cars: Vec<Vec<Point2>> = (0..CARS).map(|k| car_at(lane[k % SECTORS])).collect();

    let start = Instant::now();
    let crashed = shape_collisions(&cars, &walls, GeomCfg::default());
    let sensors = SensorCfg::default();
    let rays: Vec<_> = cars
        .iter()
        .flat_map(|c| sensor_fan((c[0] + c[2]) / 2.0, 0.0, sensors))
        .collect();
    let vision = vision_ratios(&nearest_wall_distances(&rays, &walls), sensors.length);
    let progress: Vec<usize> = cars
        .iter()
        .enumerate()
        .map(|(k, c)| gates_crossed(&shape_ring_segments(c), &gates, k % SECTORS, 1e-4))
        .collect();
    let centers: Vec<Point2> = cars
        .iter()
        .map(|c| to_track_frame((c[0] + c[2]) / 2.0))
        .collect();
    let hits = classify_sectors(&centers, &track);
    let elapsed = start.elapsed().as_secs_f64() * 1e3;

    println!(
        "cars={} walls={} rays={} crashed={} on_track={} mean_vision={:.3} advanced={} ms={:.3}",
        CARS,
        walls.len(),
        rays.len(),
        crashed.iter().filter(|c| c.is_wall()).count(),
        hits.iter().filter(|h| h.sector.is_some()).count(),
        vision.iter().sum::<f64>() / vision.len() as f64,
        progress
            .iter()
            .enumerate()
            .filter(|(k, &p)| p > k % SECTORS)
            .count(),
        elapsed,
    );
}
