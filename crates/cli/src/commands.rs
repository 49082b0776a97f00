//! One function per subcommand. Each writes its JSON result and a
//! provenance sidecar, and returns the sidecar path.

use crate::provenance::{write_sidecar, Payload};
use crate::table::{read_points, read_segments, write_json};
use crate::track_spec::TrackSpec;
use anyhow::{ensure, Result};
use circuit_collide::ellipse::{angular_sector, classify_ellipse, EllipseCollision};
use circuit_collide::geom::GeomCfg;
use circuit_collide::layout::{ellipse_codes, sector_codes, wall_codes};
use circuit_collide::query::{collision_flags_with_cfg, nearest_wall_distances_with_cfg};
use circuit_collide::rand::{random_sensor_fans, ReplayToken};
use circuit_collide::sector::classify_sectors;
use circuit_collide::track::{vision_ratios, SensorCfg};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};

/// Angular sectors reported for round tracks.
pub const ELLIPSE_SECTORS: usize = 36;

#[derive(Serialize)]
struct EllipseOut {
    codes: Vec<i32>,
    sectors: Vec<usize>,
}

#[derive(Serialize)]
struct SectorsOut {
    sectors: Vec<i64>,
    collisions: Vec<i32>,
}

#[derive(Serialize)]
struct WallsOut {
    flags: Vec<i32>,
    distances: Vec<f64>,
}

#[derive(Serialize)]
struct ProbeOut {
    segments: Vec<[f64; 4]>,
    flags: Vec<i32>,
    distances: Vec<f64>,
    vision: Vec<f64>,
}

pub fn ellipse(track: &Path, input: &Path, out: &Path, tags: &[String]) -> Result<PathBuf> {
    tracing::info!(track = %track.display(), input = %input.display(), "ellipse");
    let ann = TrackSpec::load(track)?.annulus()?;
    let points = read_points(input)?;
    let results = classify_ellipse(&points, &ann);
    let walls = results.iter().filter(|r| **r == EllipseCollision::Wall).count();
    tracing::info!(points = points.len(), walls, "ellipse_done");
    let sectors = points
        .iter()
        .map(|&p| angular_sector(ann.center(), p, ELLIPSE_SECTORS))
        .collect();
    write_json(
        out,
        &EllipseOut {
            codes: ellipse_codes(&results),
            sectors,
        },
    )?;
    let params = json!({
        "command": "ellipse",
        "track": track.display().to_string(),
        "input": input.display().to_string(),
    });
    write_sidecar(out, Payload::new(params).with_tags(tags))
}

pub fn sectors(track: &Path, input: &Path, out: &Path, tags: &[String]) -> Result<PathBuf> {
    tracing::info!(track = %track.display(), input = %input.display(), "sectors");
    let boundary = TrackSpec::load(track)?.boundary()?;
    let points = read_points(input)?;
    let hits = classify_sectors(&points, &boundary);
    let off_track = hits.iter().filter(|h| h.sector.is_none()).count();
    tracing::info!(points = points.len(), off_track, "sectors_done");
    let (sectors, collisions) = sector_codes(&hits);
    write_json(out, &SectorsOut { sectors, collisions })?;
    let params = json!({
        "command": "sectors",
        "track": track.display().to_string(),
        "input": input.display().to_string(),
    });
    write_sidecar(out, Payload::new(params).with_tags(tags))
}

pub fn walls(
    track: &Path,
    input: &Path,
    out: &Path,
    shift: f64,
    cfg: GeomCfg,
    tags: &[String],
) -> Result<PathBuf> {
    tracing::info!(track = %track.display(), input = %input.display(), shift, "walls");
    let walls = TrackSpec::load(track)?.walls(shift)?;
    let queries = read_segments(input)?;
    let flags = collision_flags_with_cfg(&queries, &walls, cfg);
    let distances = nearest_wall_distances_with_cfg(&queries, &walls, cfg);
    let hits = flags.iter().filter(|f| f.is_wall()).count();
    tracing::info!(queries = queries.len(), walls = walls.len(), hits, "walls_done");
    write_json(
        out,
        &WallsOut {
            flags: wall_codes(&flags),
            distances,
        },
    )?;
    let params = json!({
        "command": "walls",
        "track": track.display().to_string(),
        "input": input.display().to_string(),
        "shift": shift,
        "eps": cfg.eps,
    });
    write_sidecar(out, Payload::new(params).with_tags(tags))
}

pub struct ProbeArgs {
    pub seed: u64,
    pub count: usize,
    pub sensors: SensorCfg,
    pub shift: f64,
}

pub fn probe(track: &Path, args: &ProbeArgs, out: &Path, tags: &[String]) -> Result<PathBuf> {
    ensure!(args.sensors.length > 0.0, "sensor length must be positive");
    tracing::info!(
        track = %track.display(),
        seed = args.seed,
        count = args.count,
        length = args.sensors.length,
        "probe"
    );
    let desc = TrackSpec::load(track)?;
    let walls = desc.walls(args.shift)?;
    let bounds = desc.bounds(args.shift)?;
    let tok = ReplayToken {
        seed: args.seed,
        index: 0,
    };
    let rays = random_sensor_fans(bounds, args.count, args.sensors, tok);
    let cfg = GeomCfg::default();
    let flags = collision_flags_with_cfg(&rays, &walls, cfg);
    let distances = nearest_wall_distances_with_cfg(&rays, &walls, cfg);
    let hits = flags.iter().filter(|f| f.is_wall()).count();
    tracing::info!(rays = rays.len(), hits, "probe_done");
    write_json(
        out,
        &ProbeOut {
            segments: rays.iter().map(|s| [s.a.x, s.a.y, s.b.x, s.b.y]).collect(),
            flags: wall_codes(&flags),
            vision: vision_ratios(&distances, args.sensors.length),
            distances,
        },
    )?;
    let params = json!({
        "command": "probe",
        "track": track.display().to_string(),
        "seed": args.seed,
        "count": args.count,
        "rays": args.sensors.rays,
        "length": args.sensors.length,
        "shift": args.shift,
    });
    write_sidecar(out, Payload::new(params).with_tags(tags))
}
