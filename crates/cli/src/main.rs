mod commands;
mod provenance;
mod table;
mod track_spec;

use anyhow::Result;
use circuit_collide::geom::{GeomCfg, DEFAULT_EPS};
use circuit_collide::track::SensorCfg;
use clap::{Parser, Subcommand};
use commands::ProbeArgs;
use provenance::{Payload, Record};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "circuit-collide")]
#[command(about = "Classify points and segments against a racing circuit")]
struct Cmd {
    /// Free-form tag recorded in every provenance sidecar (repeatable)
    #[arg(long = "tag")]
    tags: Vec<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Points (columns x, y) against an ellipse track: codes and angular sectors
    Ellipse {
        #[arg(long)]
        track: PathBuf,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Points (already in the y-up frame) against a custom two-rail track
    Sectors {
        #[arg(long)]
        track: PathBuf,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Segments (columns x1, y1, x2, y2) against the track walls
    Walls {
        #[arg(long)]
        track: PathBuf,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Added to every wall x coordinate
        #[arg(long, default_value_t = 0.0)]
        shift: f64,
        #[arg(long, default_value_t = DEFAULT_EPS)]
        eps: f64,
    },
    /// Random sensor fans against the track walls
    Probe {
        #[arg(long)]
        track: PathBuf,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Number of cars
        #[arg(long, default_value_t = 16)]
        count: usize,
        #[arg(long, default_value_t = 7)]
        rays: usize,
        #[arg(long, default_value_t = 200.0)]
        length: f64,
        #[arg(long, default_value_t = 0.0)]
        shift: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let tags = cmd.tags;
    match cmd.action {
        Action::Ellipse { track, input, out } => {
            commands::ellipse(&track, &input, &out, &tags)?;
        }
        Action::Sectors { track, input, out } => {
            commands::sectors(&track, &input, &out, &tags)?;
        }
        Action::Walls {
            track,
            input,
            out,
            shift,
            eps,
        } => {
            let cfg = GeomCfg {
                eps,
                ..GeomCfg::default()
            };
            commands::walls(&track, &input, &out, shift, cfg, &tags)?;
        }
        Action::Probe {
            track,
            seed,
            count,
            rays,
            length,
            shift,
            out,
        } => {
            let args = ProbeArgs {
                seed,
                count,
                sensors: SensorCfg {
                    rays,
                    length,
                    ..SensorCfg::default()
                },
                shift,
            };
            commands::probe(&track, &args, &out, &tags)?;
        }
        Action::Report => report(&tags)?,
    }
    Ok(())
}

fn report(tags: &[String]) -> Result<()> {
    let payload = Payload::new(serde_json::json!({})).with_tags(tags);
    println!(
        "{}",
        serde_json::to_string_pretty(&Record::new(&payload, &[]))?
    );
    Ok(())
}
