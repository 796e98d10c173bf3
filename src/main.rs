//! Bézier Spline CLI.
//!
//! Wertet eine auf der Kommandozeile angegebene Node-Kette aus und gibt
//! Punkte, Längen und Abtastungen als JSON aus.

use anyhow::{bail, Context};
use bezier_spline_tools::shared::spline_geometry::polyline_length;
use bezier_spline_tools::{BezierNode, BezierSpline, EditorOptions};
use clap::{Parser, Subcommand};
use glam::Vec3;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bezier-spline", version, about = "Kubische Bézier-Splines auswerten")]
struct Cli {
    /// Optionen-Datei (TOML); Standard: neben der Binary
    #[arg(long)]
    config: Option<PathBuf>,

    /// Node als "mx,my,mz;px,py,pz;nx,ny,nz" (Anker; vorheriges Handle; nächstes Handle)
    #[arg(long = "node", required = true, allow_hyphen_values = true)]
    nodes: Vec<String>,

    /// Ausgabe relativ zum Ursprung (`--origin`)
    #[arg(long)]
    relative: bool,

    /// Ursprung des Welt-Frames als "x,y,z"
    #[arg(long, default_value = "0,0,0", allow_hyphen_values = true)]
    origin: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Punkt am globalen Parameter t
    Eval {
        #[arg(long, allow_negative_numbers = true)]
        t: f32,
    },
    /// Gesamtlänge der Kurve
    Length {
        #[arg(long)]
        scan_step: Option<f32>,
    },
    /// Parameterwerte im Abstand `distance` entlang der Kurve
    Sample {
        #[arg(long)]
        distance: f32,
        #[arg(long)]
        scan_step: Option<f32>,
    },
    /// Linienzug mit `resolution` Segmenten
    Polyline {
        #[arg(long)]
        resolution: Option<usize>,
    },
}

#[derive(Serialize)]
struct PointOutput {
    t: f32,
    point: [f32; 3],
}

#[derive(Serialize)]
struct LengthOutput {
    length: f32,
    steps: usize,
    exhausted: bool,
}

#[derive(Serialize)]
struct PolylineOutput {
    points: Vec<[f32; 3]>,
    length: f32,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(EditorOptions::config_path);
    let options = EditorOptions::load_from_file(&config_path);

    let nodes = cli
        .nodes
        .iter()
        .map(String::as_str)
        .map(parse_node)
        .collect::<anyhow::Result<Vec<_>>>()?;
    let mut spline = BezierSpline::with_nodes(nodes);
    spline.relative_position = cli.relative;
    spline.origin = parse_vec3(&cli.origin).context("Ungültiger Ursprung")?;

    log::debug!("Spline mit {} Nodes geladen", spline.node_count());

    let output = match cli.command {
        Command::Eval { t } => {
            let point = spline.evaluate(t)?;
            serde_json::to_string_pretty(&PointOutput {
                t,
                point: point.to_array(),
            })?
        }
        Command::Length { scan_step } => {
            let result = spline.total_length(
                scan_step.unwrap_or(options.scan_step),
                options.max_scan_steps,
            )?;
            serde_json::to_string_pretty(&LengthOutput {
                length: result.distance,
                steps: result.steps,
                exhausted: result.is_exhausted(),
            })?
        }
        Command::Sample {
            distance,
            scan_step,
        } => {
            let curve = spline.curve()?;
            let samples: Vec<PointOutput> = curve
                .sample_by_distance(
                    distance,
                    scan_step.unwrap_or(options.scan_step),
                    options.max_scan_steps,
                )
                .map(|t| PointOutput {
                    t,
                    point: curve.evaluate(t).to_array(),
                })
                .collect();
            serde_json::to_string_pretty(&samples)?
        }
        Command::Polyline { resolution } => {
            let points = spline.polyline(resolution.unwrap_or(spline.resolution))?;
            serde_json::to_string_pretty(&PolylineOutput {
                length: polyline_length(&points),
                points: points.iter().map(|p| p.to_array()).collect(),
            })?
        }
    };

    println!("{}", output);
    Ok(())
}

/// Parst "x,y,z" in einen Vektor.
fn parse_vec3(raw: &str) -> anyhow::Result<Vec3> {
    let parts = raw
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f32>()
                .with_context(|| format!("Keine Zahl: '{}'", part.trim()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    match parts.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => bail!("Erwartet 3 Komponenten, gefunden {}: '{}'", parts.len(), raw),
    }
}

/// Parst "anker;vorheriges;nächstes" in einen Node.
fn parse_node(raw: &str) -> anyhow::Result<BezierNode> {
    let points = raw
        .split(';')
        .map(parse_vec3)
        .collect::<anyhow::Result<Vec<_>>>()
        .with_context(|| format!("Ungültiger Node: '{}'", raw))?;
    match points.as_slice() {
        [main] => Ok(BezierNode::new(*main, *main, *main)),
        [main, previous, next] => Ok(BezierNode::new(*main, *previous, *next)),
        _ => bail!("Node braucht 1 oder 3 Punkte: '{}'", raw),
    }
}
