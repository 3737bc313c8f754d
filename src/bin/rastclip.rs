//! rastclip: rasterize and clip from the command line.
//!
//! Run: `rastclip raster --algorithm wu --from 0,0 --to 12,5 --grid`
//! Run: `rastclip clip segments.txt --polygon 5`

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use raster_clip::clip::{clip_all, Boundary};
use raster_clip::config::EngineConfig;
use raster_clip::geometry::{Point, Segment};
use raster_clip::output::TerminalEncoder;
use raster_clip::parse::GeometryFile;
use raster_clip::raster::{rasterize, Algorithm, Primitive};

/// rastclip: line/circle rasterization and segment clipping
#[derive(Parser, Debug)]
#[command(name = "rastclip")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Rasterize lines and circles, clip segments against a window", long_about = None)]
struct Cli {
    /// Config file path (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rasterize a segment or a circle and print its pixels
    Raster {
        /// Algorithm: step, dda, bresenham_line, bresenham_circle, wu, castle_piteway
        #[arg(short, long, default_value = "bresenham_line")]
        algorithm: Algorithm,

        /// Start point (or circle center) as x,y
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: Point,

        /// End point as x,y (line algorithms)
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: Option<Point>,

        /// Circle radius (bresenham_circle)
        #[arg(short, long)]
        radius: Option<u32>,

        /// Draw the pixels as a text grid instead of listing them
        #[arg(long)]
        grid: bool,
    },

    /// Clip every segment of a geometry file against its window
    Clip {
        /// Geometry file: segment count, segment lines, window line
        file: PathBuf,

        /// Clip against a regular polygon with this many sides inscribed in the window
        #[arg(short, long)]
        polygon: Option<usize>,
    },
}

fn parse_point(s: &str) -> std::result::Result<Point, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected x,y but got '{s}'"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in '{s}': {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in '{s}': {e}"))?;
    Ok(Point::new(x, y))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Command::Raster { algorithm, from, to, radius, grid } => {
            run_raster(&config, algorithm, from, to, radius, grid)
        }
        Command::Clip { file, polygon } => run_clip(&config, &file, polygon),
    }
}

fn run_raster(
    config: &EngineConfig,
    algorithm: Algorithm,
    from: Point,
    to: Option<Point>,
    radius: Option<u32>,
    grid: bool,
) -> Result<()> {
    let primitive = match (algorithm.is_line(), to, radius) {
        (true, Some(to), _) => Primitive::Line(Segment::new(from, to)),
        (false, _, Some(radius)) => Primitive::Circle { center: from, radius },
        (true, None, _) => bail!("{algorithm} needs --to"),
        (false, _, None) => bail!("{algorithm} needs --radius"),
    };

    let pixels = rasterize(algorithm, &primitive, &config.raster)?;

    if grid {
        TerminalEncoder::new().print(&pixels);
    } else {
        for p in &pixels {
            if (p.coverage - 1.0).abs() < f64::EPSILON {
                println!("{} {}", p.x, p.y);
            } else {
                println!("{} {} {:.3}", p.x, p.y, p.coverage);
            }
        }
    }
    log::info!("{algorithm}: {} pixels", pixels.len());
    Ok(())
}

fn run_clip(config: &EngineConfig, file: &Path, sides: Option<usize>) -> Result<()> {
    let geometry = GeometryFile::from_path(file)
        .with_context(|| format!("reading geometry file {}", file.display()))?;

    let boundary = match sides {
        Some(sides) => Boundary::Polygon(geometry.inscribed_polygon(sides)?),
        None => Boundary::Rect(geometry.window),
    };

    let results = clip_all(&geometry.segments, &boundary, &config.clip)?;

    for (i, (segment, pieces)) in geometry.segments.iter().zip(&results).enumerate() {
        println!("segment {i}: {}", format_segment(segment));
        for piece in pieces {
            println!("  visible: {}", format_segment(piece));
        }
    }
    Ok(())
}

fn format_segment(s: &Segment) -> String {
    format!("({:.3}, {:.3}) -> ({:.3}, {:.3})", s.p1.x, s.p1.y, s.p2.x, s.p2.y)
}
