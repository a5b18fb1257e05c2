//! waystone: route planner for structures exported from cubiomes viewer.
//!
//! Reads a structure list, plans a near-optimal route from an origin
//! through every matching structure (Christofides-style tour
//! construction), prints the route, and optionally appends it to
//! Xaero's minimap waypoint files as a numbered waypoint set.
//!
//! # Usage
//!
//! ```text
//! waystone -i structures.txt -s fortress --origin 0 0 --show-total-distance
//! waystone -i structures.txt -s end_city -w --waypoint-dir ~/.minecraft/xaero/world-map
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod input;
mod waypoints;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use waystone_export::xaero::{WaypointKind, WaypointVisibility};
use waystone_route::{MatchingStrategy, Point, RouteConfig};

/// Finds a route between structures in a world using the Christofides
/// algorithm.
#[derive(Parser)]
#[command(name = "waystone", version)]
struct Cli {
    /// Path to the structures file exported by cubiomes viewer.
    #[arg(short, long)]
    input: PathBuf,

    /// The kind of structure we're interested in.
    #[arg(short, long, value_parser = lowercase)]
    structure: String,

    /// Additional details filter for the structure.
    #[arg(short, long)]
    details: Option<String>,

    /// Use regex matching in structure details.
    #[arg(long)]
    use_regex_in_details: bool,

    /// The starting (x, z) position of our route.
    #[arg(
        short,
        long,
        num_args = 2,
        value_names = ["X", "Z"],
        default_values_t = [0, 0],
        allow_negative_numbers = true
    )]
    origin: Vec<i64>,

    /// The number of structures to consider (the origin counts).
    #[arg(short, long)]
    limit: Option<usize>,

    /// Shuffle seed; a fixed seed reproduces the route exactly.
    #[arg(long)]
    seed: Option<u64>,

    /// Odd-vertex matching strategy.
    #[arg(long, value_enum, default_value_t = Matching::Optimal)]
    matching: Matching,

    /// Display the total distance of the route.
    #[arg(long)]
    show_total_distance: bool,

    /// Write the route to Xaero's minimap as a set of numbered waypoints.
    #[arg(
        short = 'w',
        long,
        help_heading = "Waypoint options",
        requires = "waypoint_dir"
    )]
    save_waypoints: bool,

    /// Root directory of Xaero's minimap waypoints for the world or server.
    #[arg(long, help_heading = "Waypoint options")]
    waypoint_dir: Option<PathBuf>,

    /// The waypoint colour (palette index).
    #[arg(
        long,
        help_heading = "Waypoint options",
        default_value_t = 5,
        value_parser = clap::value_parser!(u8).range(0..=15)
    )]
    waypoint_colour: u8,

    /// The name of the route (defaults to the structure name).
    #[arg(long, help_heading = "Waypoint options")]
    route_name: Option<String>,

    /// Waypoint type specification.
    #[arg(
        long,
        help_heading = "Waypoint options",
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=3)
    )]
    waypoint_type: u8,

    /// Waypoint visibility specification.
    #[arg(
        long,
        help_heading = "Waypoint options",
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=3)
    )]
    waypoint_visibility: u8,
}

/// Odd-vertex matching strategy selection.
#[derive(Clone, Copy, ValueEnum)]
enum Matching {
    /// Exact minimum-weight matching (DP for small odd sets, greedy fallback).
    Optimal,
    /// Greedy closest-pair matching; faster, weaker tour bound.
    Greedy,
}

/// Normalize the structure kind the way the export spells it.
fn lowercase(value: &str) -> Result<String, std::convert::Infallible> {
    Ok(value.to_lowercase())
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env().init();
    let cli = Cli::parse();

    let filter = input::StructureFilter {
        kind: cli.structure.clone(),
        details: cli.details.clone(),
        regex_details: cli.use_regex_in_details,
    };
    let points = match input::load_structures(&cli.input, &filter) {
        Ok(points) => points,
        Err(e) => {
            eprintln!("Error loading structures: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("{} matching structures in {}", points.len(), cli.input.display());

    #[allow(clippy::cast_precision_loss)]
    let origin = Point::new(cli.origin[0] as f64, cli.origin[1] as f64);
    let config = RouteConfig {
        origin,
        limit: cli.limit,
        seed: cli.seed,
        matching: match cli.matching {
            Matching::Optimal => MatchingStrategy::Optimal,
            Matching::Greedy => MatchingStrategy::Greedy,
        },
    };

    let plan = match waystone_route::plan_route(&points, &config) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Error planning route: {e}");
            return ExitCode::FAILURE;
        }
    };

    let total = cli.show_total_distance.then_some(plan.total_distance);
    print!("{}", waystone_export::to_listing(&plan.route, total));

    if cli.save_waypoints {
        // clap's `requires` already enforces this pairing; keep a clear
        // message rather than an unreachable unwrap.
        let Some(ref root) = cli.waypoint_dir else {
            eprintln!("--save-waypoints requires --waypoint-dir");
            return ExitCode::FAILURE;
        };

        let (kind, visibility) = match (
            WaypointKind::from_code(cli.waypoint_type),
            WaypointVisibility::from_code(cli.waypoint_visibility),
        ) {
            (Ok(kind), Ok(visibility)) => (kind, visibility),
            (Err(e), _) | (_, Err(e)) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        };

        let options = waypoints::WaypointOptions {
            color: cli.waypoint_colour,
            kind,
            visibility,
            route_name: cli.route_name.clone(),
        };
        let records = waypoints::route_waypoints(&plan.route, &cli.structure, &options);
        let dimension = waypoints::Dimension::for_structure(&cli.structure);

        match waypoints::append_waypoints(root, dimension, &records) {
            Ok(path) => {
                log::info!("{} waypoints appended to {}", records.len(), path.display());
            }
            Err(e) => {
                eprintln!("Error writing waypoints: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
