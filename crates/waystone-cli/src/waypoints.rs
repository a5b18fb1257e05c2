//! Waypoint-file placement for planned routes.
//!
//! Xaero's minimap keeps one waypoint directory per dimension under the
//! world (or server) root; route records are appended to the default
//! set file and never overwrite existing markers.

use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use waystone_export::xaero::{Altitude, Waypoint, WaypointKind, WaypointVisibility};
use waystone_route::Point;

/// File inside each dimension directory that holds the default
/// waypoint set.
const DEFAULT_SET_FILE: &str = "mw$default_1.txt";

/// Which per-dimension waypoint directory a structure kind belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// The surface world.
    Overworld,
    /// The nether.
    Nether,
    /// The end.
    End,
}

impl Dimension {
    /// Classify a structure kind into its home dimension.
    #[must_use]
    pub fn for_structure(kind: &str) -> Self {
        match kind {
            "end_city" | "end_gateway" => Self::End,
            "ruined_portal_nether" | "fortress" | "bastion_remnant" => Self::Nether,
            _ => Self::Overworld,
        }
    }

    /// Subdirectory name inside the waypoint root.
    #[must_use]
    pub const fn directory(self) -> &'static str {
        match self {
            Self::Overworld => "dim%0",
            Self::Nether => "dim%-1",
            Self::End => "dim%1",
        }
    }
}

/// Title-case a structure kind: `ruined_portal_nether` becomes
/// `Ruined Portal Nether`.
#[must_use]
pub fn structure_title(kind: &str) -> String {
    kind.split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Presentation choices for a route's waypoint records.
#[derive(Debug, Clone)]
pub struct WaypointOptions {
    /// Palette index, 0-15.
    pub color: u8,
    /// Marker kind for every record.
    pub kind: WaypointKind,
    /// Visibility for every record.
    pub visibility: WaypointVisibility,
    /// Waypoint set name; defaults to the structure title when absent.
    pub route_name: Option<String>,
}

/// Render the route as numbered waypoint records.
///
/// Record `idx` is named `"<Structure Title> <idx>"` with the ordinal as
/// its initials; positions are rounded to whole blocks and left at
/// ground level.
#[must_use]
pub fn route_waypoints(route: &[Point], structure: &str, options: &WaypointOptions) -> Vec<Waypoint> {
    let title = structure_title(structure);
    let set = options.route_name.clone().unwrap_or_else(|| title.clone());

    #[allow(clippy::cast_possible_truncation)]
    fn block(coordinate: f64) -> i64 {
        coordinate.round() as i64
    }

    route
        .iter()
        .enumerate()
        .map(|(index, position)| Waypoint {
            name: format!("{title} {index}"),
            initials: index.to_string(),
            x: block(position.x),
            y: Altitude::Ground,
            z: block(position.z),
            color: options.color,
            disabled: false,
            kind: options.kind,
            set: set.clone(),
            rotate_on_teleport: false,
            teleport_yaw: 0,
            visibility: options.visibility,
            destination: false,
        })
        .collect()
}

/// Append `records` to the default set file of `dimension` under
/// `root`, creating the dimension directory if needed.
///
/// Returns the path written to.
///
/// # Errors
///
/// Returns the underlying I/O error when the directory cannot be
/// created or the file cannot be opened or appended to.
pub fn append_waypoints(
    root: &Path,
    dimension: Dimension,
    records: &[Waypoint],
) -> Result<PathBuf, std::io::Error> {
    let directory = root.join(dimension.directory());
    fs::create_dir_all(&directory)?;
    let path = directory.join(DEFAULT_SET_FILE);

    let mut file = OpenOptions::new().append(true).create(true).open(&path)?;
    for record in records {
        writeln!(file, "{record}")?;
    }
    Ok(path)
}
