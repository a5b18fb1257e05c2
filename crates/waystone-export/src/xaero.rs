//! Xaero minimap waypoint records.
//!
//! One route position maps to one colon-separated record line:
//!
//! ```text
//! waypoint:<name>:<initials>:<x>:<y>:<z>:<color>:<disabled>:<kind>:<set>:<rotate>:<yaw>:<visibility>:<destination>
//! ```
//!
//! `<y>` is either a block height or the `~` sentinel for "ground level /
//! unspecified"; booleans are lowercase `true`/`false`; `<color>` is a
//! 0-15 palette index. Records are appended to per-dimension waypoint
//! files by the caller -- this module only renders and parses lines.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Errors from record parsing and field validation.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The line does not have the waypoint record shape.
    #[error("line is not a waypoint record: {0:?}")]
    MalformedRecord(String),

    /// A numeric field is outside its documented range.
    #[error("waypoint {field} {value} is out of range")]
    FieldOutOfRange {
        /// Which field was rejected.
        field: &'static str,
        /// The offending value.
        value: i64,
    },
}

/// Marker kind stored in a waypoint record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WaypointKind {
    /// An ordinary user marker.
    #[default]
    Normal,
    /// A death marker.
    Death,
    /// A previous death marker.
    OldDeath,
    /// A destination marker.
    Destination,
}

impl WaypointKind {
    /// Wire code of the record's kind field.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Death => 1,
            Self::OldDeath => 2,
            Self::Destination => 3,
        }
    }

    /// Parse a wire code.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::FieldOutOfRange`] for codes above 3.
    pub const fn from_code(code: u8) -> Result<Self, ExportError> {
        match code {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Death),
            2 => Ok(Self::OldDeath),
            3 => Ok(Self::Destination),
            _ => Err(ExportError::FieldOutOfRange {
                field: "kind",
                value: code as i64,
            }),
        }
    }
}

/// Where a waypoint is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WaypointVisibility {
    /// Shown on the local minimap only.
    #[default]
    Local,
    /// Shown everywhere.
    Global,
    /// Shown on the world map, local reach.
    WorldMapLocal,
    /// Shown on the world map, global reach.
    WorldMapGlobal,
}

impl WaypointVisibility {
    /// Wire code of the record's visibility field.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Local => 0,
            Self::Global => 1,
            Self::WorldMapLocal => 2,
            Self::WorldMapGlobal => 3,
        }
    }

    /// Parse a wire code.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::FieldOutOfRange`] for codes above 3.
    pub const fn from_code(code: u8) -> Result<Self, ExportError> {
        match code {
            0 => Ok(Self::Local),
            1 => Ok(Self::Global),
            2 => Ok(Self::WorldMapLocal),
            3 => Ok(Self::WorldMapGlobal),
            _ => Err(ExportError::FieldOutOfRange {
                field: "visibility",
                value: code as i64,
            }),
        }
    }
}

/// Vertical coordinate of a waypoint record.
///
/// The format allows omitting the height; Xaero renders such waypoints
/// at ground level and the record carries a `~` in the y field. Modeled
/// as a tagged variant rather than a stringly-typed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Altitude {
    /// Unspecified height, serialized as `~`.
    #[default]
    Ground,
    /// Explicit block height.
    At(i64),
}

impl fmt::Display for Altitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ground => f.write_str("~"),
            Self::At(y) => write!(f, "{y}"),
        }
    }
}

/// One waypoint record.
///
/// Fields are stored in record order. `name`, `initials`, and `set` must
/// not contain `:` (the field separator); `color` is expected to stay in
/// 0-15 -- [`parse_record`] enforces both, writers are trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Display name.
    pub name: String,
    /// Short label drawn on the map icon.
    pub initials: String,
    /// East-west block position.
    pub x: i64,
    /// Vertical position, or ground level.
    pub y: Altitude,
    /// North-south block position.
    pub z: i64,
    /// Palette index, 0-15.
    pub color: u8,
    /// Whether the marker is hidden.
    pub disabled: bool,
    /// Marker kind.
    pub kind: WaypointKind,
    /// Waypoint set (group) this record belongs to.
    pub set: String,
    /// Rotate the camera when teleporting to the marker.
    pub rotate_on_teleport: bool,
    /// Yaw applied on teleport, degrees.
    pub teleport_yaw: i32,
    /// Where the marker is shown.
    pub visibility: WaypointVisibility,
    /// Whether the marker is a temporary destination.
    pub destination: bool,
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "waypoint:{}:{}:{}:{}:{}:{}:{}:{}:{}:{}:{}:{}:{}",
            self.name,
            self.initials,
            self.x,
            self.y,
            self.z,
            self.color,
            self.disabled,
            self.kind.code(),
            self.set,
            self.rotate_on_teleport,
            self.teleport_yaw,
            self.visibility.code(),
            self.destination,
        )
    }
}

#[allow(clippy::expect_used)] // literal pattern: compiles or the crate is unusable
static RECORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^waypoint:([^:]*):([^:]*):(-?\d+):((?:-?\d+)|~):(-?\d+):(\d+):(true|false):(\d+):([^:]*):(true|false):(-?\d+):(\d+):(true|false)$",
    )
    .expect("waypoint record regex is valid")
});

/// Parse one record line back into a [`Waypoint`].
///
/// Inverse of the `Display` rendering: formatting a waypoint and parsing
/// the result recovers every field, the `~` altitude sentinel and
/// negative coordinates included.
///
/// # Errors
///
/// Returns [`ExportError::MalformedRecord`] when the line does not match
/// the record shape, and [`ExportError::FieldOutOfRange`] when color,
/// kind, or visibility fall outside their documented ranges.
pub fn parse_record(line: &str) -> Result<Waypoint, ExportError> {
    let captures = RECORD
        .captures(line)
        .ok_or_else(|| ExportError::MalformedRecord(line.to_string()))?;

    let text = |index: usize| captures.get(index).map_or("", |m| m.as_str());
    let integer = |index: usize| {
        text(index)
            .parse::<i64>()
            .map_err(|_| ExportError::MalformedRecord(line.to_string()))
    };
    let boolean = |index: usize| text(index) == "true";

    let y = match text(4) {
        "~" => Altitude::Ground,
        height => Altitude::At(
            height
                .parse::<i64>()
                .map_err(|_| ExportError::MalformedRecord(line.to_string()))?,
        ),
    };

    let color_value = integer(6)?;
    let color = u8::try_from(color_value)
        .ok()
        .filter(|&c| c <= 15)
        .ok_or(ExportError::FieldOutOfRange {
            field: "color",
            value: color_value,
        })?;

    let kind_value = integer(8)?;
    let kind = u8::try_from(kind_value)
        .ok()
        .map_or(
            Err(ExportError::FieldOutOfRange {
                field: "kind",
                value: kind_value,
            }),
            WaypointKind::from_code,
        )?;

    let visibility_value = integer(12)?;
    let visibility = u8::try_from(visibility_value)
        .ok()
        .map_or(
            Err(ExportError::FieldOutOfRange {
                field: "visibility",
                value: visibility_value,
            }),
            WaypointVisibility::from_code,
        )?;

    let yaw_value = integer(11)?;
    let teleport_yaw = i32::try_from(yaw_value).map_err(|_| ExportError::FieldOutOfRange {
        field: "yaw",
        value: yaw_value,
    })?;

    Ok(Waypoint {
        name: text(1).to_string(),
        initials: text(2).to_string(),
        x: integer(3)?,
        y,
        z: integer(5)?,
        color,
        disabled: boolean(7),
        kind,
        set: text(9).to_string(),
        rotate_on_teleport: boolean(10),
        teleport_yaw,
        visibility,
        destination: boolean(13),
    })
}
