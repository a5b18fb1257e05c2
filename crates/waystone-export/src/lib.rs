//! waystone-export: Pure format serializers (sans-IO)
//!
//! Converts planned routes into output formats: Xaero minimap waypoint
//! records and the tab-separated route listing. All functions return
//! `String`s; file placement lives in `waystone-cli`.

pub mod listing;
pub mod xaero;

pub use listing::to_listing;
pub use xaero::{
    Altitude, ExportError, Waypoint, WaypointKind, WaypointVisibility, parse_record,
};
