//! Tab-separated route listing.
//!
//! Reproduces the planner's stdout stream: one `x<TAB>z` line per route
//! position in visit order. When a total distance is supplied, a
//! `Route:` header precedes the listing and a trailing distance block
//! (two decimals, `blocks` unit label) follows. Integral coordinates
//! render without a decimal point.

use std::fmt::Write;

use waystone_route::Point;

/// Render a route as a listing string.
///
/// `total_distance` enables both the header and the trailing distance
/// block; `None` produces the bare position lines.
#[must_use]
pub fn to_listing(route: &[Point], total_distance: Option<f64>) -> String {
    let mut out = String::new();

    if total_distance.is_some() {
        let _ = writeln!(out, "Route:");
    }

    for point in route {
        let _ = writeln!(out, "{}\t{}", point.x, point.z);
    }

    if let Some(total) = total_distance {
        let _ = writeln!(out, "\nDistance:\n{total:.2} blocks");
    }

    out
}
