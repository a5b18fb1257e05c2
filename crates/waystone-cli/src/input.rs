//! Structure-list loading and filtering.
//!
//! Reads the flat export produced by cubiomes viewer: a five-line
//! preamble, then a `;`-separated header row naming the columns, then
//! one data row per structure. Column positions are resolved from the
//! header rather than assumed.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use waystone_route::Point;

/// Preamble lines before the header row in a cubiomes viewer export.
const PREAMBLE_LINES: usize = 5;

/// Errors from loading or filtering the structure list.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The export file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file ended before the header row.
    #[error("structure export has no header row after the preamble")]
    MissingHeader,

    /// A required column is absent from the header row.
    #[error("structure export header has no {0:?} column")]
    MissingColumn(&'static str),

    /// A data row is missing fields or carries unparsable coordinates.
    #[error("malformed structure row at line {line}")]
    MalformedRow {
        /// 1-based line number in the export file.
        line: usize,
    },

    /// The `--use-regex-in-details` pattern failed to compile.
    #[error("invalid details pattern: {0}")]
    BadDetailsPattern(#[from] regex::Error),
}

/// Which structures to keep out of the export.
#[derive(Debug, Clone)]
pub struct StructureFilter {
    /// Structure kind, matched case-insensitively against the
    /// `structure` column.
    pub kind: String,
    /// Optional details filter. Rows without details never match.
    pub details: Option<String>,
    /// Interpret `details` as a regular expression anchored at the
    /// start of the details field instead of a substring.
    pub regex_details: bool,
}

/// Load and filter the structure list at `path`.
///
/// # Errors
///
/// Returns [`InputError::Io`] when the file cannot be read, and the
/// corresponding parse variants for a missing header, missing columns,
/// malformed rows, or an invalid details regex.
pub fn load_structures(path: &Path, filter: &StructureFilter) -> Result<Vec<Point>, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_structures(&text, filter)
}

/// Parse an in-memory structure export.
///
/// Split from [`load_structures`] so filtering stays a pure function of
/// the file contents.
///
/// # Errors
///
/// Same parse variants as [`load_structures`], minus I/O.
pub fn parse_structures(text: &str, filter: &StructureFilter) -> Result<Vec<Point>, InputError> {
    let mut lines = text.lines().skip(PREAMBLE_LINES);
    let header = lines.next().ok_or(InputError::MissingHeader)?;
    let columns: Vec<&str> = header.split(';').map(str::trim).collect();

    let column = |name: &'static str| {
        columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))
            .ok_or(InputError::MissingColumn(name))
    };
    let structure_column = column("structure")?;
    let x_column = column("x")?;
    let z_column = column("z")?;
    let details_column = columns
        .iter()
        .position(|c| c.eq_ignore_ascii_case("details"));

    // Anchor the user pattern at the start of the details field, the
    // same place the substring filter's regex counterpart matches from.
    let details_regex = match &filter.details {
        Some(pattern) if filter.regex_details => Some(Regex::new(&format!("^(?:{pattern})"))?),
        _ => None,
    };

    let mut points = Vec::new();
    for (offset, row) in lines.enumerate() {
        if row.trim().is_empty() {
            continue;
        }
        let line = PREAMBLE_LINES + 2 + offset;
        let fields: Vec<&str> = row.split(';').map(str::trim).collect();
        let field = |index: usize| {
            fields
                .get(index)
                .copied()
                .ok_or(InputError::MalformedRow { line })
        };

        if !field(structure_column)?.eq_ignore_ascii_case(&filter.kind) {
            continue;
        }

        if let Some(wanted) = &filter.details {
            let details = details_column
                .and_then(|index| fields.get(index))
                .copied()
                .filter(|d| !d.is_empty());
            let Some(details) = details else {
                continue; // No details recorded: never matches a filter.
            };
            let matched = details_regex
                .as_ref()
                .map_or_else(|| details.contains(wanted.as_str()), |re| re.is_match(details));
            if !matched {
                continue;
            }
        }

        let x: f64 = field(x_column)?
            .parse()
            .map_err(|_| InputError::MalformedRow { line })?;
        let z: f64 = field(z_column)?
            .parse()
            .map_err(|_| InputError::MalformedRow { line })?;
        points.push(Point::new(x, z));
    }

    Ok(points)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# cubiomes viewer export
# seed: 1234567
# version: 1.21
# radius: 5000
#
structure;x;z;details
fortress;-1424;976;
fortress;320;-2081;
monument;512;512;
village;100;-300;plains
village;2000;1500;desert
end_city;4096;-4096;with ship
";

    fn kind(kind: &str) -> StructureFilter {
        StructureFilter {
            kind: kind.to_string(),
            details: None,
            regex_details: false,
        }
    }

    #[test]
    fn filters_by_structure_kind() {
        let points = parse_structures(SAMPLE, &kind("fortress")).unwrap();
        assert_eq!(
            points,
            vec![Point::new(-1424.0, 976.0), Point::new(320.0, -2081.0)]
        );
    }

    #[test]
    fn kind_matching_is_case_insensitive() {
        let points = parse_structures(SAMPLE, &kind("Monument")).unwrap();
        assert_eq!(points, vec![Point::new(512.0, 512.0)]);
    }

    #[test]
    fn no_matches_is_empty_not_an_error() {
        let points = parse_structures(SAMPLE, &kind("stronghold")).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn details_substring_filter() {
        let filter = StructureFilter {
            details: Some("desert".to_string()),
            ..kind("village")
        };
        let points = parse_structures(SAMPLE, &filter).unwrap();
        assert_eq!(points, vec![Point::new(2000.0, 1500.0)]);
    }

    #[test]
    fn rows_without_details_never_match_a_details_filter() {
        let filter = StructureFilter {
            details: Some("anything".to_string()),
            ..kind("fortress")
        };
        let points = parse_structures(SAMPLE, &filter).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn details_regex_filter_is_anchored() {
        let filter = StructureFilter {
            details: Some("with|plains".to_string()),
            regex_details: true,
            ..kind("end_city")
        };
        let points = parse_structures(SAMPLE, &filter).unwrap();
        assert_eq!(points, vec![Point::new(4096.0, -4096.0)]);

        // "ship" appears in the details but not at the start.
        let unanchored = StructureFilter {
            details: Some("ship".to_string()),
            regex_details: true,
            ..kind("end_city")
        };
        let points = parse_structures(SAMPLE, &unanchored).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn invalid_details_regex_is_reported() {
        let filter = StructureFilter {
            details: Some("(unclosed".to_string()),
            regex_details: true,
            ..kind("village")
        };
        assert!(matches!(
            parse_structures(SAMPLE, &filter),
            Err(InputError::BadDetailsPattern(_))
        ));
    }

    #[test]
    fn header_columns_are_resolved_by_name() {
        // Same data, different column order.
        let reordered = "\
a
b
c
d
e
x;details;structure;z
-10;;fortress;20
";
        let points = parse_structures(reordered, &kind("fortress")).unwrap();
        assert_eq!(points, vec![Point::new(-10.0, 20.0)]);
    }

    #[test]
    fn missing_header_is_an_error() {
        assert!(matches!(
            parse_structures("one\ntwo\n", &kind("fortress")),
            Err(InputError::MissingHeader)
        ));
    }

    #[test]
    fn missing_column_is_an_error() {
        let text = "a\nb\nc\nd\ne\nstructure;x\nfortress;1\n";
        assert!(matches!(
            parse_structures(text, &kind("fortress")),
            Err(InputError::MissingColumn("z"))
        ));
    }

    #[test]
    fn malformed_coordinates_are_an_error_with_line_number() {
        let text = "a\nb\nc\nd\ne\nstructure;x;z\nfortress;not-a-number;5\n";
        assert!(matches!(
            parse_structures(text, &kind("fortress")),
            Err(InputError::MalformedRow { line: 7 })
        ));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let text = "a\nb\nc\nd\ne\nstructure;x;z\n\nfortress;1;2\n\n";
        let points = parse_structures(text, &kind("fortress")).unwrap();
        assert_eq!(points, vec![Point::new(1.0, 2.0)]);
    }
}
