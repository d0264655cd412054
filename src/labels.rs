// DOTA label file parsing
// One annotation per line: x1 y1 x2 y2 x3 y3 x4 y4 <category> <difficulty>

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// One oriented bounding box parsed from a label line. Point order is
/// preserved from the file; the first point is the canonical start vertex.
pub struct Annotation {
    pub points: [(f64, f64); 4],
    pub category: String,
    pub difficulty: String,
}

impl Annotation {
    /// Difficulty is significant only as the literal string "1". Anything
    /// else, including malformed text, counts as not difficult.
    pub fn is_difficult(&self) -> bool {
        self.difficulty == "1"
    }

    pub fn start_point(&self) -> (f64, f64) {
        self.points[0]
    }
}

/// Parse a single label line, or `None` if the line carries no geometry.
///
/// Metadata lines (anything containing "imagesource" or "gsd") and
/// malformed lines (fewer than 10 fields, non-numeric coordinates) are
/// skipped rather than reported; one corrupt line must not take down the
/// rest of the file.
pub fn parse_line(line: &str) -> Option<Annotation> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if line.contains("imagesource") || line.contains("gsd") {
        return None;
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 10 {
        return None;
    }

    let mut coords = [0.0f64; 8];
    for (slot, field) in coords.iter_mut().zip(&fields[..8]) {
        *slot = field.parse().ok()?;
    }

    Some(Annotation {
        points: [
            (coords[0], coords[1]),
            (coords[2], coords[3]),
            (coords[4], coords[5]),
            (coords[6], coords[7]),
        ],
        category: fields[8].to_string(),
        // Fields beyond index 9 are ignored.
        difficulty: fields[9].to_string(),
    })
}

/// Read every annotation from a label file, dropping unparseable lines.
pub fn read_label_file(path: &Path) -> Result<Vec<Annotation>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading label file {}", path.display()))?;
    Ok(contents.lines().filter_map(parse_line).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_plain_annotation_line() {
        let ann = parse_line("10 10 50 10 50 50 10 50 plane 0").unwrap();
        assert_eq!(ann.points[0], (10.0, 10.0));
        assert_eq!(ann.points[2], (50.0, 50.0));
        assert_eq!(ann.category, "plane");
        assert!(!ann.is_difficult());
    }

    #[test]
    fn difficulty_is_exact_string_match() {
        let difficult = parse_line("0 0 1 0 1 1 0 1 ship 1").unwrap();
        assert!(difficult.is_difficult());
        // "1.0", "2", or garbage all mean not difficult.
        for marker in ["1.0", "2", "true", "x"] {
            let line = format!("0 0 1 0 1 1 0 1 ship {marker}");
            assert!(!parse_line(&line).unwrap().is_difficult());
        }
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let ann = parse_line("  10 10 50 10 50 50 10 50 harbor 0  \t").unwrap();
        assert_eq!(ann.category, "harbor");
    }

    #[test]
    fn skips_empty_and_short_lines() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   ").is_none());
        assert!(parse_line("10 10 50 10 50 50 10 50 plane").is_none());
        assert!(parse_line("1 2 3").is_none());
    }

    #[test]
    fn skips_metadata_regardless_of_field_count() {
        assert!(parse_line("imagesource:GoogleEarth").is_none());
        assert!(parse_line("gsd:0.146343590398").is_none());
        // Even a field-complete line is metadata if the substring appears.
        assert!(parse_line("1 2 3 4 5 6 7 8 gsd 0").is_none());
        assert!(parse_line("1 2 3 4 5 6 7 8 imagesource 1").is_none());
    }

    #[test]
    fn skips_non_numeric_coordinates() {
        assert!(parse_line("10 10 50 ten 50 50 10 50 plane 0").is_none());
        assert!(parse_line("a b c d e f g h plane 0").is_none());
    }

    #[test]
    fn trailing_fields_are_ignored() {
        let ann = parse_line("10 10 50 10 50 50 10 50 bridge 1 extra junk").unwrap();
        assert_eq!(ann.category, "bridge");
        assert!(ann.is_difficult());
    }

    #[test]
    fn accepts_fractional_coordinates() {
        let ann = parse_line("10.5 10.25 50.0 10.0 50.0 50.0 10.0 50.0 ship 0").unwrap();
        assert_eq!(ann.start_point(), (10.5, 10.25));
    }
}
