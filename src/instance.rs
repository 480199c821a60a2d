//! Instance loading.
//!
//! Reads TSPLIB-style coordinate listings:
//!
//! ```text
//! NAME : eil51
//! TYPE : TSP
//! DIMENSION : 51
//! NODE_COORD_SECTION
//! 1 37 52
//! 2 49 49
//! EOF
//! ```
//!
//! Header lines are skipped until a line starting with `NODE` or with the
//! first record (`1 `). Records are `id x y`; reading stops at `EOF` or at
//! the first blank line inside the section. Records with fewer than three
//! fields or unparsable coordinates are skipped.

use std::path::Path;

use crate::distance::City;
use crate::error::{AnnealError, AnnealResult};

/// Parses an instance from text.
///
/// # Errors
///
/// [`AnnealError::InvalidInstance`] if no coordinates are found or the
/// first record is malformed.
pub fn parse_instance(text: &str) -> AnnealResult<Vec<City>> {
    let mut cities = Vec::new();
    let mut in_section = false;

    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();

        if line.starts_with("NODE") {
            in_section = true;
            continue;
        }
        if !in_section && line.starts_with("1 ") {
            in_section = true;
            let city = parse_record(line).ok_or_else(|| {
                AnnealError::InvalidInstance(format!(
                    "line {}: malformed first record '{line}'",
                    lineno + 1
                ))
            })?;
            cities.push(city);
            continue;
        }

        if line == "EOF" {
            break;
        }
        if line.is_empty() {
            if in_section {
                break;
            }
            continue;
        }

        if in_section {
            if let Some(city) = parse_record(line) {
                cities.push(city);
            }
        }
    }

    if cities.is_empty() {
        return Err(AnnealError::InvalidInstance("no coordinates found".into()));
    }
    tracing::debug!(cities = cities.len(), "instance parsed");
    Ok(cities)
}

/// Reads and parses an instance file.
pub fn load_instance<P: AsRef<Path>>(path: P) -> AnnealResult<Vec<City>> {
    let text = std::fs::read_to_string(path.as_ref())?;
    parse_instance(&text)
}

/// `id x y` → city. `None` for short or non-numeric records.
fn parse_record(line: &str) -> Option<City> {
    let mut parts = line.split_whitespace();
    let _id = parts.next()?;
    let x = parts.next()?.parse::<f64>().ok()?;
    let y = parts.next()?.parse::<f64>().ok()?;
    Some(City::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_header() {
        let text = "NAME : tiny\nTYPE : TSP\nDIMENSION : 3\nNODE_COORD_SECTION\n1 0 0\n2 3.5 4\n3 -1 2e1\nEOF\n";
        let cities = parse_instance(text).unwrap();
        assert_eq!(
            cities,
            vec![City::new(0.0, 0.0), City::new(3.5, 4.0), City::new(-1.0, 20.0)]
        );
    }

    #[test]
    fn test_parse_without_header() {
        let text = "1 1 1\n2 2 2\n\n3 3 3\n";
        let cities = parse_instance(text).unwrap();
        assert_eq!(cities.len(), 2);
    }

    #[test]
    fn test_skips_malformed_records() {
        let text = "NODE_COORD_SECTION\n1 0 0\n2 x y\n3 5\n4 1 1\nEOF";
        let cities = parse_instance(text).unwrap();
        assert_eq!(cities, vec![City::new(0.0, 0.0), City::new(1.0, 1.0)]);
    }

    #[test]
    fn test_leading_blank_lines() {
        let text = "\n\nNODE_COORD_SECTION\n1 0 0\n2 1 0\n";
        assert_eq!(parse_instance(text).unwrap().len(), 2);
    }

    #[test]
    fn test_empty_is_error() {
        assert!(matches!(
            parse_instance("NAME : nothing\nEOF\n"),
            Err(AnnealError::InvalidInstance(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_instance("/nonexistent/instance.txt").unwrap_err();
        assert!(matches!(err, AnnealError::Io(_)));
    }
}
