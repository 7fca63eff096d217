/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Reference intensity tables
//!
//! Tables are plain text, one q-point per line, one whitespace-separated
//! value per branch. Blank lines and lines starting with `#` are ignored.

use super::errors::{Result, SpectrumError};
use ndarray::Array2;
use std::fs;
use std::path::Path;

/// Parse a row-major numeric table
pub fn parse_table(text: &str) -> Result<Array2<f64>> {
    let mut values = Vec::new();
    let mut cols: Option<usize> = None;
    let mut rows = 0;

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|e| {
                    SpectrumError::Parse(format!("line {}: '{}': {}", line_no + 1, token, e))
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        match cols {
            Some(n) if n != row.len() => {
                return Err(SpectrumError::ShapeMismatch(format!(
                    "line {} has {} columns, expected {}",
                    line_no + 1,
                    row.len(),
                    n
                )))
            }
            _ => cols = Some(row.len()),
        }

        values.extend(row);
        rows += 1;
    }

    let cols = cols.ok_or_else(|| SpectrumError::Parse("table is empty".to_string()))?;
    Array2::from_shape_vec((rows, cols), values)
        .map_err(|e| SpectrumError::ShapeMismatch(e.to_string()))
}

/// Load a numeric table from a file
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<Array2<f64>> {
    let text = fs::read_to_string(path)?;
    parse_table(&text)
}

/// Format a table the way it is parsed, six decimals per value
pub fn format_table(table: &Array2<f64>) -> String {
    let mut out = String::new();
    for row in table.rows() {
        let line: Vec<String> = row.iter().map(|v| format!("{:10.6}", v)).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table() {
        let table = parse_table("# S(Q, branch)\n 1.0 2.0\n\n3.5 -4e-1\n").unwrap();
        assert_eq!(table.dim(), (2, 2));
        assert_eq!(table[(1, 1)], -0.4);
    }

    #[test]
    fn test_ragged_and_bad_tables() {
        assert!(matches!(
            parse_table("1 2 3\n4 5\n"),
            Err(SpectrumError::ShapeMismatch(_))
        ));
        assert!(matches!(parse_table("1 x 3\n"), Err(SpectrumError::Parse(_))));
        assert!(matches!(parse_table("# nothing\n"), Err(SpectrumError::Parse(_))));
    }

    #[test]
    fn test_format_round_trip() {
        let table = parse_table("248.850565 475.343599\n 0.000000 3.366711\n").unwrap();
        assert_eq!(parse_table(&format_table(&table)).unwrap(), table);
    }
}
