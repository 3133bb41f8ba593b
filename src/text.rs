//! Text Grid serialization.
//!
//! A Text Grid is `height` lines of `width` space-separated decimal
//! samples in `[0, 255]`, row-major, no header. Each sample is followed
//! by a single space and each row by a newline, the exact layout the
//! heightmap tooling has always produced.
use crate::error::GridError;
use crate::grid::{GridDims, HeightGrid};

/// Render a grid as a Text Grid, trailing space per sample included.
pub fn write_text_grid(grid: &HeightGrid) -> String {
    // worst case four bytes per sample ("255 ")
    let mut out = String::with_capacity(grid.dims().len() * 4 + grid.height());
    for y in 0..grid.height() {
        for &v in grid.row(y) {
            out.push_str(&v.to_string());
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

/// Parse a Text Grid of the declared dimensions.
///
/// Malformed input is rejected, never truncated or padded: a row with
/// too few or too many samples, a missing row, or extra non-blank
/// trailing rows are all a [`GridError::DimensionMismatch`].
pub fn parse_text_grid(content: &str, dims: GridDims) -> Result<HeightGrid, GridError> {
    let mut grid = HeightGrid::new(dims);
    let mut lines = content.lines();
    for y in 0..dims.height {
        let line = lines.next().ok_or(GridError::DimensionMismatch {
            line: y + 1,
            what: "rows",
            expected: dims.height,
            found: y,
        })?;
        let mut count = 0usize;
        for token in line.split_ascii_whitespace() {
            count += 1;
            if count > dims.width {
                count += line.split_ascii_whitespace().skip(count).count();
                return Err(GridError::DimensionMismatch {
                    line: y + 1,
                    what: "samples",
                    expected: dims.width,
                    found: count,
                });
            }
            let value: i64 = token.parse().map_err(|_| GridError::MalformedToken {
                line: y + 1,
                token: token.to_string(),
            })?;
            if !(0..=255).contains(&value) {
                return Err(GridError::ValueRange { line: y + 1, value });
            }
            grid.set(count - 1, y, value as u8);
        }
        if count < dims.width {
            return Err(GridError::DimensionMismatch {
                line: y + 1,
                what: "samples",
                expected: dims.width,
                found: count,
            });
        }
    }
    // Extra non-blank rows mean the producer wrote a larger grid than
    // declared; trailing blank lines are tolerated.
    for (extra, line) in lines.enumerate() {
        if !line.trim().is_empty() {
            let found = dims.height + extra + 1;
            return Err(GridError::DimensionMismatch {
                line: found,
                what: "rows",
                expected: dims.height,
                found,
            });
        }
    }
    Ok(grid)
}

/// Infer grid dimensions from the text itself: the token count of the
/// first line by the number of non-blank lines. Scanning stops at the
/// first blank line.
pub fn sniff_dims(content: &str) -> Result<GridDims, GridError> {
    let mut width = 0usize;
    let mut height = 0usize;
    for line in content.lines() {
        if line.trim().is_empty() {
            break;
        }
        if height == 0 {
            width = line.split_ascii_whitespace().count();
        }
        height += 1;
    }
    if width == 0 || height == 0 {
        return Err(GridError::DimensionMismatch {
            line: 1,
            what: "rows",
            expected: 1,
            found: 0,
        });
    }
    Ok(GridDims::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_2x2(values: [[u8; 2]; 2]) -> HeightGrid {
        let mut grid = HeightGrid::new(GridDims::new(2, 2));
        for (y, row) in values.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                grid.set(x, y, v);
            }
        }
        grid
    }

    #[test]
    fn writes_trailing_space_per_sample() {
        let grid = grid_2x2([[10, 20], [30, 40]]);
        assert_eq!(write_text_grid(&grid), "10 20 \n30 40 \n");
    }

    #[test]
    fn parses_declared_grid() {
        let grid = parse_text_grid("5 5\n5 5\n", GridDims::new(2, 2)).unwrap();
        assert_eq!(grid.as_slice(), &[5, 5, 5, 5]);
    }

    #[test]
    fn short_row_is_dimension_mismatch() {
        let err = parse_text_grid("5 5\n5\n", GridDims::new(2, 2)).unwrap_err();
        match err {
            GridError::DimensionMismatch {
                line,
                expected,
                found,
                ..
            } => {
                assert_eq!((line, expected, found), (2, 2, 1));
            }
            other => panic!("expected DimensionMismatch, got {other}"),
        }
    }

    #[test]
    fn long_row_is_dimension_mismatch() {
        let err = parse_text_grid("5 5 5 5\n5 5\n", GridDims::new(2, 2)).unwrap_err();
        match err {
            GridError::DimensionMismatch {
                line,
                expected,
                found,
                ..
            } => {
                assert_eq!((line, expected, found), (1, 2, 4));
            }
            other => panic!("expected DimensionMismatch, got {other}"),
        }
    }

    #[test]
    fn missing_row_is_dimension_mismatch() {
        let err = parse_text_grid("5 5\n", GridDims::new(2, 2)).unwrap_err();
        assert!(matches!(
            err,
            GridError::DimensionMismatch {
                what: "rows",
                expected: 2,
                found: 1,
                ..
            }
        ));
    }

    #[test]
    fn extra_row_is_dimension_mismatch() {
        let err = parse_text_grid("5 5\n5 5\n5 5\n", GridDims::new(2, 2)).unwrap_err();
        assert!(matches!(
            err,
            GridError::DimensionMismatch {
                what: "rows",
                expected: 2,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn trailing_blank_lines_are_tolerated() {
        let grid = parse_text_grid("5 5\n5 5\n\n", GridDims::new(2, 2)).unwrap();
        assert_eq!(grid.as_slice(), &[5, 5, 5, 5]);
    }

    #[test]
    fn non_integer_token_is_malformed() {
        let err = parse_text_grid("5 abc\n5 5\n", GridDims::new(2, 2)).unwrap_err();
        match err {
            GridError::MalformedToken { line, token } => {
                assert_eq!(line, 1);
                assert_eq!(token, "abc");
            }
            other => panic!("expected MalformedToken, got {other}"),
        }
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = parse_text_grid("5 300\n5 5\n", GridDims::new(2, 2)).unwrap_err();
        assert!(matches!(err, GridError::ValueRange { line: 1, value: 300 }));

        let err = parse_text_grid("-1 5\n5 5\n", GridDims::new(2, 2)).unwrap_err();
        assert!(matches!(err, GridError::ValueRange { line: 1, value: -1 }));
    }

    #[test]
    fn sniff_matches_written_grid() {
        let grid = grid_2x2([[1, 2], [3, 4]]);
        let text = write_text_grid(&grid);
        assert_eq!(sniff_dims(&text).unwrap(), GridDims::new(2, 2));
    }

    #[test]
    fn sniff_rejects_empty_input() {
        assert!(sniff_dims("").is_err());
        assert!(sniff_dims("\n\n").is_err());
    }
}
