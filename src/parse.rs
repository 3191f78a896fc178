use std::str::FromStr;

use anyhow::{ensure, Context, Result};

use crate::Grid;

/// One row per line, one cell per character. Blank lines around the grid
/// and indentation are ignored.
impl FromStr for Grid<char> {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s
            .trim()
            .lines()
            .map(|line| line.trim())
            .enumerate();

        let (_, first) = lines.next().context("Missing grid content")?;
        ensure!(!first.is_empty(), "Missing grid content");
        let width = first.chars().count();

        let mut rows = vec![first.chars().collect::<Vec<_>>()];
        for (i, line) in lines {
            let row = line.chars().collect::<Vec<_>>();
            ensure!(
                row.len() == width,
                "Width mismatch on line {}, expecting width {width}",
                i + 1,
            );
            rows.push(row);
        }

        Grid::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Grid, Pos};

    #[test]
    fn parse_trims_lines() {
        let grid = "\n  ab\n  cd\n\n".parse::<Grid<char>>().unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 2);
        assert_eq!(grid[Pos(1, 0)], 'c');
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!("".parse::<Grid<char>>().is_err());
        assert!("  \n \n".parse::<Grid<char>>().is_err());

        let err = "abc\nab\nabc".parse::<Grid<char>>().unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }
}
