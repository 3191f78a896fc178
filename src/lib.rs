use std::ops::Index;

use anyhow::{ensure, Result};
use arrayvec::ArrayVec;

mod fmt;
mod parse;
pub mod solve;

pub use fmt::Overlay;
pub use solve::{Solution, SolveError, Solver, Step};

/// A `(row, col)` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos(pub usize, pub usize);

impl Pos {
    pub fn row(self) -> usize {
        self.0
    }

    pub fn col(self) -> usize {
        self.1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Expansion order of the search. Changing it changes which of several
    /// shortest paths is returned.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The move leading from `from` to `to`, if they are 4-neighbors.
    pub fn between(from: Pos, to: Pos) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| {
            let (dr, dc) = dir.offset();
            from.0.checked_add_signed(dr) == Some(to.0)
                && from.1.checked_add_signed(dc) == Some(to.1)
        })
    }

    pub fn glyph(self) -> char {
        match self {
            Direction::Up => '↑',
            Direction::Down => '↓',
            Direction::Left => '←',
            Direction::Right => '→',
        }
    }
}

/// A non-empty rectangular grid stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    height: usize,
    width: usize,
    cells: Box<[T]>,
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;
    fn index(&self, pos: Pos) -> &Self::Output {
        &self.cells[pos.0 * self.width + pos.1]
    }
}

impl<T> Grid<T> {
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        ensure!(!rows.is_empty(), "Empty grid");
        let width = rows[0].len();
        ensure!(width != 0, "Empty first row");

        let height = rows.len();
        let mut cells = Vec::with_capacity(height * width);
        for (i, row) in rows.into_iter().enumerate() {
            ensure!(
                row.len() == width,
                "Width mismatch on row {i}: got {}, expecting width {width}",
                row.len(),
            );
            cells.extend(row);
        }

        Ok(Self {
            height,
            width,
            cells: cells.into(),
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.0 < self.height && pos.1 < self.width
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        self.contains(pos).then(|| &self[pos])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, &T)> + '_ {
        let idx_iter = std::iter::successors(Some(Pos(0, 0)), |&Pos(r, c)| {
            Some(if c + 1 < self.width {
                Pos(r, c + 1)
            } else {
                Pos(r + 1, 0)
            })
        });
        idx_iter.zip(self.cells.iter())
    }

    pub fn sibling_pos(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        let (dr, dc) = dir.offset();
        let r = pos.0.checked_add_signed(dr)?;
        let c = pos.1.checked_add_signed(dc)?;
        if self.height <= r || self.width <= c {
            return None;
        }
        Some(Pos(r, c))
    }

    /// In-bounds neighbors of `pos`, in [`Direction::ALL`] order.
    pub fn neighbors(&self, pos: Pos) -> ArrayVec<(Direction, Pos), 4> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| Some((dir, self.sibling_pos(pos, dir)?)))
            .collect()
    }
}
