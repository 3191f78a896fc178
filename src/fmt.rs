use std::fmt::{self, Display};

use fxhash::FxHashMap;

use crate::{Direction, Grid, Pos, Solution, SolveError, Step};

impl Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.glyph().fmt(f)
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pos.fmt(f)?;
        if let Some(dir) = self.dir {
            dir.fmt(f)?;
        }
        Ok(())
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps().iter().enumerate() {
            if i > 0 {
                " -> ".fmt(f)?;
            }
            step.fmt(f)?;
        }
        Ok(())
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, cell) in self.cells() {
            cell.fmt(f)?;
            if pos.1 + 1 == self.width() {
                "\n".fmt(f)?;
            }
        }
        Ok(())
    }
}

impl<T: fmt::Debug> Display for SolveError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::GoalMissing { goal } => write!(f, "goal {goal:?} not found in the maze"),
            SolveError::StartOutOfBounds(pos) => write!(f, "start {pos} is out of bounds"),
            SolveError::StartIsWall(pos) => write!(f, "start {pos} is a wall"),
            SolveError::Unreachable => "no path from start to goal".fmt(f),
        }
    }
}

impl<T: fmt::Debug> std::error::Error for SolveError<T> {}

/// A grid with a solution drawn over it.
pub struct Overlay<'a, T> {
    grid: &'a Grid<T>,
    solution: &'a Solution,
}

impl Solution {
    pub fn overlay<'a, T>(&'a self, grid: &'a Grid<T>) -> Overlay<'a, T> {
        Overlay {
            grid,
            solution: self,
        }
    }
}

impl<T: Display> Display for Overlay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marks = self
            .solution
            .steps()
            .iter()
            .map(|step| (step.pos, step.dir))
            .collect::<FxHashMap<_, _>>();
        for (pos, cell) in self.grid.cells() {
            match marks.get(&pos) {
                Some(None) => "@".fmt(f)?,
                Some(Some(dir)) => dir.fmt(f)?,
                None => cell.fmt(f)?,
            }
            if pos.1 + 1 == self.grid.width() {
                "\n".fmt(f)?;
            }
        }
        Ok(())
    }
}
