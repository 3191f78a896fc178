use std::fmt::Debug;

use crate::{Direction, Grid, Pos};

type IndexMap<K, V> = indexmap::IndexMap<K, V, fxhash::FxBuildHasher>;

/// Index of the entry a cell was discovered from, with the move taken.
/// The start has none.
type Link = Option<(usize, Direction)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError<T> {
    /// No cell holds the goal value.
    GoalMissing { goal: T },
    StartOutOfBounds(Pos),
    StartIsWall(Pos),
    /// The goal exists but walls separate it from the start.
    Unreachable,
}

/// Breadth-first shortest-path search over a borrowed grid.
///
/// Cells equal to the wall marker are impassable, everything else
/// (including the goal) can be walked on. Search state lives in the
/// returned [`Solution`], so one solver can run any number of searches.
#[derive(Debug, Clone)]
pub struct Solver<'a, T> {
    grid: &'a Grid<T>,
    wall: T,
}

impl<'a, T: PartialEq> Solver<'a, T> {
    pub fn new(grid: &'a Grid<T>, wall: T) -> Self {
        Self { grid, wall }
    }

    pub fn grid(&self) -> &'a Grid<T> {
        self.grid
    }

    pub fn wall(&self) -> &T {
        &self.wall
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.grid[pos] == self.wall
    }

    /// The first cell in row-major order holding `goal`.
    pub fn find_goal(&self, goal: &T) -> Option<Pos> {
        self.grid
            .cells()
            .find(|&(_, cell)| cell == goal)
            .map(|(pos, _)| pos)
    }

    pub fn try_solve(&self, start: Pos, goal: T) -> Result<Solution, SolveError<T>> {
        let Some(goal_pos) = self.find_goal(&goal) else {
            return Err(SolveError::GoalMissing { goal });
        };
        if !self.grid.contains(start) {
            return Err(SolveError::StartOutOfBounds(start));
        }
        if self.is_wall(start) {
            return Err(SolveError::StartIsWall(start));
        }

        // Keys are the visited set, insertion order is the queue, values are
        // the parent links.
        let mut parents = IndexMap::<Pos, Link>::default();
        parents.insert(start, None);

        let mut cursor = 0;
        while let Some((&pos, _)) = parents.get_index(cursor) {
            #[cfg(feature = "coz")]
            coz::progress!("Expand");

            if pos == goal_pos {
                return Ok(Solution::new(parents, cursor));
            }

            for (dir, next) in self.grid.neighbors(pos) {
                if self.is_wall(next) {
                    continue;
                }
                parents.entry(next).or_insert(Some((cursor, dir)));
            }
            cursor += 1;
        }

        Err(SolveError::Unreachable)
    }
}

impl<'a, T: PartialEq + Debug> Solver<'a, T> {
    /// Like [`Solver::try_solve`], but folds every failure into `None`.
    /// A missing goal value is reported on stderr first.
    pub fn solve_bfs(&self, start: Pos, goal: T) -> Option<Solution> {
        match self.try_solve(start, goal) {
            Ok(solution) => Some(solution),
            Err(err @ SolveError::GoalMissing { .. }) => {
                eprintln!("Error: {err}");
                None
            }
            Err(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    pub pos: Pos,
    /// Move that entered `pos`; `None` for the start.
    pub dir: Option<Direction>,
}

#[derive(Debug, Clone)]
pub struct Solution {
    steps: Vec<Step>,
    parents: IndexMap<Pos, Link>,
}

impl Solution {
    fn new(parents: IndexMap<Pos, Link>, goal_idx: usize) -> Self {
        let mut steps = std::iter::successors(Some(goal_idx), |&i| {
            parents[i].map(|(parent, _)| parent)
        })
        .filter_map(|i| {
            let (&pos, link) = parents.get_index(i)?;
            Some(Step {
                pos,
                dir: link.map(|(_, dir)| dir),
            })
        })
        .collect::<Vec<_>>();
        steps.reverse();
        Self { steps, parents }
    }

    /// Path from start to goal, each cell annotated with the move into it.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn path(&self) -> impl Iterator<Item = Pos> + '_ {
        self.steps.iter().map(|step| step.pos)
    }

    pub fn start(&self) -> Pos {
        self.steps[0].pos
    }

    pub fn goal(&self) -> Pos {
        self.steps[self.steps.len() - 1].pos
    }

    /// Number of cells on the path, both ends included.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: a path holds at least the start.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn moves(&self) -> usize {
        self.steps.len() - 1
    }

    /// Number of cells discovered before the goal was dequeued.
    pub fn explored(&self) -> usize {
        self.parents.len()
    }

    /// The cell `pos` was first discovered from. `None` for the start and
    /// for cells the search never reached.
    pub fn parent(&self, pos: Pos) -> Option<Pos> {
        let (parent, _) = (*self.parents.get(&pos)?)?;
        self.parents.get_index(parent).map(|(&pos, _)| pos)
    }
}
