use anyhow::{bail, Context, Result};
use console::{style, Term};
use maze_solver::{Grid, Pos, Solver};

const FIXTURE: &str = "
    0011111000
    1010001010
    1010101010
    1010101010
    1012121010
    1010100010
    1010101010
    1010101010
    1010101010
    100010#010
";
const WALL: char = '1';
const GOAL: char = '#';
const START: Pos = Pos(0, 0);

fn parse_glyph(arg: Option<String>, default: char, what: &str) -> Result<char> {
    let Some(arg) = arg else { return Ok(default) };
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => bail!("Invalid {what} {arg:?}, expecting a single character"),
    }
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let grid = match args.next() {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read the maze {path:?}"))?
            .parse::<Grid<char>>()
            .context("Failed to parse the maze")?,
        None => FIXTURE.parse().context("Failed to parse the built-in maze")?,
    };
    let wall = parse_glyph(args.next(), WALL, "wall")?;
    let goal = parse_glyph(args.next(), GOAL, "goal")?;

    let term = Term::stdout();
    term.write_line(&format!(
        "Searching for the shortest path from {START} to {goal:?}..."
    ))?;

    let solver = Solver::new(&grid, wall);
    match solver.solve_bfs(START, goal) {
        Some(solution) => {
            term.write_line(&format!(
                "{} ({} moves, {} cells explored):",
                style("Found a shortest path").green().bold(),
                solution.moves(),
                solution.explored(),
            ))?;
            term.write_line(&solution.to_string())?;
            term.write_line("")?;
            term.write_str(&solution.overlay(&grid).to_string())?;
        }
        None => {
            term.write_line(&style("No valid path from start to goal.").red().to_string())?;
        }
    }

    Ok(())
}
