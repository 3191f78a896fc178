use std::path::Path;

use anyhow::{ensure, Context, Result};
use maze_solver::Pos;

pub const SEPARATOR: &str = "================\n";
pub const TEST_DIR: &str = "tests";
pub const EXTENTION: &str = "map";

/// Parses a `row,col wall goal` header line.
pub fn parse_header(line: &str) -> Result<(Pos, char, char)> {
    let mut words = line.split_whitespace();
    let (row, col) = words
        .next()
        .and_then(|start| start.split_once(','))
        .context("Missing start")?;
    let start = Pos(row.parse()?, col.parse()?);

    let mut glyph = |what: &str| -> Result<char> {
        let word = words.next().with_context(|| format!("Missing {what}"))?;
        let mut chars = word.chars();
        let ch = chars.next().with_context(|| format!("Empty {what}"))?;
        ensure!(chars.next().is_none(), "Invalid {what}: {word:?}");
        Ok(ch)
    };
    let wall = glyph("wall")?;
    let goal = glyph("goal")?;
    Ok((start, wall, goal))
}

pub fn run_tests(subdir: &str, mut f: impl FnMut(&str) -> Result<String>) {
    let mut tests = std::fs::read_dir(Path::new(TEST_DIR).join(subdir))
        .unwrap()
        .filter_map(|ent| {
            let path = ent.unwrap().path();
            if path.extension().map_or(true, |ext| ext != EXTENTION) {
                return None;
            }
            let name = path.file_stem().unwrap().to_str().unwrap().to_owned();
            Some((name, path))
        })
        .collect::<Vec<_>>();
    tests.sort();

    let do_update_tests = std::env::var("UPDATE_EXPECT").map_or(false, |v| v == "1");

    let mut failed_cnt = 0;
    for (name, path) in &tests {
        eprint!("{name}: ");
        let content = std::fs::read_to_string(path).unwrap();
        match f(&content) {
            Ok(got) if got == content => eprintln!("\x1B[32mOK\x1B[0m"),
            Ok(got) if do_update_tests => {
                std::fs::write(path, got).unwrap();
                eprintln!("\x1B[33mUpdated\x1B[0m");
            }
            Ok(got) => {
                eprintln!("\x1B[31mFAILED\x1B[0m\n{got}");
                failed_cnt += 1;
            }
            Err(err) => {
                eprintln!("\x1B[31mFAILED\x1B[0m\n{:?}", err);
                failed_cnt += 1;
            }
        }
    }

    if failed_cnt != 0 {
        eprintln!("{failed_cnt}/{} tests failed", tests.len());
        std::process::exit(1);
    }
}
