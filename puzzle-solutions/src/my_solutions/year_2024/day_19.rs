use puzzle_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use puzzle_solver_macros::{AutoRegisterSolver, PuzzleSolver};

use crate::utils::dp_cache::{ClosureProblem, DpCache, DpError, VecBackend};

/// Linen Layout: which designs can be assembled from the available towel
/// patterns, and in how many ways.
#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(parts = 2)]
#[puzzle(year = 2024, day = 19, tags = ["memo"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData<'a> {
    towels: Vec<&'a str>,
    designs: Vec<&'a str>,
    arrangements: Option<Vec<u64>>,
}

impl PuzzleParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.trim().lines().map(str::trim);

        let towels = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("towel patterns".into()))?
            .split(',')
            .map(|towel| validate_stripes(towel.trim()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| e.at_line(0))?;

        if lines.next().is_some_and(|line| !line.is_empty()) {
            return Err(ParseError::InvalidFormat(
                "expected a blank line after the towel patterns".into(),
            )
            .at_line(1));
        }

        let designs = lines
            .enumerate()
            .map(|(idx, design)| validate_stripes(design).map_err(|e| e.at_line(idx + 2)))
            .collect::<Result<Vec<_>, _>>()?;
        if designs.is_empty() {
            return Err(ParseError::MissingData("designs".into()));
        }

        Ok(SharedData {
            towels,
            designs,
            arrangements: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let possible = arrangements(shared)?.iter().filter(|&&ways| ways > 0).count();
        Ok(possible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(arrangements(shared)?.iter().sum::<u64>().to_string())
    }
}

/// Stripe colours are single ASCII letters, which keeps byte slicing safe.
fn validate_stripes(pattern: &str) -> Result<&str, ParseError> {
    if pattern.is_empty() {
        return Err(ParseError::InvalidFormat("empty stripe pattern".into()));
    }
    if let Some(c) = pattern.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(ParseError::InvalidFormat(format!(
            "unexpected stripe colour {c:?} in {pattern:?}"
        )));
    }
    Ok(pattern)
}

/// Arrangement count of every design, computed once and shared by both parts.
fn arrangements<'s>(shared: &'s mut SharedData<'_>) -> Result<&'s [u64], SolveError> {
    let counts = match shared.arrangements.take() {
        Some(counts) => counts,
        None => shared
            .designs
            .iter()
            .map(|design| count_arrangements(&shared.towels, design))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| SolveError::SolveFailed(Box::new(e)))?,
    };
    let counts: &[u64] = shared.arrangements.insert(counts);
    Ok(counts)
}

/// Ways to lay out `design` with `towels`, memoised over suffix offsets.
fn count_arrangements(towels: &[&str], design: &str) -> Result<u64, DpError> {
    let problem = ClosureProblem::new(
        |&offset: &usize| {
            let rest = &design[offset..];
            towels
                .iter()
                .filter(|towel| rest.starts_with(**towel))
                .map(|towel| offset + towel.len())
                .collect()
        },
        |&offset: &usize, ways: Vec<u64>| {
            if offset == design.len() {
                1
            } else {
                ways.iter().sum()
            }
        },
    );

    DpCache::builder()
        .backend(VecBackend::with_capacity(design.len() + 1))
        .problem(problem)
        .build()
        .get(&0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
r, wr, b, g, bwu, rb, gb, br

brwrr
bggr
gbbr
rrbgbr
ubwu
bwurrg
brgr
bbrwb
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "6");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "16");
    }

    #[test]
    fn test_per_design_counts() {
        let towels = ["r", "wr", "b", "g", "bwu", "rb", "gb", "br"];
        assert_eq!(count_arrangements(&towels, "brwrr"), Ok(2));
        assert_eq!(count_arrangements(&towels, "gbbr"), Ok(4));
        assert_eq!(count_arrangements(&towels, "rrbgbr"), Ok(6));
        assert_eq!(count_arrangements(&towels, "ubwu"), Ok(0));
        assert_eq!(count_arrangements(&towels, "bbrwb"), Ok(0));
    }

    #[test]
    fn test_long_design_stays_iterative() {
        let design = "w".repeat(5_000);
        assert_eq!(count_arrangements(&["w"], &design), Ok(1));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Solver::parse("r, , b\n\nrb"),
            Err(ParseError::InvalidFormat(msg)) if msg.starts_with("(line 1)")
        ));
        assert!(matches!(
            Solver::parse("r, b\nrb"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Solver::parse("r, b\n\nr-b"),
            Err(ParseError::InvalidFormat(msg)) if msg.starts_with("(line 3)")
        ));
        assert!(matches!(Solver::parse("r, b"), Err(ParseError::MissingData(_))));
    }
}
