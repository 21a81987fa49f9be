use anyhow::anyhow;
use puzzle_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use puzzle_solver_macros::{AutoRegisterSolver, PuzzleSolver};
use rustc_hash::FxHashMap;

use crate::utils::grid::{Grid, Position};
use crate::utils::search::bfs::is_reachable;
use crate::utils::search::find_min_cost;

const MEMORY_SIZE: usize = 71;
const FALLEN_BYTES: usize = 1024;

/// RAM Run: walk a square memory space from the top-left corner to the
/// bottom-right one while bytes fall into it and corrupt cells.
#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(parts = 2)]
#[puzzle(year = 2024, day = 18, tags = ["search", "grid"])]
pub struct Solver;

#[derive(Debug)]
pub struct MemorySpace {
    /// Landing spots in falling order; x is the column, y the row
    bytes: Vec<Position>,
    size: usize,
    fallen: usize,
}

impl MemorySpace {
    /// Override the memory side length and how many bytes have fallen before
    /// part 1 runs.
    pub fn with_limits(self, size: usize, fallen: usize) -> Self {
        Self {
            size,
            fallen,
            ..self
        }
    }

    /// For every cell, how many bytes must fall before it is corrupted.
    fn corruption_times(&self) -> Grid<Option<usize>> {
        let mut first_hit: FxHashMap<Position, usize> = FxHashMap::default();
        for (i, &pos) in self.bytes.iter().enumerate() {
            first_hit.entry(pos).or_insert(i + 1);
        }
        Grid::from_fn(self.size, self.size, |pos| first_hit.get(&pos).copied())
    }
}

impl PuzzleParser for Solver {
    type SharedData<'a> = MemorySpace;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .lines()
            .map(|line| -> Result<Position, anyhow::Error> {
                let (x, y) = line
                    .trim()
                    .split_once(',')
                    .ok_or_else(|| anyhow!("expected 'x,y', found {line:?}"))?;
                let pos = Position::new(y.trim().parse()?, x.trim().parse()?);
                if pos.row >= MEMORY_SIZE || pos.col >= MEMORY_SIZE {
                    return Err(anyhow!("{line} lies outside the memory space"));
                }
                Ok(pos)
            })
            .enumerate()
            .map(|(line_idx, pos_res)| {
                pos_res.map_err(|e| ParseError::InvalidFormat(e.to_string()).at_line(line_idx))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|bytes| MemorySpace {
                bytes,
                size: MEMORY_SIZE,
                fallen: FALLEN_BYTES,
            })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let corrupted_at = shared.corruption_times();
        let exit = corrupted_at.last_position();
        let fallen = shared.fallen;
        let open = |pos: &Position| corrupted_at[*pos].is_none_or(|t| t > fallen);
        if !open(&Position::new(0, 0)) {
            return Err(SolveError::NoSolution("the start cell is corrupted".into()));
        }

        find_min_cost(
            Position::new(0, 0),
            |pos| {
                corrupted_at
                    .neighbors(*pos)
                    .filter(|(_, next)| open(next))
                    .map(|(_, next)| (next, 1u32))
                    .collect::<Vec<_>>()
            },
            |pos| *pos == exit,
        )
        .map(|steps| steps.to_string())
        .ok_or_else(|| SolveError::NoSolution(format!("exit unreachable after {fallen} bytes")))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let corrupted_at = shared.corruption_times();
        let exit = corrupted_at.last_position();
        let escapable = |fallen: usize| {
            let open = |pos: &Position| corrupted_at[*pos].is_none_or(|t| t > fallen);
            open(&Position::new(0, 0))
                && is_reachable(
                    Position::new(0, 0),
                    |pos| {
                        corrupted_at
                            .neighbors(*pos)
                            .filter(|(_, next)| open(next))
                            .map(|(_, next)| next)
                            .collect::<Vec<_>>()
                    },
                    |pos| *pos == exit,
                )
        };

        // Reachable after `lo` bytes, cut off after `hi`.
        let (mut lo, mut hi) = (0, shared.bytes.len());
        if escapable(hi) {
            return Err(SolveError::NoSolution(
                "the exit stays reachable after every byte has fallen".into(),
            ));
        }
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if escapable(mid) {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        tracing::debug!(byte = hi, "exit cut off");

        let blocker = shared.bytes[hi - 1];
        Ok(format!("{},{}", blocker.col, blocker.row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0
";

    fn example() -> MemorySpace {
        Solver::parse(EXAMPLE).unwrap().with_limits(7, 12)
    }

    #[test]
    fn test_part_1_example() {
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut example()).unwrap(), "22");
    }

    #[test]
    fn test_part_2_example() {
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut example()).unwrap(), "6,1");
    }

    #[test]
    fn test_no_blocking_byte() {
        let mut memory = Solver::parse("1,0\n0,2").unwrap().with_limits(3, 1);
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut memory).unwrap(), "4");
        assert!(matches!(
            <Solver as PartSolver<2>>::solve(&mut memory),
            Err(SolveError::NoSolution(_))
        ));
    }

    #[test]
    fn test_defaults_and_bad_lines() {
        let memory = Solver::parse("3,4").unwrap();
        assert_eq!((memory.size, memory.fallen), (71, 1024));
        assert_eq!(memory.bytes, vec![Position::new(4, 3)]);

        let err = Solver::parse("1,2\n3;4").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.starts_with("(line 2)")));
        assert!(Solver::parse("71,0").is_err());
    }
}
