use puzzle_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use puzzle_solver_macros::{AutoRegisterSolver, PuzzleSolver};

use crate::utils::grid::{Direction, Grid, Position};
use crate::utils::search::{DenseTable, Dijkstra, SearchProblem};

/// Clumsy Crucible: least heat loss across a city block grid when the
/// crucible can only go straight for a bounded number of blocks.
#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(parts = 2)]
#[puzzle(year = 2023, day = 17, tags = ["search", "grid"])]
pub struct Solver;

impl PuzzleParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Grid::parse_digits(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        min_heat_loss(shared, 1, 3).map(|loss| loss.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        min_heat_loss(shared, 4, 10).map(|loss| loss.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Crucible {
    pos: Position,
    /// `None` only before the first move
    heading: Option<Direction>,
    /// Blocks moved in a straight line so far
    run: u8,
}

struct City<'g> {
    blocks: &'g Grid<u8>,
    min_run: u8,
    max_run: u8,
}

impl SearchProblem<Crucible, u32> for City<'_> {
    fn neighbors(&self, crucible: &Crucible) -> impl IntoIterator<Item = (Crucible, u32)> {
        let c = *crucible;
        Direction::ALL.into_iter().filter_map(move |dir| {
            let run = match c.heading {
                None => 1,
                Some(h) if h == dir => {
                    if c.run >= self.max_run {
                        return None;
                    }
                    c.run + 1
                }
                Some(h) if h == dir.opposite() => return None,
                Some(_) => {
                    if c.run < self.min_run {
                        return None;
                    }
                    1
                }
            };
            let pos = self.blocks.step(c.pos, dir)?;
            let next = Crucible {
                pos,
                heading: Some(dir),
                run,
            };
            Some((next, u32::from(self.blocks[pos])))
        })
    }

    fn is_goal(&self, crucible: &Crucible) -> bool {
        crucible.pos == self.blocks.last_position() && crucible.run >= self.min_run
    }
}

fn min_heat_loss(blocks: &Grid<u8>, min_run: u8, max_run: u8) -> Result<u32, SolveError> {
    let width = blocks.width();
    let runs = usize::from(max_run) + 1;
    // heading slot 4 is the unmoved start
    let slot = move |c: &Crucible| {
        let cell = c.pos.row * width + c.pos.col;
        let heading = c.heading.map_or(4, Direction::index);
        (cell * 5 + heading) * runs + usize::from(c.run)
    };

    let search = Dijkstra::builder()
        .table(DenseTable::new(blocks.len() * 5 * runs, slot))
        .problem(City {
            blocks,
            min_run,
            max_run,
        })
        .build();

    let start = Crucible {
        pos: Position::new(0, 0),
        heading: None,
        run: 0,
    };
    search.min_cost(start).ok_or_else(|| {
        SolveError::NoSolution(format!(
            "no route to the factory moving {min_run} to {max_run} blocks between turns"
        ))
    })
}
