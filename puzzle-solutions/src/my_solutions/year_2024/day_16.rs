use puzzle_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use puzzle_solver_macros::{AutoRegisterSolver, PuzzleSolver};
use rustc_hash::FxHashSet;

use crate::utils::grid::{Direction, Grid, Position};
use crate::utils::search::{Dijkstra, SearchProblem};

const STEP_COST: u32 = 1;
const TURN_COST: u32 = 1000;

/// Reindeer Maze: lowest score from `S` (facing east) to `E`, and the tiles
/// shared by all the best routes.
#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(parts = 2)]
#[puzzle(year = 2024, day = 16, tags = ["search", "grid"])]
pub struct Solver;

#[derive(Debug)]
pub struct Maze {
    walls: Grid<bool>,
    start: Position,
    end: Position,
}

impl PuzzleParser for Solver {
    type SharedData<'a> = Maze;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let tiles = Grid::parse_with(input, |c| match c {
            '#' | '.' | 'S' | 'E' => Some(c),
            _ => None,
        })?;
        let start = tiles
            .find(|&c| c == 'S')
            .ok_or_else(|| ParseError::MissingData("start tile 'S'".into()))?;
        let end = tiles
            .find(|&c| c == 'E')
            .ok_or_else(|| ParseError::MissingData("end tile 'E'".into()))?;
        let walls = Grid::from_fn(tiles.width(), tiles.height(), |pos| tiles[pos] == '#');

        Ok(Maze { walls, start, end })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let search = Dijkstra::new(&*shared);
        search
            .min_cost(shared.start_state())
            .map(|score| score.to_string())
            .ok_or_else(|| SolveError::NoSolution("the end tile is walled off".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let tree = Dijkstra::new(&*shared).explore([shared.start_state()]);
        let endings = Direction::ALL.map(|facing| Reindeer {
            pos: shared.end,
            facing,
        });
        let (_, best_endings) = tree
            .cheapest_of(endings)
            .ok_or_else(|| SolveError::NoSolution("the end tile is walled off".into()))?;

        let tiles: FxHashSet<Position> = tree
            .states_on_optimal_paths(best_endings)
            .into_iter()
            .map(|reindeer| reindeer.pos)
            .collect();
        Ok(tiles.len().to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Reindeer {
    pos: Position,
    facing: Direction,
}

impl Maze {
    fn start_state(&self) -> Reindeer {
        Reindeer {
            pos: self.start,
            facing: Direction::East,
        }
    }
}

impl SearchProblem<Reindeer, u32> for &Maze {
    fn neighbors(&self, r: &Reindeer) -> impl IntoIterator<Item = (Reindeer, u32)> {
        let forward = self
            .walls
            .step(r.pos, r.facing)
            .filter(|&pos| !self.walls[pos])
            .map(|pos| {
                let next = Reindeer {
                    pos,
                    facing: r.facing,
                };
                (next, STEP_COST)
            });
        let turns = [r.facing.turn_left(), r.facing.turn_right()].map(|facing| {
            let next = Reindeer { pos: r.pos, facing };
            (next, TURN_COST)
        });
        forward.into_iter().chain(turns)
    }

    fn is_goal(&self, r: &Reindeer) -> bool {
        r.pos == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST_EXAMPLE: &str = "\
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";

    const SECOND_EXAMPLE: &str = "\
#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################
";

    fn solve_both(input: &str) -> (String, String) {
        let mut maze = Solver::parse(input).unwrap();
        let part1 = <Solver as PartSolver<1>>::solve(&mut maze).unwrap();
        let part2 = <Solver as PartSolver<2>>::solve(&mut maze).unwrap();
        (part1, part2)
    }

    #[test]
    fn test_first_example() {
        assert_eq!(solve_both(FIRST_EXAMPLE), ("7036".into(), "45".into()));
    }

    #[test]
    fn test_second_example() {
        assert_eq!(solve_both(SECOND_EXAMPLE), ("11048".into(), "64".into()));
    }

    #[test]
    fn test_turning_around_costs_two_turns() {
        // The only way out is behind the reindeer.
        let mut maze = Solver::parse("#####\n#E.S#\n#####").unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut maze).unwrap(), "2002");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut maze).unwrap(), "3");
    }

    #[test]
    fn test_walled_off_end() {
        let mut maze = Solver::parse("#####\n#S#E#\n#####").unwrap();
        assert!(matches!(
            <Solver as PartSolver<1>>::solve(&mut maze),
            Err(SolveError::NoSolution(_))
        ));
        assert!(matches!(
            <Solver as PartSolver<2>>::solve(&mut maze),
            Err(SolveError::NoSolution(_))
        ));
    }

    #[test]
    fn test_missing_start_rejected() {
        assert!(matches!(
            Solver::parse("###\n#E#\n###"),
            Err(ParseError::MissingData(_))
        ));
    }
}
