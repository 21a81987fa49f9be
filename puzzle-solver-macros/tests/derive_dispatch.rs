use puzzle_solver::{
    AutoRegisterSolver, ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError, Solver,
    SolverRegistryBuilder,
};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(parts = 2)]
#[puzzle(year = 2019, day = 25, tags = ["macro-test", "dispatch"])]
pub struct Numbers;

pub struct NumbersData {
    values: Vec<i64>,
    sum_calls: usize,
}

impl PuzzleParser for Numbers {
    type SharedData<'a> = NumbersData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let values = input
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                line.trim()
                    .parse::<i64>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()).at_line(idx))
            })
            .collect::<Result<_, _>>()?;
        Ok(NumbersData {
            values,
            sum_calls: 0,
        })
    }
}

impl PartSolver<1> for Numbers {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.sum_calls += 1;
        Ok(shared.values.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Numbers {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.values.iter().product::<i64>().to_string())
    }
}

#[test]
fn test_parts_constant_generated() {
    assert_eq!(<Numbers as Solver>::PARTS, 2);
}

#[test]
fn test_solve_part_dispatches_to_part_solvers() {
    let mut shared = Numbers::parse("2\n3\n4").unwrap();

    assert_eq!(Numbers::solve_part(&mut shared, 1).unwrap(), "9");
    assert_eq!(Numbers::solve_part(&mut shared, 2).unwrap(), "24");
    assert_eq!(shared.sum_calls, 1);
}

#[test]
fn test_unknown_part_is_not_implemented() {
    let mut shared = Numbers::parse("1").unwrap();

    assert!(matches!(
        Numbers::solve_part(&mut shared, 0),
        Err(SolveError::PartNotImplemented(0))
    ));
    assert!(matches!(
        Numbers::solve_part(&mut shared, 3),
        Err(SolveError::PartNotImplemented(3))
    ));
}

#[test]
fn test_parse_error_reports_line() {
    let err = Numbers::parse("1\nx").err().unwrap();
    assert_eq!(err, ParseError::InvalidFormat("(line 2) Expected integer".into()));
}

#[test]
fn test_auto_registered_plugin_is_discoverable() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"macro-test"))
        .unwrap()
        .build();

    assert_eq!(registry.len(), 1);
    let info = registry.get_info(2019, 25).unwrap();
    assert_eq!(info.parts, 2);

    let mut solver = registry.create_solver(2019, 25, "5\n6").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "11");
    assert_eq!(solver.solve(2).unwrap().answer, "30");
}
