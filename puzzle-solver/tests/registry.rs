use puzzle_solver::{
    DynSolver, ParseError, PuzzleParser, RegistrationError, SolveError, Solver, SolverError,
    SolverRegistryBuilder,
};

struct Echo;

impl PuzzleParser for Echo {
    // Borrow the raw input instead of copying it
    type SharedData<'a> = &'a str;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::MissingData("empty input".into()));
        }
        Ok(trimmed)
    }
}

impl Solver for Echo {
    const PARTS: u8 = 1;

    fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
        Ok(shared.to_uppercase())
    }
}

struct NeverSolves;

impl PuzzleParser for NeverSolves {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl Solver for NeverSolves {
    const PARTS: u8 = 2;

    fn solve_part(_shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
        Err(SolveError::NoSolution("goal unreachable".into()))
    }
}

#[test]
fn test_register_and_create() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<Echo>(2024, 3)
        .unwrap()
        .register_solver::<NeverSolves>(2023, 9)
        .unwrap()
        .build();

    assert_eq!(registry.len(), 2);
    assert!(registry.contains(2024, 3));
    assert!(!registry.contains(2024, 4));

    let mut solver = registry.create_solver(2024, 3, "  hello \n").unwrap();
    assert_eq!(solver.year(), 2024);
    assert_eq!(solver.day(), 3);
    assert_eq!(solver.parts(), 1);
    assert_eq!(solver.solve(1).unwrap().answer, "HELLO");
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());
}

#[test]
fn test_iter_info_is_ordered_by_date() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<Echo>(2024, 3)
        .unwrap()
        .register_solver::<NeverSolves>(2023, 9)
        .unwrap()
        .build();

    let dates: Vec<(u16, u8, u8)> = registry
        .iter_info()
        .map(|info| (info.year, info.day, info.parts))
        .collect();
    assert_eq!(dates, vec![(2023, 9, 2), (2024, 3, 1)]);
}

#[test]
fn test_duplicate_registration_rejected() {
    let result = SolverRegistryBuilder::new()
        .register_solver::<Echo>(2024, 3)
        .unwrap()
        .register_solver::<NeverSolves>(2024, 3);

    assert!(matches!(
        result,
        Err(RegistrationError::DuplicateSolver(2024, 3))
    ));
}

#[test]
fn test_out_of_range_registration_rejected() {
    let result = SolverRegistryBuilder::new().register_solver::<Echo>(2024, 26);
    assert!(matches!(
        result,
        Err(RegistrationError::InvalidYearDay(2024, 26))
    ));
}

#[test]
fn test_parse_failure_surfaces_as_solver_error() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<Echo>(2024, 3)
        .unwrap()
        .build();

    let result = registry.create_solver(2024, 3, "   ");
    assert!(matches!(
        result,
        Err(SolverError::ParseError(ParseError::MissingData(_)))
    ));
}

#[test]
fn test_no_solution_and_out_of_range_parts() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<NeverSolves>(2023, 9)
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2023, 9, "").unwrap();
    assert!(matches!(solver.solve(1), Err(SolveError::NoSolution(_))));
    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
}
