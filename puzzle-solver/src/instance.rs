//! Parsed solver instances and their timing

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Wall-clock span of one parse or solve step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Timing {
    /// Run `f` and record when it started and finished
    pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Timing) {
        let start = Utc::now();
        let value = f();
        let end = Utc::now();
        (value, Timing { start, end })
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Answer to one part together with how long it took
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub timing: Timing,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.timing.duration()
    }
}

/// A parsed puzzle ready to be solved part by part
///
/// Owns the shared data for one year-day problem, so later parts see
/// whatever earlier parts cached in it.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_timing: Timing,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` and wrap the result, recording parse timing
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parse_timing) = Timing::measure(|| S::parse(input));
        let shared =
            shared.inspect_err(|e| tracing::debug!(year, day, error = %e, "parse failed"))?;

        Ok(Self {
            year,
            day,
            shared,
            parse_timing,
        })
    }

    /// Borrow the parsed data
    pub fn shared(&self) -> &S::SharedData<'a> {
        &self.shared
    }
}

/// Type-erased interface for working with any solver through dynamic dispatch
///
/// # Example
///
/// ```no_run
/// use puzzle_solver::DynSolver;
///
/// fn example(mut solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     let result = solver.solve(1)?;
///     println!("Part 1: {} (took {})", result.answer, result.duration());
///     println!("Parse took {}", solver.parse_duration());
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve the specified part with timing
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// When parsing ran
    fn parse_timing(&self) -> Timing;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts this solver supports
    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_timing().duration()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, timing) =
            Timing::measure(|| S::solve_part_checked_range(&mut self.shared, part));
        tracing::trace!(
            year = self.year,
            day = self.day,
            part,
            ok = answer.is_ok(),
            elapsed = %timing.duration(),
            "part finished"
        );

        Ok(SolveResult {
            answer: answer?,
            timing,
        })
    }

    fn parse_timing(&self) -> Timing {
        self.parse_timing
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{PartSolver, PuzzleParser};

    /// Part 2 reads what part 1 left behind
    struct Counter;

    impl PuzzleParser for Counter {
        type SharedData<'a> = (Vec<&'a str>, Option<usize>);

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            if input.is_empty() {
                return Err(ParseError::MissingData("empty input".into()));
            }
            Ok((input.split_whitespace().collect(), None))
        }
    }

    impl PartSolver<1> for Counter {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            let count = shared.0.len();
            shared.1 = Some(count);
            Ok(count.to_string())
        }
    }

    impl PartSolver<2> for Counter {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            shared
                .1
                .map(|count| (count * 2).to_string())
                .ok_or_else(|| SolveError::NoSolution("part 1 has not run".into()))
        }
    }

    impl Solver for Counter {
        const PARTS: u8 = 2;

        fn solve_part(
            shared: &mut Self::SharedData<'_>,
            part: u8,
        ) -> Result<String, SolveError> {
            match part {
                1 => <Self as PartSolver<1>>::solve(shared),
                2 => <Self as PartSolver<2>>::solve(shared),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    #[test]
    fn test_shared_data_survives_between_parts() {
        let mut instance = SolverInstance::<Counter>::new(2024, 3, "a b c").unwrap();
        assert!(matches!(instance.solve(2), Err(SolveError::NoSolution(_))));
        assert_eq!(instance.solve(1).unwrap().answer, "3");
        assert_eq!(instance.solve(2).unwrap().answer, "6");
        assert_eq!(instance.shared().1, Some(3));
    }

    #[test]
    fn test_timing_is_ordered() {
        let instance = SolverInstance::<Counter>::new(2024, 3, "a").unwrap();
        let timing = instance.parse_timing();
        assert!(timing.start <= timing.end);
        assert!(instance.parse_duration() >= TimeDelta::zero());
        assert_eq!((instance.year(), instance.day(), instance.parts()), (2024, 3, 2));
    }

    #[test]
    fn test_parse_failure_and_out_of_range_part() {
        assert!(matches!(
            SolverInstance::<Counter>::new(2024, 3, ""),
            Err(ParseError::MissingData(_))
        ));
        let mut instance = SolverInstance::<Counter>::new(2024, 3, "a").unwrap();
        assert!(matches!(
            instance.solve(3),
            Err(SolveError::PartOutOfRange(3))
        ));
    }
}
