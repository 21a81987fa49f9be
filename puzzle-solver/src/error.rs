//! Error types for the solver framework

use thiserror::Error;

/// Error type for parsing puzzle input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Other parsing errors
    #[error("Parse error: {0}")]
    Other(String),
}

impl ParseError {
    /// Prefix the message with a 1-based line number
    pub fn at_line(self, line_idx: usize) -> Self {
        let line = line_idx + 1;
        match self {
            ParseError::InvalidFormat(msg) => {
                ParseError::InvalidFormat(format!("(line {line}) {msg}"))
            }
            ParseError::MissingData(msg) => ParseError::MissingData(format!("(line {line}) {msg}")),
            ParseError::Other(msg) => ParseError::Other(format!("(line {line}) {msg}")),
        }
    }
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds PARTS)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The search space was exhausted without reaching a goal
    #[error("No solution: {0}")]
    NoSolution(String),
    /// The input is valid but has a shape this solver deliberately refuses
    #[error("Unsupported input: {0}")]
    Unsupported(String),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for solver operations through the registry
#[derive(Debug, Error)]
pub enum SolverError {
    /// Solver not found for the given year and day
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Year or day outside the supported range
    #[error("Invalid year/day: {0}/{1}")]
    InvalidYearDay(u16, u8),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Attempted to register a solver for a year-day combination that already exists
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Year or day outside the supported range
    #[error("Invalid year/day for registration: {0}/{1}")]
    InvalidYearDay(u16, u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_line_is_one_based() {
        let err = ParseError::InvalidFormat("expected digit".into()).at_line(0);
        assert_eq!(err.to_string(), "Invalid format: (line 1) expected digit");
    }

    #[test]
    fn test_solver_error_from_parse_error() {
        let err: SolverError = ParseError::MissingData("start tile".into()).into();
        assert!(matches!(err, SolverError::ParseError(ParseError::MissingData(_))));
    }
}
