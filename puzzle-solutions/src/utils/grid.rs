//! Immutable rectangular grids with 4-way movement.

use std::fmt;

use puzzle_solver::ParseError;

/// A cell coordinate; row 0 is the first input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Compass direction on the grid. North is towards row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Clockwise from north
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub const fn turn_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Number of quarter turns needed to face `other` (0, 1 or 2).
    pub fn quarter_turns_to(self, other: Direction) -> u8 {
        if self == other {
            0
        } else if self.opposite() == other {
            2
        } else {
            1
        }
    }

    /// Index in [`Direction::ALL`], handy for dense state tables.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Row-major grid of cells, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from rows; every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ParseError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(ParseError::MissingData("grid is empty".into()));
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(ParseError::InvalidFormat(format!(
                    "expected {width} cells, found {}",
                    row.len()
                ))
                .at_line(row_idx));
            }
            cells.extend(row);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a `width x height` grid filled by `f(position)`.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(Position) -> T) -> Self {
        let cells = (0..height)
            .flat_map(|row| (0..width).map(move |col| Position::new(row, col)))
            .map(&mut f)
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Parse one cell per character, one row per non-empty line.
    pub fn parse_with<F>(input: &str, mut cell: F) -> Result<Self, ParseError>
    where
        F: FnMut(char) -> Option<T>,
    {
        let rows = input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.trim_end()
                    .chars()
                    .map(|c| {
                        cell(c).ok_or_else(|| {
                            ParseError::InvalidFormat(format!("unexpected character {c:?}"))
                                .at_line(line_idx)
                        })
                    })
                    .collect::<Result<Vec<T>, ParseError>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// Flat row-major index of `pos`, if it is inside the grid.
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.width + pos.col)
    }

    pub fn get(&self, pos: Position) -> Option<&T> {
        self.index_of(pos).map(|i| &self.cells[i])
    }

    /// Bottom-right cell.
    pub fn last_position(&self) -> Position {
        Position::new(self.height - 1, self.width - 1)
    }

    /// Move one cell in `dir`, or `None` when that leaves the grid.
    pub fn step(&self, pos: Position, dir: Direction) -> Option<Position> {
        let next = match dir {
            Direction::North => Position::new(pos.row.checked_sub(1)?, pos.col),
            Direction::South => Position::new(pos.row + 1, pos.col),
            Direction::West => Position::new(pos.row, pos.col.checked_sub(1)?),
            Direction::East => Position::new(pos.row, pos.col + 1),
        };
        self.contains(next).then_some(next)
    }

    /// In-bounds orthogonal neighbours with the direction that reaches them.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = (Direction, Position)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(pos, dir).map(|next| (dir, next)))
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width;
        (0..self.cells.len()).map(move |i| Position::new(i / width, i % width))
    }

    /// First position whose cell matches `pred`.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Position> {
        self.cells
            .iter()
            .position(|cell| pred(cell))
            .map(|i| Position::new(i / self.width, i % self.width))
    }
}

impl Grid<u8> {
    /// Parse a block of decimal digits, one cell per digit.
    pub fn parse_digits(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, |c| c.to_digit(10).map(|d| d as u8))
    }
}

impl<T> std::ops::Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &T {
        assert!(self.contains(pos), "position {pos} outside grid");
        &self.cells[pos.row * self.width + pos.col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits() {
        let grid = Grid::parse_digits("123\n456\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid[Position::new(1, 2)], 6);
        assert_eq!(grid.last_position(), Position::new(1, 2));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Grid::parse_digits("12\n3").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("line 2")));
    }

    #[test]
    fn test_bad_character_rejected() {
        assert!(Grid::parse_digits("1a").is_err());
        assert!(Grid::parse_digits("").is_err());
    }

    #[test]
    fn test_step_stays_in_bounds() {
        let grid = Grid::from_fn(2, 2, |_| ());
        let origin = Position::new(0, 0);
        assert_eq!(grid.step(origin, Direction::North), None);
        assert_eq!(grid.step(origin, Direction::West), None);
        assert_eq!(grid.step(origin, Direction::East), Some(Position::new(0, 1)));
        assert_eq!(grid.step(Position::new(1, 1), Direction::South), None);
        assert_eq!(grid.neighbors(origin).count(), 2);
    }

    #[test]
    fn test_turns() {
        for dir in Direction::ALL {
            assert_eq!(dir.turn_left().turn_right(), dir);
            assert_eq!(dir.turn_right().turn_right(), dir.opposite());
            assert_eq!(dir.quarter_turns_to(dir.turn_left()), 1);
            assert_eq!(dir.quarter_turns_to(dir.opposite()), 2);
        }
    }

    #[test]
    fn test_find_and_positions() {
        let grid = Grid::parse_with("#.\nS#", |c| Some(c)).unwrap();
        assert_eq!(grid.find(|&c| c == 'S'), Some(Position::new(1, 0)));
        assert_eq!(grid.positions().count(), 4);
    }
}
