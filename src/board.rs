use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// State of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// UI encoding: 0=empty, 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => 2,
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
        }
    }
}

/// A board coordinate; `x` is the column, `y` the row.
///
/// Always on the board: outside the crate it can only be built through
/// `Coord::new` or `Coord::from_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub(crate) x: u8,
    pub(crate) y: u8,
}

impl Coord {
    /// Checked constructor.
    pub fn new(x: i32, y: i32) -> Result<Self, GameError> {
        if in_bounds(x, y) {
            Ok(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            Err(GameError::OutOfRange { x, y })
        }
    }

    pub fn from_index(index: usize) -> Result<Self, GameError> {
        if index >= NUM_SQUARES {
            return Err(GameError::IndexOutOfRange(index));
        }
        Ok(Self {
            x: (index % BOARD_SIZE) as u8,
            y: (index / BOARD_SIZE) as u8,
        })
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    /// Row-major index `x + y * 8`.
    pub fn index(self) -> usize {
        self.x as usize + self.y as usize * BOARD_SIZE
    }
}

/// Immutable 8x8 board snapshot.
///
/// Every transformation returns a new board, so older snapshots held in a
/// history stay valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; NUM_SQUARES],
}

impl Board {
    /// Creates the opening position:
    /// (3,3)=white, (4,4)=white, (4,3)=black, (3,4)=black.
    pub fn initial() -> Self {
        let mut cells = [Cell::Empty; NUM_SQUARES];
        cells[idx(3, 3)] = Cell::White;
        cells[idx(4, 4)] = Cell::White;
        cells[idx(4, 3)] = Cell::Black;
        cells[idx(3, 4)] = Cell::Black;
        Self { cells }
    }

    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; NUM_SQUARES],
        }
    }

    pub fn from_cells(cells: [Cell; NUM_SQUARES]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; NUM_SQUARES] {
        &self.cells
    }

    /// Returns the cell at `(x, y)`.
    pub fn cell_at(&self, x: i32, y: i32) -> Result<Cell, GameError> {
        let coord = Coord::new(x, y)?;
        Ok(self.cells[coord.index()])
    }

    /// Returns the cell at `coord`. Coordinates are always in range.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// Returns a copy of this board with the given `index -> cell` assignments
    /// applied as one batch. `self` is left untouched.
    pub fn with_stones<I>(&self, changes: I) -> Result<Board, GameError>
    where
        I: IntoIterator<Item = (usize, Cell)>,
    {
        let mut cells = self.cells;
        for (index, cell) in changes {
            let slot = cells
                .get_mut(index)
                .ok_or(GameError::IndexOutOfRange(index))?;
            *slot = cell;
        }
        Ok(Board { cells })
    }

    /// Number of cells equal to `cell`.
    pub fn count_of(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Returns `(black_count, white_count)`.
    pub fn score(&self) -> (usize, usize) {
        (self.count_of(Cell::Black), self.count_of(Cell::White))
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        self.cells.map(Cell::code)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

/// One line per row, `.` empty, `X` black, `O` white.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE) {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Parses the `Display` format. Whitespace is ignored, so rows may be
/// split over lines or written as one 64-character string.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; NUM_SQUARES];
        let mut count = 0usize;

        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match ch {
                '.' | '-' => Cell::Empty,
                'X' | 'x' | 'B' | 'b' => Cell::Black,
                'O' | 'o' | 'W' | 'w' => Cell::White,
                other => {
                    return Err(GameError::ParseBoard(format!(
                        "unexpected character {other:?}"
                    )));
                }
            };
            if count >= NUM_SQUARES {
                return Err(GameError::ParseBoard(format!(
                    "more than {NUM_SQUARES} cells"
                )));
            }
            cells[count] = cell;
            count += 1;
        }

        if count != NUM_SQUARES {
            return Err(GameError::ParseBoard(format!(
                "expected {NUM_SQUARES} cells, got {count}"
            )));
        }

        Ok(Self { cells })
    }
}

pub(crate) fn in_bounds(x: i32, y: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&x) && (0..BOARD_SIZE as i32).contains(&y)
}

fn idx(x: usize, y: usize) -> usize {
    x + y * BOARD_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_board_has_four_center_stones() {
        let board = Board::initial();

        assert_eq!(board.cell_at(3, 3), Ok(Cell::White));
        assert_eq!(board.cell_at(4, 4), Ok(Cell::White));
        assert_eq!(board.cell_at(4, 3), Ok(Cell::Black));
        assert_eq!(board.cell_at(3, 4), Ok(Cell::Black));
        assert_eq!(board.count_of(Cell::Empty), 60);
        assert_eq!(board.score(), (2, 2));
    }

    #[test]
    fn cell_at_rejects_out_of_range() {
        let board = Board::initial();

        assert_eq!(
            board.cell_at(8, 0),
            Err(GameError::OutOfRange { x: 8, y: 0 })
        );
        assert_eq!(
            board.cell_at(0, -1),
            Err(GameError::OutOfRange { x: 0, y: -1 })
        );
        assert_eq!(board.cell_at(7, 7), Ok(Cell::Empty));
    }

    #[test]
    fn with_stones_leaves_original_untouched() {
        let before = Board::initial();
        let after = before
            .with_stones([(idx(0, 0), Cell::Black), (idx(3, 3), Cell::Black)])
            .unwrap();

        assert_eq!(before, Board::initial());
        assert_eq!(after.cell_at(0, 0), Ok(Cell::Black));
        assert_eq!(after.cell_at(3, 3), Ok(Cell::Black));
        assert_eq!(after.score(), (4, 1));
    }

    #[test]
    fn with_stones_rejects_bad_index() {
        let board = Board::initial();

        assert_eq!(
            board.with_stones([(64, Cell::Black)]),
            Err(GameError::IndexOutOfRange(64))
        );
    }

    #[test]
    fn is_full_only_without_empty_cells() {
        assert!(!Board::initial().is_full());
        let full = Board::from_cells([Cell::White; NUM_SQUARES]);
        assert!(full.is_full());
        assert_eq!(full.count_of(Cell::White), 64);
    }

    #[test]
    fn display_and_parse_agree() {
        let board = Board::initial();
        let text = board.to_string();

        assert_eq!(text.lines().nth(3), Some("...OX..."));
        assert_eq!(text.parse::<Board>(), Ok(board));
    }

    #[test]
    fn parse_rejects_wrong_length_and_symbols() {
        assert!(matches!(
            "X".repeat(63).parse::<Board>(),
            Err(GameError::ParseBoard(_))
        ));
        assert!(matches!(
            format!("{}?", ".".repeat(63)).parse::<Board>(),
            Err(GameError::ParseBoard(_))
        ));
    }

    #[test]
    fn to_array_uses_ui_encoding() {
        let cells = Board::initial().to_array();

        assert_eq!(cells[idx(3, 3)], 2);
        assert_eq!(cells[idx(4, 3)], 1);
        assert_eq!(cells[0], 0);
    }

    #[test]
    fn coord_index_round_trip() {
        let coord = Coord::new(5, 2).unwrap();

        assert_eq!(coord.index(), 21);
        assert_eq!(Coord::from_index(21), Ok(coord));
        assert_eq!(Coord::from_index(64), Err(GameError::IndexOutOfRange(64)));
    }

    #[test]
    fn coords_built_by_constructors_stay_on_board() {
        assert_eq!(Coord::new(9, 9), Err(GameError::OutOfRange { x: 9, y: 9 }));
        assert_eq!(Coord::new(8, 0), Err(GameError::OutOfRange { x: 8, y: 0 }));

        let board = Board::initial();
        for index in 0..NUM_SQUARES {
            let coord = Coord::from_index(index).unwrap();
            assert!(coord.x() < 8 && coord.y() < 8);
            assert_eq!(board.get(coord), board.cells()[index]);
        }
    }
}
