use crate::board::Cell;

/// One of the two players. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Player {
    #[default]
    Black,
    White,
}

impl Player {
    /// Get the other player.
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The stone colour this player places.
    pub fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }

    /// Player name for display.
    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::White => "White",
        }
    }

    /// Numeric code shared with the UI board encoding (1 = black, 2 = white).
    pub fn code(self) -> u8 {
        self.cell().code()
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    fn not(self) -> Self {
        self.opponent()
    }
}

impl TryFrom<Cell> for Player {
    type Error = ();

    fn try_from(cell: Cell) -> Result<Self, Self::Error> {
        match cell {
            Cell::Black => Ok(Player::Black),
            Cell::White => Ok(Player::White),
            Cell::Empty => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_alternates() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(!Player::White, Player::Black);
    }

    #[test]
    fn cell_bijection_round_trips() {
        for player in [Player::Black, Player::White] {
            assert_eq!(Player::try_from(player.cell()), Ok(player));
        }
        assert!(Player::try_from(Cell::Empty).is_err());
    }

    #[test]
    fn black_moves_first() {
        assert_eq!(Player::default(), Player::Black);
        assert_eq!(Player::Black.name(), "Black");
    }
}
