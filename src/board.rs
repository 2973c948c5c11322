use std::fmt;

/// A player's mark. `X` always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell as `(row, col)`, both 1-indexed.
pub type Cell = (usize, usize);

/// An h x v grid of marks.
///
/// Boards are snapshots: [`Board::with_mark`] returns a new board and leaves
/// the receiver untouched, so a state handed to a search frame can never be
/// changed underneath it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub height: usize,
    pub width: usize,
    cells: Vec<Option<Mark>>,
}

impl Board {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![None; height * width],
        }
    }

    fn idx(&self, (row, col): Cell) -> Option<usize> {
        if row == 0 || col == 0 || row > self.height || col > self.width {
            return None;
        }
        Some((row - 1) * self.width + (col - 1))
    }

    /// The mark at `cell`, or `None` if the cell is empty or off the board.
    pub fn get(&self, cell: Cell) -> Option<Mark> {
        self.idx(cell).and_then(|i| self.cells[i])
    }

    /// Return a copy of this board with `mark` placed at `cell`.
    /// Off-board cells leave the copy unchanged.
    pub fn with_mark(&self, cell: Cell, mark: Mark) -> Board {
        let mut next = self.clone();
        if let Some(i) = self.idx(cell) {
            next.cells[i] = Some(mark);
        }
        next
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Every cell of the grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (1..=self.height).flat_map(move |row| (1..=self.width).map(move |col| (row, col)))
    }

    /// Step from `cell` by `(dr, dc)`, or `None` when the step leaves the grid.
    pub fn step(&self, (row, col): Cell, (dr, dc): (isize, isize)) -> Option<Cell> {
        let next = (row.checked_add_signed(dr)?, col.checked_add_signed(dc)?);
        self.idx(next).map(|_| next)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 1..=self.width {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for row in 1..=self.height {
            write!(f, "{row}")?;
            for col in 1..=self.width {
                let ch = self.get((row, col)).map_or('.', Mark::symbol);
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new(3, 3);
        let next = board.with_mark((2, 2), Mark::X);
        assert_eq!(board.get((2, 2)), None);
        assert_eq!(next.get((2, 2)), Some(Mark::X));
    }

    #[test]
    fn test_get_off_board_is_empty() {
        let board = Board::new(3, 4).with_mark((3, 4), Mark::O);
        assert_eq!(board.get((3, 4)), Some(Mark::O));
        assert_eq!(board.get((0, 1)), None);
        assert_eq!(board.get((4, 1)), None);
        assert_eq!(board.get((1, 5)), None);
    }

    #[test]
    fn test_step_stops_at_edges() {
        let board = Board::new(3, 3);
        assert_eq!(board.step((1, 1), (-1, 0)), None);
        assert_eq!(board.step((1, 1), (1, 1)), Some((2, 2)));
        assert_eq!(board.step((3, 3), (0, 1)), None);
        assert_eq!(board.step((2, 1), (1, -1)), None);
    }

    #[test]
    fn test_cells_row_major() {
        let board = Board::new(2, 3);
        let cells: Vec<Cell> = board.cells().collect();
        assert_eq!(cells, vec![(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_display() {
        let board = Board::new(3, 3)
            .with_mark((1, 1), Mark::X)
            .with_mark((2, 3), Mark::O);
        assert_eq!(board.to_string(), "  1 2 3\n1 X . .\n2 . . O\n3 . . .\n");
    }
}
