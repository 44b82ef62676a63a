//! Board grid and frame rendering
//!
//! The grid mirrors what the engine has reported so far; it carries no game
//! rules of its own. Rendering is a pure function of the cell contents.

// Allow unused code that's part of the public API
#![allow(dead_code)]

use kxomon_protocol::Occupant;

/// Side length of the engine's board.
pub const BOARD_SIDE: usize = 3;

/// Fixed-size grid of cell states, indexed like the wire cell index
/// (row-major, `cell = row * side + col`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    side: usize,
    cells: Vec<Option<Occupant>>,
}

impl Board {
    pub fn new(side: usize) -> Self {
        Self {
            side,
            cells: vec![None; side * side],
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Write an occupant into a cell. Returns false (and leaves the grid
    /// untouched) when the index is out of range.
    pub fn set(&mut self, cell: usize, occupant: Occupant) -> bool {
        match self.cells.get_mut(cell) {
            Some(slot) => {
                *slot = Some(occupant);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, cell: usize) -> Option<Occupant> {
        self.cells.get(cell).copied().flatten()
    }

    /// Reset every cell to empty.
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Render the board as a text frame: two leading blank lines, then each
    /// row's cells interleaved with `|`, followed by a dashed rule.
    pub fn render(&self) -> String {
        let width = 2 * self.side - 1;
        let mut frame = String::with_capacity(2 + self.side * (2 * width + 2));
        frame.push('\n');
        frame.push('\n');

        for row in 0..self.side {
            for col in 0..self.side {
                if col > 0 {
                    frame.push('|');
                }
                let mark = self.get(row * self.side + col);
                frame.push(mark.map_or(' ', occupant_char));
            }
            frame.push('\n');
            for _ in 0..width {
                frame.push('-');
            }
            frame.push('\n');
        }
        frame
    }
}

/// Single display character for a cell occupant.
fn occupant_char(occupant: Occupant) -> char {
    let id = occupant.id();
    if id.is_ascii_graphic() {
        id as char
    } else {
        // Identifiers outside the printable range map onto digits so small
        // enumerations stay readable in a one-character cell.
        char::from_digit(u32::from(id) % 10, 10).unwrap_or('?')
    }
}

/// Human-readable label for a cell index: column letter, 1-based row number.
pub fn cell_label(cell: usize, side: usize) -> String {
    let col = cell % side;
    let row = cell / side;
    format!("{}{}", (b'A' + col as u8) as char, row + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(BOARD_SIDE);
        assert!(board.is_empty());
        assert_eq!(board.cell_count(), 9);
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new(3);
        assert!(board.set(4, Occupant::new(b'X')));
        assert_eq!(board.get(4), Some(Occupant::new(b'X')));
        assert_eq!(board.get(0), None);
    }

    #[test]
    fn test_set_out_of_range_rejected() {
        let mut board = Board::new(3);
        assert!(!board.set(9, Occupant::new(b'X')));
        assert!(board.is_empty());
    }

    #[test]
    fn test_reset_clears_all_cells() {
        let mut board = Board::new(3);
        board.set(0, Occupant::new(b'O'));
        board.set(8, Occupant::new(b'X'));
        board.reset();
        assert!(board.is_empty());
    }

    #[test]
    fn test_render_empty_3x3() {
        let board = Board::new(3);
        assert_eq!(board.render(), "\n\n | | \n-----\n | | \n-----\n | | \n-----\n");
    }

    #[test]
    fn test_render_with_marks() {
        let mut board = Board::new(3);
        board.set(0, Occupant::new(b'X'));
        board.set(4, Occupant::new(b'O'));
        assert_eq!(board.render(), "\n\nX| | \n-----\n |O| \n-----\n | | \n-----\n");
    }

    #[test]
    fn test_render_deterministic() {
        let mut board = Board::new(3);
        board.set(2, Occupant::new(b'O'));
        assert_eq!(board.render(), board.render());
    }

    #[test]
    fn test_render_shape_other_sizes() {
        let board = Board::new(2);
        assert_eq!(board.render(), "\n\n | \n---\n | \n---\n");
    }

    #[test]
    fn test_cell_label() {
        assert_eq!(cell_label(0, 3), "A1");
        assert_eq!(cell_label(4, 3), "B2");
        assert_eq!(cell_label(8, 3), "C3");
        assert_eq!(cell_label(2, 3), "C1");
        assert_eq!(cell_label(6, 3), "A3");
    }
}
