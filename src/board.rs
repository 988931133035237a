// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error, matrix, movegen};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(u8),
}

impl Cell {
    #[inline(always)]
    pub fn letter(self) -> Option<u8> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(letter) => Some(letter),
        }
    }

    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

// Row-major grid. Cells only ever go from Empty to Occupied.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    dim: matrix::Dim,
    cells: Box<[Cell]>,
    blanks: Box<[bool]>,
}

impl Board {
    pub fn new(dim: matrix::Dim) -> Self {
        Self {
            dim,
            cells: vec![Cell::Empty; dim.len()].into_boxed_slice(),
            blanks: vec![false; dim.len()].into_boxed_slice(),
        }
    }

    // One string per row. ' ' or '.' is empty, uppercase is a tile,
    // lowercase is a blank standing for that letter.
    pub fn from_rows<S: AsRef<str>>(dim: matrix::Dim, rows: &[S]) -> error::Returns<Self> {
        if rows.len() != dim.rows as usize {
            return_error!(format!(
                "board: need {} rows, found {} rows",
                dim.rows,
                rows.len()
            ));
        }
        let mut board = Self::new(dim);
        for (row, s) in (0i8..).zip(rows.iter()) {
            let s = s.as_ref().as_bytes();
            if s.len() > dim.cols as usize {
                return_error!(format!(
                    "board: row {} has {} columns, max is {}",
                    row,
                    s.len(),
                    dim.cols
                ));
            }
            for (col, &b) in (0i8..).zip(s.iter()) {
                let idx = dim.at_row_col(row, col);
                match b {
                    b' ' | b'.' => {}
                    b'A'..=b'Z' => board.cells[idx] = Cell::Occupied(b),
                    b'a'..=b'z' => {
                        board.cells[idx] = Cell::Occupied(b.to_ascii_uppercase());
                        board.blanks[idx] = true;
                    }
                    _ => {
                        return_error!(format!(
                            "board: invalid tile {:?} at ({},{})",
                            b as char, row, col
                        ));
                    }
                }
            }
        }
        Ok(board)
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn get(&self, row: i8, col: i8) -> Cell {
        self.cells[self.dim.at_row_col(row, col)]
    }

    #[inline(always)]
    pub fn at(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    #[inline(always)]
    pub fn is_occupied_at(&self, idx: usize) -> bool {
        !self.cells[idx].is_empty()
    }

    // False outside the board.
    #[inline(always)]
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        self.dim.contains(row, col) && !self.get(row, col).is_empty()
    }

    #[inline(always)]
    pub fn is_blank(&self, row: i8, col: i8) -> bool {
        self.blanks[self.dim.at_row_col(row, col)]
    }

    // The tile as it scores: a blank carries BLANK_FLAG.
    #[inline(always)]
    pub fn tile_at(&self, idx: usize) -> Option<u8> {
        self.cells[idx]
            .letter()
            .map(|letter| letter | ((self.blanks[idx] as u8) * alphabet::BLANK_FLAG))
    }

    pub fn num_tiles(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn is_vacant(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    // Letters currently on the span a play would cover, '.' for empties.
    pub fn span_letters(&self, row: i8, col: i8, down: bool, len: usize) -> Vec<u8> {
        let (lane, idx) = matrix::lane_and_idx(down, row, col);
        let strider = self.dim.lane(down, lane);
        (idx..strider.len())
            .take(len)
            .map(|i| self.cells[strider.at(i)].letter().unwrap_or(b'.'))
            .collect()
    }

    // The only mutator. Checks the whole span first so a rejected play
    // leaves the board untouched.
    pub fn apply(&mut self, play: &movegen::Move) -> error::GameResult<()> {
        let (lane, idx) = matrix::lane_and_idx(play.down, play.row, play.col);
        let illegal = |reason| error::GameError::IllegalPlacement {
            row: play.row,
            col: play.col,
            reason,
        };
        if !self.dim.contains(play.row, play.col) {
            return Err(illegal(error::Illegal::OutOfBounds));
        }
        let strider = self.dim.lane(play.down, lane);
        if play.word.is_empty() || idx as usize + play.word.len() > strider.len() as usize {
            return Err(illegal(error::Illegal::OutOfBounds));
        }
        for (i, &letter) in (idx..).zip(play.word.iter()) {
            if let Cell::Occupied(existing) = self.cells[strider.at(i)] {
                if existing != letter {
                    let (row, col) = matrix::row_and_col(play.down, lane, i);
                    return Err(error::GameError::IllegalPlacement {
                        row,
                        col,
                        reason: error::Illegal::Conflict,
                    });
                }
            }
        }
        for &pos in play.blank_positions.iter() {
            if pos < 0
                || pos as usize >= play.word.len()
                || self.is_occupied_at(strider.at(idx + pos))
            {
                return Err(illegal(error::Illegal::Conflict));
            }
        }
        for (i, &letter) in (idx..).zip(play.word.iter()) {
            self.cells[strider.at(i)] = Cell::Occupied(letter);
        }
        for &pos in play.blank_positions.iter() {
            self.blanks[strider.at(idx + pos)] = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dim() -> matrix::Dim {
        matrix::Dim { rows: 15, cols: 15 }
    }

    fn make_move(row: i8, col: i8, down: bool, word: &str, blanks: &[i8]) -> movegen::Move {
        movegen::Move {
            row,
            col,
            down,
            word: word.as_bytes().into(),
            letters: Box::default(),
            score: 0,
            blank_positions: blanks.into(),
        }
    }

    #[test]
    fn test_apply_then_read_back() {
        let mut board = Board::new(dim());
        let play = make_move(7, 5, false, "QUIET", &[1]);
        board.apply(&play).unwrap();
        assert_eq!(board.span_letters(7, 5, false, 5), b"QUIET");
        assert_eq!(board.get(7, 5), Cell::Occupied(b'Q'));
        assert!(board.is_blank(7, 6));
        assert!(!board.is_blank(7, 7));
        assert_eq!(board.tile_at(dim().at_row_col(7, 6)), Some(b'U' | 0x80));
        assert_eq!(board.num_tiles(), 5);
    }

    #[test]
    fn test_apply_through_existing_letters() {
        let mut board = Board::new(dim());
        board.apply(&make_move(7, 7, false, "AT", &[])).unwrap();
        board.apply(&make_move(5, 8, true, "CAT", &[])).unwrap();
        assert_eq!(board.span_letters(5, 8, true, 3), b"CAT");
        assert_eq!(board.span_letters(7, 7, false, 2), b"AT");
        assert_eq!(board.num_tiles(), 4);
    }

    #[test]
    fn test_conflict_leaves_board_unmodified() {
        let mut board = Board::new(dim());
        board.apply(&make_move(7, 7, false, "AT", &[])).unwrap();
        let before = board.clone();
        let err = board
            .apply(&make_move(5, 8, true, "DOG", &[]))
            .unwrap_err();
        assert!(matches!(
            err,
            error::GameError::IllegalPlacement {
                row: 7,
                col: 8,
                reason: error::Illegal::Conflict
            }
        ));
        assert!(board == before);
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut board = Board::new(dim());
        let err = board
            .apply(&make_move(0, 12, false, "HOUSE", &[]))
            .unwrap_err();
        assert!(matches!(
            err,
            error::GameError::IllegalPlacement {
                reason: error::Illegal::OutOfBounds,
                ..
            }
        ));
        assert!(board.is_vacant());
    }

    #[test]
    fn test_blank_cannot_claim_an_occupied_square() {
        let mut board = Board::new(dim());
        board.apply(&make_move(7, 7, false, "AT", &[])).unwrap();
        let err = board
            .apply(&make_move(7, 6, false, "CAT", &[1]))
            .unwrap_err();
        assert!(matches!(err, error::GameError::IllegalPlacement { .. }));
        assert_eq!(board.num_tiles(), 2);
    }

    #[test]
    fn test_from_rows() {
        let mut rows = vec![String::new(); 15];
        rows[7] = ".......CaT".to_string();
        let board = Board::from_rows(dim(), &rows).unwrap();
        assert_eq!(board.get(7, 7), Cell::Occupied(b'C'));
        assert_eq!(board.get(7, 8), Cell::Occupied(b'A'));
        assert!(board.is_blank(7, 8));
        assert!(board.get(7, 6).is_empty());
        assert!(Board::from_rows(dim(), &rows[..3]).is_err());
        rows[0] = "1".to_string();
        assert!(Board::from_rows(dim(), &rows).is_err());
    }
}
