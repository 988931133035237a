// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, matrix};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Premium {
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl Premium {
    #[inline(always)]
    pub fn word_multiplier(self) -> i16 {
        match self {
            Premium::DoubleWord => 2,
            Premium::TripleWord => 3,
            _ => 1,
        }
    }

    #[inline(always)]
    pub fn letter_multiplier(self) -> i16 {
        match self {
            Premium::DoubleLetter => 2,
            Premium::TripleLetter => 3,
            _ => 1,
        }
    }
}

use Premium::{
    DoubleLetter as DLS, DoubleWord as DWS, None as FVS, TripleLetter as TLS, TripleWord as TWS,
};

pub struct StaticBoardLayout {
    premiums: &'static [Premium],
    dim: matrix::Dim,
    star_row: i8,
    star_col: i8,
}

pub enum BoardLayout {
    Static(StaticBoardLayout),
}

impl BoardLayout {
    #[inline(always)]
    pub fn premiums(&self) -> &'static [Premium] {
        match self {
            BoardLayout::Static(x) => x.premiums,
        }
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        match self {
            BoardLayout::Static(x) => x.dim,
        }
    }

    #[inline(always)]
    pub fn star_row(&self) -> i8 {
        match self {
            BoardLayout::Static(x) => x.star_row,
        }
    }

    #[inline(always)]
    pub fn star_col(&self) -> i8 {
        match self {
            BoardLayout::Static(x) => x.star_col,
        }
    }

    #[inline(always)]
    pub fn premium_at(&self, row: i8, col: i8) -> Premium {
        self.premiums()[self.dim().at_row_col(row, col)]
    }

    // Checked once at startup. The table is immutable afterwards.
    pub fn validate(&self) -> Result<(), error::GameError> {
        let dim = self.dim();
        let premiums = self.premiums();
        if dim.is_empty() || premiums.len() != dim.len() {
            return Err(error::GameError::Configuration(format!(
                "board layout has {} premiums for a {}x{} board",
                premiums.len(),
                dim.rows,
                dim.cols
            )));
        }
        if !dim.contains(self.star_row(), self.star_col())
            || self.star_row() != dim.rows / 2
            || self.star_col() != dim.cols / 2
        {
            return Err(error::GameError::Configuration(format!(
                "star square ({},{}) is not the center of the board",
                self.star_row(),
                self.star_col()
            )));
        }
        let last = premiums.len() - 1;
        if let Some(i) = (0..premiums.len()).find(|&i| premiums[i] != premiums[last - i]) {
            return Err(error::GameError::Configuration(format!(
                "board layout is not symmetric at ({},{})",
                i / dim.cols as usize,
                i % dim.cols as usize
            )));
        }
        for &(row, col) in &[
            (0, 0),
            (0, dim.cols - 1),
            (dim.rows - 1, 0),
            (dim.rows - 1, dim.cols - 1),
        ] {
            if self.premium_at(row, col) != TWS {
                return Err(error::GameError::Configuration(format!(
                    "corner ({row},{col}) must be a triple word square"
                )));
            }
        }
        if self.premium_at(self.star_row(), self.star_col()) != DWS {
            return Err(error::GameError::Configuration(
                "center square must be a double word square".into(),
            ));
        }
        Ok(())
    }
}

pub fn make_standard_board_layout() -> BoardLayout {
    BoardLayout::Static(StaticBoardLayout {
        premiums: &STANDARD_PREMIUMS,
        dim: matrix::Dim { rows: 15, cols: 15 },
        star_row: 7,
        star_col: 7,
    })
}

static STANDARD_PREMIUMS: [Premium; 225] = [
    TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
    FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, //
    FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
    DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
    FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, //
    FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
    FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS, //
    TWS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
    FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS, //
    FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
    FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, //
    DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
    FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
    FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, //
    TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_is_valid() {
        let layout = make_standard_board_layout();
        assert!(layout.validate().is_ok());
        assert_eq!(layout.premium_at(0, 0), TWS);
        assert_eq!(layout.premium_at(7, 7), DWS);
        assert_eq!(layout.premium_at(1, 5), TLS);
        assert_eq!(layout.premium_at(0, 3), DLS);
        assert_eq!(layout.premium_at(7, 0), TWS);
    }

    #[test]
    fn test_premium_multipliers() {
        assert_eq!(TWS.word_multiplier(), 3);
        assert_eq!(TWS.letter_multiplier(), 1);
        assert_eq!(DLS.letter_multiplier(), 2);
        assert_eq!(DLS.word_multiplier(), 1);
        assert_eq!(FVS.word_multiplier() * FVS.letter_multiplier(), 1);
    }

    #[test]
    fn test_asymmetric_layout_is_rejected() {
        static LOPSIDED: [Premium; 9] = [TWS, FVS, TWS, FVS, DWS, DLS, TWS, FVS, TWS];
        let layout = BoardLayout::Static(StaticBoardLayout {
            premiums: &LOPSIDED,
            dim: matrix::Dim { rows: 3, cols: 3 },
            star_row: 1,
            star_col: 1,
        });
        assert!(matches!(
            layout.validate(),
            Err(error::GameError::Configuration(_))
        ));
    }
}
