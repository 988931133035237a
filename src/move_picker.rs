// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, error, matrix, movegen};
use rand::prelude::*;

// Picks one of the generated moves, or None to pass. Implementations may
// adjust equity but never the placement itself.
pub trait MovePicker {
    fn pick_a_move(
        &mut self,
        board: &board::Board,
        rack: &[u8],
        candidates: &mut [movegen::ValuedMove],
    ) -> Option<movegen::Move>;
}

// Highest equity, earliest among equals.
fn best_by_equity(candidates: &[movegen::ValuedMove]) -> Option<&movegen::ValuedMove> {
    candidates.iter().reduce(|best, candidate| {
        if candidate.equity > best.equity {
            candidate
        } else {
            best
        }
    })
}

// Best first, stable.
fn sort_by_equity(candidates: &mut [movegen::ValuedMove]) {
    candidates.sort_by(|a, b| b.equity.total_cmp(&a.equity));
}

pub struct Greedy;

impl MovePicker for Greedy {
    fn pick_a_move(
        &mut self,
        _board: &board::Board,
        _rack: &[u8],
        candidates: &mut [movegen::ValuedMove],
    ) -> Option<movegen::Move> {
        best_by_equity(candidates).map(|candidate| candidate.play.clone())
    }
}

pub struct Random {
    rng: rand_chacha::ChaCha20Rng,
}

impl Random {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: rand_chacha::ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl MovePicker for Random {
    fn pick_a_move(
        &mut self,
        _board: &board::Board,
        _rack: &[u8],
        candidates: &mut [movegen::ValuedMove],
    ) -> Option<movegen::Move> {
        candidates
            .choose(&mut self.rng)
            .map(|candidate| candidate.play.clone())
    }
}

// Greedy, but reluctant to put a tile on an edge line next to triple word
// squares that are still open.
pub struct CarefulGreedy;

pub const CORNER_PENALTY: f32 = 15.0;
pub const EDGE_MIDDLE_PENALTY: f32 = 25.0;

impl CarefulGreedy {
    // For a play touching an edge line at lane position along_edge.
    fn edge_penalty(board: &board::Board, down: bool, edge: i8, along_edge: i8) -> f32 {
        let dim = board.dim();
        let edge_len = if down { dim.rows } else { dim.cols };
        let middle = edge_len / 2;
        if along_edge == 0 || along_edge == middle || along_edge == edge_len - 1 {
            return 0.0;
        }
        let near_corner = if along_edge < middle { 0 } else { edge_len - 1 };
        let is_open = |i: i8| {
            let (row, col) = matrix::row_and_col(down, edge, i);
            !board.is_occupied(row, col)
        };
        let mut penalty = 0.0;
        if is_open(near_corner) {
            penalty += CORNER_PENALTY;
        }
        if is_open(middle) {
            penalty += EDGE_MIDDLE_PENALTY;
        }
        penalty
    }

    pub fn penalty(board: &board::Board, play: &movegen::Move) -> f32 {
        let dim = board.dim();
        let (lane, start) = matrix::lane_and_idx(play.down, play.row, play.col);
        let end = start + play.word.len() as i8 - 1;
        let lane_len = if play.down { dim.rows } else { dim.cols };
        // the edges crossed by the play are perpendicular to it.
        let mut penalty = 0.0;
        if start == 0 {
            penalty += Self::edge_penalty(board, !play.down, 0, lane);
        }
        if end == lane_len - 1 {
            penalty += Self::edge_penalty(board, !play.down, lane_len - 1, lane);
        }
        penalty
    }
}

impl MovePicker for CarefulGreedy {
    fn pick_a_move(
        &mut self,
        board: &board::Board,
        _rack: &[u8],
        candidates: &mut [movegen::ValuedMove],
    ) -> Option<movegen::Move> {
        for candidate in candidates.iter_mut() {
            candidate.equity -= Self::penalty(board, &candidate.play);
        }
        best_by_equity(candidates).map(|candidate| candidate.play.clone())
    }
}

// Prefers plays close to the center square.
pub struct Radius;

pub const RADIUS_WEIGHT: f32 = 0.5;

impl Radius {
    pub fn mean_distance(board: &board::Board, play: &movegen::Move) -> f32 {
        let dim = board.dim();
        let (center_row, center_col) = ((dim.rows / 2) as f32, (dim.cols / 2) as f32);
        let total: f32 = play
            .squares()
            .map(|(row, col)| (row as f32 - center_row).hypot(col as f32 - center_col))
            .sum();
        total / play.word.len().max(1) as f32
    }
}

impl MovePicker for Radius {
    fn pick_a_move(
        &mut self,
        board: &board::Board,
        _rack: &[u8],
        candidates: &mut [movegen::ValuedMove],
    ) -> Option<movegen::Move> {
        for candidate in candidates.iter_mut() {
            candidate.equity -= RADIUS_WEIGHT * Self::mean_distance(board, &candidate.play);
        }
        best_by_equity(candidates).map(|candidate| candidate.play.clone())
    }
}

// Greedy, except it holds on to a Q unless spending it pays enough. When
// every candidate is held back, it passes.
pub struct QCautious {
    pub min_score: i16,
    pub unless_with_u: bool,
}

impl QCautious {
    pub fn q() -> Self {
        Self {
            min_score: 20,
            unless_with_u: false,
        }
    }

    pub fn qu() -> Self {
        Self {
            min_score: 30,
            unless_with_u: true,
        }
    }

    fn holds_back(&self, play: &movegen::Move) -> bool {
        play.letters.contains(&b'Q')
            && !(self.unless_with_u && play.letters.contains(&b'U'))
            && play.score < self.min_score
    }
}

impl MovePicker for QCautious {
    fn pick_a_move(
        &mut self,
        _board: &board::Board,
        _rack: &[u8],
        candidates: &mut [movegen::ValuedMove],
    ) -> Option<movegen::Move> {
        sort_by_equity(candidates);
        candidates
            .iter()
            .find(|candidate| !self.holds_back(&candidate.play))
            .map(|candidate| candidate.play.clone())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyKind {
    Greedy,
    Random,
    CarefulGreedy,
    Radius,
    QCautious,
    QuCautious,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 6] = [
        StrategyKind::Greedy,
        StrategyKind::Random,
        StrategyKind::CarefulGreedy,
        StrategyKind::Radius,
        StrategyKind::QCautious,
        StrategyKind::QuCautious,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Greedy => "greedy",
            StrategyKind::Random => "random",
            StrategyKind::CarefulGreedy => "careful",
            StrategyKind::Radius => "radius",
            StrategyKind::QCautious => "q",
            StrategyKind::QuCautious => "qu",
        }
    }

    // seed only matters to strategies that roll dice.
    pub fn make_picker(self, seed: u64) -> Box<dyn MovePicker + Send> {
        match self {
            StrategyKind::Greedy => Box::new(Greedy),
            StrategyKind::Random => Box::new(Random::new(seed)),
            StrategyKind::CarefulGreedy => Box::new(CarefulGreedy),
            StrategyKind::Radius => Box::new(Radius),
            StrategyKind::QCautious => Box::new(QCautious::q()),
            StrategyKind::QuCautious => Box::new(QCautious::qu()),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = error::GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                error::GameError::Configuration(format!(
                    "unknown strategy {:?}, expected one of {}",
                    s,
                    Self::ALL.map(|kind| kind.name()).join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_move(row: i8, col: i8, down: bool, word: &str, letters: &str, score: i16) -> movegen::Move {
        movegen::Move {
            row,
            col,
            down,
            word: word.as_bytes().into(),
            letters: letters.as_bytes().into(),
            score,
            blank_positions: Box::default(),
        }
    }

    fn empty_board() -> board::Board {
        board::Board::new(matrix::Dim { rows: 15, cols: 15 })
    }

    fn candidates(plays: &[movegen::Move]) -> Vec<movegen::ValuedMove> {
        plays.iter().cloned().map(movegen::ValuedMove::from).collect()
    }

    #[test]
    fn test_greedy_takes_first_best() {
        let plays = [
            make_move(7, 7, false, "AT", "AT", 4),
            make_move(7, 7, false, "CAT", "CAT", 10),
            make_move(7, 7, true, "CAT", "CAT", 10),
        ];
        let picked = Greedy
            .pick_a_move(&empty_board(), b"CAT", &mut candidates(&plays))
            .unwrap();
        assert_eq!(picked, plays[1]);
        assert!(Greedy.pick_a_move(&empty_board(), b"CAT", &mut []).is_none());
    }

    #[test]
    fn test_random_is_reproducible() {
        let plays = (0..10)
            .map(|i| make_move(7, 7 - i, false, "CAT", "CAT", 10))
            .collect::<Vec<_>>();
        let a = Random::new(7).pick_a_move(&empty_board(), b"CAT", &mut candidates(&plays));
        let b = Random::new(7).pick_a_move(&empty_board(), b"CAT", &mut candidates(&plays));
        assert!(a.is_some());
        assert_eq!(a, b);
    }

    #[test]
    fn test_careful_greedy_penalties() {
        let board = empty_board();
        // reaches column 0 in row 3: (0,0) and (7,0) are both open.
        let left = make_move(3, 0, false, "CAT", "CAT", 30);
        assert_eq!(CarefulGreedy::penalty(&board, &left), 40.0);
        // same thing in the other direction, hitting the bottom row.
        let bottom = make_move(12, 10, true, "CAT", "CAT", 30);
        assert_eq!(CarefulGreedy::penalty(&board, &bottom), 40.0);
        // rows holding triple words are not penalised.
        let row7 = make_move(7, 0, false, "CAT", "CAT", 30);
        assert_eq!(CarefulGreedy::penalty(&board, &row7), 0.0);
        let inside = make_move(3, 4, false, "CAT", "CAT", 30);
        assert_eq!(CarefulGreedy::penalty(&board, &inside), 0.0);
        let picked = CarefulGreedy
            .pick_a_move(&board, b"CAT", &mut candidates(&[left, inside.clone()]))
            .unwrap();
        assert_eq!(picked, inside);
    }

    #[test]
    fn test_careful_greedy_closed_squares() {
        let mut rows = vec![String::new(); 15];
        rows[0] = "A".to_string();
        let board = board::Board::from_rows(matrix::Dim { rows: 15, cols: 15 }, &rows).unwrap();
        let left = make_move(3, 0, false, "CAT", "CAT", 30);
        assert_eq!(CarefulGreedy::penalty(&board, &left), 25.0);
    }

    #[test]
    fn test_radius() {
        let board = empty_board();
        let centered = make_move(7, 6, false, "CAT", "CAT", 10);
        assert!((Radius::mean_distance(&board, &centered) - 2.0 / 3.0).abs() < 1e-6);
        let plays = [make_move(7, 0, false, "CAT", "CAT", 11), centered.clone()];
        let picked = Radius
            .pick_a_move(&board, b"CAT", &mut candidates(&plays))
            .unwrap();
        assert_eq!(picked, centered);
    }

    #[test]
    fn test_q_cautious() {
        let board = empty_board();
        let plays = [
            make_move(7, 7, false, "QI", "QI", 19),
            make_move(7, 7, false, "QUA", "QUA", 25),
            make_move(7, 7, false, "AT", "AT", 4),
        ];
        let picked = QCautious::q()
            .pick_a_move(&board, b"QIUAT", &mut candidates(&plays))
            .unwrap();
        assert_eq!(&picked.word[..], b"QUA");
        let picked = QCautious::qu()
            .pick_a_move(&board, b"QIUAT", &mut candidates(&plays))
            .unwrap();
        assert_eq!(&picked.word[..], b"QUA");
        let picked = QCautious::qu()
            .pick_a_move(&board, b"QIAT", &mut candidates(&plays[..1]));
        assert!(picked.is_none());
    }

    #[test]
    fn test_strategy_names() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.name().parse::<StrategyKind>().unwrap(), kind);
        }
        assert_eq!("Greedy".parse::<StrategyKind>().unwrap(), StrategyKind::Greedy);
        assert!("smart".parse::<StrategyKind>().is_err());
    }
}
