// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error::Illegal, matrix, movegen};

// Scores spans against a board snapshot. Tiles in the word may carry
// alphabet::BLANK_FLAG, in which case they score as blanks but still have
// to match the letter on an occupied square.
pub struct PlayScorer {
    word_buffer: Vec<u8>,
}

impl Default for PlayScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayScorer {
    pub fn new() -> Self {
        Self {
            word_buffer: Vec::with_capacity(16),
        }
    }

    // The word laid on its span, plus whatever contiguous board tiles
    // extend it at either end. Premiums only apply to empty squares.
    pub fn score_central_word(
        &mut self,
        board_snapshot: &movegen::BoardSnapshot<'_>,
        word: &[u8],
        row: i8,
        col: i8,
        down: bool,
        legality_check: bool,
    ) -> Result<i16, Illegal> {
        let board = board_snapshot.board;
        let dim = board.dim();
        let alphabet = board_snapshot.game_config.alphabet();
        let premiums = board_snapshot.game_config.board_layout().premiums();
        let (lane, idx) = matrix::lane_and_idx(down, row, col);
        let strider = dim.lane(down, lane);
        if !dim.contains(row, col) || idx as usize + word.len() > strider.len() as usize {
            return Err(Illegal::OutOfBounds);
        }
        let end = idx + word.len() as i8;

        let mut main_score = 0i16;
        let mut word_multiplier = 1i16;
        for (i, &tile) in (idx..).zip(word.iter()) {
            let at = strider.at(i);
            match board.tile_at(at) {
                Some(placed) => {
                    if placed & !alphabet::BLANK_FLAG != tile & !alphabet::BLANK_FLAG {
                        return Err(Illegal::Conflict);
                    }
                    main_score += alphabet.score(placed) as i16;
                }
                None => {
                    let premium = premiums[at];
                    main_score += alphabet.score(tile) as i16 * premium.letter_multiplier();
                    word_multiplier *= premium.word_multiplier();
                }
            }
        }

        let mut prefix_start = idx;
        while prefix_start > 0 {
            match board.tile_at(strider.at(prefix_start - 1)) {
                Some(placed) => main_score += alphabet.score(placed) as i16,
                None => break,
            }
            prefix_start -= 1;
        }
        let mut postfix_end = end;
        while postfix_end < strider.len() {
            match board.tile_at(strider.at(postfix_end)) {
                Some(placed) => main_score += alphabet.score(placed) as i16,
                None => break,
            }
            postfix_end += 1;
        }

        if legality_check {
            self.word_buffer.clear();
            for i in prefix_start..idx {
                self.word_buffer.extend(board.at(strider.at(i)).letter());
            }
            self.word_buffer
                .extend(word.iter().map(|&tile| tile & !alphabet::BLANK_FLAG));
            for i in end..postfix_end {
                self.word_buffer.extend(board.at(strider.at(i)).letter());
            }
            if !board_snapshot.lexicon.contains(&self.word_buffer) {
                return Err(Illegal::NotAWord);
            }
        }

        Ok(main_score * word_multiplier)
    }

    // Main word, every cross-word formed by a newly placed tile, and the
    // bonus for using the whole rack.
    pub fn score_play(
        &mut self,
        board_snapshot: &movegen::BoardSnapshot<'_>,
        word: &[u8],
        row: i8,
        col: i8,
        down: bool,
        legality_check: bool,
    ) -> Result<i16, Illegal> {
        let board = board_snapshot.board;
        let dim = board.dim();
        let (lane, idx) = matrix::lane_and_idx(down, row, col);
        if word.is_empty()
            || !dim.contains(row, col)
            || idx as usize + word.len() > dim.lane(down, lane).len() as usize
        {
            return Err(Illegal::OutOfBounds);
        }

        let mut score =
            self.score_central_word(board_snapshot, word, row, col, down, legality_check)?;

        let mut num_played = 0i8;
        for (i, &tile) in (idx..).zip(word.iter()) {
            let (r, c) = matrix::row_and_col(down, lane, i);
            if board.is_occupied(r, c) {
                continue;
            }
            num_played += 1;
            let (before, after) = if down {
                ((r, c - 1), (r, c + 1))
            } else {
                ((r - 1, c), (r + 1, c))
            };
            if board.is_occupied(before.0, before.1) || board.is_occupied(after.0, after.1) {
                score +=
                    self.score_central_word(board_snapshot, &[tile], r, c, !down, legality_check)?;
            }
        }

        Ok(score + board_snapshot.game_config.num_played_bonus(num_played))
    }

    // Same as score_play, with blank_positions applied to the word.
    pub fn score_move(
        &mut self,
        board_snapshot: &movegen::BoardSnapshot<'_>,
        play: &movegen::Move,
        legality_check: bool,
    ) -> Result<i16, Illegal> {
        let tiles = play.tiles_with_blanks();
        self.score_play(
            board_snapshot,
            &tiles,
            play.row,
            play.col,
            play.down,
            legality_check,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board, game_config, lexicon, signature};

    struct Fixture {
        game_config: game_config::GameConfig<'static>,
        lexicon: lexicon::Lexicon,
        signatures: signature::SignatureIndex,
    }

    impl Fixture {
        fn new(words: &str) -> Self {
            let lexicon = lexicon::Lexicon::from_text(words).unwrap();
            let signatures = signature::SignatureIndex::build(&lexicon, 2).unwrap();
            Self {
                game_config: game_config::make_english_game_config(),
                lexicon,
                signatures,
            }
        }

        fn board(&self, row7: &str) -> board::Board {
            let mut rows = vec![String::new(); 15];
            rows[7] = row7.to_string();
            board::Board::from_rows(self.game_config.board_layout().dim(), &rows).unwrap()
        }

        fn snapshot<'a>(&'a self, board: &'a board::Board) -> movegen::BoardSnapshot<'a> {
            movegen::BoardSnapshot {
                board,
                game_config: &self.game_config,
                lexicon: &self.lexicon,
                signatures: &self.signatures,
            }
        }
    }

    #[test]
    fn test_empty_board_premiums() {
        let fixture = Fixture::new("CAT\nRETAINS");
        let board = fixture.board("");
        let snapshot = fixture.snapshot(&board);
        let mut scorer = PlayScorer::new();
        // C on the center double word.
        assert_eq!(scorer.score_play(&snapshot, b"CAT", 7, 7, false, true), Ok(10));
        assert_eq!(scorer.score_play(&snapshot, b"CAT", 7, 7, true, true), Ok(10));
        // C on a double letter, nothing else.
        assert_eq!(scorer.score_play(&snapshot, b"CAT", 7, 3, false, false), Ok(8));
        // blanked C scores nothing, the square still doubles the word.
        let blanked = [b'C' | alphabet::BLANK_FLAG, b'A', b'T'];
        assert_eq!(
            scorer.score_play(&snapshot, &blanked, 7, 7, false, true),
            Ok(4)
        );
    }

    #[test]
    fn test_full_rack_bonus() {
        let fixture = Fixture::new("CAT\nRETAINS");
        let board = fixture.board("");
        let snapshot = fixture.snapshot(&board);
        let mut scorer = PlayScorer::new();
        // I lands on the double letter at (7,11).
        assert_eq!(scorer.score_central_word(&snapshot, b"RETAINS", 7, 7, false, true), Ok(16));
        assert_eq!(scorer.score_play(&snapshot, b"RETAINS", 7, 7, false, true), Ok(66));
    }

    #[test]
    fn test_out_of_bounds() {
        let fixture = Fixture::new("CAT\nRETAINS");
        let board = fixture.board("");
        let snapshot = fixture.snapshot(&board);
        let mut scorer = PlayScorer::new();
        assert_eq!(
            scorer.score_play(&snapshot, b"RETAINS", 7, 9, false, true),
            Err(Illegal::OutOfBounds)
        );
        assert_eq!(
            scorer.score_play(&snapshot, b"RETAINS", 9, 7, true, false),
            Err(Illegal::OutOfBounds)
        );
        // T on the triple word at the end of the row.
        assert_eq!(
            scorer.score_play(&snapshot, b"CAT", 7, 12, false, false),
            Ok(15)
        );
    }

    #[test]
    fn test_cross_words() {
        let fixture = Fixture::new("CAT\nCATS\nAS");
        let board = fixture.board(".......CAT");
        let snapshot = fixture.snapshot(&board);
        let mut scorer = PlayScorer::new();
        // AS down makes CATS across.
        assert_eq!(scorer.score_play(&snapshot, b"AS", 6, 10, true, true), Ok(2 + 6));
        let fixture = Fixture::new("CAT\nAS");
        let snapshot = fixture.snapshot(&board);
        assert_eq!(
            scorer.score_play(&snapshot, b"AS", 6, 10, true, true),
            Err(Illegal::NotAWord)
        );
        assert_eq!(scorer.score_play(&snapshot, b"AS", 6, 10, true, false), Ok(8));
    }

    #[test]
    fn test_extension_through_board_tiles() {
        let fixture = Fixture::new("CAT\nCATS\nSCAT");
        let board = fixture.board(".......CAT");
        let snapshot = fixture.snapshot(&board);
        let mut scorer = PlayScorer::new();
        // whole word given, board letters score face value.
        assert_eq!(scorer.score_play(&snapshot, b"CATS", 7, 7, false, true), Ok(6));
        // just the new tile, the prefix is picked up from the board.
        assert_eq!(scorer.score_play(&snapshot, b"S", 7, 10, false, true), Ok(6));
        assert_eq!(scorer.score_play(&snapshot, b"S", 7, 6, false, true), Ok(6));
        assert_eq!(
            scorer.score_play(&snapshot, b"DOG", 7, 7, false, false),
            Err(Illegal::Conflict)
        );
    }

    #[test]
    fn test_blank_on_board_scores_zero() {
        let fixture = Fixture::new("CAT\nCATS");
        let board = fixture.board(".......cAT");
        let snapshot = fixture.snapshot(&board);
        let mut scorer = PlayScorer::new();
        assert_eq!(scorer.score_play(&snapshot, b"S", 7, 10, false, true), Ok(3));
    }
}
