// Copyright (C) 2020-2026 Andy Kurnia.

use super::{
    alphabet, anchors, blanks, board, error, game_config, lexicon, matrix, play_scorer, signature,
};

// A placement. word is the whole span from (row, col), board letters
// included; letters are the rack tiles it consumes (BLANK for a blank);
// blank_positions are offsets into word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub row: i8,
    pub col: i8,
    pub down: bool,
    pub word: Box<[u8]>,
    pub letters: Box<[u8]>,
    pub score: i16,
    pub blank_positions: Box<[i8]>,
}

impl Move {
    #[inline(always)]
    pub fn num_tiles(&self) -> usize {
        self.letters.len()
    }

    // word with BLANK_FLAG on the blanks.
    pub fn tiles_with_blanks(&self) -> Vec<u8> {
        let mut tiles = self.word.to_vec();
        for &pos in self.blank_positions.iter() {
            if let Some(tile) = tiles.get_mut(pos as usize) {
                *tile |= alphabet::BLANK_FLAG;
            }
        }
        tiles
    }

    // (row, col) of every square of the span.
    pub fn squares(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let (lane, idx) = matrix::lane_and_idx(self.down, self.row, self.col);
        (idx..)
            .take(self.word.len())
            .map(move |i| matrix::row_and_col(self.down, lane, i))
    }
}

// A move as a strategy sees it. equity starts at the score.
#[derive(Clone, Debug)]
pub struct ValuedMove {
    pub equity: f32,
    pub play: Move,
}

impl From<Move> for ValuedMove {
    fn from(play: Move) -> Self {
        Self {
            equity: play.score as f32,
            play,
        }
    }
}

pub struct BoardSnapshot<'a> {
    pub board: &'a board::Board,
    pub game_config: &'a game_config::GameConfig<'a>,
    pub lexicon: &'a lexicon::Lexicon,
    pub signatures: &'a signature::SignatureIndex,
}

struct SubsetEnv<'a, FoundSubset: FnMut(&[u8])> {
    found_subset: FoundSubset,
    rack: &'a [u8],
    subset: Vec<u8>,
}

fn generate_subsets<FoundSubset: FnMut(&[u8])>(env: &mut SubsetEnv<'_, FoundSubset>, start: usize) {
    for i in start..env.rack.len() {
        // equal tiles are interchangeable.
        if i > start && env.rack[i] == env.rack[i - 1] {
            continue;
        }
        env.subset.push(env.rack[i]);
        (env.found_subset)(&env.subset);
        generate_subsets(env, i + 1);
        env.subset.pop();
    }
}

// Every distinct non-empty sub-multiset of a sorted rack, each once.
pub fn for_each_rack_subset<FoundSubset: FnMut(&[u8])>(
    sorted_rack: &[u8],
    found_subset: FoundSubset,
) {
    generate_subsets(
        &mut SubsetEnv {
            found_subset,
            rack: sorted_rack,
            subset: Vec::with_capacity(sorted_rack.len()),
        },
        0,
    );
}

struct WorkingBuffer {
    play_scorer: play_scorer::PlayScorer,
    blank_resolver: blanks::BlankResolver,
    rack: Vec<u8>,
    subsets: Vec<Box<[u8]>>,
    key: Vec<u8>,
}

impl WorkingBuffer {
    fn new() -> Self {
        Self {
            play_scorer: play_scorer::PlayScorer::new(),
            blank_resolver: blanks::BlankResolver::new(),
            rack: Vec::new(),
            subsets: Vec::new(),
            key: Vec::new(),
        }
    }
}

pub struct MoveGenerator {
    pub plays: Vec<Move>,
    working_buffer: WorkingBuffer,
}

impl Default for MoveGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveGenerator {
    pub fn new() -> Self {
        Self {
            plays: Vec::new(),
            working_buffer: WorkingBuffer::new(),
        }
    }

    // Calls found_move for every legal play of some non-empty part of the
    // rack, in a fixed order that only depends on the inputs. Nothing is
    // found on a rack that is the wrong size or has foreign tiles.
    pub fn for_each_move<FoundMove: FnMut(Move)>(
        &mut self,
        board_snapshot: &BoardSnapshot<'_>,
        rack: &[u8],
        mut found_move: FoundMove,
    ) -> error::GameResult<()> {
        board_snapshot.game_config.validate_rack(rack)?;
        let working_buffer = &mut self.working_buffer;
        working_buffer.rack.clear();
        working_buffer.rack.extend_from_slice(rack);
        working_buffer.rack.sort_unstable();

        let anchor_table = anchors::AnchorTable::compute(
            board_snapshot.board,
            board_snapshot.game_config.board_layout(),
            rack.len() as i8,
        );

        let mut subsets = std::mem::take(&mut working_buffer.subsets);
        subsets.clear();
        for_each_rack_subset(&working_buffer.rack, |subset| subsets.push(subset.into()));

        let mut num_candidates = 0usize;
        let mut num_found = 0usize;
        for subset in subsets.iter() {
            let num_blanks = subset.iter().filter(|&&t| t == alphabet::BLANK).count();
            for &down in &[false, true] {
                for entry in anchor_table.entries(down, subset.len()) {
                    let key = &mut working_buffer.key;
                    key.clear();
                    key.extend_from_slice(subset);
                    key.extend_from_slice(&entry.bridging);
                    signature::make_signature(key);
                    for &word_idx in board_snapshot.signatures.get(key) {
                        num_candidates += 1;
                        let word = board_snapshot.lexicon.word(word_idx);
                        let Ok(score) = working_buffer.play_scorer.score_play(
                            board_snapshot,
                            word,
                            entry.row,
                            entry.col,
                            down,
                            true,
                        ) else {
                            continue;
                        };
                        let (score, blank_positions) = if num_blanks == 0 {
                            (score, Box::default())
                        } else {
                            match working_buffer.blank_resolver.resolve(
                                &mut working_buffer.play_scorer,
                                board_snapshot,
                                word,
                                entry.row,
                                entry.col,
                                down,
                                &entry.bridging,
                                subset,
                            ) {
                                Some(assignment) => (assignment.score, assignment.blank_positions),
                                None => continue,
                            }
                        };
                        num_found += 1;
                        found_move(Move {
                            row: entry.row,
                            col: entry.col,
                            down,
                            word: word.into(),
                            letters: subset.clone(),
                            score,
                            blank_positions,
                        });
                    }
                }
            }
        }
        log::debug!(
            "rack {}: {} anchors, {} subsets, {} candidates, {} plays",
            board_snapshot.game_config.alphabet().fmt_rack(rack),
            anchor_table.len(),
            subsets.len(),
            num_candidates,
            num_found
        );
        working_buffer.subsets = subsets;
        Ok(())
    }

    // Fills plays, best score first. Equal scores keep the order they were
    // found in.
    pub fn gen_moves(
        &mut self,
        board_snapshot: &BoardSnapshot<'_>,
        rack: &[u8],
    ) -> error::GameResult<()> {
        let mut plays = std::mem::take(&mut self.plays);
        plays.clear();
        let result = self.for_each_move(board_snapshot, rack, |play| plays.push(play));
        plays.sort_by(|a, b| b.score.cmp(&a.score));
        self.plays = plays;
        result
    }
}
