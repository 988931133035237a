// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, matrix, movegen, play_scorer};

// Where the blanks of a play end up, and what the play is then worth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlankAssignment {
    pub score: i16,
    pub blank_positions: Box<[i8]>,
}

// Decides which squares of a matched word the blanks stand on. Every
// injective assignment of blanks to empty squares showing the right letter
// is scored in full, cross-words included, and the best one is kept (the
// first found among equals).
#[derive(Default)]
pub struct BlankResolver {
    // letters the blanks have to stand for.
    meanings: Vec<u8>,
    // [blank] -> offsets into the word.
    candidates: Vec<Vec<i8>>,
    chosen: Vec<i8>,
    tiles: Vec<u8>,
    best: Option<(i16, Vec<i8>)>,
}

struct SearchEnv<'a, 'b> {
    resolver: &'a mut BlankResolver,
    play_scorer: &'a mut play_scorer::PlayScorer,
    board_snapshot: &'a movegen::BoardSnapshot<'b>,
    word: &'a [u8],
    row: i8,
    col: i8,
    down: bool,
}

fn search(env: &mut SearchEnv<'_, '_>, depth: usize) {
    let resolver = &mut *env.resolver;
    if depth == resolver.meanings.len() {
        resolver.tiles.clear();
        resolver.tiles.extend_from_slice(env.word);
        for &pos in resolver.chosen.iter() {
            resolver.tiles[pos as usize] |= alphabet::BLANK_FLAG;
        }
        // legality was established on the plain word.
        if let Ok(score) = env.play_scorer.score_play(
            env.board_snapshot,
            &resolver.tiles,
            env.row,
            env.col,
            env.down,
            false,
        ) {
            if resolver.best.as_ref().is_none_or(|(best, _)| score > *best) {
                let mut positions = resolver.chosen.clone();
                positions.sort_unstable();
                resolver.best = Some((score, positions));
            }
        }
        return;
    }
    for i in 0..resolver.candidates[depth].len() {
        let resolver = &mut *env.resolver;
        let pos = resolver.candidates[depth][i];
        if resolver.chosen.contains(&pos) {
            continue;
        }
        // blanks for the same letter are interchangeable.
        if depth > 0
            && resolver.meanings[depth] == resolver.meanings[depth - 1]
            && pos < resolver.chosen[depth - 1]
        {
            continue;
        }
        resolver.chosen.push(pos);
        search(env, depth + 1);
        env.resolver.chosen.pop();
    }
}

impl BlankResolver {
    pub fn new() -> Self {
        Self::default()
    }

    // word is what the signature index matched; bridging and the rack's
    // lettered tiles account for all of it except num_blanks letters.
    // None if no assignment is possible.
    #[allow(clippy::too_many_arguments)]
    pub fn resolve(
        &mut self,
        play_scorer: &mut play_scorer::PlayScorer,
        board_snapshot: &movegen::BoardSnapshot<'_>,
        word: &[u8],
        row: i8,
        col: i8,
        down: bool,
        bridging: &[u8],
        rack_letters: &[u8],
    ) -> Option<BlankAssignment> {
        self.meanings.clear();
        self.meanings.extend_from_slice(word);
        for &letter in bridging.iter().chain(rack_letters.iter()) {
            if letter == alphabet::BLANK {
                continue;
            }
            let pos = self.meanings.iter().position(|&m| m == letter)?;
            self.meanings.swap_remove(pos);
        }
        self.meanings.sort_unstable();

        let board = board_snapshot.board;
        let (lane, idx) = matrix::lane_and_idx(down, row, col);
        let strider = board.dim().lane(down, lane);
        self.candidates.resize_with(self.meanings.len(), Vec::new);
        for (meaning, positions) in self.meanings.iter().zip(self.candidates.iter_mut()) {
            positions.clear();
            for (j, &letter) in (0i8..).zip(word.iter()) {
                if letter == *meaning && !board.is_occupied_at(strider.at(idx + j)) {
                    positions.push(j);
                }
            }
        }

        self.chosen.clear();
        self.best = None;
        search(
            &mut SearchEnv {
                resolver: &mut *self,
                play_scorer,
                board_snapshot,
                word,
                row,
                col,
                down,
            },
            0,
        );
        self.best.take().map(|(score, positions)| BlankAssignment {
            score,
            blank_positions: positions.into_boxed_slice(),
        })
    }
}
