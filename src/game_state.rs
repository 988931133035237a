// Copyright (C) 2020-2026 Andy Kurnia.

use super::{
    alphabet, anchors, bag, board, error, game_config, lexicon, move_picker, movegen,
    play_scorer, signature,
};
use rand::prelude::*;

fn use_tiles<II: IntoIterator<Item = u8>>(rack: &mut Vec<u8>, tiles_iter: II) -> error::GameResult<()> {
    for tile in tiles_iter {
        let pos = rack
            .iter()
            .rposition(|&t| t == tile)
            .ok_or_else(|| error::GameError::NotOnRack(format!("{:?}", tile as char)))?;
        rack.swap_remove(pos);
    }
    Ok(())
}

#[derive(Clone)]
pub struct GamePlayer {
    pub score: i16,
    pub rack: Vec<u8>,
}

#[derive(Clone)]
pub struct GameState<'a> {
    pub game_config: &'a game_config::GameConfig<'a>,
    pub lexicon: &'a lexicon::Lexicon,
    pub signatures: &'a signature::SignatureIndex,
    pub players: Box<[GamePlayer]>,
    pub board: board::Board,
    pub bag: bag::Bag,
    pub turn: u8,
    pub num_consecutive_passes: u8,
    pub num_moves: u16,
    pub is_finished: bool,
}

impl<'a> GameState<'a> {
    pub fn new(
        game_config: &'a game_config::GameConfig<'a>,
        lexicon: &'a lexicon::Lexicon,
        signatures: &'a signature::SignatureIndex,
        num_players: u8,
        rng: &mut dyn RngCore,
    ) -> error::GameResult<Self> {
        if num_players == 0 || num_players > game_config.max_players() {
            return Err(error::GameError::Configuration(format!(
                "{num_players} players, must be 1 to {}",
                game_config.max_players()
            )));
        }
        let rack_size = game_config.rack_size() as usize;
        let mut bag = bag::Bag::new(game_config.alphabet());
        bag.shuffle(rng);
        let players = (0..num_players)
            .map(|_| {
                let mut rack = Vec::with_capacity(rack_size);
                bag.replenish(&mut rack, rack_size);
                GamePlayer { score: 0, rack }
            })
            .collect();
        Ok(Self {
            game_config,
            lexicon,
            signatures,
            players,
            board: board::Board::new(game_config.board_layout().dim()),
            bag,
            turn: 0,
            num_consecutive_passes: 0,
            num_moves: 0,
            is_finished: false,
        })
    }

    pub fn current_player(&self) -> &GamePlayer {
        &self.players[self.turn as usize]
    }

    pub fn board_snapshot(&self) -> movegen::BoardSnapshot<'_> {
        movegen::BoardSnapshot {
            board: &self.board,
            game_config: self.game_config,
            lexicon: self.lexicon,
            signatures: self.signatures,
        }
    }

    fn ensure_not_finished(&self) -> error::GameResult<()> {
        if self.is_finished {
            return Err(error::GameError::Configuration(
                "the game is already over".into(),
            ));
        }
        Ok(())
    }

    // Checks the play against the current board from scratch, ignoring
    // whatever score it claims, and returns what it is actually worth.
    pub fn score_play(&self, play: &movegen::Move) -> error::GameResult<i16> {
        let board_snapshot = self.board_snapshot();
        let score = play_scorer::PlayScorer::new()
            .score_move(&board_snapshot, play, true)
            .map_err(|reason| match reason {
                error::Illegal::NotAWord => {
                    error::GameError::IllegalWord(String::from_utf8_lossy(&play.word).into_owned())
                }
                _ => error::GameError::IllegalPlacement {
                    row: play.row,
                    col: play.col,
                    reason,
                },
            })?;
        if !anchors::is_connected(
            &self.board,
            self.game_config.board_layout(),
            play.row,
            play.col,
            play.down,
            play.word.len(),
        ) {
            return Err(error::GameError::IllegalPlacement {
                row: play.row,
                col: play.col,
                reason: error::Illegal::Disconnected,
            });
        }
        // the tiles laid must be exactly the letters it says it consumes.
        let mut placed = Vec::with_capacity(play.word.len());
        for (i, (row, col)) in (0i8..).zip(play.squares()) {
            if !self.board.is_occupied(row, col) {
                placed.push(if play.blank_positions.contains(&i) {
                    alphabet::BLANK
                } else {
                    play.word[i as usize]
                });
            }
        }
        let mut letters = play.letters.to_vec();
        placed.sort_unstable();
        letters.sort_unstable();
        if placed.is_empty() || placed != letters {
            return Err(error::GameError::IllegalPlacement {
                row: play.row,
                col: play.col,
                reason: error::Illegal::Conflict,
            });
        }
        Ok(score)
    }

    pub fn play(&mut self, play: &movegen::Move) -> error::GameResult<i16> {
        self.ensure_not_finished()?;
        let score = self.score_play(play)?;
        let current_player = &mut self.players[self.turn as usize];
        let mut rack = current_player.rack.clone();
        use_tiles(&mut rack, play.letters.iter().copied())?;
        self.board.apply(play)?;
        current_player.rack = rack;
        current_player.score += score;
        self.bag.replenish(
            &mut current_player.rack,
            self.game_config.rack_size() as usize,
        );
        self.num_consecutive_passes = 0;
        self.num_moves += 1;
        if current_player.rack.is_empty() && self.bag.is_empty() {
            self.finish();
        } else {
            self.next_turn();
        }
        Ok(score)
    }

    pub fn pass(&mut self) -> error::GameResult<()> {
        self.ensure_not_finished()?;
        self.num_consecutive_passes += 1;
        self.num_moves += 1;
        if self.num_consecutive_passes as usize >= self.players.len() {
            self.finish();
        } else {
            self.next_turn();
        }
        Ok(())
    }

    // Every player loses the face value of the tiles left on the rack.
    pub fn finish(&mut self) {
        if self.is_finished {
            return;
        }
        let alphabet = self.game_config.alphabet();
        for player in self.players.iter_mut() {
            player.score -= player
                .rack
                .iter()
                .map(|&tile| alphabet.score(tile) as i16)
                .sum::<i16>();
        }
        self.is_finished = true;
        log::debug!(
            "game over after {} moves, scores {:?}",
            self.num_moves,
            self.players.iter().map(|p| p.score).collect::<Vec<_>>()
        );
    }

    pub fn next_turn(&mut self) {
        let num_players = self.players.len() as u8;
        self.turn += 1;
        self.turn -= num_players & -((self.turn >= num_players) as i8) as u8;
    }

    // Lets the strategy choose among all legal plays for the current rack.
    // None means the player passed.
    pub fn play_turn(
        &mut self,
        move_generator: &mut movegen::MoveGenerator,
        move_picker: &mut dyn move_picker::MovePicker,
    ) -> error::GameResult<Option<movegen::Move>> {
        self.ensure_not_finished()?;
        let rack = self.current_player().rack.clone();
        move_generator.gen_moves(&self.board_snapshot(), &rack)?;
        let mut candidates = move_generator
            .plays
            .iter()
            .cloned()
            .map(movegen::ValuedMove::from)
            .collect::<Vec<_>>();
        match move_picker.pick_a_move(&self.board, &rack, &mut candidates) {
            Some(play) => {
                if let Err(err) = self.play(&play) {
                    log::warn!("player {} picked a rejected move {:?}: {}", self.turn, play, err);
                    return Err(err);
                }
                Ok(Some(play))
            }
            None => {
                self.pass()?;
                Ok(None)
            }
        }
    }

    pub fn play_until_finished(
        &mut self,
        move_generator: &mut movegen::MoveGenerator,
        move_pickers: &mut [Box<dyn move_picker::MovePicker + Send>],
    ) -> error::GameResult<Box<[i16]>> {
        if move_pickers.len() != self.players.len() {
            return Err(error::GameError::Configuration(format!(
                "{} strategies for {} players",
                move_pickers.len(),
                self.players.len()
            )));
        }
        while !self.is_finished {
            let turn = self.turn as usize;
            self.play_turn(move_generator, move_pickers[turn].as_mut())?;
        }
        Ok(self.players.iter().map(|player| player.score).collect())
    }
}
