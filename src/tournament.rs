// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, game_config, game_state, lexicon, move_picker, movegen, signature};
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct Player {
    pub name: String,
    pub strategy: move_picker::StrategyKind,
}

// One row per player per round.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RoundResult {
    pub round: u32,
    pub seat: u8,
    pub player: String,
    pub strategy: String,
    pub score: i16,
    pub won: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Standing {
    pub name: String,
    pub total_score: i64,
    pub wins: u32,
    pub rounds: u32,
}

pub struct Tournament<'a> {
    game_config: &'a game_config::GameConfig<'a>,
    lexicon: &'a lexicon::Lexicon,
    signatures: &'a signature::SignatureIndex,
    players: Box<[Player]>,
    standings: Box<[Standing]>,
    results: Vec<RoundResult>,
    num_threads: usize,
}

struct RoundEnv<'a> {
    game_config: &'a game_config::GameConfig<'a>,
    lexicon: &'a lexicon::Lexicon,
    signatures: &'a signature::SignatureIndex,
    players: &'a [Player],
    randomize_order: bool,
    seed: u64,
}

impl RoundEnv<'_> {
    // Each round draws from its own stream, so the outcome does not depend
    // on which thread plays it.
    fn play_round(
        &self,
        move_generator: &mut movegen::MoveGenerator,
        round: u32,
    ) -> error::GameResult<Vec<RoundResult>> {
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(self.seed);
        rng.set_stream(round as u64);
        let mut seating = (0..self.players.len()).collect::<Vec<_>>();
        if self.randomize_order {
            seating.shuffle(&mut rng);
        }
        let mut move_pickers = seating
            .iter()
            .map(|&p| self.players[p].strategy.make_picker(rng.random()))
            .collect::<Vec<_>>();
        let mut game = game_state::GameState::new(
            self.game_config,
            self.lexicon,
            self.signatures,
            self.players.len() as u8,
            &mut rng,
        )?;
        let scores = game.play_until_finished(move_generator, &mut move_pickers)?;
        let max_score = scores.iter().copied().max().unwrap_or(0);
        log::info!("round {} finished after {} moves: {:?}", round, game.num_moves, scores);
        Ok((0u8..)
            .zip(seating.iter())
            .zip(scores.iter())
            .map(|((seat, &p), &score)| RoundResult {
                round,
                seat,
                player: self.players[p].name.clone(),
                strategy: self.players[p].strategy.to_string(),
                score,
                won: score == max_score,
            })
            .collect())
    }
}

impl<'a> Tournament<'a> {
    pub fn new(
        game_config: &'a game_config::GameConfig<'a>,
        lexicon: &'a lexicon::Lexicon,
        signatures: &'a signature::SignatureIndex,
        players: Vec<Player>,
    ) -> error::GameResult<Self> {
        if players.is_empty() || players.len() > game_config.max_players() as usize {
            return Err(error::GameError::Configuration(format!(
                "{} players, must be 1 to {}",
                players.len(),
                game_config.max_players()
            )));
        }
        for (i, player) in players.iter().enumerate() {
            if players[..i].iter().any(|p| p.name == player.name) {
                return Err(error::GameError::NameCollision(player.name.clone()));
            }
        }
        let standings = players
            .iter()
            .map(|player| Standing {
                name: player.name.clone(),
                ..Standing::default()
            })
            .collect();
        Ok(Self {
            game_config,
            lexicon,
            signatures,
            players: players.into_boxed_slice(),
            standings,
            results: Vec::new(),
            num_threads: num_cpus::get(),
        })
    }

    pub fn set_num_threads(&mut self, num_threads: usize) {
        self.num_threads = num_threads.max(1);
    }

    #[inline(always)]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    // In the order the players were given.
    #[inline(always)]
    pub fn standings(&self) -> &[Standing] {
        &self.standings
    }

    #[inline(always)]
    pub fn results(&self) -> &[RoundResult] {
        &self.results
    }

    // Plays num_rounds more rounds. Rounds run in parallel but are tallied
    // in round order, so the same seed gives the same results.
    pub fn play(
        &mut self,
        num_rounds: u32,
        randomize_order: bool,
        seed: u64,
    ) -> error::GameResult<()> {
        let first_round = self.standings.first().map_or(0, |s| s.rounds);
        let env = RoundEnv {
            game_config: self.game_config,
            lexicon: self.lexicon,
            signatures: self.signatures,
            players: &self.players,
            randomize_order,
            seed,
        };
        let num_threads = self.num_threads.min(num_rounds.max(1) as usize);
        let next_round = std::sync::atomic::AtomicU32::new(0);
        let (tx, rx) = std::sync::mpsc::channel();
        let t0 = std::time::Instant::now();
        let mut round_results = std::thread::scope(|s| {
            for _ in 0..num_threads {
                let tx = tx.clone();
                let env = &env;
                let next_round = &next_round;
                s.spawn(move || {
                    let mut move_generator = movegen::MoveGenerator::new();
                    loop {
                        let i = next_round.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
                        if i >= num_rounds {
                            break;
                        }
                        let round = first_round + i;
                        if tx
                            .send((i, env.play_round(&mut move_generator, round)))
                            .is_err()
                        {
                            break;
                        }
                    }
                });
            }
            drop(tx);
            let mut round_results = (0..num_rounds).map(|_| None).collect::<Vec<_>>();
            for (i, result) in rx.iter() {
                round_results[i as usize] = Some(result);
            }
            round_results
        });

        for result in round_results.iter_mut() {
            let Some(result) = result.take() else {
                continue;
            };
            for row in result? {
                if let Some(standing) = self.standings.iter_mut().find(|s| s.name == row.player) {
                    standing.total_score += row.score as i64;
                    standing.wins += row.won as u32;
                    standing.rounds += 1;
                }
                self.results.push(row);
            }
        }
        log::info!(
            "{} rounds on {} threads in {:?}",
            num_rounds,
            num_threads,
            t0.elapsed()
        );
        Ok(())
    }

    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> error::GameResult<()> {
        let mut csv_out = csv::Writer::from_writer(writer);
        for row in self.results.iter() {
            csv_out.serialize(row)?;
        }
        csv_out.flush()?;
        Ok(())
    }

    pub fn write_csv_file<P: AsRef<std::path::Path>>(&self, path: P) -> error::GameResult<()> {
        self.write_csv(std::fs::File::create(path)?)
    }
}
