// Copyright (C) 2020-2026 Andy Kurnia.

use anagrid::{
    alphabet, anchors, board, display, error, game_config, lexicon, logging, movegen,
    play_scorer, return_error, rlhelper, signature,
};

const HELP: &str = "\
load FILE                  load a word list, one word per line
rack LETTERS               set the rack, ? or * for a blank
gen [N]                    list the best N plays for the rack (default 20)
play N                     play the Nth play of the last list
play ROW COL across|down WORD
                           play WORD, lowercase letters are blanks
board                      show the board
reset                      clear the board and the rack
source FILE                run the commands in FILE
help                       this text
exit                       leave";

struct Shell<'a> {
    game_config: &'a game_config::GameConfig<'a>,
    dictionary: Option<(lexicon::Lexicon, signature::SignatureIndex)>,
    board: board::Board,
    rack: Vec<u8>,
    move_generator: movegen::MoveGenerator,
    play_scorer: play_scorer::PlayScorer,
}

impl<'a> Shell<'a> {
    fn new(game_config: &'a game_config::GameConfig<'a>) -> Self {
        Self {
            game_config,
            dictionary: None,
            board: board::Board::new(game_config.board_layout().dim()),
            rack: Vec::new(),
            move_generator: movegen::MoveGenerator::new(),
            play_scorer: play_scorer::PlayScorer::new(),
        }
    }

    fn load(&mut self, path: &str) -> error::Returns<()> {
        let t0 = std::time::Instant::now();
        let lexicon = lexicon::Lexicon::from_file(path)?;
        let signatures =
            signature::SignatureIndex::build(&lexicon, self.game_config.num_blanks_budget())?;
        println!(
            "{} words, {} signatures, took {} ms",
            lexicon.len(),
            signatures.len(),
            t0.elapsed().as_millis()
        );
        self.dictionary = Some((lexicon, signatures));
        self.move_generator.plays.clear();
        Ok(())
    }

    fn gen_plays(&mut self, max_results: usize) -> error::Returns<()> {
        let Some((lexicon, signatures)) = &self.dictionary else {
            return_error!("no word list, load one first".into());
        };
        let board_snapshot = movegen::BoardSnapshot {
            board: &self.board,
            game_config: self.game_config,
            lexicon,
            signatures,
        };
        let t0 = std::time::Instant::now();
        self.move_generator.gen_moves(&board_snapshot, &self.rack)?;
        println!(
            "{} plays for {}, took {} ms",
            self.move_generator.plays.len(),
            self.game_config.alphabet().fmt_rack(&self.rack),
            t0.elapsed().as_millis()
        );
        display::print_plays(&self.move_generator.plays, max_results);
        Ok(())
    }

    // Lowercase letters on empty squares are blanks. Letters already on the
    // board must match in either case.
    fn make_play(&self, row: i8, col: i8, down: bool, word: &str) -> error::Returns<movegen::Move> {
        let dim = self.board.dim();
        let (start, lane_len) = if down {
            (row, dim.rows)
        } else {
            (col, dim.cols)
        };
        if word.is_empty()
            || !dim.contains(row, col)
            || start as usize + word.len() > lane_len as usize
        {
            return_error!(format!("{word:?} does not fit at row {row} column {col}"));
        }
        let mut letters = Vec::new();
        let mut blank_positions = Vec::new();
        for (i, b) in (0i8..).zip(word.bytes()) {
            if !b.is_ascii_alphabetic() {
                return_error!(format!("{word:?} has a non-letter"));
            }
            let (r, c) = if down { (row + i, col) } else { (row, col + i) };
            if self.board.is_occupied(r, c) {
                continue;
            }
            if b.is_ascii_lowercase() {
                blank_positions.push(i);
                letters.push(alphabet::BLANK);
            } else {
                letters.push(b);
            }
        }
        Ok(movegen::Move {
            row,
            col,
            down,
            word: word.to_ascii_uppercase().into_bytes().into_boxed_slice(),
            letters: letters.into_boxed_slice(),
            score: 0,
            blank_positions: blank_positions.into_boxed_slice(),
        })
    }

    fn play(&mut self, args: &[String]) -> error::Returns<()> {
        let mut play = match args {
            [n] => {
                let n = n.parse::<usize>()?;
                match n.checked_sub(1).and_then(|i| self.move_generator.plays.get(i)) {
                    Some(play) => play.clone(),
                    None => {
                        return_error!(format!("no play {n} in the last list"));
                    }
                }
            }
            [row, col, direction, word] => {
                let down = match direction.as_str() {
                    "across" | "a" => false,
                    "down" | "d" => true,
                    _ => {
                        return_error!(format!("{direction:?} is neither across nor down"));
                    }
                };
                self.make_play(row.parse()?, col.parse()?, down, word)?
            }
            _ => {
                return_error!("play N, or play ROW COL across|down WORD".into());
            }
        };
        let Some((lexicon, signatures)) = &self.dictionary else {
            return_error!("no word list, load one first".into());
        };
        let board_snapshot = movegen::BoardSnapshot {
            board: &self.board,
            game_config: self.game_config,
            lexicon,
            signatures,
        };
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
            }
            .into());
        }
        play.score = self
            .play_scorer
            .score_move(&board_snapshot, &play, true)
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
        self.board.apply(&play)?;
        self.move_generator.plays.clear();
        println!("{}", display::fmt_move(&play));
        Ok(())
    }

    fn run(&mut self, strings: &[String]) -> error::Returns<()> {
        match (strings[0].as_str(), &strings[1..]) {
            ("load", [path]) => self.load(path)?,
            ("rack", []) => println!("rack: {}", self.game_config.alphabet().fmt_rack(&self.rack)),
            ("rack", [letters]) => {
                self.rack = self.game_config.parse_rack(letters)?;
                self.move_generator.plays.clear();
            }
            ("gen", []) => self.gen_plays(20)?,
            ("gen", [n]) => self.gen_plays(n.parse()?)?,
            ("play", args) => self.play(args)?,
            ("board", []) => display::print_board(&self.board, self.game_config.board_layout()),
            ("reset", []) => {
                self.board = board::Board::new(self.game_config.board_layout().dim());
                self.rack.clear();
                self.move_generator.plays.clear();
            }
            _ => println!("invalid input, help for help"),
        }
        Ok(())
    }
}

fn main() -> error::Returns<()> {
    let _logger = logging::setup_logging("warn", None)?;
    let game_config = game_config::make_english_game_config();
    game_config.validate()?;
    let mut shell = Shell::new(&game_config);
    if let Some(path) = std::env::args().nth(1) {
        shell.load(&path)?;
    }

    let mut rl = rlhelper::new_rl_editor(">> ")?;
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{filename}:{line_num}> {line}");
            }
            match shell_words::split(&line) {
                Ok(strings) => {
                    if strings.is_empty() {
                        continue;
                    }
                    match strings[0].as_str() {
                        "help" => {
                            println!("{HELP}");
                        }
                        "exit" => {
                            break;
                        }
                        "source" => {
                            if strings.len() > 1 {
                                match std::fs::read_to_string(&strings[1]) {
                                    Ok(whole_file) => {
                                        let v = cmd_stack.len();
                                        for (line_num, line) in whole_file.lines().enumerate() {
                                            cmd_stack.push((
                                                line.to_string(),
                                                Some((strings[1].clone(), line_num + 1)),
                                            ));
                                        }
                                        cmd_stack[v..].reverse();
                                    }
                                    Err(err) => {
                                        println!("cannot open file: {err}");
                                    }
                                }
                            } else {
                                println!("need another arg");
                            }
                        }
                        _ => {
                            if let Err(err) = shell.run(&strings) {
                                println!("error: {err}");
                            }
                        }
                    }
                }
                Err(err) => {
                    println!("Bad quoting: {err:?}");
                }
            }
        } else {
            match rl.readline(">> ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {err:?}");
                    break;
                }
            }
        }
    }

    Ok(())
}
