// Copyright (C) 2020-2026 Andy Kurnia.

use anagrid::{board, display, error, game_config, lexicon, logging, movegen, signature};
use std::io::Read;

// board: one string per row. '.' or ' ' is empty, uppercase is a tile,
// lowercase is a blank standing for that letter.
// rack: letters, '?' or '*' for a blank.
// count: maximum number of moves returned, best first.
#[derive(serde::Deserialize)]
struct Question {
    board: Vec<String>,
    rack: String,
    #[serde(rename = "count")]
    max_gen: usize,
}

// word has blanks in lowercase, as on the board.
#[derive(serde::Serialize)]
struct Answer {
    row: i8,
    col: i8,
    direction: &'static str,
    word: String,
    letters: String,
    score: i16,
    blank_positions: Vec<i8>,
}

impl From<&movegen::Move> for Answer {
    fn from(play: &movegen::Move) -> Self {
        Self {
            row: play.row,
            col: play.col,
            direction: display::direction(play.down),
            word: display::fmt_word_with_blanks(&play.word, &play.blank_positions),
            letters: String::from_utf8_lossy(&play.letters).into_owned(),
            score: play.score,
            blank_positions: play.blank_positions.to_vec(),
        }
    }
}

fn main() -> error::Returns<()> {
    let _logger = logging::setup_logging("warn", None)?;
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 2 {
        return Err("args: lexicon.txt [question.json] (reads stdin without a file)".into());
    }
    let data = match args.get(2) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut data = String::new();
            std::io::stdin().read_to_string(&mut data)?;
            data
        }
    };
    let question = serde_json::from_str::<Question>(&data)?;

    let game_config = game_config::make_english_game_config();
    game_config.validate()?;
    let rack = game_config.parse_rack(&question.rack)?;
    let board = board::Board::from_rows(game_config.board_layout().dim(), &question.board)?;
    let lexicon = lexicon::Lexicon::from_file(&args[1])?;
    let signatures = signature::SignatureIndex::build(&lexicon, game_config.num_blanks_budget())?;

    let board_snapshot = movegen::BoardSnapshot {
        board: &board,
        game_config: &game_config,
        lexicon: &lexicon,
        signatures: &signatures,
    };
    let mut move_generator = movegen::MoveGenerator::new();
    move_generator.gen_moves(&board_snapshot, &rack)?;
    log::info!("{} plays found", move_generator.plays.len());

    let answers = move_generator
        .plays
        .iter()
        .take(question.max_gen)
        .map(Answer::from)
        .collect::<Vec<_>>();
    println!("{}", serde_json::to_string_pretty(&answers)?);

    Ok(())
}
