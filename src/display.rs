// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, board_layout, movegen};

#[inline(always)]
pub fn empty_label(board_layout: &board_layout::BoardLayout, row: i8, col: i8) -> char {
    if row == board_layout.star_row() && col == board_layout.star_col() {
        return '*';
    }
    match board_layout.premium_at(row, col) {
        board_layout::Premium::TripleWord => '=',
        board_layout::Premium::DoubleWord => '-',
        board_layout::Premium::TripleLetter => '"',
        board_layout::Premium::DoubleLetter => '\'',
        board_layout::Premium::None => ' ',
    }
}

// Tiles in uppercase, blanks in lowercase, otherwise the premium.
#[inline(always)]
pub fn board_label(
    board: &board::Board,
    board_layout: &board_layout::BoardLayout,
    row: i8,
    col: i8,
) -> char {
    match board.get(row, col).letter() {
        Some(letter) if board.is_blank(row, col) => letter.to_ascii_lowercase() as char,
        Some(letter) => letter as char,
        None => empty_label(board_layout, row, col),
    }
}

fn fmt_border(s: &mut String, cols: i8) {
    s.push_str("   +");
    for _ in 1..cols {
        s.push_str("---");
    }
    s.push_str("--+\n");
}

fn fmt_header(s: &mut String, cols: i8) {
    s.push_str("   ");
    for c in 0..cols {
        s.push_str(&format!(" {:2}", c));
    }
    s.push('\n');
}

pub fn fmt_board(board: &board::Board, board_layout: &board_layout::BoardLayout) -> String {
    let dim = board.dim();
    let mut s = String::new();
    fmt_header(&mut s, dim.cols);
    fmt_border(&mut s, dim.cols);
    for r in 0..dim.rows {
        s.push_str(&format!("{:2} |", r));
        for c in 0..dim.cols {
            if c > 0 {
                s.push_str("  ");
            }
            s.push(board_label(board, board_layout, r, c));
        }
        s.push_str(&format!("| {}\n", r));
    }
    fmt_border(&mut s, dim.cols);
    fmt_header(&mut s, dim.cols);
    s
}

pub fn print_board(board: &board::Board, board_layout: &board_layout::BoardLayout) {
    print!("{}", fmt_board(board, board_layout));
}

pub fn fmt_word_with_blanks(word: &[u8], blank_positions: &[i8]) -> String {
    (0i8..)
        .zip(word.iter())
        .map(|(i, &letter)| {
            if blank_positions.contains(&i) {
                letter.to_ascii_lowercase() as char
            } else {
                letter as char
            }
        })
        .collect()
}

#[inline(always)]
pub fn direction(down: bool) -> &'static str {
    if down { "down" } else { "across" }
}

pub fn fmt_move(play: &movegen::Move) -> String {
    format!(
        "at row {} and column {}, play {} {} using {} for {} points",
        play.row,
        play.col,
        direction(play.down),
        fmt_word_with_blanks(&play.word, &play.blank_positions),
        String::from_utf8_lossy(&play.letters),
        play.score
    )
}

pub fn fmt_plays(plays: &[movegen::Move], max_results: usize) -> String {
    let mut s = format!(
        "{:>5} {:>3} {:>3} {:<6} {:<15} {}\n",
        "SCORE", "ROW", "COL", "HOW", "WORD", "USED"
    );
    for play in plays.iter().take(max_results) {
        s.push_str(&format!(
            "{:>5} {:>3} {:>3} {:<6} {:<15} {}\n",
            play.score,
            play.row,
            play.col,
            direction(play.down),
            fmt_word_with_blanks(&play.word, &play.blank_positions),
            String::from_utf8_lossy(&play.letters)
        ));
    }
    s
}

pub fn print_plays(plays: &[movegen::Move], max_results: usize) {
    print!("{}", fmt_plays(plays, max_results));
}
