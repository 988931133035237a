// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod anchors;
pub mod bag;
pub mod blanks;
pub mod board;
pub mod board_layout;
pub mod display;
pub mod fash;
pub mod game_config;
pub mod game_state;
pub mod lexicon;
pub mod logging;
pub mod matrix;
pub mod move_picker;
pub mod movegen;
pub mod play_scorer;
pub mod rlhelper;
pub mod signature;
pub mod tournament;
