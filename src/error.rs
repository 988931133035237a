// Copyright (C) 2020-2026 Andy Kurnia.

use std::fmt;

pub struct MyError {
    s: String,
}

impl fmt::Display for MyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.s)
    }
}

impl fmt::Debug for MyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self as &dyn fmt::Display).fmt(f)
    }
}

impl std::error::Error for MyError {}

pub fn new(s: String) -> MyError {
    MyError { s }
}

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into());
    };
}

// Why a scored span was rejected. Cheap to produce, so candidates can be
// discarded during enumeration without allocating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Illegal {
    OutOfBounds,
    Conflict,
    NotAWord,
    Disconnected,
}

impl fmt::Display for Illegal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Illegal::OutOfBounds => "span leaves the board",
            Illegal::Conflict => "span conflicts with a tile on the board",
            Illegal::NotAWord => "span forms a word not in the lexicon",
            Illegal::Disconnected => "span touches no tile and misses the star",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("illegal placement at ({row},{col}): {reason}")]
    IllegalPlacement {
        row: i8,
        col: i8,
        reason: Illegal,
    },

    #[error("illegal word: {0}")]
    IllegalWord(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("rack does not hold {0}")]
    NotOnRack(String),

    #[error("a player named {0:?} already exists")]
    NameCollision(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type GameResult<T> = std::result::Result<T, GameError>;
