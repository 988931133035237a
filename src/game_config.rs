// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout, error, signature};

// Subsets of a rack are enumerated exhaustively, so this is a hard ceiling.
pub const MAX_RACK_SIZE: i8 = 7;

pub struct StaticGameConfig<'a> {
    alphabet: &'a alphabet::Alphabet<'a>,
    board_layout: board_layout::BoardLayout,
    rack_size: i8,
    max_players: u8,
    num_blanks_budget: u8,
    full_rack_bonus: i16,
}

pub enum GameConfig<'a> {
    Static(StaticGameConfig<'a>),
}

impl<'a> GameConfig<'a> {
    #[inline(always)]
    pub fn alphabet(&self) -> &'a alphabet::Alphabet<'a> {
        match self {
            GameConfig::Static(x) => x.alphabet,
        }
    }

    #[inline(always)]
    pub fn board_layout(&self) -> &board_layout::BoardLayout {
        match self {
            GameConfig::Static(x) => &x.board_layout,
        }
    }

    #[inline(always)]
    pub fn rack_size(&self) -> i8 {
        match self {
            GameConfig::Static(x) => x.rack_size,
        }
    }

    #[inline(always)]
    pub fn max_players(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.max_players,
        }
    }

    #[inline(always)]
    pub fn num_blanks_budget(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.num_blanks_budget,
        }
    }

    #[inline(always)]
    pub fn num_played_bonus(&self, num_played: i8) -> i16 {
        match self {
            GameConfig::Static(x) => {
                // branchless
                x.full_rack_bonus & -((num_played >= x.rack_size) as i16)
            }
        }
    }

    pub fn validate(&self) -> error::GameResult<()> {
        self.board_layout().validate()?;
        let rack_size = self.rack_size();
        if !(1..=MAX_RACK_SIZE).contains(&rack_size) {
            return Err(error::GameError::Configuration(format!(
                "rack size {rack_size} is outside 1..={MAX_RACK_SIZE}"
            )));
        }
        if self.max_players() == 0 {
            return Err(error::GameError::Configuration(
                "a game needs at least one player".into(),
            ));
        }
        let budget = self.num_blanks_budget();
        if budget > signature::MAX_BLANKS {
            return Err(error::GameError::Configuration(format!(
                "blank budget {budget} exceeds {}",
                signature::MAX_BLANKS
            )));
        }
        let num_blanks = self.alphabet().num_blanks();
        if num_blanks > budget {
            return Err(error::GameError::Configuration(format!(
                "tile set has {num_blanks} blanks but the blank budget is {budget}"
            )));
        }
        Ok(())
    }

    // A rack handed to the generator: no more tiles than rack_size, and
    // every tile a letter or BLANK.
    pub fn validate_rack(&self, rack: &[u8]) -> error::GameResult<()> {
        if rack.len() > self.rack_size() as usize {
            return Err(error::GameError::Configuration(format!(
                "rack {:?} has {} tiles, max is {}",
                self.alphabet().fmt_rack(rack),
                rack.len(),
                self.rack_size()
            )));
        }
        if let Some(&tile) = rack
            .iter()
            .find(|&&tile| self.alphabet().tile_index(tile).is_none())
        {
            return Err(error::GameError::Configuration(format!(
                "rack has invalid tile {:?}",
                tile as char
            )));
        }
        Ok(())
    }

    // Rack from user text: letters are uppercased, '*' and '?' are blanks.
    pub fn parse_rack(&self, s: &str) -> error::GameResult<Vec<u8>> {
        let rack = s
            .bytes()
            .map(|b| match b {
                b'*' | b'?' => alphabet::BLANK,
                _ => b.to_ascii_uppercase(),
            })
            .collect::<Vec<_>>();
        self.validate_rack(&rack)?;
        Ok(rack)
    }
}

pub fn make_english_game_config<'a>() -> GameConfig<'a> {
    GameConfig::Static(StaticGameConfig {
        alphabet: &alphabet::ENGLISH_ALPHABET,
        board_layout: board_layout::make_standard_board_layout(),
        rack_size: 7,
        max_players: 4,
        num_blanks_budget: 2,
        full_rack_bonus: 50,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_config_is_valid() {
        let game_config = make_english_game_config();
        assert!(game_config.validate().is_ok());
        assert_eq!(game_config.rack_size(), 7);
        assert_eq!(game_config.max_players(), 4);
    }

    #[test]
    fn test_num_played_bonus() {
        let game_config = make_english_game_config();
        assert_eq!(game_config.num_played_bonus(7), 50);
        assert_eq!(game_config.num_played_bonus(6), 0);
        assert_eq!(game_config.num_played_bonus(1), 0);
    }

    #[test]
    fn test_invalid_configs() {
        let oversized = GameConfig::Static(StaticGameConfig {
            alphabet: &alphabet::ENGLISH_ALPHABET,
            board_layout: board_layout::make_standard_board_layout(),
            rack_size: 8,
            max_players: 4,
            num_blanks_budget: 2,
            full_rack_bonus: 50,
        });
        assert!(matches!(
            oversized.validate(),
            Err(error::GameError::Configuration(_))
        ));
        let too_few_blanks = GameConfig::Static(StaticGameConfig {
            alphabet: &alphabet::ENGLISH_ALPHABET,
            board_layout: board_layout::make_standard_board_layout(),
            rack_size: 7,
            max_players: 4,
            num_blanks_budget: 1,
            full_rack_bonus: 50,
        });
        assert!(too_few_blanks.validate().is_err());
    }

    #[test]
    fn test_parse_rack() {
        let game_config = make_english_game_config();
        assert_eq!(game_config.parse_rack("qu*et").unwrap(), b"QU?ET");
        assert!(game_config.parse_rack("ABCDEFGH").is_err());
        assert!(game_config.parse_rack("AB1").is_err());
        assert!(game_config.parse_rack("").unwrap().is_empty());
    }
}
