// Copyright (C) 2020-2026 Andy Kurnia.

// Tiles are ASCII bytes: b'A'..=b'Z' for lettered tiles and BLANK for an
// undesignated blank on a rack. Once a blank is placed it is written as
// its designated letter with BLANK_FLAG set.

pub const BLANK: u8 = b'?';
pub const BLANK_FLAG: u8 = 0x80;

pub struct Tile {
    label: u8,
    freq: u8,
    score: i8,
    is_vowel: bool,
}

pub struct StaticAlphabet<'a> {
    tiles: &'a [Tile],
    num_tiles: u16,
}

pub enum Alphabet<'a> {
    Static(StaticAlphabet<'a>),
}

impl<'a> Alphabet<'a> {
    #[inline(always)]
    pub fn len(&self) -> u8 {
        match self {
            Alphabet::Static(x) => x.tiles.len() as u8,
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn get(&self, idx: u8) -> &'a Tile {
        match self {
            Alphabet::Static(x) => &x.tiles[idx as usize],
        }
    }

    #[inline(always)]
    pub fn num_tiles(&self) -> u16 {
        match self {
            Alphabet::Static(x) => x.num_tiles,
        }
    }

    // index 0 is the blank, 1.. are the letters in label order.
    #[inline(always)]
    pub fn tile_index(&self, tile: u8) -> Option<u8> {
        let idx = if tile == BLANK {
            0
        } else if tile.is_ascii_uppercase() {
            tile - b'A' + 1
        } else {
            return None;
        };
        if idx < self.len() { Some(idx) } else { None }
    }

    #[inline(always)]
    pub fn is_letter(&self, tile: u8) -> bool {
        tile != BLANK && self.tile_index(tile).is_some()
    }

    #[inline(always)]
    pub fn label(&self, idx: u8) -> u8 {
        self.get(idx).label
    }

    // Face value. A placed blank (BLANK_FLAG set) is worth whatever the
    // blank tile is worth, regardless of the letter it stands for.
    #[inline(always)]
    pub fn score(&self, tile: u8) -> i8 {
        let tile = if tile & BLANK_FLAG != 0 { BLANK } else { tile };
        self.tile_index(tile).map_or(0, |idx| self.get(idx).score)
    }

    #[inline(always)]
    pub fn is_vowel(&self, tile: u8) -> bool {
        self.tile_index(tile & !BLANK_FLAG)
            .is_some_and(|idx| self.get(idx).is_vowel)
    }

    #[inline(always)]
    pub fn freq(&self, tile: u8) -> u8 {
        self.tile_index(tile).map_or(0, |idx| self.get(idx).freq)
    }

    #[inline(always)]
    pub fn num_blanks(&self) -> u8 {
        self.freq(BLANK)
    }

    pub fn fmt_rack(&self, rack: &[u8]) -> String {
        rack.iter().map(|&tile| tile as char).collect()
    }
}

pub static ENGLISH_ALPHABET: Alphabet = Alphabet::Static(StaticAlphabet {
    tiles: &[
        Tile {
            label: b'?',
            freq: 2,
            score: 0,
            is_vowel: false,
        },
        Tile {
            label: b'A',
            freq: 9,
            score: 1,
            is_vowel: true,
        },
        Tile {
            label: b'B',
            freq: 2,
            score: 3,
            is_vowel: false,
        },
        Tile {
            label: b'C',
            freq: 2,
            score: 3,
            is_vowel: false,
        },
        Tile {
            label: b'D',
            freq: 4,
            score: 2,
            is_vowel: false,
        },
        Tile {
            label: b'E',
            freq: 12,
            score: 1,
            is_vowel: true,
        },
        Tile {
            label: b'F',
            freq: 2,
            score: 4,
            is_vowel: false,
        },
        Tile {
            label: b'G',
            freq: 3,
            score: 2,
            is_vowel: false,
        },
        Tile {
            label: b'H',
            freq: 2,
            score: 4,
            is_vowel: false,
        },
        Tile {
            label: b'I',
            freq: 9,
            score: 1,
            is_vowel: true,
        },
        Tile {
            label: b'J',
            freq: 1,
            score: 8,
            is_vowel: false,
        },
        Tile {
            label: b'K',
            freq: 1,
            score: 5,
            is_vowel: false,
        },
        Tile {
            label: b'L',
            freq: 4,
            score: 1,
            is_vowel: false,
        },
        Tile {
            label: b'M',
            freq: 2,
            score: 3,
            is_vowel: false,
        },
        Tile {
            label: b'N',
            freq: 6,
            score: 1,
            is_vowel: false,
        },
        Tile {
            label: b'O',
            freq: 8,
            score: 1,
            is_vowel: true,
        },
        Tile {
            label: b'P',
            freq: 2,
            score: 3,
            is_vowel: false,
        },
        Tile {
            label: b'Q',
            freq: 1,
            score: 10,
            is_vowel: false,
        },
        Tile {
            label: b'R',
            freq: 6,
            score: 1,
            is_vowel: false,
        },
        Tile {
            label: b'S',
            freq: 4,
            score: 1,
            is_vowel: false,
        },
        Tile {
            label: b'T',
            freq: 6,
            score: 1,
            is_vowel: false,
        },
        Tile {
            label: b'U',
            freq: 4,
            score: 1,
            is_vowel: true,
        },
        Tile {
            label: b'V',
            freq: 2,
            score: 4,
            is_vowel: false,
        },
        Tile {
            label: b'W',
            freq: 2,
            score: 4,
            is_vowel: false,
        },
        Tile {
            label: b'X',
            freq: 1,
            score: 8,
            is_vowel: false,
        },
        Tile {
            label: b'Y',
            freq: 2,
            score: 4,
            is_vowel: false,
        },
        Tile {
            label: b'Z',
            freq: 1,
            score: 10,
            is_vowel: false,
        },
    ],
    num_tiles: 100,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_distribution() {
        let alphabet = &ENGLISH_ALPHABET;
        assert_eq!(alphabet.len(), 27);
        let total: u16 = (0..alphabet.len())
            .map(|idx| alphabet.freq(alphabet.label(idx)) as u16)
            .sum();
        assert_eq!(total, alphabet.num_tiles());
        assert_eq!(alphabet.num_blanks(), 2);
    }

    #[test]
    fn test_scores() {
        let alphabet = &ENGLISH_ALPHABET;
        assert_eq!(alphabet.score(b'Q'), 10);
        assert_eq!(alphabet.score(b'E'), 1);
        assert_eq!(alphabet.score(BLANK), 0);
        assert_eq!(alphabet.score(b'Q' | BLANK_FLAG), 0);
        assert_eq!(alphabet.score(b'a'), 0);
    }

    #[test]
    fn test_tile_index() {
        let alphabet = &ENGLISH_ALPHABET;
        assert_eq!(alphabet.tile_index(BLANK), Some(0));
        assert_eq!(alphabet.tile_index(b'A'), Some(1));
        assert_eq!(alphabet.tile_index(b'Z'), Some(26));
        assert_eq!(alphabet.tile_index(b'*'), None);
        assert!(alphabet.is_letter(b'K'));
        assert!(!alphabet.is_letter(BLANK));
        assert!(alphabet.is_vowel(b'U' | BLANK_FLAG));
    }
}
