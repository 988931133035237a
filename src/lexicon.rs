// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, fash};

// The set of playable words, uppercase ASCII. Iteration order is sorted so
// that everything derived from a lexicon is deterministic.
pub struct Lexicon {
    words: Box<[Box<[u8]>]>,
    word_set: fash::MyHashSet<Box<[u8]>>,
}

impl Lexicon {
    pub fn from_words<I: IntoIterator<Item = S>, S: AsRef<str>>(
        words: I,
    ) -> error::Returns<Lexicon> {
        let mut machine_words = Vec::new();
        for s in words {
            let s = s.as_ref().trim();
            if s.is_empty() {
                continue;
            }
            let mut v = Vec::with_capacity(s.len());
            for c in s.chars() {
                let c = c.to_ascii_uppercase();
                if c.is_ascii_uppercase() {
                    v.push(c as u8);
                } else {
                    return_error!(format!("invalid tile after {:?} in {:?}", v, s));
                }
            }
            machine_words.push(v.into_boxed_slice());
        }
        machine_words.sort_unstable();
        machine_words.dedup();
        let word_set = machine_words.iter().cloned().collect();
        Ok(Lexicon {
            words: machine_words.into_boxed_slice(),
            word_set,
        })
    }

    // Newline-delimited words.
    pub fn from_text(giant_string: &str) -> error::Returns<Lexicon> {
        Self::from_words(giant_string.lines())
    }

    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> error::Returns<Lexicon> {
        let path = path.as_ref();
        let lexicon = Self::from_text(&std::fs::read_to_string(path)?)?;
        log::info!("loaded {} words from {}", lexicon.len(), path.display());
        Ok(lexicon)
    }

    #[inline(always)]
    pub fn contains(&self, word: &[u8]) -> bool {
        self.word_set.contains(word)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline(always)]
    pub fn word(&self, idx: u32) -> &[u8] {
        &self.words[idx as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.words.iter().map(|w| &w[..])
    }
}
