// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error, fash, lexicon};

// Two blanks is what every physical set has, and the number of keys per
// word grows quadratically with each extra blank.
pub const MAX_BLANKS: u8 = 2;

// Sorted letters of a word, where up to num_blanks of them may be replaced
// by alphabet::BLANK (which sorts before every letter). Each key maps to the
// indexes of the lexicon words with that composition, in lexicon order.
pub struct SignatureIndex {
    num_blanks: u8,
    num_words: usize,
    buckets: fash::MyHashMap<Box<[u8]>, Vec<u32>>,
}

// Sorts in place, so the caller can pass rack letters plus board letters in
// any order.
#[inline(always)]
pub fn make_signature(letters: &mut [u8]) {
    letters.sort_unstable();
}

fn push_keys(sorted_word: &[u8], num_blanks: u8, keys: &mut Vec<Box<[u8]>>) {
    let push_with_blanks = |keys: &mut Vec<Box<[u8]>>, blank_positions: &[usize]| {
        let mut key = sorted_word.to_vec();
        for &pos in blank_positions {
            key[pos] = alphabet::BLANK;
        }
        make_signature(&mut key);
        keys.push(key.into_boxed_slice());
    };
    push_with_blanks(keys, &[]);
    if num_blanks >= 1 {
        for i in 0..sorted_word.len() {
            push_with_blanks(keys, &[i]);
            if num_blanks >= 2 {
                for j in i + 1..sorted_word.len() {
                    push_with_blanks(keys, &[i, j]);
                }
            }
        }
    }
}

impl SignatureIndex {
    pub fn build(lexicon: &lexicon::Lexicon, num_blanks: u8) -> error::GameResult<Self> {
        if num_blanks > MAX_BLANKS {
            return Err(error::GameError::Configuration(format!(
                "signature index supports at most {MAX_BLANKS} blanks, asked for {num_blanks}"
            )));
        }
        let t0 = std::time::Instant::now();
        let mut buckets = fash::MyHashMap::<Box<[u8]>, Vec<u32>>::default();
        let mut sorted_word = Vec::new();
        let mut keys = Vec::new();
        for (idx, word) in (0u32..).zip(lexicon.iter()) {
            sorted_word.clear();
            sorted_word.extend_from_slice(word);
            make_signature(&mut sorted_word);
            keys.clear();
            push_keys(&sorted_word, num_blanks, &mut keys);
            // repeated letters produce the same key more than once.
            keys.sort_unstable();
            keys.dedup();
            for key in keys.drain(..) {
                buckets.entry(key).or_default().push(idx);
            }
        }
        log::debug!(
            "built {} signatures for {} words with {} blanks in {:?}",
            buckets.len(),
            lexicon.len(),
            num_blanks,
            t0.elapsed()
        );
        Ok(Self {
            num_blanks,
            num_words: lexicon.len(),
            buckets,
        })
    }

    #[inline(always)]
    pub fn num_blanks(&self) -> u8 {
        self.num_blanks
    }

    // Size of the lexicon this index was built from.
    #[inline(always)]
    pub fn num_words(&self) -> usize {
        self.num_words
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    // Exact key match only.
    #[inline(always)]
    pub fn get(&self, key: &[u8]) -> &[u32] {
        self.buckets.get(key).map_or(&[], |v| &v[..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words_for<'a>(
        lexicon: &'a lexicon::Lexicon,
        index: &SignatureIndex,
        key: &str,
    ) -> Vec<&'a [u8]> {
        index
            .get(key.as_bytes())
            .iter()
            .map(|&idx| lexicon.word(idx))
            .collect()
    }

    #[test]
    fn test_exact_signatures() {
        let lexicon = lexicon::Lexicon::from_text("CAT\nACT\nDOG\nTAD").unwrap();
        let index = SignatureIndex::build(&lexicon, 0).unwrap();
        assert_eq!(words_for(&lexicon, &index, "ACT"), [b"ACT", b"CAT"]);
        assert_eq!(words_for(&lexicon, &index, "DGO"), [b"DOG"]);
        assert!(index.get(b"?AT").is_empty());
        assert!(index.get(b"CAT").is_empty());
        assert_eq!(index.num_words(), 4);
    }

    #[test]
    fn test_one_blank_signatures() {
        let lexicon = lexicon::Lexicon::from_text("CAT\nACT\nDOG\nTAD").unwrap();
        let index = SignatureIndex::build(&lexicon, 1).unwrap();
        assert_eq!(words_for(&lexicon, &index, "?AT"), [b"ACT", b"CAT", b"TAD"]);
        assert_eq!(words_for(&lexicon, &index, "?DO"), [b"DOG"]);
        assert_eq!(words_for(&lexicon, &index, "ACT"), [b"ACT", b"CAT"]);
        assert!(index.get(b"??T").is_empty());
    }

    #[test]
    fn test_two_blank_signatures() {
        let lexicon = lexicon::Lexicon::from_text("CAT\nDOG\nQI").unwrap();
        let index = SignatureIndex::build(&lexicon, 2).unwrap();
        assert_eq!(words_for(&lexicon, &index, "??T"), [b"CAT"]);
        assert_eq!(words_for(&lexicon, &index, "??"), [b"QI"]);
        assert_eq!(words_for(&lexicon, &index, "?I"), [b"QI"]);
        assert_eq!(words_for(&lexicon, &index, "IQ"), [b"QI"]);
    }

    #[test]
    fn test_repeated_letters_are_listed_once() {
        let lexicon = lexicon::Lexicon::from_text("AAH\nBAA").unwrap();
        let index = SignatureIndex::build(&lexicon, 2).unwrap();
        assert_eq!(words_for(&lexicon, &index, "?AH"), [b"AAH"]);
        assert_eq!(words_for(&lexicon, &index, "??A"), [b"AAH", b"BAA"]);
    }

    #[test]
    fn test_too_many_blanks() {
        let lexicon = lexicon::Lexicon::from_text("CAT").unwrap();
        assert!(matches!(
            SignatureIndex::build(&lexicon, 3),
            Err(error::GameError::Configuration(_))
        ));
    }
}
