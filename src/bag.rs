// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet;
use rand::prelude::*;

// Tiles still to be drawn. The end of the vec is the top of the bag.
pub struct Bag(pub Vec<u8>);

impl Bag {
    pub fn new(alphabet: &alphabet::Alphabet) -> Bag {
        let mut bag = Vec::with_capacity(alphabet.num_tiles() as usize);
        for idx in 0..alphabet.len() {
            let tile = alphabet.label(idx);
            for _ in 0..alphabet.freq(tile) {
                bag.push(tile);
            }
        }
        Bag(bag)
    }

    pub fn shuffle(&mut self, mut rng: &mut dyn RngCore) {
        self.0.shuffle(&mut rng);
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pop(&mut self) -> Option<u8> {
        self.0.pop()
    }

    // Up to num_tiles, fewer when the bag runs out.
    pub fn draw(&mut self, num_tiles: usize) -> Vec<u8> {
        let keep = self.0.len().saturating_sub(num_tiles);
        let mut drawn = self.0.split_off(keep);
        drawn.reverse();
        drawn
    }

    pub fn replenish(&mut self, rack: &mut Vec<u8>, rack_size: usize) {
        let drawn = self.draw(rack_size.saturating_sub(rack.len()));
        rack.extend(drawn);
    }
}

impl Clone for Bag {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }

    #[inline(always)]
    fn clone_from(&mut self, source: &Self) {
        self.0.clone_from(&source.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_full_bag() {
        let bag = Bag::new(&alphabet::ENGLISH_ALPHABET);
        assert_eq!(bag.len(), 100);
        assert_eq!(bag.0.iter().filter(|&&t| t == alphabet::BLANK).count(), 2);
        assert_eq!(bag.0.iter().filter(|&&t| t == b'E').count(), 12);
    }

    #[test]
    fn test_shuffle_is_reproducible() {
        let mut a = Bag::new(&alphabet::ENGLISH_ALPHABET);
        let mut b = a.clone();
        a.shuffle(&mut ChaCha20Rng::seed_from_u64(42));
        b.shuffle(&mut ChaCha20Rng::seed_from_u64(42));
        assert_eq!(a.0, b.0);
        let mut sorted = a.0.clone();
        sorted.sort_unstable();
        let mut unshuffled = Bag::new(&alphabet::ENGLISH_ALPHABET).0;
        unshuffled.sort_unstable();
        assert_eq!(sorted, unshuffled);
    }

    #[test]
    fn test_draw_and_replenish() {
        let mut bag = Bag(b"ABCDE".to_vec());
        assert_eq!(bag.draw(2), b"ED");
        let mut rack = b"XY".to_vec();
        bag.replenish(&mut rack, 7);
        assert_eq!(rack, b"XYCBA");
        assert!(bag.is_empty());
        assert!(bag.draw(3).is_empty());
        bag.replenish(&mut rack, 3);
        assert_eq!(rack.len(), 5);
    }
}
