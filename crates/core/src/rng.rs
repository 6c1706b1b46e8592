//! RNG module - shape generation
//!
//! New shapes come from a [`ShapeSource`]. The default source is a 7-bag:
//! each bag holds one of every kind, shuffled, and is drawn empty before the
//! next bag is shuffled. A small LCG keeps the sequence deterministic per seed.

use crate::types::ShapeKind;

/// Supplies the kind of the next shape to spawn.
pub trait ShapeSource {
    fn next_kind(&mut self) -> ShapeKind;
}

impl<F> ShapeSource for F
where
    F: FnMut() -> ShapeKind,
{
    fn next_kind(&mut self) -> ShapeKind {
        self()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Fisher-Yates shuffle
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// 7-bag shape generator
#[derive(Debug, Clone)]
pub struct ShapeBag {
    bag: [ShapeKind; 7],
    /// Index of the next kind to hand out; 7 means the bag is spent.
    bag_index: usize,
    rng: SimpleRng,
}

impl ShapeBag {
    pub fn new(seed: u32) -> Self {
        let mut bag = Self {
            bag: ShapeKind::ALL,
            bag_index: 0,
            rng: SimpleRng::new(seed),
        };
        bag.refill();
        bag
    }

    fn refill(&mut self) {
        self.bag = ShapeKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Draw the next kind, starting a fresh bag when the current one is spent.
    pub fn draw(&mut self) -> ShapeKind {
        if self.bag_index >= self.bag.len() {
            self.refill();
        }
        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        kind
    }

    /// Kinds still left in the current bag.
    pub fn remaining(&self) -> &[ShapeKind] {
        &self.bag[self.bag_index..]
    }
}

impl ShapeSource for ShapeBag {
    fn next_kind(&mut self) -> ShapeKind {
        self.draw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_is_deterministic() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn zero_seed_does_not_stick() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), rng.next_u32());
    }

    #[test]
    fn bag_hands_out_every_kind_once() {
        let mut bag = ShapeBag::new(7);
        let mut drawn: Vec<ShapeKind> = (0..7).map(|_| bag.draw()).collect();
        assert!(bag.remaining().is_empty());

        drawn.sort_by_key(|k| k.as_str());
        let mut all = ShapeKind::ALL.to_vec();
        all.sort_by_key(|k| k.as_str());
        assert_eq!(drawn, all);
    }

    #[test]
    fn bag_refills_after_seven_draws() {
        let mut bag = ShapeBag::new(99);
        for _ in 0..7 {
            bag.draw();
        }
        bag.draw();
        assert_eq!(bag.remaining().len(), 6);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ShapeBag::new(2024);
        let mut b = ShapeBag::new(2024);
        for _ in 0..30 {
            assert_eq!(a.next_kind(), b.next_kind());
        }
    }

    #[test]
    fn closures_are_shape_sources() {
        let mut source = || ShapeKind::O;
        assert_eq!(source.next_kind(), ShapeKind::O);
    }
}
