use nanorand::{Rng, WyRand};

pub struct Random {
    generator: WyRand,
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

impl Random {
    pub fn new() -> Self {
        Self {
            generator: WyRand::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            generator: WyRand::new_seed(seed),
        }
    }

    /// Uniform in `[0, 1)`.
    pub fn generate(&mut self) -> f32 {
        self.generator.generate()
    }

    pub fn max(&mut self, max: f32) -> f32 {
        max * self.generate()
    }

    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.generate()
    }

    /// Uniform integer in `[0, n)`, zero for an empty range.
    pub fn below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.generator.generate_range(0..n)
    }

    /// Uniform integer in `[min, max]`.
    pub fn between(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.generator.generate_range(min..=max)
    }

    pub fn chance(&mut self, probability: f32) -> bool {
        self.generate() < probability
    }

    pub fn sign(&mut self) -> f32 {
        if self.chance(0.5) {
            1.0
        } else {
            -1.0
        }
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.below(items.len() as u32) as usize;
        items.get(index)
    }
}
