/// Identifies a request among all requests of the same kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

/// Hands out strictly increasing generations.
#[derive(Debug, Default, Clone)]
pub struct GenerationCounter {
    current: Generation,
}

impl GenerationCounter {
    /// Start a new generation, invalidating all previous ones.
    pub fn next(&mut self) -> Generation {
        self.current = Generation(self.current.0.wrapping_add(1));
        self.current
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.current == generation
    }
}
