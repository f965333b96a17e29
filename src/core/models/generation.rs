/// Monotonic token source. Whoever holds the latest token owns the shared
/// state it guards; completions carrying an older token are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generation {
    latest: u64,
}

impl Generation {
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::Generation;

    #[test]
    fn only_latest_token_is_current() {
        let mut generation = Generation::default();
        let first = generation.next();
        assert!(generation.is_current(first));

        let second = generation.next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
