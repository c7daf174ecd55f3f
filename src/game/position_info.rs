use rustc_hash::FxHashMap;

/// Hashes of every position reached in the applied line, with a count of how
/// often each one occurred. The starting position is always counted.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PositionInfo {
    hashes: Vec<u64>,
    position_count: FxHashMap<u64, u32>,
}

impl PositionInfo {
    pub fn new(initial_hash: u64) -> Self {
        let mut info = Self {
            hashes: Vec::new(),
            position_count: FxHashMap::default(),
        };
        info.push(initial_hash);
        info
    }

    /// Records a newly reached position and returns how often it has now
    /// been seen.
    pub fn push(&mut self, hash: u64) -> u32 {
        self.hashes.push(hash);
        let count = self.position_count.entry(hash).or_insert(0);
        *count += 1;
        *count
    }

    /// Forgets the latest position. The starting position is never popped.
    pub fn pop(&mut self) -> Option<u64> {
        if self.hashes.len() <= 1 {
            return None;
        }
        let hash = self.hashes.pop()?;
        if let Some(count) = self.position_count.get_mut(&hash) {
            *count -= 1;
            if *count == 0 {
                self.position_count.remove(&hash);
            }
        }
        Some(hash)
    }

    pub fn current_position_hash(&self) -> u64 {
        self.hashes.last().copied().unwrap_or_default()
    }

    /// How often the current position has occurred, itself included.
    pub fn current_position_count(&self) -> u32 {
        self.count(self.current_position_hash())
    }

    pub fn count(&self, hash: u64) -> u32 {
        self.position_count.get(&hash).copied().unwrap_or(0)
    }

    pub fn hashes(&self) -> &[u64] {
        &self.hashes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_repeated_positions() {
        let mut info = PositionInfo::new(7);
        assert_eq!(info.current_position_count(), 1);
        assert_eq!(info.push(9), 1);
        assert_eq!(info.push(7), 2);
        assert_eq!(info.current_position_hash(), 7);
        assert_eq!(info.current_position_count(), 2);

        assert_eq!(info.pop(), Some(7));
        assert_eq!(info.current_position_hash(), 9);
        assert_eq!(info.count(7), 1);
    }

    #[test]
    fn test_long_cycles_unwind_exactly() {
        let mut info = PositionInfo::new(1);
        for _ in 0..300 {
            info.push(2);
            info.push(1);
        }
        assert_eq!(info.count(1), 301);
        assert_eq!(info.count(2), 300);
        for _ in 0..600 {
            info.pop();
        }
        assert_eq!(info, PositionInfo::new(1));
    }

    #[test]
    fn test_starting_position_is_kept() {
        let mut info = PositionInfo::new(3);
        assert_eq!(info.pop(), None);
        assert_eq!(info.hashes(), &[3]);
        assert_eq!(info, PositionInfo::new(3));
    }
}
