//! Demo data source
//!
//! Generates a deterministic set of records and simulates the two kinds of
//! data change a paged view has to cope with:
//! - a refetch that returns the same rows in a different order
//! - a resize that adds or drops rows

use crate::types::Record;
use chrono::{Duration, Local};

const NAMES: &[&str] = &[
    "alder", "birch", "cedar", "dogwood", "elm", "fir", "ginkgo", "hazel", "juniper", "larch",
    "maple", "oak", "pine", "rowan", "spruce", "willow",
];

const CATEGORIES: &[&str] = &["docs", "media", "config", "archive", "source"];

/// In-memory dataset backing every paged view
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    seed: u64,
}

impl Dataset {
    /// Generate `size` records
    pub fn generate(size: usize) -> Self {
        let now = Local::now();
        let records = (0..size)
            .map(|i| {
                let id = i as u32 + 1;
                let mix = scramble(id as u64);
                Record {
                    id,
                    name: format!("{}-{:04}", NAMES[(mix % NAMES.len() as u64) as usize], id),
                    category: CATEGORIES[((mix >> 8) % CATEGORIES.len() as u64) as usize]
                        .to_string(),
                    created: now - Duration::minutes(i as i64 * 37),
                    size: (mix >> 16) % (64 * 1024 * 1024),
                }
            })
            .collect();

        Self { records, seed: 1 }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Same rows, new order
    pub fn refetch(&mut self) {
        self.seed = scramble(self.seed);
        let mut state = self.seed;
        for i in (1..self.records.len()).rev() {
            state = scramble(state);
            let j = (state % (i as u64 + 1)) as usize;
            self.records.swap(i, j);
        }
    }

    /// Grow or shrink to `size` rows, regenerating from scratch
    pub fn resize(&mut self, size: usize) {
        *self = Self::generate(size);
    }
}

/// xorshift64*, good enough for demo data
fn scramble(mut x: u64) -> u64 {
    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;
    x.wrapping_mul(0x2545_F491_4F6C_DD1D)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate() {
        let data = Dataset::generate(1000);
        assert_eq!(data.len(), 1000);
        assert_eq!(data.records()[0].id, 1);
        assert_eq!(data.records()[999].id, 1000);
        assert!(Dataset::generate(0).is_empty());
    }

    #[test]
    fn test_refetch_keeps_rows() {
        let mut data = Dataset::generate(200);
        let mut before: Vec<u32> = data.records().iter().map(|r| r.id).collect();

        data.refetch();
        let mut after: Vec<u32> = data.records().iter().map(|r| r.id).collect();

        assert_eq!(after.len(), 200);
        assert_ne!(before, after);
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn test_resize() {
        let mut data = Dataset::generate(1000);
        data.resize(30);
        assert_eq!(data.len(), 30);
    }
}
