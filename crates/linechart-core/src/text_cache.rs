// File: crates/linechart-core/src/text_cache.rs
// Summary: Bounded LRU from label text to measured width; cleared on font changes.

/// Caches text measurement results for labels that repeat across frames,
/// e.g. the same value recurring in a scrolling window.
///
/// Most-recently-used entries sit at the front. Capacity is a handful, so a
/// linear scan over a flat vector wins over pointer-chasing structures.
pub struct TextWidthCache {
    entries: Vec<(String, f32)>,
    capacity: usize,
}

impl TextWidthCache {
    /// Capacity should be roughly the number of simultaneously visible labels.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Width of `label`, measuring at most once per residency. A hit
    /// refreshes the entry's recency and never calls `measure`; a miss
    /// measures, inserts, and evicts the least-recently-used entry when full.
    pub fn width_of(&mut self, label: &str, measure: impl FnOnce(&str) -> f32) -> f32 {
        if let Some(pos) = self.entries.iter().position(|(key, _)| key == label) {
            let entry = self.entries.remove(pos);
            let width = entry.1;
            self.entries.insert(0, entry);
            return width;
        }
        let width = measure(label);
        if self.entries.len() == self.capacity {
            self.entries.pop();
        }
        self.entries.insert(0, (label.to_owned(), width));
        width
    }

    /// Drop every entry. Must run whenever the text size or font changes, so
    /// a hit stays bit-identical to a fresh measurement.
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
