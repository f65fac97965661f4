//! Decode limits.

/// Caps applied to size fields before anything is allocated.
///
/// A corrupt length prefix otherwise turns into a multi-gigabyte
/// allocation or unbounded recursion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Longest string, in bytes.
    pub max_string_len: usize,
    /// Most entries in one table or database.
    pub max_entries: usize,
    /// Most cells in one numeric value.
    pub max_cells: usize,
    /// Deepest nesting of tables inside values.
    pub max_depth: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_string_len: 16 * 1024 * 1024,
            max_entries: 1 << 20,
            max_cells: 1 << 26,
            max_depth: 64,
        }
    }
}

impl DecodeLimits {
    /// No limits at all.
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            max_string_len: usize::MAX,
            max_entries: usize::MAX,
            max_cells: usize::MAX,
            max_depth: usize::MAX,
        }
    }

    /// Builder method to set the maximum string length.
    #[must_use]
    pub fn with_max_string_len(mut self, len: usize) -> Self {
        self.max_string_len = len;
        self
    }

    /// Builder method to set the maximum entry count.
    #[must_use]
    pub fn with_max_entries(mut self, entries: usize) -> Self {
        self.max_entries = entries;
        self
    }

    /// Builder method to set the maximum cell count.
    #[must_use]
    pub fn with_max_cells(mut self, cells: usize) -> Self {
        self.max_cells = cells;
        self
    }

    /// Builder method to set the maximum nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
