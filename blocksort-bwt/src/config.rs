//! Suffix sort configuration.

/// Algorithm used to order the circular suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortStrategy {
    /// 3-way radix quicksort over the suffix index array.
    #[default]
    Radix,
    /// Comparison sort over full-length suffix views.
    ///
    /// Slower, but simple enough to serve as a correctness baseline.
    Reference,
}

/// How far the radix sort compares two suffixes before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDepth {
    /// Compare up to the full block length. Produces strict lexicographic order.
    #[default]
    Full,
    /// Stop once the depth exceeds `n / 2 - 1`, with `n` the block length.
    ///
    /// Suffixes sharing a prefix of `n / 2` bytes or more are left in
    /// partition order, so the resulting block is not guaranteed to invert:
    /// `"aba"` comes back as `"aaa"`.
    HalfPeriod,
}

impl SortDepth {
    /// First comparison depth at which the sort stops for a block of `n` bytes.
    pub fn limit(&self, n: usize) -> usize {
        match self {
            Self::Full => n,
            Self::HalfPeriod => n / 2,
        }
    }
}

/// Suffix sort configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    /// Sorting algorithm.
    pub strategy: SortStrategy,
    /// Depth limit for the radix strategy. Ignored by [`SortStrategy::Reference`].
    pub depth: SortDepth,
}

impl SortConfig {
    /// Radix sort to full depth. This is the default.
    pub const STRICT: Self = Self {
        strategy: SortStrategy::Radix,
        depth: SortDepth::Full,
    };

    /// Radix sort that stops after half the block length.
    ///
    /// Faster on long repeats, but the order is only partial and the block
    /// may not invert. See [`SortDepth::HalfPeriod`].
    pub const HALF_PERIOD: Self = Self {
        strategy: SortStrategy::Radix,
        depth: SortDepth::HalfPeriod,
    };

    /// Comparison sort over suffix views.
    pub const REFERENCE: Self = Self {
        strategy: SortStrategy::Reference,
        depth: SortDepth::Full,
    };

    /// Create a configuration for the given strategy and depth.
    pub fn new(strategy: SortStrategy, depth: SortDepth) -> Self {
        Self { strategy, depth }
    }

    /// Whether this configuration always yields strict lexicographic order.
    pub fn is_strict(&self) -> bool {
        self.strategy == SortStrategy::Reference || self.depth == SortDepth::Full
    }
}
