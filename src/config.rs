//! Tuning constants for the table's layout and growth policy.

/// Width, in slots, of one SIMD control group. Every allocated table size is
/// a multiple of this so a group scan never straddles the end of the ctrl
/// region.
pub(crate) const GROUP_WIDTH: usize = 16;

/// Numerator/denominator of the load factor that triggers growth: 3/4.
pub(crate) const LOAD_FACTOR_NUM: usize = 3;
pub(crate) const LOAD_FACTOR_DEN: usize = 4;

/// Capacity picked the first time a zero-capacity table grows.
pub(crate) const INITIAL_CAPACITY: usize = 64;

/// Multiplier applied to the current capacity on every subsequent growth.
pub(crate) const GROWTH_FACTOR: usize = 2;
