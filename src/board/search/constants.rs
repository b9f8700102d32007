//! Tuned search constants.
//!
//! These are configuration, not contract: the depth and branching caps
//! trade strength for latency and carry no derivation beyond play-testing.

/// Score of a completed line of five. Root search stops early once a
/// candidate reaches it.
pub(crate) const WIN_SCORE: i32 = 100_000;

/// Window sentinel strictly larger than any reachable evaluation
pub(crate) const INFINITY: i32 = 1_000_000;

/// Fixed search depth (plies) for the hard difficulty
pub(crate) const HARD_DEPTH: u32 = 5;

/// Branching cap applied while remaining depth exceeds [`WIDE_DEPTH`];
/// below that the tree is cheap enough to expand every candidate.
pub(crate) const WIDE_BRANCH_LIMIT: usize = 12;

/// Root branching cap when the configured depth is below 4
pub(crate) const NARROW_BRANCH_LIMIT: usize = 8;

/// Remaining depth above which [`WIDE_BRANCH_LIMIT`] applies
pub(crate) const WIDE_DEPTH: u32 = 3;

/// Transposition table size per computation, in megabytes
pub(crate) const SEARCH_TT_MB: usize = 8;
