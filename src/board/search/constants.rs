//! Search score constants.

/// Score of a position where White has been checkmated is `-MATE_SCORE`,
/// Black checkmated is `+MATE_SCORE`.
pub const MATE_SCORE: i32 = 10_000;

/// Bound used for the initial alpha-beta window. Strictly larger than any
/// score the search can return.
pub const INFINITY: i32 = 1_000_000;

/// Depth used when the caller asks for a search of depth zero.
pub(crate) const MIN_ROOT_DEPTH: u32 = 1;
