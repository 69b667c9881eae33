#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Caller-supplied limits for a best-move search.
///
/// `depth` counts plies including the root move. `extensions` is the budget
/// of extra plies granted when a capture lands on the search horizon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchLimits {
    pub depth: u32,
    pub extensions: u32,
    /// Log every root move's score at info level instead of debug
    pub verbose: bool,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits {
            depth: 4,
            extensions: 1,
            verbose: false,
        }
    }
}

impl SearchLimits {
    #[must_use]
    pub fn new(depth: u32, extensions: u32) -> Self {
        SearchLimits {
            depth,
            extensions,
            ..Default::default()
        }
    }

    /// Set search depth in plies
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set the capture extension budget
    #[must_use]
    pub fn with_extensions(mut self, extensions: u32) -> Self {
        self.extensions = extensions;
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
