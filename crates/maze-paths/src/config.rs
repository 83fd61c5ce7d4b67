/// Bounds on a single enumeration run.
///
/// The enumerator has no natural early exit besides running out of work, so
/// callers that need a deadline express it here. Both limits default to
/// unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Maximum number of partial routes taken off the frontier.
    pub max_iterations: Option<usize>,
    /// Maximum number of partial routes waiting on the frontier at once.
    pub max_frontier: Option<usize>,
}

impl SearchConfig {
    /// No limits.
    pub const UNBOUNDED: Self = Self {
        max_iterations: None,
        max_frontier: None,
    };

    /// Cap the number of frontier dequeues.
    pub fn with_max_iterations(mut self, limit: usize) -> Self {
        self.max_iterations = Some(limit);
        self
    }

    /// Cap the frontier length.
    pub fn with_max_frontier(mut self, limit: usize) -> Self {
        self.max_frontier = Some(limit);
        self
    }

    /// Whether neither limit is set.
    pub fn is_unbounded(&self) -> bool {
        self.max_iterations.is_none() && self.max_frontier.is_none()
    }
}
