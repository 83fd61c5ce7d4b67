use std::fmt;

/// Reasons a bounded enumeration stopped before the frontier ran dry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// More partial routes would have been dequeued than allowed.
    IterationLimit { limit: usize, solutions: usize },
    /// The frontier grew past its cap.
    FrontierLimit { limit: usize, iterations: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationLimit { limit, solutions } => write!(
                f,
                "search stopped after {limit} iterations ({solutions} routes found so far)"
            ),
            Self::FrontierLimit { limit, iterations } => write!(
                f,
                "search frontier exceeded {limit} partial routes after {iterations} iterations"
            ),
        }
    }
}

impl std::error::Error for SearchError {}
