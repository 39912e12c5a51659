use serde::{Deserialize, Serialize};

/// Selection thresholds applied after candidates are scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Minimum score a candidate must reach to enter the result list.
    pub score_threshold: u8,
    /// Result size when the request does not name one.
    pub default_result_limit: usize,
    /// Hard cap on the requested result size.
    pub max_result_limit: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            score_threshold: 60,
            default_result_limit: 6,
            max_result_limit: 10,
        }
    }
}
