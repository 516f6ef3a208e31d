//! Configuration types for the condition matcher.

/// Default weight applied to the number of matched symptoms.
pub const DEFAULT_COUNT_WEIGHT: f64 = 0.6;

/// Default weight applied to the matched percentage of a symptom signature.
pub const DEFAULT_PERCENTAGE_WEIGHT: f64 = 0.4;

/// Default number of ranked conditions returned.
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Ranking parameters for the condition matcher.
///
/// The relevance score of a condition is
/// `count_weight * match_count + percentage_weight * match_percentage`.
///
/// # Example
///
/// ```rust
/// use symptom_matcher::MatcherConfig;
///
/// let config = MatcherConfig::builder()
///     .with_count_weight(0.5)
///     .with_percentage_weight(0.5)
///     .with_max_results(5)
///     .build();
///
/// assert_eq!(config.max_results, 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatcherConfig {
    /// Weight of the absolute number of matched symptoms.
    pub count_weight: f64,
    /// Weight of the matched percentage (0-100) of a condition's signature.
    pub percentage_weight: f64,
    /// Maximum number of ranked conditions to return.
    pub max_results: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            count_weight: DEFAULT_COUNT_WEIGHT,
            percentage_weight: DEFAULT_PERCENTAGE_WEIGHT,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl MatcherConfig {
    /// Creates a new builder for MatcherConfig.
    pub fn builder() -> MatcherConfigBuilder {
        MatcherConfigBuilder::default()
    }
}

/// Builder for MatcherConfig.
#[derive(Debug, Clone, Default)]
pub struct MatcherConfigBuilder {
    count_weight: Option<f64>,
    percentage_weight: Option<f64>,
    max_results: Option<usize>,
}

impl MatcherConfigBuilder {
    /// Sets the weight of the matched symptom count.
    pub fn with_count_weight(mut self, weight: f64) -> Self {
        self.count_weight = Some(weight);
        self
    }

    /// Sets the weight of the matched percentage.
    pub fn with_percentage_weight(mut self, weight: f64) -> Self {
        self.percentage_weight = Some(weight);
        self
    }

    /// Sets the maximum number of ranked conditions.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Builds the MatcherConfig, filling unset values with defaults.
    pub fn build(self) -> MatcherConfig {
        MatcherConfig {
            count_weight: self.count_weight.unwrap_or(DEFAULT_COUNT_WEIGHT),
            percentage_weight: self.percentage_weight.unwrap_or(DEFAULT_PERCENTAGE_WEIGHT),
            max_results: self.max_results.unwrap_or(DEFAULT_MAX_RESULTS),
        }
    }
}
