//! Tunables for the threshold statistics.

use bon::Builder;

/// Temperature thresholds, in degrees Celsius, used when counting hot and cold hours.
///
/// # Examples
///
/// ```
/// use weatherstats::StatsConfig;
///
/// let defaults = StatsConfig::default();
/// assert_eq!(defaults.hot_threshold, 30.0);
/// assert_eq!(defaults.cold_threshold, 0.0);
///
/// let alpine = StatsConfig::builder().hot_threshold(25.0).cold_threshold(-10.0).build();
/// assert_eq!(alpine.cold_threshold, -10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
pub struct StatsConfig {
    /// Hours strictly above this count as hot.
    #[builder(default = 30.0)]
    pub hot_threshold: f64,
    /// Hours strictly below this count as cold.
    #[builder(default = 0.0)]
    pub cold_threshold: f64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
