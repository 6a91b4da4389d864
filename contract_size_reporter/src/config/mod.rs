//!
//! The report configuration.
//!

pub mod messages;

use self::messages::Messages;

///
/// The report configuration.
///
/// Passed by reference into the report builder and never mutated during a run.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// The deployed bytecode size limit in bytes.
    pub limit: usize,
    /// The share of the limit from which a contract is reported as close to it.
    pub notice_ratio: f64,
    /// The share of the limit below which a contract is hidden outside detailed mode.
    pub display_ratio: f64,
    /// The row messages.
    pub messages: Messages,
}

impl Config {
    /// The EIP-170 deployed bytecode size limit.
    pub const DEFAULT_LIMIT: usize = 24576;

    /// The default notice threshold ratio.
    pub const DEFAULT_NOTICE_RATIO: f64 = 0.8;

    /// The default display threshold ratio.
    pub const DEFAULT_DISPLAY_RATIO: f64 = 0.15;

    ///
    /// A shortcut constructor with a custom limit and default ratios.
    ///
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    ///
    /// The size in bytes from which a contract is close to the limit.
    ///
    pub fn notice_threshold(&self) -> f64 {
        self.notice_ratio * (self.limit as f64)
    }

    ///
    /// The size in bytes from which a contract is shown outside detailed mode.
    ///
    pub fn display_threshold(&self) -> f64 {
        self.display_ratio * (self.limit as f64)
    }

    ///
    /// Returns the deployed size as a rounded percentage of the limit.
    ///
    pub fn capacity_percent(&self, deployed_bytecode_length: usize) -> usize {
        if self.limit == 0 {
            return 0;
        }
        (100.0 * (deployed_bytecode_length as f64) / (self.limit as f64)).round() as usize
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            notice_ratio: Self::DEFAULT_NOTICE_RATIO,
            display_ratio: Self::DEFAULT_DISPLAY_RATIO,
            messages: Messages::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn thresholds() {
        let config = Config::default();

        assert!((config.notice_threshold() - 19660.8).abs() < 1e-9);
        assert!((config.display_threshold() - 3686.4).abs() < 1e-9);
    }

    #[test]
    fn capacity_percent() {
        let config = Config::default();

        assert_eq!(config.capacity_percent(0), 0);
        assert_eq!(config.capacity_percent(50), 0);
        assert_eq!(config.capacity_percent(123), 1);
        assert_eq!(config.capacity_percent(19661), 80);
        assert_eq!(config.capacity_percent(24576), 100);
        assert_eq!(config.capacity_percent(30000), 122);
    }

    #[test]
    fn with_limit() {
        let config = Config::with_limit(1000);

        assert_eq!(config.limit, 1000);
        assert_eq!(config.notice_ratio, Config::DEFAULT_NOTICE_RATIO);
        assert_eq!(config.capacity_percent(500), 50);
    }
}
