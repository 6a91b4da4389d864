//!
//! The contract size status.
//!

use crate::config::Config;

///
/// The contract size status.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The deployed bytecode fits comfortably.
    Ok,
    /// The deployed bytecode is close to the limit.
    NearLimit,
    /// The deployed bytecode exceeds the limit.
    OverLimit,
}

impl Status {
    ///
    /// Classifies a deployed bytecode size against the configured thresholds.
    ///
    pub fn classify(deployed_bytecode_length: usize, config: &Config) -> Self {
        if deployed_bytecode_length > config.limit {
            Self::OverLimit
        } else if (deployed_bytecode_length as f64) >= config.notice_threshold() {
            Self::NearLimit
        } else {
            Self::Ok
        }
    }

    ///
    /// Returns the row message for the status.
    ///
    pub fn message<'a>(&self, config: &'a Config) -> &'a str {
        match self {
            Self::Ok => config.messages.ok.as_str(),
            Self::NearLimit => config.messages.almost_reached.as_str(),
            Self::OverLimit => config.messages.too_big.as_str(),
        }
    }

    ///
    /// Returns the terminal color of rows with the status.
    ///
    pub fn color(&self) -> colored::Color {
        match self {
            Self::Ok => colored::Color::Green,
            Self::NearLimit => colored::Color::Magenta,
            Self::OverLimit => colored::Color::Red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Status;
    use crate::config::Config;

    #[test]
    fn boundaries() {
        let config = Config::default();

        assert_eq!(Status::classify(0, &config), Status::Ok);
        assert_eq!(Status::classify(19660, &config), Status::Ok);
        assert_eq!(Status::classify(19661, &config), Status::NearLimit);
        assert_eq!(Status::classify(24576, &config), Status::NearLimit);
        assert_eq!(Status::classify(24577, &config), Status::OverLimit);
    }

    #[test]
    fn partition_is_monotonic() {
        let config = Config::with_limit(100);

        let statuses: Vec<Status> = (0..=200)
            .map(|length| Status::classify(length, &config))
            .collect();

        assert!(statuses[..80].iter().all(|status| *status == Status::Ok));
        assert!(statuses[80..=100]
            .iter()
            .all(|status| *status == Status::NearLimit));
        assert!(statuses[101..]
            .iter()
            .all(|status| *status == Status::OverLimit));
    }

    #[test]
    fn messages() {
        let config = Config::default();

        assert_eq!(Status::Ok.message(&config), "OK");
        assert_eq!(
            Status::NearLimit.message(&config),
            "Maximum capacity almost reached. Please refactor."
        );
        assert_eq!(
            Status::OverLimit.message(&config),
            "This contract is too big to be deployed!"
        );
    }
}
