//! Engine configuration parameters.
//!
//! Defaults reproduce the standard rules: 15-minute quarters, 25-45 seconds
//! of runoff per play, kickoffs to the 20, 10 yards for a first down.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seconds on the clock at the start of each quarter.
    pub quarter_length: u32,

    /// Fewest seconds a single play takes off the clock.
    pub play_clock_min: u32,

    /// Most seconds a single play takes off the clock.
    pub play_clock_max: u32,

    /// Field position the receiving team starts from after a score.
    pub kickoff_spot: i32,

    /// Yards needed for a fresh set of downs.
    pub first_down_distance: i32,

    /// Number of play descriptions kept in the game log.
    pub log_capacity: usize,

    /// Probability of an interception when a pass meets pass coverage.
    pub interception_chance: f64,

    /// Probability of a fumble on any play without an interception.
    pub fumble_chance: f64,

    /// Safety cap on plays in a simulated game.
    pub max_autoplay_plays: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            quarter_length: 900,
            play_clock_min: 25,
            play_clock_max: 45,
            kickoff_spot: 20,
            first_down_distance: 10,
            log_capacity: 10,
            interception_chance: 0.15,
            fumble_chance: 0.02,
            max_autoplay_plays: 1_000,
        }
    }
}

impl EngineConfig {
    /// Create a new config with a custom quarter length.
    #[must_use]
    pub fn with_quarter_length(mut self, seconds: u32) -> Self {
        self.quarter_length = seconds;
        self
    }

    /// Create a new config with a custom per-play runoff range.
    #[must_use]
    pub fn with_play_clock(mut self, min: u32, max: u32) -> Self {
        self.play_clock_min = min;
        self.play_clock_max = max;
        self
    }

    /// Create a new config with a custom log capacity.
    #[must_use]
    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }

    /// Create a new config with custom turnover probabilities.
    #[must_use]
    pub fn with_turnover_chances(mut self, interception: f64, fumble: f64) -> Self {
        self.interception_chance = interception;
        self.fumble_chance = fumble;
        self
    }

    /// Check that every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] naming the first bad parameter.
    pub fn validate(&self) -> Result<(), EngineError> {
        let invalid = |reason: &str| Err(EngineError::InvalidConfig(reason.to_string()));

        if self.quarter_length == 0 {
            return invalid("quarter_length must be positive");
        }
        if self.play_clock_min == 0 || self.play_clock_min > self.play_clock_max {
            return invalid("play clock range must be non-empty and positive");
        }
        if i32::try_from(self.play_clock_max).is_err() {
            return invalid("play_clock_max is out of range");
        }
        if !(1..100).contains(&self.kickoff_spot) {
            return invalid("kickoff_spot must be between 1 and 99");
        }
        if self.first_down_distance <= 0 {
            return invalid("first_down_distance must be positive");
        }
        if self.log_capacity == 0 {
            return invalid("log_capacity must be positive");
        }
        if !(0.0..=1.0).contains(&self.interception_chance) {
            return invalid("interception_chance must be within [0, 1]");
        }
        if !(0.0..=1.0).contains(&self.fumble_chance) {
            return invalid("fumble_chance must be within [0, 1]");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.quarter_length, 900);
        assert_eq!((config.play_clock_min, config.play_clock_max), (25, 45));
        assert_eq!(config.kickoff_spot, 20);
        assert_eq!(config.log_capacity, 10);
        assert!((config.interception_chance - 0.15).abs() < f64::EPSILON);
        assert!((config.fumble_chance - 0.02).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_quarter_length(60)
            .with_play_clock(5, 10)
            .with_log_capacity(3)
            .with_turnover_chances(0.0, 1.0);

        assert_eq!(config.quarter_length, 60);
        assert_eq!(config.play_clock_min, 5);
        assert_eq!(config.play_clock_max, 10);
        assert_eq!(config.log_capacity, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = [
            EngineConfig::default().with_quarter_length(0),
            EngineConfig::default().with_play_clock(30, 20),
            EngineConfig::default().with_play_clock(0, 20),
            EngineConfig::default().with_log_capacity(0),
            EngineConfig::default().with_turnover_chances(1.5, 0.0),
            EngineConfig::default().with_turnover_chances(0.1, -0.1),
        ];

        for config in bad {
            assert!(
                matches!(config.validate(), Err(EngineError::InvalidConfig(_))),
                "{config:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_quarter_length(300);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
