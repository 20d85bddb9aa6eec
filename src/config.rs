use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

const DEFAULT_DIVISIONS: NonZeroUsize = match NonZeroUsize::new(1000) {
    Some(n) => n,
    None => panic!("default division count must be non-zero"),
};

/// Settings for airfoil generation. Any field missing from a configuration file takes its
/// default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of chordwise divisions; each surface gets one more point than this
    pub divisions: NonZeroUsize,

    /// Subtracted from every x coordinate. 0.5 puts the middle of the chord on the origin.
    pub chord_offset: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            divisions: DEFAULT_DIVISIONS,
            chord_offset: 0.5,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(1000, config.divisions.get());
        assert_eq!(0.5, config.chord_offset);
    }

    #[test_case("{}", 1000, 0.5; "empty object")]
    #[test_case(r#"{"divisions": 250}"#, 250, 0.5; "divisions only")]
    #[test_case(r#"{"chord_offset": 0.0}"#, 1000, 0.0; "offset only")]
    #[test_case(r#"{"divisions": 4, "chord_offset": 0.25}"#, 4, 0.25; "both fields")]
    fn test_from_json(text: &str, divisions: usize, chord_offset: f64) {
        let config = GeneratorConfig::from_json(text).unwrap();
        assert_eq!(divisions, config.divisions.get());
        assert_eq!(chord_offset, config.chord_offset);
    }

    #[test_case(r#"{"divisions": 0}"#; "zero divisions")]
    #[test_case(r#"{"divisions": -3}"#; "negative divisions")]
    #[test_case("not json"; "malformed")]
    fn test_rejected_json(text: &str) {
        assert!(matches!(
            GeneratorConfig::from_json(text),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = GeneratorConfig::load("/nonexistent/airfoil-config.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_round_trip_through_json() {
        let config = GeneratorConfig {
            divisions: NonZeroUsize::new(64).unwrap(),
            chord_offset: 0.0,
        };
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(config, GeneratorConfig::from_json(&text).unwrap());
    }
}
