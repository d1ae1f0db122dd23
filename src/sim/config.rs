//! Validated scalar settings.

use crate::codec::Properties;
use crate::error::ConfigError;
use crate::sim::Grid;

/// Immutable run configuration, built once at load time.
///
/// Out-of-range values in a properties file are clamped to the nearer bound;
/// values of the wrong type are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Grid width in cells.
    pub width: u16,
    /// Grid height in cells.
    pub height: u16,
    /// Display refresh rate in rounds per second. Pacing only; the
    /// simulation core never consults it.
    pub refresh: u16,
    /// Maximum age a cell may reach before dying of old age.
    pub death_age: u8,
    /// Round count at which the run ends if nothing else stops it.
    pub win_round: u32,
    /// Whether the grid is shown each round (the initial and final grids
    /// are always shown).
    pub output: bool,
}

/// Bounds for `refresh`, rounds per second.
const REFRESH_RANGE: (i64, i64) = (1, 60);
/// Bounds for `death-age`, rounds.
const DEATH_AGE_RANGE: (i64, i64) = (1, 32);
/// Bounds for `win-round`, rounds.
const WIN_ROUND_RANGE: (i64, i64) = (128, 65536);

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 30,
            height: 30,
            refresh: 4,
            death_age: 4,
            win_round: 512,
            output: true,
        }
    }
}

impl GameConfig {
    /// Build a configuration from parsed properties.
    ///
    /// Missing keys take their defaults; unrecognized keys are ignored (the
    /// [`Properties`] value preserves them for round-tripping).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnparsableValue`] when a recognized key has a
    /// non-numeric (or for `output`, non-boolean) value.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_properties(props: &Properties) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = props.get("width") {
            let range = (i64::from(Grid::MIN_WIDTH), i64::from(Grid::MAX_WIDTH));
            config.width = clamped(raw, "width", range)? as u16;
        }
        if let Some(raw) = props.get("height") {
            let range = (i64::from(Grid::MIN_HEIGHT), i64::from(Grid::MAX_HEIGHT));
            config.height = clamped(raw, "height", range)? as u16;
        }
        if let Some(raw) = props.get("refresh") {
            config.refresh = clamped(raw, "refresh", REFRESH_RANGE)? as u16;
        }
        if let Some(raw) = props.get("death-age") {
            config.death_age = clamped(raw, "death-age", DEATH_AGE_RANGE)? as u8;
        }
        if let Some(raw) = props.get("win-round") {
            config.win_round = clamped(raw, "win-round", WIN_ROUND_RANGE)? as u32;
        }
        if let Some(raw) = props.get("output") {
            config.output = match raw.trim().to_ascii_lowercase().as_str() {
                "true" => true,
                "false" => false,
                _ => {
                    return Err(ConfigError::UnparsableValue {
                        key: "output".to_string(),
                        value: raw.to_string(),
                    });
                }
            };
        }

        Ok(config)
    }
}

/// Parse a numeric property value and clamp it to `[min, max]`.
fn clamped(raw: &str, key: &str, (min, max): (i64, i64)) -> Result<i64, ConfigError> {
    raw.trim()
        .parse::<i64>()
        .map(|value| value.clamp(min, max))
        .map_err(|_| ConfigError::UnparsableValue {
            key: key.to_string(),
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(text: &str) -> Properties {
        Properties::parse(text).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::from_properties(&Properties::default()).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.width, 30);
        assert_eq!(config.win_round, 512);
        assert!(config.output);
    }

    #[test]
    fn test_clamping_to_nearer_bound() {
        let config = GameConfig::from_properties(&props("width:500\ndeath-age:0\n")).unwrap();
        assert_eq!(config.width, 100);
        assert_eq!(config.death_age, 1);

        let config = GameConfig::from_properties(&props("height:2\nwin-round:1000000\n")).unwrap();
        assert_eq!(config.height, 5);
        assert_eq!(config.win_round, 65536);
    }

    #[test]
    fn test_unparsable_value_rejected() {
        let err = GameConfig::from_properties(&props("width:wide\n")).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnparsableValue {
                key: "width".to_string(),
                value: "wide".to_string(),
            }
        );
    }

    #[test]
    fn test_output_boolean() {
        let config = GameConfig::from_properties(&props("output:FALSE\n")).unwrap();
        assert!(!config.output);

        assert!(GameConfig::from_properties(&props("output:maybe\n")).is_err());
    }

    #[test]
    fn test_unrecognized_keys_ignored() {
        let config = GameConfig::from_properties(&props("to-kill:3\nwidth:40\n")).unwrap();
        assert_eq!(config.width, 40);
        assert_eq!(config.death_age, GameConfig::default().death_age);
    }
}
