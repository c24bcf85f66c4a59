//! Runtime settings
//!
//! Loaded from an optional JSON file given on the command line; every
//! field falls back to its default when absent.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Startup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Slot count of the ball pool; at most `ball_capacity - 1` balls can
    /// be live at once
    pub ball_capacity: usize,
    /// RNG seed for ball colours; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Initial window size in logical pixels
    pub window_width: u32,
    pub window_height: u32,
    /// Background clear colour, linear RGB
    pub clear_colour: [f64; 3],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_capacity: DEFAULT_BALL_CAPACITY,
            seed: None,
            window_width: 1280,
            window_height: 720,
            clear_colour: CLEAR_COLOUR,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file, falling back to defaults on any
    /// read or parse failure.
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => settings,
                Err(err) => {
                    log::warn!("Failed to parse settings {path}: {err}");
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Failed to read settings {path}: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.ball_capacity, DEFAULT_BALL_CAPACITY);
        assert!(settings.seed.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"ball_capacity": 64, "seed": 7}"#).unwrap();
        assert_eq!(settings.ball_capacity, 64);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.window_width, 1280);
        assert_eq!(settings.clear_colour, CLEAR_COLOUR);
    }

    #[test]
    fn test_round_trip() {
        let settings = Settings {
            seed: Some(99),
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, Some(99));
        assert_eq!(back.ball_capacity, settings.ball_capacity);
    }
}
