//! Widget configuration

use serde::{Deserialize, Serialize};

use crate::core::NumberFormat;

/// Calculator widget configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Result formatting variant
    pub number_format: NumberFormat,
    /// Play a tone on every accepted key press
    pub sound: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            number_format: NumberFormat::default(),
            sound: true,
        }
    }
}

impl CalculatorConfig {
    /// Creates the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number format
    #[must_use]
    pub const fn with_number_format(mut self, format: NumberFormat) -> Self {
        self.number_format = format;
        self
    }

    /// Enables or disables tones
    #[must_use]
    pub const fn with_sound(mut self, enabled: bool) -> Self {
        self.sound = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = CalculatorConfig::default();
        assert_eq!(config.number_format, NumberFormat::Grouped);
        assert!(config.sound);
    }

    #[test]
    fn test_builder() {
        let config = CalculatorConfig::new()
            .with_number_format(NumberFormat::Plain)
            .with_sound(false);
        assert_eq!(config.number_format, NumberFormat::Plain);
        assert!(!config.sound);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: CalculatorConfig = serde_json::from_str(r#"{"sound": false}"#).unwrap();
        assert_eq!(config.number_format, NumberFormat::Grouped);
        assert!(!config.sound);
    }
}
