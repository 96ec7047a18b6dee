use crate::types::{Result, SheetError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper bound on slot padding in base-resolution pixels
pub const MAX_PADDING: f32 = 80.0;
/// Upper bound on the corner rounding radius in base-resolution pixels
pub const MAX_ROUNDING: f32 = 120.0;

/// Layout configuration shared by every card.
///
/// Values are in pixels at base sheet resolution; the compositor scales
/// them by the card's upscale factor so visual proportions hold at
/// higher output resolutions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutOptions {
    /// Padding inset on each side of a slot
    pub padding: f32,
    /// Corner radius of the rounded-rectangle clip around each slot
    pub rounding: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            padding: 18.0,
            rounding: 24.0,
        }
    }
}

impl LayoutOptions {
    /// Load options from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| SheetError::Config(format!("Failed to parse options: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SheetError::Config(format!("Failed to serialize options: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=MAX_PADDING).contains(&self.padding) {
            return Err(SheetError::Config(format!(
                "Padding must be within 0..{MAX_PADDING} px, got {}",
                self.padding
            )));
        }
        if !(0.0..=MAX_ROUNDING).contains(&self.rounding) {
            return Err(SheetError::Config(format!(
                "Rounding must be within 0..{MAX_ROUNDING} px, got {}",
                self.rounding
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(LayoutOptions::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut options = LayoutOptions::default();
        options.padding = -1.0;
        assert!(options.validate().is_err());

        options = LayoutOptions::default();
        options.padding = MAX_PADDING + 1.0;
        assert!(options.validate().is_err());

        options = LayoutOptions::default();
        options.rounding = MAX_ROUNDING + 0.5;
        assert!(options.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[tokio::test]
    async fn test_load_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");

        let options = LayoutOptions {
            padding: 12.0,
            rounding: 40.0,
        };
        options.save(&path).await.unwrap();
        let loaded = LayoutOptions::load(&path).await.unwrap();
        assert_eq!(loaded, options);
    }
}
