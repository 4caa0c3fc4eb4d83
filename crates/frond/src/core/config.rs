use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{core::color::Color, error::Result};

/// Scene-wide defaults. Loadable from JSON; missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Color the canvas is cleared to before painting.
    pub background: Color,
    /// Default text size in pixels for text-bearing widgets.
    pub font_size: u32,
    /// Default text color.
    pub text_color: Color,
    /// Accent used for focus rings and selected state.
    pub accent: Color,
    /// How far hovered controls are lightened, 0 to 1.
    pub hover_tint: f32,
    /// Re-run layout after routing if any widget invalidated the tree.
    pub relayout_on_input: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            font_size: 16,
            text_color: Color::WHITE,
            accent: Color::rgb(0x3d, 0x8b, 0xfd),
            hover_tint: 0.2,
            relayout_on_input: true,
        }
    }
}

impl SceneConfig {
    /// Parse a JSON document.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn partial_json_fills_defaults() -> Result<()> {
        let c = SceneConfig::from_json(r##"{"background": "#102030", "font_size": 24}"##)?;
        assert_eq!(c.background, Color::rgb(0x10, 0x20, 0x30));
        assert_eq!(c.font_size, 24);
        assert_eq!(c.text_color, SceneConfig::default().text_color);
        Ok(())
    }

    #[test]
    fn roundtrip() -> Result<()> {
        let c = SceneConfig {
            hover_tint: 0.5,
            ..Default::default()
        };
        assert_eq!(SceneConfig::from_json(&c.to_json()?)?, c);
        Ok(())
    }

    #[test]
    fn bad_input() {
        assert!(matches!(
            SceneConfig::from_json(r#"{"background": "nope"}"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            SceneConfig::load("/nonexistent/frond.json"),
            Err(Error::Config(_))
        ));
    }
}
