//! Configuration types for encoding, decoding and playback.

use serde::{Deserialize, Serialize};

use crate::codec::{DEFAULT_DURATION_MS, UNLIT_FILLER};

fn default_duration_ms() -> u32 {
    DEFAULT_DURATION_MS
}

fn default_array_name() -> String {
    "HeartAnim".to_string()
}

fn default_lit_glyph() -> char {
    '#'
}

fn default_unlit_glyph() -> char {
    UNLIT_FILLER
}

/// What to do with a word row too short to hold a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortRowPolicy {
    /// Drop the row and record a notice.
    #[default]
    Skip,
    /// Fail the whole decode.
    Reject,
}

/// Symbols used when drawing pixels in a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelStyle {
    /// Colored squares.
    #[default]
    Emoji,
    /// Plain ASCII for legacy terminals.
    Ascii,
}

/// Encoder output representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `const uint32_t name[][5] = { ... };`
    #[default]
    CArray,
    /// JSON array of packed frames.
    Json,
    /// ASCII-art frame sheet.
    Sheet,
    /// `.lmxa` binary container.
    Binary,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimConfig {
    /// Frame sheet to listing.
    #[serde(default)]
    pub encode: EncodeConfig,
    /// Listing to frames and playback.
    #[serde(default)]
    pub decode: DecodeConfig,
}

/// Encoder settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodeConfig {
    /// Duration given to every encoded frame, in milliseconds.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u32,
    /// Identifier of the emitted C array.
    #[serde(default = "default_array_name")]
    pub array_name: String,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            array_name: default_array_name(),
            format: OutputFormat::default(),
        }
    }
}

/// Decoder and player settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodeConfig {
    #[serde(default)]
    pub short_row_policy: ShortRowPolicy,
    #[serde(default)]
    pub style: PixelStyle,
    /// Playback passes; `None` loops until interrupted.
    #[serde(default)]
    pub loops: Option<u64>,
    /// Glyph for lit pixels in decoded frame sheets.
    #[serde(default = "default_lit_glyph")]
    pub lit_glyph: char,
    /// Glyph for unlit pixels in decoded frame sheets.
    #[serde(default = "default_unlit_glyph")]
    pub unlit_glyph: char,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            short_row_policy: ShortRowPolicy::default(),
            style: PixelStyle::default(),
            loops: None,
            lit_glyph: default_lit_glyph(),
            unlit_glyph: default_unlit_glyph(),
        }
    }
}

/// True if `name` is a valid C identifier.
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

impl AnimConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_c_identifier(&self.encode.array_name) {
            return Err(ConfigError::InvalidArrayName(
                self.encode.array_name.clone(),
            ));
        }
        if self.decode.loops == Some(0) {
            return Err(ConfigError::InvalidLoopCount);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Array name {0:?} is not a valid C identifier")]
    InvalidArrayName(String),
    #[error("Loop count must be non-zero (omit it to loop forever)")]
    InvalidLoopCount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = AnimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.encode.duration_ms, 55);
        assert_eq!(config.encode.array_name, "HeartAnim");
        assert_eq!(config.decode.short_row_policy, ShortRowPolicy::Skip);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AnimConfig =
            serde_json::from_str(r#"{"encode": {"duration_ms": 80}}"#).unwrap();
        assert_eq!(config.encode.duration_ms, 80);
        assert_eq!(config.encode.array_name, "HeartAnim");
        assert_eq!(config.decode, DecodeConfig::default());
    }

    #[test]
    fn test_enums_snake_case() {
        let config: AnimConfig = serde_json::from_str(
            r#"{"encode": {"format": "c_array"},
                "decode": {"short_row_policy": "reject", "style": "ascii", "loops": 3}}"#,
        )
        .unwrap();
        assert_eq!(config.encode.format, OutputFormat::CArray);
        assert_eq!(config.decode.short_row_policy, ShortRowPolicy::Reject);
        assert_eq!(config.decode.style, PixelStyle::Ascii);
        assert_eq!(config.decode.loops, Some(3));
    }

    #[test]
    fn test_serialization() {
        let config = AnimConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AnimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_invalid_array_name() {
        let mut config = AnimConfig::default();
        config.encode.array_name = "2fast".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidArrayName(_))
        ));
    }

    #[test]
    fn test_zero_loops_rejected() {
        let mut config = AnimConfig::default();
        config.decode.loops = Some(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLoopCount)
        ));
    }

    #[test]
    fn test_c_identifier() {
        assert!(is_c_identifier("HeartAnim"));
        assert!(is_c_identifier("_led_animation2"));
        assert!(!is_c_identifier(""));
        assert!(!is_c_identifier("led-anim"));
        assert!(!is_c_identifier("9lives"));
    }
}
