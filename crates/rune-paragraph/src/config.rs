//! Paragraph formatting configuration.
//!
//! Settings come from a TOML file (by default `paragraph.toml`) with
//! environment variables taking precedence:
//!
//! ```toml
//! target_width = 480.0
//! alignment = "justify"
//! line_padding = 2.0
//! ```
//!
//! The paragraph base direction for neutral text is always left-to-right
//! and is not configurable.

use core::str::FromStr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::layout::{
    AlignedLineFormatter, JustifiedLineFormatter, LineAlign, LineMeasure, PaddedMeasure,
    ParagraphFormatter,
};

/// Default config file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "paragraph.toml";

/// Paragraph alignment strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Start,
    Center,
    End,
    #[default]
    Justify,
}

impl Alignment {
    /// Build the formatter for this alignment over `measure`.
    pub fn formatter<M>(self, measure: M) -> Box<dyn ParagraphFormatter + Send + Sync>
    where
        M: LineMeasure + Send + Sync + 'static,
    {
        match self {
            Alignment::Justify => Box::new(JustifiedLineFormatter::new(measure)),
            Alignment::Start => Box::new(AlignedLineFormatter::new(measure, LineAlign::Start)),
            Alignment::Center => Box::new(AlignedLineFormatter::new(measure, LineAlign::Center)),
            Alignment::End => Box::new(AlignedLineFormatter::new(measure, LineAlign::End)),
        }
    }
}

impl FromStr for Alignment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" | "left" => Ok(Alignment::Start),
            "center" | "middle" => Ok(Alignment::Center),
            "end" | "right" => Ok(Alignment::End),
            "justify" | "justified" => Ok(Alignment::Justify),
            _ => Err(ConfigError::InvalidAlignment(s.to_owned())),
        }
    }
}

/// Settings for one paragraph formatting pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphConfig {
    /// Target line width in pixels; required, finite and > 0.
    pub target_width: f32,
    /// How lines are placed horizontally.
    #[serde(default)]
    pub alignment: Alignment,
    /// Extra spacing added below each measured line, in pixels.
    #[serde(default)]
    pub line_padding: f32,
}

impl ParagraphConfig {
    /// Justified config with no extra line padding.
    pub fn new(target_width: f32) -> Result<Self, ConfigError> {
        let config = Self {
            target_width,
            alignment: Alignment::default(),
            line_padding: 0.0,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Apply environment overrides.
    ///
    /// - `RUNE_TEXT_WIDTH`: target width in pixels
    /// - `RUNE_TEXT_ALIGN`: start | center | end | justify
    /// - `RUNE_LINE_PAD`: extra line padding in pixels
    ///
    /// Unparseable values are ignored.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("RUNE_TEXT_WIDTH") {
            if let Ok(width) = val.parse::<f32>() {
                self.target_width = width;
            }
        }
        if let Ok(val) = std::env::var("RUNE_TEXT_ALIGN") {
            if let Ok(alignment) = val.parse::<Alignment>() {
                self.alignment = alignment;
            }
        }
        if let Ok(val) = std::env::var("RUNE_LINE_PAD") {
            if let Ok(pad) = val.parse::<f32>() {
                self.line_padding = pad;
            }
        }
    }

    /// Load `path`, apply environment overrides, then validate.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Self = toml::from_str(&content)?;
        config.merge_with_env();
        config.validate()?;
        Ok(config)
    }

    /// [`load`](Self::load) from [`DEFAULT_CONFIG_FILE`] in the current directory.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.target_width.is_finite() || self.target_width <= 0.0 {
            return Err(ConfigError::InvalidWidth(self.target_width));
        }
        Ok(())
    }

    /// Formatter for the configured alignment, with `line_padding` added to
    /// every height reported by `measure`.
    pub fn formatter<M>(&self, measure: M) -> Box<dyn ParagraphFormatter + Send + Sync>
    where
        M: LineMeasure + Send + Sync + 'static,
    {
        self.alignment
            .formatter(PaddedMeasure::new(measure, self.line_padding))
    }
}
