//! Engine configuration.
//!
//! An [`EngineConfig`] picks a [`Preset`] and optionally overrides its
//! pattern, marker class and argument trimming. It can be built in code or
//! loaded from TOML:
//!
//! ```toml
//! preset = "placeholders"
//! marker = "token"
//! trim_args = false
//! ```
//!
//! An empty `marker` disables marker tagging.

use std::path::Path;

use serde::Deserialize;

use crate::Pattern;
use crate::error::ConfigError;

/// Built-in token dialects.
///
/// | preset         | syntax                        | marker class  | trims args |
/// |----------------|-------------------------------|---------------|------------|
/// | `expressions`  | `{{ name }}`, `{{ name, a }}` | none          | yes        |
/// | `placeholders` | `{{ name }}`, `{{ name, a }}` | `placeholder` | yes        |
/// | `nano-blocks`  | `@@name`, `@@name(a)`         | `nano-block`  | no         |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    #[default]
    Expressions,
    Placeholders,
    NanoBlocks,
}

impl Preset {
    #[must_use]
    pub fn pattern(self) -> Pattern {
        match self {
            Self::Expressions | Self::Placeholders => Pattern::expressions(),
            Self::NanoBlocks => Pattern::nano_blocks(),
        }
    }

    #[must_use]
    pub fn marker(self) -> Option<&'static str> {
        match self {
            Self::Expressions => None,
            Self::Placeholders => Some("placeholder"),
            Self::NanoBlocks => Some("nano-block"),
        }
    }

    #[must_use]
    pub fn trim_args(self) -> bool {
        !matches!(self, Self::NanoBlocks)
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Base dialect.
    pub preset: Preset,
    /// Pattern override (regular expression source).
    pub pattern: Option<String>,
    /// Marker class override. `Some("")` disables the marker.
    pub marker: Option<String>,
    /// Argument trimming override.
    pub trim_args: Option<bool>,
}

impl EngineConfig {
    /// Create a configuration for `preset` with no overrides.
    #[must_use]
    pub fn new(preset: Preset) -> Self {
        Self {
            preset,
            ..Self::default()
        }
    }

    /// Parse a configuration from TOML.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    #[must_use]
    pub fn with_trim_args(mut self, trim_args: bool) -> Self {
        self.trim_args = Some(trim_args);
        self
    }

    /// Compile the effective pattern: the override if set, else the preset's.
    pub fn resolve_pattern(&self) -> Result<Pattern, ConfigError> {
        match &self.pattern {
            Some(source) => Ok(Pattern::new(source)?),
            None => Ok(self.preset.pattern()),
        }
    }

    /// Effective marker class.
    #[must_use]
    pub fn resolve_marker(&self) -> Option<String> {
        match &self.marker {
            Some(marker) if marker.trim().is_empty() => None,
            Some(marker) => Some(marker.trim().to_owned()),
            None => self.preset.marker().map(str::to_owned),
        }
    }

    /// Effective argument trimming.
    #[must_use]
    pub fn resolve_trim_args(&self) -> bool {
        self.trim_args.unwrap_or_else(|| self.preset.trim_args())
    }
}
