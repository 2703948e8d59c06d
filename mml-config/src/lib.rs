//! Shared configuration loader for the MML toolchain.
//!
//! `defaults/mml.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MmlConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mml_parser::{Dictionary, FormatRegistry, HtmlOptions, MmlcError};
use mml_parser::mml::formats::{HtmlFormatter, MmlcFormatter};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mml.default.toml");

/// Top-level configuration consumed by MML applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MmlConfig {
    pub html: HtmlConfig,
    pub convert: ConvertConfig,
    pub compression: CompressionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub lang: String,
    pub fallback_title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    /// Registry name of the format used when none is requested
    pub default_format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompressionConfig {
    pub dictionary: Vec<DictionaryEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    pub code: String,
}

impl MmlConfig {
    pub fn html_options(&self) -> HtmlOptions {
        HtmlOptions {
            lang: self.html.lang.clone(),
            fallback_title: self.html.fallback_title.clone(),
        }
    }

    /// Build the MMLC dictionary. Fails on blank, duplicate or structurally unsafe entries.
    pub fn dictionary(&self) -> Result<Dictionary, MmlcError> {
        Dictionary::new(
            self.compression
                .dictionary
                .iter()
                .map(|entry| (entry.word.as_str(), entry.code.as_str())),
        )
    }

    /// The built-in formats, with HTML and MMLC configured from this file
    pub fn registry(&self) -> Result<FormatRegistry, MmlcError> {
        let mut registry = FormatRegistry::with_defaults();
        registry.register(HtmlFormatter::new(self.html_options()));
        registry.register(MmlcFormatter::new(self.dictionary()?));
        Ok(registry)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MmlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MmlConfig, ConfigError> {
    Loader::new().build()
}
