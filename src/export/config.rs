// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Embed/extract configuration.
//!
//! ```toml
//! keyword = "chatskin-export"
//! policy = "replace"   # or "append"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::png::text::{validate_keyword, TextError};

/// Keyword that tags this application's export among other text chunks.
pub const RESERVED_KEYWORD: &str = "chatskin-export";

/// What `embed` does when the image already carries a payload with the same
/// keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedPolicy {
    /// Drop existing payloads with the keyword, then insert the new one.
    #[default]
    Replace,
    /// Keep existing payloads and insert another. `extract` returns the first.
    Append,
}

/// Keyword and policy used by `embed_with` / `extract_with`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    pub keyword: String,
    pub policy: EmbedPolicy,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            keyword: RESERVED_KEYWORD.to_string(),
            policy: EmbedPolicy::default(),
        }
    }
}

impl CodecConfig {
    /// Start from the defaults and override selected fields.
    pub fn builder() -> CodecConfigBuilder {
        CodecConfigBuilder::default()
    }

    /// Check the keyword rules (1 to 79 bytes, no NUL).
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_keyword(&self.keyword)?;
        Ok(())
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading codec config");
        Self::from_toml_str(&s)
    }
}

/// Builder for [`CodecConfig`]; unset fields keep their defaults.
#[derive(Debug, Default)]
pub struct CodecConfigBuilder {
    keyword: Option<String>,
    policy: Option<EmbedPolicy>,
}

impl CodecConfigBuilder {
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn policy(mut self, policy: EmbedPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Fill in defaults and validate the keyword.
    pub fn build(self) -> Result<CodecConfig, ConfigError> {
        let defaults = CodecConfig::default();
        let config = CodecConfig {
            keyword: self.keyword.unwrap_or(defaults.keyword),
            policy: self.policy.unwrap_or(defaults.policy),
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid keyword: {0}")]
    Keyword(#[from] TextError),
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
