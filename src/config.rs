use std::env;

use anyhow::{Context, Result};

use crate::similarity::{MatchLimits, Tokenization};
use crate::text::SentenceModel;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded by the binary at startup via dotenvy, so every
/// setting can live there. Nothing here is required; all settings have
/// defaults that reproduce the plain bag-of-words behavior.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// How texts are split into vocabulary tokens for cosine scoring
    pub tokenization: Tokenization,
    /// Character cap applied to each text before span matching
    pub max_match_chars: Option<usize>,
    /// Extra abbreviations for the sentence model (DOCSIM_EXTRA_ABBREVIATIONS)
    pub extra_abbreviations: Vec<String>,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup. `load` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lowercase = match lookup("DOCSIM_LOWERCASE") {
            Some(v) => parse_bool(&v).with_context(|| {
                format!("DOCSIM_LOWERCASE must be true/false, got {v:?}")
            })?,
            None => false,
        };

        let tokenization = match lookup("DOCSIM_TOKENIZATION").as_deref().map(str::trim) {
            None | Some("") | Some("whitespace") => Tokenization::Whitespace { lowercase },
            Some("words") => Tokenization::Words,
            Some(other) => anyhow::bail!(
                "DOCSIM_TOKENIZATION must be \"whitespace\" or \"words\", got {other:?}"
            ),
        };

        let max_match_chars = match lookup("DOCSIM_MAX_MATCH_CHARS") {
            Some(v) if !v.trim().is_empty() => Some(parse_char_limit(&v).with_context(|| {
                format!("DOCSIM_MAX_MATCH_CHARS must be a positive integer, got {v:?}")
            })?),
            _ => None,
        };

        let extra_abbreviations = lookup("DOCSIM_EXTRA_ABBREVIATIONS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            tokenization,
            max_match_chars,
            extra_abbreviations,
        })
    }

    /// Build the sentence model once; the pipeline shares it by handle.
    pub fn sentence_model(&self) -> SentenceModel {
        SentenceModel::english().with_abbreviations(&self.extra_abbreviations)
    }

    pub fn match_limits(&self) -> MatchLimits {
        MatchLimits {
            max_chars: self.max_match_chars,
        }
    }
}

/// Parse a character cap. Zero would match nothing, so it is rejected.
pub fn parse_char_limit(value: &str) -> Result<usize> {
    match value.trim().parse::<usize>()? {
        0 => anyhow::bail!("limit must be at least 1"),
        n => Ok(n),
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("not a boolean: {other:?}"),
    }
}
