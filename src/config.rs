// src/config.rs
use std::env;
use thiserror::Error;

pub const INTRO_CHARACTERS_VAR: &str = "ARTICLE_INTRO_CHARACTERS";
pub const TOP_WORDS_VAR: &str = "ARTICLE_TOP_WORDS";

/// Defaults for the derived text views of an article.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextConfig {
    intro_characters: usize,
    top_words: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const fn default_intro_characters() -> usize {
    200
}

const fn default_top_words() -> usize {
    5
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            intro_characters: default_intro_characters(),
            top_words: default_top_words(),
        }
    }
}

impl TextConfig {
    pub const fn new(intro_characters: usize, top_words: usize) -> Self {
        Self {
            intro_characters,
            top_words,
        }
    }

    /// Build configuration from environment variables, loading a `.env` file
    /// first when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Missing keys fall
    /// back to defaults; present but unparsable keys are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let intro_characters = parse_count(&lookup, INTRO_CHARACTERS_VAR)?
            .unwrap_or_else(default_intro_characters);
        let top_words = parse_count(&lookup, TOP_WORDS_VAR)?.unwrap_or_else(default_top_words);

        Ok(Self {
            intro_characters,
            top_words,
        })
    }

    pub const fn intro_characters(&self) -> usize {
        self.intro_characters
    }

    pub const fn top_words(&self) -> usize {
        self.top_words
    }
}

fn parse_count<F>(lookup: &F, key: &'static str) -> Result<Option<usize>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim().parse::<usize>().map_err(|_| {
                ConfigError::Invalid(format!("{key} must be a non-negative integer, got {raw:?}"))
            })
        })
        .transpose()
}
