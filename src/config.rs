use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::pipeline::Pipeline;
use crate::similarity::segment::JiebaSegmenter;
use crate::similarity::stopwords::StopWords;
use crate::similarity::tokenizer::{Tokenizer, TokenizerConfig};

/// Decimal places written to the result file unless configured otherwise.
pub const DEFAULT_PRECISION: usize = 2;

/// Central configuration loaded from environment variables.
///
/// A .env file is loaded automatically at startup via dotenvy. Command-line
/// flags override whatever is set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Extra stop words, one per line (PAPERCHECK_STOPWORDS)
    pub stopwords_file: Option<PathBuf>,
    /// Also drop the built-in Chinese stop words (PAPERCHECK_BUILTIN_STOPWORDS)
    pub builtin_stopwords: bool,
    /// jieba-format user dictionary merged into the bundled one
    /// (PAPERCHECK_USER_DICT)
    pub user_dict: Option<PathBuf>,
    /// HMM recovery of out-of-dictionary words (PAPERCHECK_HMM)
    pub hmm: bool,
    /// NFKC normalization before tokenizing (PAPERCHECK_NORMALIZE)
    pub normalize: bool,
    /// Decimal places in the result file (PAPERCHECK_PRECISION)
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stopwords_file: None,
            builtin_stopwords: false,
            user_dict: None,
            hmm: false,
            normalize: true,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let flag = |key: &str, default: bool| -> Result<bool> {
            match lookup(key) {
                Some(value) => parse_flag(&value).with_context(|| format!("Invalid value for {key}")),
                None => Ok(default),
            }
        };

        let precision = match lookup("PAPERCHECK_PRECISION") {
            Some(value) => value
                .trim()
                .parse()
                .with_context(|| format!("Invalid value for PAPERCHECK_PRECISION: {value:?}"))?,
            None => defaults.precision,
        };

        Ok(Self {
            stopwords_file: lookup("PAPERCHECK_STOPWORDS")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            builtin_stopwords: flag("PAPERCHECK_BUILTIN_STOPWORDS", defaults.builtin_stopwords)?,
            user_dict: lookup("PAPERCHECK_USER_DICT")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            hmm: flag("PAPERCHECK_HMM", defaults.hmm)?,
            normalize: flag("PAPERCHECK_NORMALIZE", defaults.normalize)?,
            precision,
        })
    }

    /// Assemble the stop word set from the built-in list and/or a file.
    pub fn stopwords(&self) -> Result<StopWords> {
        let mut stopwords = if self.builtin_stopwords {
            StopWords::chinese()
        } else {
            StopWords::none()
        };
        if let Some(path) = &self.stopwords_file {
            stopwords.merge(StopWords::from_file(path)?);
        }
        Ok(stopwords)
    }

    /// Build the scoring pipeline this configuration describes.
    pub fn build_pipeline(&self) -> Result<Pipeline> {
        let mut segmenter = JiebaSegmenter::new().with_hmm(self.hmm);
        if let Some(path) = &self.user_dict {
            segmenter.load_user_dict(path)?;
        }

        let stopwords = self.stopwords()?;
        info!(
            stopwords = stopwords.len(),
            user_dict = self.user_dict.is_some(),
            hmm = self.hmm,
            normalize = self.normalize,
            "Built scoring pipeline"
        );

        let tokenizer = Tokenizer::new(
            Box::new(segmenter),
            TokenizerConfig {
                stopwords,
                normalize: self.normalize,
            },
        );
        Ok(Pipeline::new(tokenizer))
    }
}

/// Parse a boolean environment value.
fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("expected true/false, got {other:?}"),
    }
}
