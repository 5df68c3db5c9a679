//! Configuration loading and extractor factory.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use lingograde_core::traits::TextExtractor;

use crate::http::HttpExtractor;
use crate::simulated::SimulatedExtractor;

/// Which text extraction backend to use.
///
/// Note: Custom Debug impl masks the API key.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ExtractorConfig {
    Simulated {
        #[serde(default = "default_delay_ms")]
        delay_ms: u64,
    },
    Http {
        base_url: String,
        #[serde(default)]
        api_key: Option<String>,
    },
}

impl std::fmt::Debug for ExtractorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractorConfig::Simulated { delay_ms } => f
                .debug_struct("Simulated")
                .field("delay_ms", delay_ms)
                .finish(),
            ExtractorConfig::Http { base_url, api_key } => f
                .debug_struct("Http")
                .field("base_url", base_url)
                .field("api_key", &api_key.as_ref().map(|_| "***"))
                .finish(),
        }
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig::Simulated {
            delay_ms: default_delay_ms(),
        }
    }
}

fn default_delay_ms() -> u64 {
    2000
}

/// Top-level lingograde configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LingogradeConfig {
    /// Text extraction backend.
    #[serde(default)]
    pub extractor: ExtractorConfig,
    /// Upper bound on a single extraction, in seconds.
    #[serde(default = "default_extraction_timeout")]
    pub extraction_timeout_secs: u64,
    /// Number of questions `analyze --generate` produces when no count is given.
    #[serde(default = "default_question_count")]
    pub default_question_count: usize,
}

fn default_extraction_timeout() -> u64 {
    30
}
fn default_question_count() -> usize {
    lingograde_core::synthesizer::DEFAULT_QUESTION_COUNT
}

impl Default for LingogradeConfig {
    fn default() -> Self {
        Self {
            extractor: ExtractorConfig::default(),
            extraction_timeout_secs: default_extraction_timeout(),
            default_question_count: default_question_count(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    let mut pos = 0;
    while let Some(offset) = result[pos..].find("${") {
        let start = pos + offset;
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let var_name = &result[start + 2..start + end];
        let value = std::env::var(var_name).unwrap_or_default();
        result = format!(
            "{}{}{}",
            &result[..start],
            value,
            &result[start + end + 1..]
        );
        pos = start + value.len();
    }
    result
}

fn resolve_extractor_config(config: &ExtractorConfig) -> ExtractorConfig {
    match config {
        ExtractorConfig::Simulated { delay_ms } => ExtractorConfig::Simulated {
            delay_ms: *delay_ms,
        },
        ExtractorConfig::Http { base_url, api_key } => ExtractorConfig::Http {
            base_url: resolve_env_vars(base_url),
            api_key: api_key.as_ref().map(|k| resolve_env_vars(k)),
        },
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `lingograde.toml` in the current directory
/// 2. `~/.config/lingograde/config.toml`
///
/// `LINGOGRADE_EXTRACTOR_URL` switches the extractor to HTTP at that URL.
pub fn load_config() -> Result<LingogradeConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<LingogradeConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("lingograde.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => LingogradeConfig::default(),
    };

    if let Ok(url) = std::env::var("LINGOGRADE_EXTRACTOR_URL") {
        let api_key = match &config.extractor {
            ExtractorConfig::Http { api_key, .. } => api_key.clone(),
            ExtractorConfig::Simulated { .. } => None,
        };
        config.extractor = ExtractorConfig::Http {
            base_url: url,
            api_key,
        };
    }

    config.extractor = resolve_extractor_config(&config.extractor);

    Ok(config)
}

/// Parse configuration TOML without consulting the environment.
pub fn parse_config_str(content: &str) -> Result<LingogradeConfig> {
    let config: LingogradeConfig = toml::from_str(content)?;
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("lingograde"))
}

/// Create an extractor instance from its configuration.
///
/// `timeout` bounds network requests made by the extractor.
pub fn create_extractor(config: &ExtractorConfig, timeout: Duration) -> Arc<dyn TextExtractor> {
    match config {
        ExtractorConfig::Simulated { delay_ms } => Arc::new(SimulatedExtractor::new(*delay_ms)),
        ExtractorConfig::Http { base_url, api_key } => Arc::new(HttpExtractor::with_timeout(
            base_url,
            api_key.clone(),
            timeout,
        )),
    }
}
