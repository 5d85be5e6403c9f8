use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::analysis::ResponseType;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub web: WebConfig,
    pub storage: StorageConfig,
    pub analysis: AnalysisConfig,
    pub composer: ComposerConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
    pub default_recent_limit: usize,
    pub max_recent_limit: usize,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            default_recent_limit: 10,
            max_recent_limit: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// `jsonl` or `memory`
    pub backend: String,
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: "jsonl".to_string(),
            data_dir: PathBuf::from("data"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub max_topics: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { max_topics: 3 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    pub supported_platforms: Vec<String>,
    /// Maximum reply length in characters, keyed by platform.
    pub char_limits: HashMap<String, usize>,
    pub templates: Vec<TemplateOverride>,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            supported_platforms: ["twitter", "linkedin", "instagram", "facebook", "reddit"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            char_limits: HashMap::from([("twitter".to_string(), 280)]),
            templates: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateOverride {
    pub platform: String,
    pub response_type: ResponseType,
    pub template: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let path = std::env::var("REPLIER_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        let mut config = if Path::new(&path).exists() {
            let config_text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path))?;
            Self::from_toml_str(&config_text).with_context(|| format!("Failed to parse {}", path))?
        } else {
            warn!("{} not found, using built-in defaults", path);
            Self::default()
        };

        if let Ok(host) = std::env::var("REPLIER_HOST") {
            config.web.host = host;
        }
        if let Ok(port) = std::env::var("REPLIER_PORT") {
            config.web.port = port.parse().context("REPLIER_PORT must be a port number")?;
        }
        if let Ok(dir) = std::env::var("REPLIER_DATA_DIR") {
            config.storage.data_dir = PathBuf::from(dir);
        }

        config.normalize();
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: AppConfig = toml::from_str(text)?;
        config.normalize();
        Ok(config)
    }

    /// Platform names are matched case-insensitively everywhere.
    fn normalize(&mut self) {
        let composer = &mut self.composer;
        for platform in composer.supported_platforms.iter_mut() {
            *platform = platform.trim().to_lowercase();
        }
        let mut seen = HashSet::new();
        composer.supported_platforms.retain(|p| !p.is_empty() && seen.insert(p.clone()));
        composer.char_limits = composer
            .char_limits
            .drain()
            .map(|(platform, limit)| (platform.trim().to_lowercase(), limit))
            .collect();
        for template in composer.templates.iter_mut() {
            template.platform = template.platform.trim().to_lowercase();
        }
    }
}
