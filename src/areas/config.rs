use anyhow::Context;
use derive_new::new;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: [&str; 2] = [".config", "repos"];
const CONFIG_FILE: &str = "config.json";

/// A named group of repositories, described by a glob pattern.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, new)]
pub struct Collection {
    pub name: String,
    pub pattern: String,
}

/// The contents of `~/.config/repos/config.json`.
///
/// ```json
/// {"basePath": "/home/me/code", "collections": [{"name": "work", "pattern": "work/*"}]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub base_path: PathBuf,
    #[serde(default)]
    pub collections: Vec<Collection>,
}

impl Config {
    /// The config directory, `$HOME/.config/repos`, created if it does not exist yet.
    pub fn dir() -> anyhow::Result<PathBuf> {
        let home = std::env::var_os("HOME").context("HOME is not set")?;
        let path = CONFIG_DIR
            .iter()
            .fold(PathBuf::from(home), |path, part| path.join(part));

        if !path.exists() {
            fs::create_dir_all(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
        }

        Ok(path)
    }

    pub fn default_path() -> anyhow::Result<PathBuf> {
        Ok(Self::dir()?.join(CONFIG_FILE))
    }

    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!("need to create {}", path.display());
        }

        let raw =
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        let config = serde_json::from_str::<Config>(&raw)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            collections = config.collections.len(),
            "loaded config"
        );

        Ok(config)
    }

    /// The collections named in `names`, in config order; all of them when `names` is empty.
    pub fn select(&self, names: &[String]) -> anyhow::Result<Vec<Collection>> {
        if let Some(unknown) = names
            .iter()
            .find(|name| !self.collections.iter().any(|c| &c.name == *name))
        {
            anyhow::bail!("unknown collection {}", unknown);
        }

        Ok(self
            .collections
            .iter()
            .filter(|c| names.is_empty() || names.contains(&c.name))
            .cloned()
            .collect())
    }
}
