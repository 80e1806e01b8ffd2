use std::{path::Path, time::Duration};

use getset::Getters;
use play_slots_utils::fs_toml_util::read_toml_or_default;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = "ignore/play-slots.toml";

#[derive(Clone, Debug, Getters, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    #[getset(get = "pub")]
    base_url: Url,
    poll_interval_secs: u64,
    #[getset(get = "pub")]
    user_agent: Option<String>,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://play.fi/").expect("Hard-coded URL is valid"),
            poll_interval_secs: 61,
            user_agent: None,
        }
    }
}

impl Config {
    /// Reads `path`; a missing file means all defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config: Self = read_toml_or_default(path)?;
        let base_url = config.base_url.clone();
        Ok(config.with_base_url(base_url))
    }

    /// Page paths are joined onto `base_url`, so it always ends with `/`.
    pub fn with_base_url(self, mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self { base_url, ..self }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}
