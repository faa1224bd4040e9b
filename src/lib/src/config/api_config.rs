use crate::constants::{
    API_HOST_ENV, CONFIG_DIR, DEFAULT_API_HOST, PAGEPATCH, PAGEPATCH_VERSION, USER_AGENT,
};
use crate::error::PagePatchError;
use crate::util;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const API_CONFIG_FILENAME: &str = "api_config.toml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    #[serde(default = "default_api_host")]
    pub api_host: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_api_host() -> String {
    DEFAULT_API_HOST.to_string()
}

fn default_user_agent() -> String {
    format!("{USER_AGENT}/{PAGEPATCH_VERSION}")
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            api_host: default_api_host(),
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn new(path: &Path) -> Result<ApiConfig, PagePatchError> {
        let contents = util::fs::read_from_path(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Config pointing at another api host, e.g. a mock server in tests
    pub fn for_host(api_host: impl AsRef<str>) -> ApiConfig {
        ApiConfig {
            api_host: api_host.as_ref().trim_end_matches('/').to_string(),
            ..ApiConfig::default()
        }
    }

    pub fn config_path() -> Result<PathBuf, PagePatchError> {
        Ok(util::fs::pagepatch_config_dir()?.join(API_CONFIG_FILENAME))
    }

    /// Load the saved config, or the defaults if none was saved.
    /// `PAGEPATCH_API_HOST` overrides the api host either way.
    pub fn get() -> Result<ApiConfig, PagePatchError> {
        let config_file = Self::config_path()?;
        log::debug!("looking for config file in...{:?}", config_file);
        let mut config = if config_file.exists() {
            ApiConfig::new(&config_file)?
        } else {
            log::debug!("no config at {:?}, using defaults", config_file);
            ApiConfig::default()
        };

        if let Ok(host) = std::env::var(API_HOST_ENV) {
            log::debug!("{} overrides api host with {}", API_HOST_ENV, host);
            config.api_host = host.trim_end_matches('/').to_string();
        }
        Ok(config)
    }

    pub fn save_default(&self) -> Result<PathBuf, PagePatchError> {
        let config_file = Self::config_path()?;
        log::debug!("Saving config to {:?}", config_file);
        self.save(&config_file)?;
        println!("saved config to \"$HOME/{CONFIG_DIR}/{PAGEPATCH}/{API_CONFIG_FILENAME}\"");
        Ok(config_file)
    }

    pub fn save(&self, path: &Path) -> Result<(), PagePatchError> {
        let toml = toml::to_string(&self)?;
        util::fs::write_to_path(path, toml)?;
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ApiConfig;
    use crate::constants::DEFAULT_API_HOST;
    use crate::error::PagePatchError;

    #[test]
    fn test_defaults_when_fields_missing() -> Result<(), PagePatchError> {
        let config: ApiConfig = toml::from_str("timeout_secs = 5\n")?;

        assert_eq!(config.api_host, DEFAULT_API_HOST);
        assert!(config.user_agent.starts_with("pagepatch/"));
        assert_eq!(config.timeout(), Some(std::time::Duration::from_secs(5)));
        Ok(())
    }

    #[test]
    fn test_save_and_reload() -> Result<(), PagePatchError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("api_config.toml");

        let mut config = ApiConfig::for_host("http://127.0.0.1:1234/");
        config.user_agent = String::from("tester/1.0");
        config.save(&path)?;

        let reloaded = ApiConfig::new(&path)?;
        assert_eq!(reloaded.api_host, "http://127.0.0.1:1234");
        assert_eq!(reloaded, config);
        Ok(())
    }
}
