use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub resources: ResourcesConfig,
    pub random: RandomConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourcesConfig {
    pub root: Option<PathBuf>,
    pub file: String,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            root: None,
            file: String::from("file.txt"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RandomConfig {
    pub seed: Option<u64>,
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config> {
        let content = fs::read_to_string(file_name).wrap_err("cannot load configuration file")?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Config> {
        toml::from_str(content).wrap_err("cannot parse configuration file")
    }
}
