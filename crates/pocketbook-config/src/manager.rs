use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{Config, ConfigError};

/// Overrides the directory holding `config.json`.
pub const HOME_ENV: &str = "POCKETBOOK_HOME";

const APP_DIR: &str = "pocketbook";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Loads and saves [`Config`] as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self::new(base.join(CONFIG_FILE))
    }

    /// `$POCKETBOOK_HOME/config.json`, else `<config_dir>/pocketbook/config.json`.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Some(home) = env::var_os(HOME_ENV).filter(|value| !value.is_empty()) {
            return Ok(Self::with_base_dir(PathBuf::from(home)));
        }
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_base_dir(base.join(APP_DIR)))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// A missing file yields the defaults.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.config_path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.config_path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.config_path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_appends_suffix_to_extension() {
        let tmp = tmp_path(Path::new("/cfg/config.json"));
        assert_eq!(tmp, PathBuf::from("/cfg/config.json.tmp"));
    }
}
