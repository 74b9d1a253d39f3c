use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{BenchError, BenchResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads the explicit path, or the default location when it exists.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file falls back to the built-in configuration.
    pub fn load(path: Option<&Path>) -> BenchResult<Config> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(BenchError::config_error(
                        &format!("config file not found: {}", path.display()),
                        None,
                    ));
                }
                Self::load_from(path)
            }
            None => {
                let default_path = Self::default_config_path();
                if default_path.exists() {
                    Self::load_from(&default_path)
                } else {
                    log::debug!("No config file at {}, using built-in providers", default_path.display());
                    Ok(Config::default())
                }
            }
        }
    }

    fn load_from(path: &Path) -> BenchResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| BenchError::io_error(&format!("reading {}", path.display()), &e.to_string()))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn create_sample_config(path: &Path) -> BenchResult<()> {
        if path.exists() {
            return Err(BenchError::config_error(
                &format!("refusing to overwrite existing config at {}", path.display()),
                None,
            ));
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let body = toml::to_string_pretty(&Config::default())?;
        let sample = format!(
            "# llm-speedtest configuration\n\
             #\n\
             # API keys are read from the environment variable named by `api_key_env`\n\
             # (a .env file in the working directory is loaded first).\n\n{}",
            body
        );
        fs::write(path, sample)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.run.workers == 0 {
            errors.push("run.workers must be at least 1".to_string());
        }

        if config.run.timeout_secs == 0 {
            errors.push("run.timeout_secs must be at least 1".to_string());
        }

        let mut names = HashSet::new();
        for provider in &config.providers {
            if !names.insert(&provider.name) {
                errors.push(format!("Duplicate provider name: {}", provider.name));
            }

            if provider.base_url.trim().is_empty() {
                errors.push(format!("Provider '{}' has an empty base_url", provider.name));
            }

            if provider.api_key_env.trim().is_empty() {
                errors.push(format!("Provider '{}' has an empty api_key_env", provider.name));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::test_mode::TestMode;
    use crate::structs::config::provider_config::ProviderConfig;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[run]
mode = "multi"
workers = 5

[[providers]]
name = "Local"
api_key_env = "LOCAL_KEY"
base_url = "http://localhost:8000/v1"
model = "r1"
"#,
        )
        .unwrap();

        let config = ConfigManager::load(Some(&path)).unwrap();
        assert_eq!(config.run.mode, TestMode::Multi);
        assert_eq!(config.run.workers, 5);
        assert_eq!(config.run.timeout_secs, 300);
        assert_eq!(config.providers.len(), 1);
        assert!(config.providers[0].enabled);
        assert!(config.output.csv_report);
        assert!(config.output.html_report);
        assert!(!config.output.json_report);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigManager::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, BenchError::Configuration { .. }));
    }

    #[test]
    fn sample_config_round_trips_and_is_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        ConfigManager::create_sample_config(&path).unwrap();

        let config = ConfigManager::load(Some(&path)).unwrap();
        assert_eq!(config, Config::default());
        assert!(ConfigManager::validate_config(&config).is_ok());
        assert!(ConfigManager::create_sample_config(&path).is_err());
    }

    #[test]
    fn validation_reports_every_problem() {
        let mut config = Config::default();
        config.run.workers = 0;
        config.run.timeout_secs = 0;
        config.providers.push(ProviderConfig::new("DeepSeek", "X", "", "m"));

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
