use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Runtime settings read from the environment (or a `.env` file)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub user_agent: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub max_pages: Option<usize>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Try to load .env from multiple locations
        Self::try_load_dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let user_agent = lookup("MEETINGS_USER_AGENT").filter(|v| !v.trim().is_empty());
        let output_dir = lookup("MEETINGS_OUTPUT_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let max_pages = lookup("MEETINGS_MAX_PAGES")
            .map(|raw| {
                raw.trim().parse::<usize>().with_context(|| {
                    format!("MEETINGS_MAX_PAGES must be a whole number, got {:?}", raw)
                })
            })
            .transpose()?;

        Ok(Self {
            user_agent,
            output_dir,
            max_pages,
        })
    }

    fn try_load_dotenv() {
        // 1. Current directory (for development)
        if dotenvy::dotenv().is_ok() {
            return;
        }

        // 2. ~/.config/city-meetings/.env (standard config location)
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("city-meetings").join(".env");
            if config_path.exists() && dotenvy::from_path(&config_path).is_ok() {
                return;
            }
        }

        // 3. ~/.env (home directory)
        if let Some(home_dir) = dirs::home_dir() {
            let home_path = home_dir.join(".env");
            if home_path.exists() {
                let _ = dotenvy::from_path(&home_path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_empty_environment() {
        let config = config_from(&[]).unwrap();
        assert!(config.user_agent.is_none());
        assert!(config.output_dir.is_none());
        assert!(config.max_pages.is_none());
    }

    #[test]
    fn test_all_keys() {
        let config = config_from(&[
            ("MEETINGS_USER_AGENT", "StevensonBot/2.0"),
            ("MEETINGS_OUTPUT_DIR", "/tmp/meetings"),
            ("MEETINGS_MAX_PAGES", " 4 "),
        ])
        .unwrap();

        assert_eq!(config.user_agent.as_deref(), Some("StevensonBot/2.0"));
        assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/meetings")));
        assert_eq!(config.max_pages, Some(4));
    }

    #[test]
    fn test_bad_max_pages_names_the_key() {
        let err = config_from(&[("MEETINGS_MAX_PAGES", "lots")]).unwrap_err();
        assert!(err.to_string().contains("MEETINGS_MAX_PAGES"));
    }
}
