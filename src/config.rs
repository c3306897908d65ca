use crate::consts::{API_URL_ENV, CONFIG_FILE_NAME, LEGACY_API_URL_ENV};
use crate::exceptions::DrynessError;
use crate::fs::atomic_write_json;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Default, Debug)]
struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_url: Option<String>,
}

/// Where the backend URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlSource {
    Flag,
    Env,
    LegacyEnv,
    ConfigFile,
}

impl std::fmt::Display for UrlSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrlSource::Flag => write!(f, "--api-url"),
            UrlSource::Env => write!(f, "{}", API_URL_ENV),
            UrlSource::LegacyEnv => write!(f, "{}", LEGACY_API_URL_ENV),
            UrlSource::ConfigFile => write!(f, "config file"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_url: String,
    pub source: UrlSource,
}

impl ApiConfig {
    /// Root that uploaded images are served from: the API URL without a trailing `/api` path segment.
    pub fn asset_base_url(&self) -> String {
        let url = self.api_url.trim_end_matches('/');
        url.strip_suffix("/api").unwrap_or(url).to_string()
    }
}

pub fn get_config_file() -> PathBuf {
    crate::utils::get_app_config_dir().join(CONFIG_FILE_NAME)
}

fn load_config_file(path: &Path) -> ConfigFile {
    if !path.exists() {
        return ConfigFile::default();
    }

    match crate::fs::read_json::<ConfigFile>(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring unreadable config file {}: {}", path.display(), e);
            ConfigFile::default()
        }
    }
}

fn save_config_file(path: &Path, config: &ConfigFile) -> Result<(), DrynessError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    atomic_write_json(path, config)
}

pub fn normalize_api_url(raw: &str) -> Result<String, DrynessError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(DrynessError::Configuration("API URL is empty.".into()));
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(DrynessError::Configuration(format!(
            "Invalid API URL '{}'. Expected it to start with http:// or https://.",
            raw.trim()
        )));
    }
    Ok(trimmed.to_string())
}

/// Resolves the backend URL from the flag, the environment and the config file, in that order.
pub fn resolve(flag: Option<&str>) -> Result<ApiConfig, DrynessError> {
    resolve_with(flag, |key| std::env::var(key).ok(), &get_config_file())
}

fn resolve_with(
    flag: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
    config_path: &Path,
) -> Result<ApiConfig, DrynessError> {
    let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

    let candidate = if let Some(url) = flag {
        Some((url.to_string(), UrlSource::Flag))
    } else if let Some(url) = non_empty(env(API_URL_ENV)) {
        Some((url, UrlSource::Env))
    } else if let Some(url) = non_empty(env(LEGACY_API_URL_ENV)) {
        Some((url, UrlSource::LegacyEnv))
    } else {
        non_empty(load_config_file(config_path).api_url).map(|url| (url, UrlSource::ConfigFile))
    };

    let (raw, source) = candidate.ok_or_else(|| {
        DrynessError::Configuration(format!(
            "No API URL configured. Pass --api-url, set {}, or run `dryness config set-url <URL>`.",
            API_URL_ENV
        ))
    })?;

    tracing::debug!("Using API URL from {}", source);

    Ok(ApiConfig {
        api_url: normalize_api_url(&raw)?,
        source,
    })
}

pub fn stored_api_url() -> Option<String> {
    load_config_file(&get_config_file()).api_url
}

pub fn set_api_url(raw: &str) -> Result<String, DrynessError> {
    let url = normalize_api_url(raw)?;
    let path = get_config_file();
    let mut config = load_config_file(&path);
    config.api_url = Some(url.clone());
    save_config_file(&path, &config)?;
    Ok(url)
}

pub fn unset_api_url() -> Result<bool, DrynessError> {
    let path = get_config_file();
    let mut config = load_config_file(&path);
    if config.api_url.take().is_none() {
        return Ok(false);
    }
    save_config_file(&path, &config)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn config_with(dir: &Path, url: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE_NAME);
        fs::write(&path, format!(r#"{{"api_url": "{}"}}"#, url)).unwrap();
        path
    }

    #[test]
    fn test_flag_wins_over_everything() {
        let temp = tempfile::tempdir().unwrap();
        let path = config_with(temp.path(), "http://file.test");
        let env = env_from(&[
            (API_URL_ENV, "http://env.test"),
            (LEGACY_API_URL_ENV, "http://legacy.test"),
        ]);

        let cfg = resolve_with(Some("http://flag.test/"), env, &path).unwrap();
        assert_eq!(cfg.api_url, "http://flag.test");
        assert_eq!(cfg.source, UrlSource::Flag);
    }

    #[test]
    fn test_env_precedence_over_legacy_and_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = config_with(temp.path(), "http://file.test");

        let cfg = resolve_with(
            None,
            env_from(&[
                (API_URL_ENV, "http://env.test"),
                (LEGACY_API_URL_ENV, "http://legacy.test"),
            ]),
            &path,
        )
        .unwrap();
        assert_eq!(cfg.source, UrlSource::Env);

        let cfg = resolve_with(
            None,
            env_from(&[(API_URL_ENV, "  "), (LEGACY_API_URL_ENV, "http://legacy.test/api")]),
            &path,
        )
        .unwrap();
        assert_eq!(cfg.source, UrlSource::LegacyEnv);
        assert_eq!(cfg.api_url, "http://legacy.test/api");

        let cfg = resolve_with(None, env_from(&[]), &path).unwrap();
        assert_eq!(cfg.source, UrlSource::ConfigFile);
        assert_eq!(cfg.api_url, "http://file.test");
    }

    #[test]
    fn test_missing_everywhere_is_configuration_error() {
        let temp = tempfile::tempdir().unwrap();
        let err = resolve_with(None, env_from(&[]), &temp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, DrynessError::Configuration(_)));
    }

    #[test]
    fn test_corrupt_config_file_is_ignored() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{not json").unwrap();
        assert!(resolve_with(None, env_from(&[]), &path).is_err());
    }

    #[test]
    fn test_normalize_rejects_non_http() {
        assert!(normalize_api_url("ftp://example.com").is_err());
        assert!(normalize_api_url("").is_err());
        assert_eq!(
            normalize_api_url(" https://example.com/api// ").unwrap(),
            "https://example.com/api"
        );
    }

    #[test]
    fn test_asset_base_url_strips_trailing_api_segment() {
        let cfg = ApiConfig {
            api_url: "https://backend.test/api".into(),
            source: UrlSource::Flag,
        };
        assert_eq!(cfg.asset_base_url(), "https://backend.test");

        let cfg = ApiConfig {
            api_url: "http://localhost:5000".into(),
            source: UrlSource::Flag,
        };
        assert_eq!(cfg.asset_base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_asset_base_url_leaves_api_host_and_prefixes_alone() {
        let base = |url: &str| {
            ApiConfig {
                api_url: url.into(),
                source: UrlSource::Flag,
            }
            .asset_base_url()
        };

        assert_eq!(base("https://api.banana.test/api"), "https://api.banana.test");
        assert_eq!(base("https://api.banana.test"), "https://api.banana.test");
        assert_eq!(base("https://banana.test/apiv2"), "https://banana.test/apiv2");
        assert_eq!(
            crate::format::image_url(&base("https://api.banana.test/api"), "x.jpg"),
            "https://api.banana.test/uploads/x.jpg"
        );
    }
}
