//! CLI configuration with the priority chain env > config file > defaults.
//!
//! The config file lives at `<config_dir>/mondex/config.toml`:
//!
//! ```toml
//! [api]
//! base_url = "https://pokeapi.co/api/v2"
//! page_size = 6
//!
//! [collection]
//! data_dir = "/home/me/.local/share/mondex"
//! ```

use std::path::PathBuf;

use mondex_collection::CollectionStore;
use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: u32 = 6;

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api: Option<ApiSection>,
    collection: Option<CollectionSection>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiSection {
    base_url: Option<String>,
    page_size: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct CollectionSection {
    data_dir: Option<PathBuf>,
}

/// Resolved settings for one invocation.
#[derive(Debug)]
pub struct Settings {
    /// Alternate API endpoint; `None` means the public PokeAPI.
    pub base_url: Option<String>,
    pub page_size: u32,
    pub store_path: PathBuf,
}

/// Path to the config file: `<config_dir>/mondex/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mondex").join("config.toml"))
}

pub fn load() -> Settings {
    let file = load_config_file().unwrap_or_default();
    resolve(
        file,
        std::env::var("MONDEX_API_URL").ok(),
        std::env::var("MONDEX_PAGE_SIZE").ok(),
        std::env::var("MONDEX_DATA_DIR").ok(),
    )
}

fn resolve(
    file: ConfigFile,
    env_url: Option<String>,
    env_page_size: Option<String>,
    env_data_dir: Option<String>,
) -> Settings {
    let api = file.api.unwrap_or_default();
    let collection = file.collection.unwrap_or_default();

    let base_url = env_url.or(api.base_url);
    let page_size = env_page_size
        .and_then(|v| v.parse().ok())
        .or(api.page_size)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .max(1);
    let store_path = env_data_dir
        .map(PathBuf::from)
        .or(collection.data_dir)
        .map(|dir| dir.join("collection.json"))
        .unwrap_or_else(CollectionStore::default_path);

    Settings {
        base_url,
        page_size,
        store_path,
    }
}

fn load_config_file() -> Option<ConfigFile> {
    let path = config_path()?;
    let contents = std::fs::read_to_string(&path).ok()?;
    match toml::from_str(&contents) {
        Ok(file) => Some(file),
        Err(e) => {
            log::warn!("ignoring malformed config {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = resolve(ConfigFile::default(), None, None, None);
        assert!(settings.base_url.is_none());
        assert_eq!(settings.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(settings.store_path, CollectionStore::default_path());
    }

    #[test]
    fn config_file_values_apply() {
        let file: ConfigFile = toml::from_str(
            r#"
[api]
base_url = "http://localhost:9000"
page_size = 12

[collection]
data_dir = "/tmp/mondex-test"
"#,
        )
        .unwrap();

        let settings = resolve(file, None, None, None);
        assert_eq!(settings.base_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(settings.page_size, 12);
        assert_eq!(
            settings.store_path,
            PathBuf::from("/tmp/mondex-test/collection.json")
        );
    }

    #[test]
    fn environment_beats_the_config_file() {
        let file: ConfigFile = toml::from_str(
            r#"
[api]
base_url = "http://from-file"
page_size = 12
"#,
        )
        .unwrap();

        let settings = resolve(
            file,
            Some("http://from-env".to_string()),
            Some("3".to_string()),
            Some("/tmp/env-dir".to_string()),
        );
        assert_eq!(settings.base_url.as_deref(), Some("http://from-env"));
        assert_eq!(settings.page_size, 3);
        assert_eq!(
            settings.store_path,
            PathBuf::from("/tmp/env-dir/collection.json")
        );
    }

    #[test]
    fn unparseable_page_size_falls_through() {
        let settings = resolve(ConfigFile::default(), None, Some("six".to_string()), None);
        assert_eq!(settings.page_size, DEFAULT_PAGE_SIZE);
    }
}
