//! # Configuration
//!
//! Settings are resolved in priority order:
//! 1. **Environment variables**: `ARXIV_DAILY_DATA_FILE`, `ARXIV_DAILY_SITE_TITLE`, ...
//! 2. **Project config**: `./arxiv-daily.toml`.
//! 3. **Global config**: `config.toml` in the OS config directory (found by the binary
//!    via `directories`).
//! 4. **Compiled defaults**: the `#[config(default = ...)]` values below.
//!
//! Missing files are skipped. Command-line flags override whatever was loaded.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | bundled set | JSON array of paper records |
//! | `site_title` | `arXiv CS Daily` | Heading of every page |
//! | `featured_categories` | `cs.AI, cs.RO, cs.CV` | Listed first on the index |
//! | `order` | `store` | Listing order, `store` or `newest` |
//! | `output_dir` | `site` | Where `build` writes pages |
//! | `templates_dir` | none | `*.html` files here replace the built-in page templates |
//! | `copy_reset_ms` | `2000` | How long "Copied!" stays before the label resets |

use crate::commands::ListOrder;
use crate::error::Result;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const PROJECT_CONFIG_FILE: &str = "arxiv-daily.toml";
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DailyConfig {
    /// Data file to read records from. The bundled set is used when absent.
    #[config(env = "ARXIV_DAILY_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    #[config(env = "ARXIV_DAILY_SITE_TITLE", default = "arXiv CS Daily")]
    pub site_title: String,

    #[config(
        env = "ARXIV_DAILY_FEATURED_CATEGORIES",
        parse_env = confique::env::parse::list_by_comma,
        default = ["cs.AI", "cs.RO", "cs.CV"]
    )]
    pub featured_categories: Vec<String>,

    #[config(env = "ARXIV_DAILY_ORDER", default = "store")]
    pub order: ListOrder,

    #[config(env = "ARXIV_DAILY_OUTPUT_DIR", default = "site")]
    pub output_dir: PathBuf,

    #[config(env = "ARXIV_DAILY_TEMPLATES_DIR")]
    pub templates_dir: Option<PathBuf>,

    #[config(env = "ARXIV_DAILY_COPY_RESET_MS", default = 2000)]
    pub copy_reset_ms: u64,
}

impl DailyConfig {
    /// The compiled defaults alone, with no file or environment source.
    pub fn defaults() -> Result<Self> {
        Ok(Self::builder().load()?)
    }

    /// Loads the layered configuration. `project_dir` is searched for
    /// `arxiv-daily.toml`, `global_dir` for `config.toml`.
    pub fn load(project_dir: &Path, global_dir: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder()
            .env()
            .file(project_dir.join(PROJECT_CONFIG_FILE));
        if let Some(dir) = global_dir {
            builder = builder.file(dir.join(GLOBAL_CONFIG_FILE));
        }
        let config = builder.load()?;
        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }

    pub fn copy_reset(&self) -> Duration {
        Duration::from_millis(self.copy_reset_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = DailyConfig::defaults().unwrap();
        assert_eq!(config.data_file, None);
        assert_eq!(config.site_title, "arXiv CS Daily");
        assert_eq!(config.featured_categories, vec!["cs.AI", "cs.RO", "cs.CV"]);
        assert_eq!(config.order, ListOrder::Store);
        assert_eq!(config.output_dir, PathBuf::from("site"));
        assert_eq!(config.templates_dir, None);
        assert_eq!(config.copy_reset(), Duration::from_millis(2000));
    }

    #[test]
    fn defaults_agree_with_site_and_clipboard() {
        let config = DailyConfig::defaults().unwrap();
        assert_eq!(config.site_title, crate::site::DEFAULT_SITE_TITLE);
        assert_eq!(config.copy_reset(), crate::clipboard::DEFAULT_RESET);
    }

    #[test]
    fn project_file_overrides_global_file() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(
            project.path().join(PROJECT_CONFIG_FILE),
            "site_title = \"Project Daily\"\n",
        )
        .unwrap();
        fs::write(
            global.path().join(GLOBAL_CONFIG_FILE),
            "site_title = \"Global Daily\"\norder = \"newest\"\ncopy_reset_ms = 500\n",
        )
        .unwrap();

        let config = DailyConfig::load(project.path(), Some(global.path())).unwrap();
        assert_eq!(config.site_title, "Project Daily");
        assert_eq!(config.order, ListOrder::Newest);
        assert_eq!(config.copy_reset_ms, 500);
        assert_eq!(config.output_dir, PathBuf::from("site"));
    }

    #[test]
    fn invalid_file_is_an_error() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join(PROJECT_CONFIG_FILE), "order = \"sideways\"\n").unwrap();
        assert!(DailyConfig::load(project.path(), None).is_err());
    }
}
