//! # API Facade
//!
//! A **thin facade** over the command layer and the single entry point for every view,
//! whichever client asks for it.
//!
//! The facade:
//! - **Dispatches** to the command function for each view
//! - **Fills in configured defaults** (featured categories, list order, site options)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O of its own apart from what `build_site` delegates to the build
//! command, and never formats output.
//!
//! `DailyApi<S: DataStore>` is generic over the storage backend: the binary uses a boxed
//! store chosen at runtime, tests use `InMemoryStore`.

use crate::commands::{self, build::BuildOptions, CmdMessage, CmdResult, ListOrder};
use crate::config::DailyConfig;
use crate::error::Result;
use crate::site::{LinkStyle, Route, SiteOptions};
use crate::store::DataStore;
use std::path::Path;

pub struct DailyApi<S: DataStore> {
    store: S,
    config: DailyConfig,
}

impl<S: DataStore> DailyApi<S> {
    pub fn new(store: S, config: DailyConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &DailyConfig {
        &self.config
    }

    pub fn index(&self) -> Result<CmdResult> {
        commands::index::run(&self.store, &self.config.featured_categories)
    }

    /// Lists a category; `order` falls back to the configured order.
    pub fn category(&self, query: Option<&str>, order: Option<ListOrder>) -> Result<CmdResult> {
        commands::category::run(&self.store, query, order.unwrap_or(self.config.order))
    }

    pub fn detail(&self, id: Option<&str>) -> Result<CmdResult> {
        commands::detail::run(&self.store, id)
    }

    pub fn cite(&self, id: &str) -> Result<CmdResult> {
        commands::cite::run(&self.store, id)
    }

    /// Runs the view a request target selects.
    pub fn open(&self, target: &str) -> Result<(Route, CmdResult)> {
        let route = Route::parse(target);
        let result = match &route {
            Route::Index => self.index()?,
            Route::Category { cat } => self.category(cat.as_deref(), None)?,
            Route::Detail { id } => self.detail(id.as_deref())?,
            Route::Unknown(path) => {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error(format!("Unknown page: {}", path)));
                result
            }
        };
        Ok((route, result))
    }

    /// Writes the static site into `out_dir`, or the configured output directory.
    pub fn build_site(&self, out_dir: Option<&Path>) -> Result<CmdResult> {
        let out_dir = out_dir.unwrap_or(self.config.output_dir.as_path());
        commands::build::run(
            &self.store,
            BuildOptions {
                out_dir,
                featured: &self.config.featured_categories,
                order: self.config.order,
                site: self.site_options(LinkStyle::Static),
            },
        )
    }

    pub fn site_options(&self, links: LinkStyle) -> SiteOptions {
        SiteOptions {
            title: self.config.site_title.clone(),
            links,
            templates_dir: self.config.templates_dir.clone(),
            copy_reset: self.config.copy_reset(),
        }
    }
}
