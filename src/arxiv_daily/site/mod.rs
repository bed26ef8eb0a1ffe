//! # HTML Site
//!
//! Renders command results into HTML pages with `inkstand` in HTML mode: every value is
//! escaped and the `style` filter emits `<span class="...">` for the stylesheet to color.
//! Rendering is pure (result in, markup out); writing files is left to the `build` command.
//!
//! Links between pages follow a [`LinkStyle`]: query-parameter links when pages are
//! rendered on demand from a [`Route`], flat file names for a built site.

use crate::clipboard::{COPIED_LABEL, DEFAULT_RESET, IDLE_LABEL};
use crate::commands::{CategorySummary, CmdMessage, CmdResult, PaperDetail};
use crate::error::Result;
use crate::model::{category_name, PaperRecord};
use console::Style;
use inkstand::{OutputMode, Renderer, Theme, ThemeChoice};
use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

pub mod route;
pub mod templates;

pub use route::{LinkStyle, Route};

pub const DEFAULT_SITE_TITLE: &str = "arXiv CS Daily";

#[derive(Debug, Clone)]
pub struct SiteOptions {
    pub title: String,
    pub links: LinkStyle,
    /// Directory whose `*.html` files replace the built-in templates.
    pub templates_dir: Option<PathBuf>,
    pub copy_reset: Duration,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_SITE_TITLE.to_string(),
            links: LinkStyle::Query,
            templates_dir: None,
            copy_reset: DEFAULT_RESET,
        }
    }
}

impl SiteOptions {
    pub fn with_links(mut self, links: LinkStyle) -> Self {
        self.links = links;
        self
    }
}

#[derive(Serialize)]
struct CategoryLink {
    code: String,
    name: String,
    count_label: String,
    href: String,
    featured: bool,
}

#[derive(Serialize)]
struct PaperLink<'a> {
    id: &'a str,
    title: &'a str,
    authors: String,
    published: String,
    href: String,
}

/// A category code on the detail page; unlinked when no page exists for it.
#[derive(Serialize)]
struct CategoryTag<'a> {
    code: &'a str,
    href: Option<String>,
}

#[derive(Serialize)]
struct CopyButton {
    idle_label: &'static str,
    copied_label: &'static str,
    reset_ms: u64,
}

#[derive(Serialize)]
struct IndexPage<'a> {
    site_title: &'a str,
    index_href: String,
    categories: Vec<CategoryLink>,
    messages: &'a [CmdMessage],
}

#[derive(Serialize)]
struct CategoryPage<'a> {
    site_title: &'a str,
    index_href: String,
    heading: String,
    papers: Vec<PaperLink<'a>>,
    messages: &'a [CmdMessage],
}

#[derive(Serialize)]
struct DetailPage<'a> {
    site_title: &'a str,
    index_href: String,
    paper: Option<&'a PaperDetail>,
    categories: Vec<CategoryTag<'a>>,
    copy: CopyButton,
    messages: &'a [CmdMessage],
}

/// Class names the page templates pass to the `style` filter.
fn page_theme() -> Theme {
    Theme::new()
        .add("code", Style::new())
        .add("count", Style::new())
        .add("date", Style::new())
}

pub struct SiteRenderer {
    renderer: Renderer,
    options: SiteOptions,
    /// Codes that have a category page. `None` means every code does.
    category_pages: Option<HashSet<String>>,
}

impl SiteRenderer {
    pub fn new(options: SiteOptions) -> Result<Self> {
        let theme = page_theme();
        let mut renderer = Renderer::with_mode(ThemeChoice::from(&theme), OutputMode::Html);
        if let Some(dir) = &options.templates_dir {
            tracing::debug!(dir = %dir.display(), "using template overrides");
            renderer = renderer.with_template_dir(dir.clone());
        }
        for (name, source) in templates::PAGES {
            renderer.add_template(name, source)?;
        }

        Ok(Self {
            renderer,
            options,
            category_pages: None,
        })
    }

    /// Restricts category links on detail pages to `codes`.
    pub fn with_category_pages<I>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.category_pages = Some(codes.into_iter().collect());
        self
    }

    pub fn options(&self) -> &SiteOptions {
        &self.options
    }

    pub fn stylesheet() -> &'static str {
        templates::STYLESHEET
    }

    pub fn render_index(&self, result: &CmdResult) -> Result<String> {
        let page = IndexPage {
            site_title: &self.options.title,
            index_href: self.options.links.index(),
            categories: result
                .categories
                .iter()
                .map(|summary| self.category_link(summary))
                .collect(),
            messages: &result.messages,
        };
        Ok(self.renderer.render(templates::INDEX, &page)?)
    }

    pub fn render_category(&self, result: &CmdResult) -> Result<String> {
        let heading = match result.query.as_deref() {
            Some(code) => match category_name(code) {
                Some(name) => format!("{} ({})", name, code),
                None => code.to_string(),
            },
            None => "Category".to_string(),
        };
        let page = CategoryPage {
            site_title: &self.options.title,
            index_href: self.options.links.index(),
            heading,
            papers: result
                .listed_papers
                .iter()
                .map(|record| self.paper_link(record))
                .collect(),
            messages: &result.messages,
        };
        Ok(self.renderer.render(templates::CATEGORY, &page)?)
    }

    pub fn render_detail(&self, result: &CmdResult) -> Result<String> {
        let categories = result
            .detail
            .iter()
            .flat_map(|detail| detail.categories.iter())
            .map(|code| CategoryTag {
                code: code.as_str(),
                href: self.has_category_page(code).then(|| self.options.links.category(code)),
            })
            .collect();
        let page = DetailPage {
            site_title: &self.options.title,
            index_href: self.options.links.index(),
            paper: result.detail.as_ref(),
            categories,
            copy: CopyButton {
                idle_label: IDLE_LABEL,
                copied_label: COPIED_LABEL,
                reset_ms: u64::try_from(self.options.copy_reset.as_millis()).unwrap_or(u64::MAX),
            },
            messages: &result.messages,
        };
        Ok(self.renderer.render(templates::DETAIL, &page)?)
    }

    fn has_category_page(&self, code: &str) -> bool {
        self.category_pages
            .as_ref()
            .map_or(true, |pages| pages.contains(code))
    }

    fn category_link(&self, summary: &CategorySummary) -> CategoryLink {
        CategoryLink {
            code: summary.code.clone(),
            name: summary.name.clone(),
            count_label: count_label(summary.count),
            href: self.options.links.category(&summary.code),
            featured: summary.featured,
        }
    }

    fn paper_link<'a>(&self, record: &'a PaperRecord) -> PaperLink<'a> {
        PaperLink {
            id: &record.id,
            title: &record.title,
            authors: record.authors.join(", "),
            published: record.published.format("%Y-%m-%d").to_string(),
            href: self.options.links.detail(&record.id),
        }
    }
}

fn count_label(count: usize) -> String {
    match count {
        1 => "1 paper".to_string(),
        n => format!("{} papers", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{category, detail, index, ListOrder};
    use crate::store::memory::fixtures::{paper, StoreFixture};
    use crate::store::memory::InMemoryStore;
    use std::fs;
    use tempfile::TempDir;

    fn store() -> InMemoryStore {
        let mut tricky = paper("2512.00002v1", "cs.AI");
        tricky.title = "Agents <script>alert(1)</script> & Tools".to_string();
        StoreFixture::new()
            .with_paper("2512.00001v1", "cs.CV")
            .with_record(tricky)
            .build()
    }

    fn site(links: LinkStyle) -> SiteRenderer {
        SiteRenderer::new(SiteOptions::default().with_links(links)).unwrap()
    }

    #[test]
    fn index_links_to_categories_with_counts() {
        let featured = vec!["cs.AI".to_string(), "cs.CV".to_string()];
        let result = index::run(&store(), &featured).unwrap();
        let html = site(LinkStyle::Query).render_index(&result).unwrap();

        assert!(html.contains("<title>arXiv CS Daily</title>"));
        assert!(html.contains("href=\"category.html?cat=cs.AI\""));
        assert!(html.contains("Artificial Intelligence"));
        assert!(html.contains("<span class=\"count\">1 paper</span>"));
    }

    #[test]
    fn category_lists_title_links_and_authors() {
        let result = category::run(&store(), Some("cs.CV"), ListOrder::Store).unwrap();
        let html = site(LinkStyle::Query).render_category(&result).unwrap();

        assert!(html.contains("<a href=\"detail.html?id=2512.00001v1\">Paper 2512.00001v1</a>"));
        assert!(html.contains("<p class=\"authors\">Ada Lovelace, Alan Turing</p>"));
        assert!(html.contains("Computer Vision and Pattern Recognition (cs.CV)"));
        assert!(!html.contains("2512.00002v1"));
    }

    #[test]
    fn category_uses_static_links_when_built() {
        let result = category::run(&store(), Some("cs.CV"), ListOrder::Store).unwrap();
        let html = site(LinkStyle::Static).render_category(&result).unwrap();
        assert!(html.contains("href=\"paper-2512.00001v1.html\""));
    }

    #[test]
    fn category_messages_are_rendered() {
        let site = site(LinkStyle::Query);
        let missing = category::run(&store(), None, ListOrder::Store).unwrap();
        assert!(site
            .render_category(&missing)
            .unwrap()
            .contains("No category specified."));

        let empty = category::run(&store(), Some("cs.RO"), ListOrder::Store).unwrap();
        let html = site.render_category(&empty).unwrap();
        assert!(html.contains("No papers found for this category."));
        assert!(!html.contains("paper-list\""));
    }

    #[test]
    fn titles_are_escaped() {
        let result = category::run(&store(), Some("cs.AI"), ListOrder::Store).unwrap();
        let html = site(LinkStyle::Query).render_category(&result).unwrap();
        assert!(html.contains("Agents &lt;script&gt;"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn detail_shows_citation_and_copy_button() {
        let result = detail::run(&store(), Some("2512.00001v1")).unwrap();
        let html = site(LinkStyle::Query).render_detail(&result).unwrap();

        assert!(html.contains("<h1>Paper 2512.00001v1</h1>"));
        assert!(html.contains("Published on <span class=\"date\">December 9, 2025</span>"));
        assert!(html.contains("Summary of 2512.00001v1"));
        assert!(html.contains("@article{251200001v1,"));
        assert!(html.contains("author={Lovelace, Ada and Turing, Alan}"));
        assert!(html.contains("data-reset-ms=\"2000\""));
        assert!(html.contains(">Copy BibTeX</button>"));
        assert!(html.contains("clearTimeout"));
    }

    #[test]
    fn detail_not_found_has_message_only() {
        let result = detail::run(&store(), Some("nope")).unwrap();
        let html = site(LinkStyle::Query).render_detail(&result).unwrap();
        assert!(html.contains("Paper not found."));
        assert!(!html.contains("copy-bibtex-btn"));
    }

    #[test]
    fn copy_duration_follows_options() {
        let options = SiteOptions {
            copy_reset: Duration::from_millis(750),
            ..SiteOptions::default()
        };
        let site = SiteRenderer::new(options).unwrap();
        let result = detail::run(&store(), Some("2512.00001v1")).unwrap();
        assert!(site
            .render_detail(&result)
            .unwrap()
            .contains("data-reset-ms=\"750\""));
    }

    #[test]
    fn detail_links_only_categories_with_pages() {
        let mut record = paper("2512.00001v1", "cs.CV");
        record.categories.push("cs.LG".to_string());
        let store = StoreFixture::new().with_record(record).build();
        let result = detail::run(&store, Some("2512.00001v1")).unwrap();

        let open = site(LinkStyle::Static).render_detail(&result).unwrap();
        assert!(open.contains("href=\"category-cs.LG.html\""));

        let built = site(LinkStyle::Static)
            .with_category_pages(vec!["cs.CV".to_string()])
            .render_detail(&result)
            .unwrap();
        assert!(built.contains("href=\"category-cs.CV.html\""));
        assert!(!built.contains("category-cs.LG.html"));
        assert!(built.contains("<li><span class=\"code\">cs.LG</span></li>"));
    }

    #[test]
    fn template_directory_overrides_a_page() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("index.html"),
            "{% extends \"layout.html\" %}{% block content %}custom index{% endblock %}",
        )
        .unwrap();
        let options = SiteOptions {
            templates_dir: Some(dir.path().to_path_buf()),
            ..SiteOptions::default()
        };
        let site = SiteRenderer::new(options).unwrap();
        let html = site
            .render_index(&index::run(&store(), &[]).unwrap())
            .unwrap();
        assert!(html.contains("custom index"));
        assert!(html.contains("<!DOCTYPE html>"));
    }
}
