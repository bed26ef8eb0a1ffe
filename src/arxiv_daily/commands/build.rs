//! Static site build.
//!
//! Writes `index.html`, one `category-<code>.html` per category the index lists, one
//! `paper-<id>.html` per record and `style.css` into the output directory, which is
//! created when missing. Pages link to each other by those file names, and detail pages
//! link only the categories that got a page.
//!
//! Two ids or codes that flatten to the same file name (`cs/0112017v1` and
//! `cs_0112017v1`) abort the build before anything is overwritten.

use super::{category, detail, index, CmdMessage, CmdResult, ListOrder};
use crate::error::{DailyError, Result};
use crate::site::route::{category_file, paper_file};
use crate::site::{LinkStyle, SiteOptions, SiteRenderer};
use crate::store::DataStore;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub struct BuildOptions<'a> {
    pub out_dir: &'a Path,
    pub featured: &'a [String],
    pub order: ListOrder,
    pub site: SiteOptions,
}

pub fn run<S: DataStore>(store: &S, options: BuildOptions<'_>) -> Result<CmdResult> {
    let index_result = index::run(store, options.featured)?;
    let codes: Vec<&str> = index_result
        .categories
        .iter()
        .map(|summary| summary.code.as_str())
        .collect();

    let mut names = FileNames::default();
    for &code in &codes {
        names.claim(category_file(code), code)?;
    }
    for record in store.records() {
        names.claim(paper_file(&record.id), &record.id)?;
    }

    let site = SiteRenderer::new(options.site.with_links(LinkStyle::Static))?
        .with_category_pages(codes.iter().map(|code| code.to_string()));
    let out_dir = options.out_dir;
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::new();
    written.push(write_page(out_dir, "index.html", &site.render_index(&index_result)?)?);

    for &code in &codes {
        let listing = category::run(store, Some(code), options.order)?;
        let html = site.render_category(&listing)?;
        written.push(write_page(out_dir, &category_file(code), &html)?);
    }

    for record in store.records() {
        let view = detail::run(store, Some(&record.id))?;
        let html = site.render_detail(&view)?;
        written.push(write_page(out_dir, &paper_file(&record.id), &html)?);
    }

    written.push(write_page(out_dir, "style.css", SiteRenderer::stylesheet())?);

    tracing::info!(dir = %out_dir.display(), files = written.len(), "site built");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Wrote {} files to {}",
        written.len(),
        out_dir.display()
    )));
    Ok(result.with_written_files(written))
}

/// Page file names mapped to the id or code that produced them.
#[derive(Default)]
struct FileNames(HashMap<String, String>);

impl FileNames {
    fn claim(&mut self, file: String, source: &str) -> Result<()> {
        if let Some(first) = self.0.get(&file) {
            return Err(DailyError::FileCollision {
                file,
                first: first.clone(),
                second: source.to_string(),
            });
        }
        self.0.insert(file, source.to_string());
        Ok(())
    }
}

fn write_page(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents)?;
    tracing::debug!(path = %path.display(), "wrote page");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    fn build(dir: &Path) -> CmdResult {
        let store = StoreFixture::new()
            .with_paper("2512.00001v1", "cs.CV")
            .with_paper("2512.00002v1", "cs.LG")
            .with_paper("2512.00003v1", "cs.CV")
            .build();
        let featured = vec!["cs.AI".to_string()];
        run(
            &store,
            BuildOptions {
                out_dir: dir,
                featured: &featured,
                order: ListOrder::Store,
                site: SiteOptions::default(),
            },
        )
        .unwrap()
    }

    #[test]
    fn writes_one_page_per_record_and_category() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("site");
        let result = build(&out);

        for name in [
            "index.html",
            "style.css",
            "category-cs.AI.html",
            "category-cs.CV.html",
            "category-cs.LG.html",
            "paper-2512.00001v1.html",
            "paper-2512.00002v1.html",
            "paper-2512.00003v1.html",
        ] {
            assert!(out.join(name).is_file(), "missing {}", name);
        }
        assert_eq!(result.written_files.len(), 8);
        assert!(result.messages[0].content.starts_with("Wrote 8 files"));
    }

    /// Every `category-*.html` href in `html`.
    fn category_hrefs(html: &str) -> Vec<String> {
        html.split("href=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .filter(|href| href.starts_with("category-"))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn category_links_resolve_to_built_pages() {
        let tmp = TempDir::new().unwrap();
        let store = InMemoryStore::bundled().unwrap();
        let featured = vec!["cs.AI".to_string(), "cs.RO".to_string(), "cs.CV".to_string()];
        let result = run(
            &store,
            BuildOptions {
                out_dir: tmp.path(),
                featured: &featured,
                order: ListOrder::Store,
                site: SiteOptions::default(),
            },
        )
        .unwrap();

        let mut checked = 0;
        for path in &result.written_files {
            let html = fs::read_to_string(path).unwrap();
            for href in category_hrefs(&html) {
                assert!(
                    tmp.path().join(&href).is_file(),
                    "{} links to missing {}",
                    path.display(),
                    href
                );
                checked += 1;
            }
        }
        assert!(checked > 0);

        let detail = fs::read_to_string(tmp.path().join("paper-2512.08931v1.html")).unwrap();
        assert!(detail.contains("href=\"category-cs.CV.html\""));
        assert!(detail.contains("<span class=\"code\">cs.LG</span>"));
        assert!(!tmp.path().join("category-cs.LG.html").exists());
    }

    #[test]
    fn colliding_file_names_abort_the_build() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("site");
        let store = StoreFixture::new()
            .with_paper("cs/0112017v1", "cs.AI")
            .with_paper("cs_0112017v1", "cs.AI")
            .build();
        let err = run(
            &store,
            BuildOptions {
                out_dir: &out,
                featured: &[],
                order: ListOrder::Store,
                site: SiteOptions::default(),
            },
        )
        .unwrap_err();

        assert!(matches!(
            err,
            DailyError::FileCollision { ref file, ref first, ref second }
                if file == "paper-cs_0112017v1.html"
                    && first == "cs/0112017v1"
                    && second == "cs_0112017v1"
        ));
        assert!(!out.exists());
    }

    #[test]
    fn built_pages_use_static_links() {
        let tmp = TempDir::new().unwrap();
        build(tmp.path());

        let index = fs::read_to_string(tmp.path().join("index.html")).unwrap();
        assert!(index.contains("href=\"category-cs.CV.html\""));

        let listing = fs::read_to_string(tmp.path().join("category-cs.CV.html")).unwrap();
        assert!(listing.contains("href=\"paper-2512.00001v1.html\""));
        assert!(listing.contains("href=\"paper-2512.00003v1.html\""));
        assert!(!listing.contains("detail.html?id="));

        let empty = fs::read_to_string(tmp.path().join("category-cs.AI.html")).unwrap();
        assert!(empty.contains("No papers found for this category."));
    }
}
