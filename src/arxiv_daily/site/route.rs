//! Request targets and the links that point at them.
//!
//! Pages rendered on demand are addressed the way a browser would request them:
//! `index.html`, `category.html?cat=cs.CV`, `detail.html?id=2512.08931v1`. A built site
//! instead uses one flat file per page, see [`LinkStyle::Static`].

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Index,
    Category { cat: Option<String> },
    Detail { id: Option<String> },
    Unknown(String),
}

impl Route {
    /// Parses a request target. Only the last path segment selects the page; the
    /// fragment is ignored and query values are percent-decoded.
    pub fn parse(target: &str) -> Self {
        let target = target.split('#').next().unwrap_or_default();
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, query),
            None => (target, ""),
        };
        let page = path.rsplit('/').next().unwrap_or_default();

        match page {
            "" | "index.html" => Route::Index,
            "category.html" => Route::Category {
                cat: query_param(query, "cat"),
            },
            "detail.html" => Route::Detail {
                id: query_param(query, "id"),
            },
            _ => Route::Unknown(path.to_string()),
        }
    }
}

/// First value of `key` in a query string.
pub fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| percent_decode(k) == key)
        .map(|(_, v)| percent_decode(v))
}

/// Decodes `%XX` escapes and `+` as space. Malformed escapes are kept as written.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi << 4) | lo);
                        i += 3;
                        continue;
                    }
                    _ => out.push(b'%'),
                }
            }
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Encodes a query value; unreserved characters pass through.
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for b in input.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

/// How pages link to each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkStyle {
    /// `category.html?cat=...` and `detail.html?id=...`.
    #[default]
    Query,
    /// `category-<code>.html` and `paper-<id>.html`, as written by `build`.
    Static,
}

impl LinkStyle {
    pub fn index(self) -> String {
        "index.html".to_string()
    }

    pub fn category(self, code: &str) -> String {
        match self {
            LinkStyle::Query => format!("category.html?cat={}", percent_encode(code)),
            LinkStyle::Static => category_file(code),
        }
    }

    pub fn detail(self, id: &str) -> String {
        match self {
            LinkStyle::Query => format!("detail.html?id={}", percent_encode(id)),
            LinkStyle::Static => paper_file(id),
        }
    }
}

pub fn category_file(code: &str) -> String {
    format!("category-{}.html", file_safe(code))
}

pub fn paper_file(id: &str) -> String {
    format!("paper-{}.html", file_safe(id))
}

// Old-style ids such as `cs/0112017v1` contain a slash.
fn file_safe(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '?' | '#' | '%' => '_',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pages() {
        assert_eq!(Route::parse("index.html"), Route::Index);
        assert_eq!(Route::parse(""), Route::Index);
        assert_eq!(Route::parse("/site/"), Route::Index);
        assert_eq!(
            Route::parse("category.html?cat=cs.CV"),
            Route::Category {
                cat: Some("cs.CV".into())
            }
        );
        assert_eq!(
            Route::parse("/site/detail.html?id=2512.08931v1#citation"),
            Route::Detail {
                id: Some("2512.08931v1".into())
            }
        );
        assert_eq!(
            Route::parse("about.html?x=1"),
            Route::Unknown("about.html".into())
        );
    }

    #[test]
    fn missing_parameters_are_none() {
        assert_eq!(Route::parse("category.html"), Route::Category { cat: None });
        assert_eq!(Route::parse("detail.html?cat=cs.AI"), Route::Detail { id: None });
        assert_eq!(
            Route::parse("category.html?cat="),
            Route::Category {
                cat: Some(String::new())
            }
        );
    }

    #[test]
    fn first_value_wins() {
        assert_eq!(
            query_param("cat=cs.AI&cat=cs.RO", "cat"),
            Some("cs.AI".to_string())
        );
    }

    #[test]
    fn decodes_escapes_and_plus() {
        assert_eq!(percent_decode("cs%2ECV"), "cs.CV");
        assert_eq!(percent_decode("a+b%20c"), "a b c");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_decode("caf%C3%A9"), "café");
    }

    #[test]
    fn encodes_reserved_characters() {
        assert_eq!(percent_encode("cs.CV"), "cs.CV");
        assert_eq!(percent_encode("a b&c"), "a%20b%26c");
        assert_eq!(percent_decode(&percent_encode("cs/0112017v1")), "cs/0112017v1");
    }

    #[test]
    fn link_styles() {
        assert_eq!(LinkStyle::Query.category("cs.AI"), "category.html?cat=cs.AI");
        assert_eq!(LinkStyle::Static.category("cs.AI"), "category-cs.AI.html");
        assert_eq!(LinkStyle::Query.detail("2512.08931v1"), "detail.html?id=2512.08931v1");
        assert_eq!(LinkStyle::Static.detail("cs/0112017v1"), "paper-cs_0112017v1.html");
        assert_eq!(LinkStyle::Static.index(), "index.html");
    }
}
