//! Built-in page templates.
//!
//! Pages extend `layout.html` and include `messages.html` for inline notices. A file with
//! the same name in the configured templates directory replaces the built-in one, so a
//! site can restyle a single page without copying the rest.

pub const LAYOUT: &str = "layout.html";
pub const MESSAGES: &str = "messages.html";
pub const INDEX: &str = "index.html";
pub const CATEGORY: &str = "category.html";
pub const DETAIL: &str = "detail.html";

pub const PAGES: &[(&str, &str)] = &[
    (LAYOUT, include_str!("templates/layout.html")),
    (MESSAGES, include_str!("templates/messages.html")),
    (INDEX, include_str!("templates/index.html")),
    (CATEGORY, include_str!("templates/category.html")),
    (DETAIL, include_str!("templates/detail.html")),
];

pub const STYLESHEET: &str = include_str!("templates/style.css");
