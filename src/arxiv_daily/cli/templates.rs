//! # Terminal Templates
//!
//! Terminal output is rendered from minijinja templates kept in `templates/` and
//! embedded here as string constants. Blocks trim their own line breaks, so every
//! newline in the output is one written in the template.
//!
//! Layout math (column padding, truncation, wrapping) is done in `render.rs`, where it
//! can be Unicode-width aware; templates only place the pre-computed pieces and pick
//! styles by name.
pub const INDEX_TEMPLATE: &str = include_str!("templates/index.tmp");
pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const DETAIL_TEMPLATE: &str = include_str!("templates/detail.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const FILES_TEMPLATE: &str = include_str!("templates/files.tmp");
