//! # arxiv-daily Architecture
//!
//! arxiv-daily browses a static set of arXiv computer science preprints: an index of
//! categories, a listing per category and a detail view per paper with a ready-made
//! BibTeX citation. The same views render to the terminal or to HTML pages, either on
//! demand or as a complete static site.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders terminal output, logging setup │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, fills in configured defaults  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Filtering, lookup, citation and index building           │
//! │  - View conditions become messages, not errors              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Read-only DataStore trait                                │
//! │  - FileStore (JSON data file), InMemoryStore (bundled set)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! HTML rendering lives in [`site`], beside the command layer: it turns a `CmdResult`
//! into a page string and never touches the filesystem itself.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests against `InMemoryStore` fixtures. Most tests live here.
//! 2. **API**: dispatch and configured defaults.
//! 3. **Site**: rendered markup for each page, escaping, link styles.
//! 4. **CLI**: end-to-end runs of the binary in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per view, plus the static site build
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `PaperRecord` and category names
//! - [`citation`]: BibTeX generation
//! - [`site`]: HTML pages, request routing and links
//! - [`config`]: Layered configuration
//! - [`clipboard`]: System clipboard and the copy-confirmation state machine
//! - [`error`]: Error types
//! - `cli`: Argument parsing and terminal rendering for the binary (not part of the lib API)

pub mod api;
pub mod citation;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod site;
pub mod store;
