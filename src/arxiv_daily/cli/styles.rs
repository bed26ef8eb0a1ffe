//! Styles for terminal output.
//!
//! Templates refer to semantic names only (`authors`, `time`, `code`), never to colors.
//! The names resolve through an adaptive theme with a light and a dark palette, picked
//! at render time from the detected display mode.

use console::Style;
use inkstand::{rgb_to_ansi256, AdaptiveTheme, Theme};
use once_cell::sync::Lazy;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const TITLE: &str = "title";
    pub const PAPER_TITLE: &str = "paper-title";
    pub const INDEX: &str = "index";
    pub const AUTHORS: &str = "authors";
    pub const CODE: &str = "code";
    pub const FEATURED: &str = "featured";
    pub const TIME: &str = "time";
    pub const MUTED: &str = "muted";
    pub const SECTION: &str = "section";
    pub const LINK: &str = "link";
    pub const CITATION: &str = "citation";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static DAILY_THEME: Lazy<AdaptiveTheme> =
    Lazy::new(|| AdaptiveTheme::new(build_light_theme(), build_dark_theme()));

struct Palette {
    regular: Style,
    muted: Style,
    accent: Style,
    link: Style,
}

fn build_theme(p: Palette) -> Theme {
    Theme::new()
        .add(names::TITLE, p.regular.clone().bold())
        .add(names::PAPER_TITLE, p.regular.clone())
        .add(names::INDEX, p.accent.clone())
        .add(names::AUTHORS, p.muted.clone())
        .add(names::CODE, p.muted.clone())
        .add(names::FEATURED, p.accent.clone().bold())
        .add(names::TIME, p.muted.clone().italic())
        .add(names::MUTED, p.muted.clone())
        .add(names::SECTION, p.accent.bold())
        .add(names::LINK, p.link.underlined())
        .add(names::CITATION, p.regular)
        .add(names::INFO, p.muted)
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::ERROR, Style::new().red().bold())
}

fn build_light_theme() -> Theme {
    build_theme(Palette {
        regular: Style::new().black(),
        muted: Style::new().color256(rgb_to_ansi256((115, 115, 115))),
        accent: Style::new().color256(rgb_to_ansi256((179, 27, 27))),
        link: Style::new().color256(rgb_to_ansi256((0, 90, 156))),
    })
}

fn build_dark_theme() -> Theme {
    build_theme(Palette {
        regular: Style::new().white(),
        muted: Style::new().color256(rgb_to_ansi256((180, 180, 180))),
        accent: Style::new().color256(rgb_to_ansi256((255, 107, 107))),
        link: Style::new().color256(rgb_to_ansi256((110, 180, 255))),
    })
}
