//! # Inkstand - Styled Template Rendering for Terminals and HTML
//!
//! One set of named styles, one template language, two very different destinations:
//! a terminal that may or may not understand ANSI escapes, and an HTML page where the
//! same semantic names become CSS classes.
//!
//! ## The Problem
//!
//! A tool that shows the same data both on the terminal and as generated web pages
//! tends to grow two renderers:
//! - Inline ANSI codes in terminal templates are ugly and hard to maintain
//! - Not all terminals support colors (pipes, CI, `TERM=dumb`)
//! - HTML output needs escaping everywhere, and forgetting it once is a bug
//!
//! ## The Solution
//!
//! Inkstand separates concerns:
//! - **Templates** define structure using Jinja2 syntax (via minijinja)
//! - **Styles** are defined separately and applied via the `style` template filter
//! - **Output modes** decide what a style means: ANSI codes ([`OutputMode::Term`]),
//!   nothing ([`OutputMode::Plain`]), or a `<span class="...">` ([`OutputMode::Html`])
//!
//! In HTML mode every template is auto-escaped, so record text can never inject markup.
//!
//! ## Quick Example
//!
//! ```rust
//! use inkstand::{render_with_mode, OutputMode, Theme, ThemeChoice};
//! use console::Style;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data {
//!     name: String,
//!     count: usize,
//! }
//!
//! let theme = Theme::new()
//!     .add("header", Style::new().bold().cyan())
//!     .add("count", Style::new().green());
//!
//! let template = r#"{{ "Results for" | style("header") }} {{ name }}"#;
//!
//! let data = Data { name: "cs.CV".into(), count: 2 };
//! let html = render_with_mode(template, &data, ThemeChoice::from(&theme), OutputMode::Html).unwrap();
//! assert_eq!(html, r#"<span class="header">Results for</span> cs.CV"#);
//! ```
//!
//! ## Terminal Detection
//!
//! [`render`] and [`Renderer::new`] use the `console` crate to detect whether stdout
//! supports colors and pick [`OutputMode::Term`] or [`OutputMode::Plain`] accordingly.
//! Use [`render_with_mode`] or [`Renderer::with_mode`] to force a mode.
//!
//! ## Renderer for Multiple Templates
//!
//! For applications with many templates (or templates that extend a shared layout), use
//! [`Renderer`] to pre-register them. A template directory can be attached with
//! [`Renderer::with_template_dir`]; files found there take precedence over the templates
//! registered in code, which lets users restyle pages without rebuilding.

use console::{Style, Term};
use minijinja::{path_loader, AutoEscape, Environment, HtmlEscape, Value};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub use minijinja::Error;

/// Default prefix shown when a style name is not found.
pub const DEFAULT_MISSING_STYLE_INDICATOR: &str = "(!?)";

/// What the `style` filter produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// ANSI escape codes from the registered `console::Style`.
    Term,
    /// Text only; styles are checked but not applied.
    Plain,
    /// Auto-escaped templates; styles become `<span class="name">` wrappers.
    Html,
}

impl OutputMode {
    /// Picks `Term` when stdout supports colors, `Plain` otherwise.
    pub fn detect() -> Self {
        if Term::stdout().features().colors_supported() {
            OutputMode::Term
        } else {
            OutputMode::Plain
        }
    }

    pub fn is_html(self) -> bool {
        matches!(self, OutputMode::Html)
    }
}

/// A collection of named styles.
///
/// Styles are registered by name and applied via the `style` filter in templates.
/// When a style name is not found, a configurable indicator is prepended to the text
/// to help catch typos in templates (defaults to `(!?)`).
///
/// # Example
///
/// ```rust
/// use inkstand::Styles;
/// use console::Style;
///
/// let styles = Styles::new()
///     .add("error", Style::new().bold().red())
///     .add("dim", Style::new().dim());
///
/// let unknown = styles.apply("typo", "Hello");
/// assert!(unknown.starts_with("(!?)"));
/// ```
#[derive(Clone)]
pub struct Styles {
    styles: HashMap<String, Style>,
    missing_indicator: String,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            styles: HashMap::new(),
            missing_indicator: DEFAULT_MISSING_STYLE_INDICATOR.to_string(),
        }
    }
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom indicator to prepend when a style name is not found.
    /// Set to empty string to disable.
    pub fn missing_indicator(mut self, indicator: &str) -> Self {
        self.missing_indicator = indicator.to_string();
        self
    }

    /// Adds a named style, replacing any style with the same name.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Applies a named style to text, with ANSI codes.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).to_string(),
            None if self.missing_indicator.is_empty() => text.to_string(),
            None => format!("{} {}", self.missing_indicator, text),
        }
    }

    /// Checks the style name but returns the text without ANSI codes.
    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.styles.contains_key(name) || self.missing_indicator.is_empty() {
            text.to_string()
        } else {
            format!("{} {}", self.missing_indicator, text)
        }
    }

    /// Wraps already-escaped markup in a span whose class is the style name.
    ///
    /// The caller is responsible for escaping `markup`; the class name and the
    /// missing indicator are escaped here.
    pub fn wrap_html(&self, name: &str, markup: &str) -> String {
        if self.styles.contains_key(name) || self.missing_indicator.is_empty() {
            format!("<span class=\"{}\">{}</span>", HtmlEscape(name), markup)
        } else {
            format!(
                "<span class=\"{}\">{} {}</span>",
                HtmlEscape(name),
                HtmlEscape(&self.missing_indicator),
                markup
            )
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// A named collection of styles used when rendering templates.
#[derive(Clone, Default)]
pub struct Theme {
    styles: Styles,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            styles: Styles::new(),
        }
    }

    pub fn from_styles(styles: Styles) -> Self {
        Self { styles }
    }

    /// Adds a named style, returning an updated theme for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles = self.styles.add(name, style);
        self
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }
}

/// A theme that adapts to the user's light or dark display mode.
#[derive(Clone)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    fn resolve(&self) -> Theme {
        match detect_color_mode() {
            ColorMode::Light => self.light.clone(),
            ColorMode::Dark => self.dark.clone(),
        }
    }
}

/// Reference to either a static theme or an adaptive theme.
pub enum ThemeChoice<'a> {
    Theme(&'a Theme),
    Adaptive(&'a AdaptiveTheme),
}

impl ThemeChoice<'_> {
    fn resolve(&self) -> Theme {
        match self {
            ThemeChoice::Theme(theme) => (*theme).clone(),
            ThemeChoice::Adaptive(adaptive) => adaptive.resolve(),
        }
    }
}

impl<'a> From<&'a Theme> for ThemeChoice<'a> {
    fn from(theme: &'a Theme) -> Self {
        ThemeChoice::Theme(theme)
    }
}

impl<'a> From<&'a AdaptiveTheme> for ThemeChoice<'a> {
    fn from(adaptive: &'a AdaptiveTheme) -> Self {
        ThemeChoice::Adaptive(adaptive)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

type ThemeDetector = fn() -> ColorMode;

fn detect_from_system() -> ColorMode {
    match dark_light::detect() {
        dark_light::Mode::Dark => ColorMode::Dark,
        _ => ColorMode::Light,
    }
}

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> =
    Lazy::new(|| Mutex::new(detect_from_system as ThemeDetector));

/// Overrides the detector used to decide between the light and dark variant of an
/// [`AdaptiveTheme`]. Useful for testing.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR.lock().unwrap_or_else(|e| e.into_inner());
    *guard = detector;
}

fn detect_color_mode() -> ColorMode {
    let detector = THEME_DETECTOR.lock().unwrap_or_else(|e| e.into_inner());
    (*detector)()
}

/// Renders a template, picking `Term` or `Plain` from terminal detection.
pub fn render<T: Serialize>(
    template: &str,
    data: &T,
    theme: ThemeChoice<'_>,
) -> Result<String, Error> {
    render_with_mode(template, data, theme, OutputMode::detect())
}

/// Renders a template in an explicit output mode.
///
/// ```rust
/// use inkstand::{render_with_mode, OutputMode, Theme, ThemeChoice};
/// use console::Style;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Data { status: String }
///
/// let theme = Theme::new().add("ok", Style::new().green());
/// let plain = render_with_mode(
///     r#"{{ status | style("ok") }}"#,
///     &Data { status: "done".into() },
///     ThemeChoice::from(&theme),
///     OutputMode::Plain,
/// ).unwrap();
/// assert_eq!(plain, "done");
/// ```
pub fn render_with_mode<T: Serialize>(
    template: &str,
    data: &T,
    theme: ThemeChoice<'_>,
    mode: OutputMode,
) -> Result<String, Error> {
    let env = build_environment(theme.resolve(), mode);
    env.render_str(template, data)
}

/// A renderer with pre-registered templates.
///
/// Templates are compiled once and may refer to each other (`{% extends %}`,
/// `{% include %}`).
///
/// ```rust
/// use inkstand::{OutputMode, Renderer, Theme, ThemeChoice};
/// use serde::Serialize;
///
/// let theme = Theme::new();
/// let mut renderer = Renderer::with_mode(ThemeChoice::from(&theme), OutputMode::Html);
/// renderer.add_template("page.html", "<h1>{{ title }}</h1>").unwrap();
///
/// #[derive(Serialize)]
/// struct Page { title: String }
///
/// let out = renderer.render("page.html", &Page { title: "A & B".into() }).unwrap();
/// assert_eq!(out, "<h1>A &amp; B</h1>");
/// ```
pub struct Renderer {
    env: Environment<'static>,
    mode: OutputMode,
    template_dir: Option<PathBuf>,
}

impl Renderer {
    /// Creates a renderer whose mode comes from terminal detection.
    pub fn new(theme: ThemeChoice<'_>) -> Self {
        Self::with_mode(theme, OutputMode::detect())
    }

    pub fn with_mode(theme: ThemeChoice<'_>, mode: OutputMode) -> Self {
        Self {
            env: build_environment(theme.resolve(), mode),
            mode,
            template_dir: None,
        }
    }

    /// Attaches a directory of templates that take precedence over the ones registered
    /// with [`Renderer::add_template`].
    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.env.set_loader(path_loader(dir.clone()));
        self.template_dir = Some(dir);
        self
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Returns true when the template directory provides a file for `name`.
    pub fn is_overridden(&self, name: &str) -> bool {
        self.template_dir
            .as_deref()
            .map(|dir| template_path(dir, name).is_file())
            .unwrap_or(false)
    }

    /// Registers a named template unless the template directory overrides it.
    ///
    /// The template is compiled immediately; syntax errors are returned.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        if self.is_overridden(name) {
            return Ok(());
        }
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a registered (or directory-provided) template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }
}

fn template_path(dir: &Path, name: &str) -> PathBuf {
    name.split('/').fold(dir.to_path_buf(), |acc, part| acc.join(part))
}

fn build_environment(theme: Theme, mode: OutputMode) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    match mode {
        OutputMode::Html => env.set_auto_escape_callback(|_| AutoEscape::Html),
        OutputMode::Term | OutputMode::Plain => env.set_auto_escape_callback(|_| AutoEscape::None),
    }
    register_style_filter(&mut env, theme, mode);
    env
}

/// Registers the `style` filter on a minijinja environment.
fn register_style_filter(env: &mut Environment<'static>, theme: Theme, mode: OutputMode) {
    let styles = theme.styles;
    env.add_filter("style", move |value: Value, name: String| -> Value {
        let text = value.to_string();
        match mode {
            OutputMode::Term => Value::from(styles.apply(&name, &text)),
            OutputMode::Plain => Value::from(styles.apply_plain(&name, &text)),
            OutputMode::Html => {
                let markup = if value.is_safe() {
                    text
                } else {
                    HtmlEscape(&text).to_string()
                };
                Value::from_safe_string(styles.wrap_html(&name, &markup))
            }
        }
    });
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
