//! Embedded stylesheet loading and caching.

use std::{collections::HashMap, sync::OnceLock};

static CSS_CACHE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

pub struct ResourceLoader;

impl ResourceLoader {
    fn get_all_styles() -> HashMap<&'static str, &'static str> {
        let mut m = HashMap::new();
        macro_rules! style {
            ($n:expr, $p:expr) => {
                m.insert($n, include_str!(concat!(env!("CARGO_MANIFEST_DIR"), $p)));
            };
        }
        style!("base", "/assets/styles/base.css");
        style!("shell", "/assets/styles/shell.css");
        style!("pages", "/assets/styles/pages.css");
        style!("auth", "/assets/styles/auth.css");
        m
    }

    pub fn get_css(name: &str) -> &'static str {
        CSS_CACHE
            .get_or_init(Self::get_all_styles)
            .get(name)
            .copied()
            .unwrap_or("")
    }

    pub fn combine_css(styles: &[&str]) -> String {
        styles
            .iter()
            .map(|&n| Self::get_css(n))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Reset, fonts and window chrome. Injected once at the app root.
    pub fn base_css() -> &'static str {
        Self::get_css("base")
    }

    pub fn shell_css() -> String {
        Self::combine_css(&["shell", "pages"])
    }

    pub fn auth_css() -> String {
        Self::combine_css(&["auth"])
    }
}
