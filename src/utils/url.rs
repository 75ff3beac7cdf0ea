// src/utils/url.rs

//! Site-relative paths and icon resolution.

use std::sync::LazyLock;

use regex::Regex;

static NON_SLUG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());
static ABSOLUTE_HTTP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^https?://").unwrap());

/// Path prefix the site is deployed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteBase {
    /// Base path without trailing slashes ("" for the root)
    prefix: String,
}

impl SiteBase {
    pub fn new(base_path: &str) -> Self {
        Self {
            prefix: base_path.trim_end_matches('/').to_string(),
        }
    }

    /// Prefix a site path with the base.
    ///
    /// Fragments (`#...`) are appended directly; any other path is joined
    /// with exactly one slash.
    pub fn with_base(&self, path: &str) -> String {
        if path.starts_with('#') {
            return format!("{}{}", self.prefix, path);
        }
        format!("{}/{}", self.prefix, path.trim_start_matches('/'))
    }

    /// Icon path derived from a free-form label.
    pub fn icon_for_label(&self, label: &str) -> String {
        let slug = slugify(label);
        let slug = if slug.is_empty() { "link" } else { slug.as_str() };
        self.with_base(&format!("/img/{slug}.png"))
    }

    /// Icon path for a skill: its lower-cased name, not slugified.
    pub fn icon_for_skill(&self, name: &str) -> String {
        self.with_base(&format!("/img/{}.png", name.to_lowercase()))
    }

    /// Resolve an explicit icon: absolute URLs are kept, paths get the base.
    pub fn resolve_icon(&self, icon: Option<&str>) -> Option<String> {
        let icon = icon.filter(|s| !s.is_empty())?;
        if ABSOLUTE_HTTP.is_match(icon) {
            Some(icon.to_string())
        } else {
            Some(self.with_base(icon))
        }
    }
}

impl Default for SiteBase {
    fn default() -> Self {
        Self::new("/")
    }
}

/// Lower-case a label and collapse every non-alphanumeric run into `-`.
pub fn slugify(label: &str) -> String {
    let lower = label.to_lowercase();
    NON_SLUG
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}
