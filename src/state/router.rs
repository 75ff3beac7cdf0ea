// src/state/router.rs

//! Fragment-based page routing.
//!
//! The site has two pages. `#projects` shows the full listing; every other
//! location, with or without a fragment, is home. Navigation keeps a history
//! stack so back/forward behave like the browser's.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;
use crate::utils::SiteBase;

/// Fragment that selects the projects page.
pub const PROJECTS_FRAGMENT: &str = "projects";

/// One of the two pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Projects,
}

impl Page {
    /// Page for a location such as `/me/#projects`.
    pub fn from_location(location: &str) -> Self {
        match location.split_once('#') {
            Some((_, fragment)) if fragment == PROJECTS_FRAGMENT => Page::Projects,
            _ => Page::Home,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Projects => "projects",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Page::Home),
            "projects" => Ok(Page::Projects),
            other => Err(AppError::validation(format!("Unknown page: {other}"))),
        }
    }
}

/// In-app navigation with a browser-like history.
#[derive(Debug, Clone)]
pub struct Router {
    base: SiteBase,
    entries: Vec<String>,
    cursor: usize,
    page: Page,
}

impl Router {
    /// Start at `location`.
    pub fn new(base: SiteBase, location: impl Into<String>) -> Self {
        let location = location.into();
        let page = Page::from_location(&location);
        Self {
            base,
            entries: vec![location],
            cursor: 0,
            page,
        }
    }

    /// Start at the home path.
    pub fn at_home(base: SiteBase) -> Self {
        let home = base.with_base("/");
        Self::new(base, home)
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn location(&self) -> &str {
        &self.entries[self.cursor]
    }

    pub fn home_path(&self) -> String {
        self.base.with_base("/")
    }

    pub fn projects_path(&self) -> String {
        self.base.with_base(&format!("#{PROJECTS_FRAGMENT}"))
    }

    /// Path of a page.
    pub fn path_for(&self, page: Page) -> String {
        match page {
            Page::Home => self.home_path(),
            Page::Projects => self.projects_path(),
        }
    }

    /// Push a new location, dropping any forward history.
    pub fn navigate(&mut self, path: impl Into<String>) -> Page {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.into());
        self.cursor += 1;
        self.sync()
    }

    /// Navigate to a page by name.
    pub fn go_to(&mut self, page: Page) -> Page {
        let path = self.path_for(page);
        self.navigate(path)
    }

    /// Step back in history; `None` at the oldest entry.
    pub fn back(&mut self) -> Option<Page> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.sync())
    }

    /// Step forward in history; `None` at the newest entry.
    pub fn forward(&mut self) -> Option<Page> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.sync())
    }

    /// Replace the fragment of the current location, as a direct edit of
    /// the address bar would. An empty fragment removes it.
    pub fn set_fragment(&mut self, fragment: &str) -> Page {
        let path = match self.location().split_once('#') {
            Some((path, _)) => path,
            None => self.location(),
        };
        let next = if fragment.is_empty() {
            path.to_string()
        } else {
            format!("{path}#{}", fragment.trim_start_matches('#'))
        };
        self.navigate(next)
    }

    fn sync(&mut self) -> Page {
        self.page = Page::from_location(self.location());
        self.page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_location() {
        assert_eq!(Page::from_location("/"), Page::Home);
        assert_eq!(Page::from_location("/#projects"), Page::Projects);
        assert_eq!(Page::from_location("/me#projects"), Page::Projects);
        assert_eq!(Page::from_location("/#Projects"), Page::Home);
        assert_eq!(Page::from_location("/#projects/x"), Page::Home);
        assert_eq!(Page::from_location("/#"), Page::Home);
        assert_eq!(Page::from_location("/#about"), Page::Home);
    }

    #[test]
    fn test_page_from_str() {
        assert_eq!("projects".parse::<Page>().unwrap(), Page::Projects);
        assert!("about".parse::<Page>().is_err());
    }

    #[test]
    fn test_paths_with_base() {
        let router = Router::at_home(SiteBase::new("/me/"));
        assert_eq!(router.home_path(), "/me/");
        assert_eq!(router.projects_path(), "/me#projects");
        assert_eq!(router.location(), "/me/");
        assert_eq!(router.page(), Page::Home);
    }

    #[test]
    fn test_navigate_and_history() {
        let mut router = Router::at_home(SiteBase::default());
        assert_eq!(router.go_to(Page::Projects), Page::Projects);
        assert_eq!(router.location(), "#projects");

        assert_eq!(router.back(), Some(Page::Home));
        assert_eq!(router.back(), None);
        assert_eq!(router.forward(), Some(Page::Projects));
        assert_eq!(router.forward(), None);
    }

    #[test]
    fn test_navigate_drops_forward_entries() {
        let mut router = Router::at_home(SiteBase::default());
        router.go_to(Page::Projects);
        router.back();
        router.navigate("/about");
        assert_eq!(router.page(), Page::Home);
        assert_eq!(router.forward(), None);
    }

    #[test]
    fn test_set_fragment() {
        let mut router = Router::new(SiteBase::new("/me"), "/me/#about");
        assert_eq!(router.page(), Page::Home);

        assert_eq!(router.set_fragment("projects"), Page::Projects);
        assert_eq!(router.location(), "/me/#projects");

        assert_eq!(router.set_fragment(""), Page::Home);
        assert_eq!(router.location(), "/me/");

        assert_eq!(router.back(), Some(Page::Projects));
    }
}
