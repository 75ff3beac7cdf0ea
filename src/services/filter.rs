// src/services/filter.rs

//! Project listing: category filter, text search and importance sort.

use std::collections::HashSet;

use crate::models::Project;

/// Category selection that keeps every project.
pub const ALL_CATEGORIES: &str = "all";

/// Listing filter as chosen in the projects page controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Selected category, or [`ALL_CATEGORIES`]
    pub category: String,
    /// Free-text query
    pub search: String,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search: String::new(),
        }
    }
}

impl ProjectFilter {
    pub fn new(category: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            search: search.into(),
        }
    }

    /// Filter and sort a project list.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        filter_projects(projects, &self.category, &self.search)
    }
}

/// Projects matching `category` and `query`, most important first.
///
/// A category other than [`ALL_CATEGORIES`] must equal the project's
/// category exactly, with missing categories read as "General". The query is
/// trimmed and matched case-insensitively against name and descriptions.
pub fn filter_projects<'a>(projects: &'a [Project], category: &str, query: &str) -> Vec<&'a Project> {
    let query = query.trim().to_lowercase();

    let mut list: Vec<&Project> = projects
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category_label() == category)
        .filter(|p| query.is_empty() || p.search_text().contains(&query))
        .collect();

    sort_by_importance(&mut list);
    list
}

/// Sort descending by importance.
pub fn sort_by_importance(list: &mut [&Project]) {
    list.sort_by(|a, b| b.importance.total_cmp(&a.importance));
}

/// Options for the category selector: the sentinel, then every distinct
/// category in first-seen order.
pub fn category_options(projects: &[Project]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut options = vec![ALL_CATEGORIES.to_string()];
    for category in projects.iter().filter_map(|p| p.category.as_deref()) {
        if !category.is_empty() && seen.insert(category) {
            options.push(category.to_string());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str, category: Option<&str>, importance: f64) -> Project {
        Project {
            name: name.to_string(),
            category: category.map(str::to_string),
            importance,
            ..Project::default()
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project("A", Some("web"), 10.0),
            project("B", Some("web"), 1.0),
            project("C", Some("cli"), 5.0),
        ]
    }

    fn names(list: &[&Project]) -> Vec<String> {
        list.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_all_returns_every_project_sorted() {
        let projects = sample();
        let list = filter_projects(&projects, ALL_CATEGORIES, "");
        assert_eq!(names(&list), ["A", "C", "B"]);
    }

    #[test]
    fn test_category_filter() {
        let projects = sample();
        let list = filter_projects(&projects, "web", "");
        assert_eq!(names(&list), ["A", "B"]);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let projects = sample();
        assert!(filter_projects(&projects, "Web", "").is_empty());
        assert!(filter_projects(&projects, "we", "").is_empty());
    }

    #[test]
    fn test_missing_category_matches_general() {
        let projects = vec![
            project("none", None, 0.0),
            project("empty", Some(""), 0.0),
            project("literal", Some("General"), 0.0),
            project("other", Some("web"), 0.0),
        ];
        let list = filter_projects(&projects, "General", "");
        let mut got = names(&list);
        got.sort();
        assert_eq!(got, ["empty", "literal", "none"]);
    }

    #[test]
    fn test_search_matches_name() {
        let projects = sample();
        let list = filter_projects(&projects, ALL_CATEGORIES, "c");
        assert_eq!(names(&list), ["C"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_trimmed() {
        let mut projects = sample();
        projects[1].long_description = Some("A small Command Line tool".into());
        projects[2].short_description = Some("Terminal app".into());

        let list = filter_projects(&projects, ALL_CATEGORIES, "  command LINE ");
        assert_eq!(names(&list), ["B"]);

        let list = filter_projects(&projects, ALL_CATEGORIES, "TERMINAL");
        assert_eq!(names(&list), ["C"]);
    }

    #[test]
    fn test_search_cli_example() {
        let projects = vec![
            project("A", Some("web"), 10.0),
            project("B", Some("web"), 1.0),
            project("cli-tool", Some("cli"), 5.0),
        ];
        let list = filter_projects(&projects, ALL_CATEGORIES, "cli");
        assert_eq!(names(&list), ["cli-tool"]);
    }

    #[test]
    fn test_blank_query_keeps_everything() {
        let projects = sample();
        assert_eq!(filter_projects(&projects, ALL_CATEGORIES, "   ").len(), 3);
    }

    #[test]
    fn test_missing_importance_sorts_as_zero() {
        let projects = vec![
            project("zero", Some("x"), 0.0),
            project("two", Some("x"), 2.0),
            project("five", Some("x"), 5.0),
            project("negative", Some("x"), -1.0),
        ];
        let list = filter_projects(&projects, ALL_CATEGORIES, "");
        assert_eq!(names(&list), ["five", "two", "zero", "negative"]);
    }

    #[test]
    fn test_filter_struct_defaults_to_all() {
        let projects = sample();
        let filter = ProjectFilter::default();
        assert_eq!(filter.apply(&projects).len(), 3);
        assert_eq!(names(&ProjectFilter::new("cli", "").apply(&projects)), ["C"]);
    }

    #[test]
    fn test_category_options_first_seen_order() {
        let projects = vec![
            project("a", Some("web"), 0.0),
            project("b", None, 0.0),
            project("c", Some("cli"), 0.0),
            project("d", Some("web"), 0.0),
            project("e", Some(""), 0.0),
            project("f", Some("game"), 0.0),
        ];
        assert_eq!(category_options(&projects), ["all", "web", "cli", "game"]);
    }

    #[test]
    fn test_category_options_empty() {
        assert_eq!(category_options(&[]), ["all"]);
    }
}
