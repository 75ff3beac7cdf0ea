//! Project data structure.

use serde::{Deserialize, Serialize};

use super::lenient;

/// Label shown (and filtered on) for projects without a category.
pub const DEFAULT_CATEGORY: &str = "General";

/// A portfolio project as listed in the content document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique project name, used as the rendering key
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,

    /// Free-form category label
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub category: Option<String>,

    /// Ranking weight; missing or non-numeric values read as 0
    #[serde(default, deserialize_with = "lenient::number")]
    pub importance: f64,

    /// One-paragraph Markdown summary
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub short_description: Option<String>,

    /// Full Markdown write-up
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub long_description: Option<String>,

    /// Outbound links
    #[serde(default, deserialize_with = "lenient::object")]
    pub links: Option<ProjectLinks>,
}

/// Known link slots of a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectLinks {
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub production: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub github: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub other: Option<String>,
}

/// Kind of project link, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Production,
    Github,
    Other,
}

impl LinkKind {
    pub const ALL: [LinkKind; 3] = [LinkKind::Production, LinkKind::Github, LinkKind::Other];

    /// Key used in the content document.
    pub fn key(self) -> &'static str {
        match self {
            LinkKind::Production => "production",
            LinkKind::Github => "github",
            LinkKind::Other => "other",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Production => "Production",
            LinkKind::Github => "GitHub",
            LinkKind::Other => "Other",
        }
    }
}

/// A resolved, non-empty project link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLink<'a> {
    pub kind: LinkKind,
    pub url: &'a str,
}

impl ProjectLinks {
    fn get(&self, kind: LinkKind) -> Option<&str> {
        match kind {
            LinkKind::Production => self.production.as_deref(),
            LinkKind::Github => self.github.as_deref(),
            LinkKind::Other => self.other.as_deref(),
        }
    }
}

impl Project {
    /// Category with the "General" default applied.
    pub fn category_label(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => DEFAULT_CATEGORY,
        }
    }

    /// Text shown on cards: short description, else long, else nothing.
    pub fn summary(&self) -> &str {
        non_empty(self.short_description.as_deref())
            .or_else(|| non_empty(self.long_description.as_deref()))
            .unwrap_or("")
    }

    /// Long description, if there is one worth expanding.
    pub fn details(&self) -> Option<&str> {
        non_empty(self.long_description.as_deref())
    }

    /// Links present on this project, in display order.
    pub fn links(&self) -> Vec<ProjectLink<'_>> {
        let Some(links) = &self.links else {
            return Vec::new();
        };
        LinkKind::ALL
            .iter()
            .filter_map(|&kind| {
                non_empty(links.get(kind)).map(|url| ProjectLink { kind, url })
            })
            .collect()
    }

    /// Lower-cased text searched by the listing filter.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.name,
            self.short_description.as_deref().unwrap_or(""),
            self.long_description.as_deref().unwrap_or("")
        )
        .to_lowercase()
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full() {
        let project: Project = serde_json::from_value(json!({
            "name": "folio",
            "category": "web",
            "importance": "4",
            "shortDescription": "Short",
            "longDescription": "Long",
            "links": { "github": "https://github.com/x/folio" }
        }))
        .unwrap();

        assert_eq!(project.name, "folio");
        assert_eq!(project.category_label(), "web");
        assert_eq!(project.importance, 4.0);
        assert_eq!(project.summary(), "Short");
        assert_eq!(project.details(), Some("Long"));
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let project: Project = serde_json::from_value(json!({ "name": "bare" })).unwrap();
        assert_eq!(project.category, None);
        assert_eq!(project.category_label(), DEFAULT_CATEGORY);
        assert_eq!(project.importance, 0.0);
        assert_eq!(project.summary(), "");
        assert!(project.details().is_none());
        assert!(project.links().is_empty());
    }

    #[test]
    fn test_summary_falls_back_to_long_description() {
        let project = Project {
            long_description: Some("Only long".into()),
            ..Project::default()
        };
        assert_eq!(project.summary(), "Only long");
    }

    #[test]
    fn test_links_in_display_order() {
        let project = Project {
            links: Some(ProjectLinks {
                production: Some("https://prod".into()),
                github: Some(String::new()),
                other: Some("https://other".into()),
            }),
            ..Project::default()
        };
        let links = project.links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].kind, LinkKind::Production);
        assert_eq!(links[1].kind.label(), "Other");
        assert_eq!(links[1].url, "https://other");
    }

    #[test]
    fn test_search_text() {
        let project = Project {
            name: "Rusty".into(),
            short_description: Some("A CLI".into()),
            ..Project::default()
        };
        assert_eq!(project.search_text(), "rusty a cli ");
    }
}
