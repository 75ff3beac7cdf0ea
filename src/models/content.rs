//! The content document (`myData.json`) and its smaller entities.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Project;
use super::lenient;

/// A skill chip.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Skill {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
}

/// A social or contact link shown as an icon.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Connection {
    #[serde(default, deserialize_with = "lenient::string")]
    pub label: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub url: String,

    /// Absolute URL or site-relative path of the icon
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub icon: Option<String>,
}

/// A short highlighted fact.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: String,

    /// Emphasized badges render with the accent style
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub stand_out: bool,
}

/// Everything the site shows, loaded wholesale once per load.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContentDocument {
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub connections: Vec<Connection>,
    pub badges: Vec<Badge>,
}

impl ContentDocument {
    /// Normalize a parsed document.
    ///
    /// Each collection falls back to empty when missing or not an array.
    /// Entries are not validated: mistyped fields are coerced or defaulted,
    /// and only elements that are not objects are skipped.
    pub fn from_value(root: &Value) -> Self {
        Self {
            projects: collect(root, "projects"),
            skills: collect(root, "skills"),
            connections: collect(root, "connections"),
            badges: collect(root, "badges"),
        }
    }

    /// Parse and normalize a JSON body.
    pub fn from_json(body: &str) -> crate::error::Result<Self> {
        let root: Value = serde_json::from_str(body)?;
        Ok(Self::from_value(&root))
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
            && self.skills.is_empty()
            && self.connections.is_empty()
            && self.badges.is_empty()
    }
}

fn collect<T: DeserializeOwned>(root: &Value, field: &str) -> Vec<T> {
    let Some(Value::Array(items)) = root.get(field) else {
        return Vec::new();
    };
    items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| {
            if !item.is_object() {
                log::debug!("Skipping {field}[{i}]: not an object");
                return None;
            }
            match T::deserialize(item) {
                Ok(entity) => Some(entity),
                Err(e) => {
                    log::debug!("Skipping {field}[{i}]: {e}");
                    None
                }
            }
        })
        .collect()
}
