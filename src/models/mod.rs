// src/models/mod.rs

//! Domain models for the portfolio engine.
//!
//! Content entities mirror `myData.json`; configuration mirrors
//! `config.toml`.

mod config;
mod content;
pub mod lenient;
mod project;

// Re-export all public types
pub use config::{Config, HttpConfig, LoggingConfig, SiteConfig, StorageConfig};
pub use content::{Badge, Connection, ContentDocument, Skill};
pub use project::{DEFAULT_CATEGORY, LinkKind, Project, ProjectLink, ProjectLinks};
