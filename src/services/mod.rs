//! Service layer for the portfolio engine.
//!
//! This module contains the business logic for:
//! - Content loading with fallback (`ContentLoader`)
//! - Featured project selection (`pick_featured`)
//! - Listing filters and category options (`filter_projects`)

mod featured;
mod filter;
mod loader;

pub use featured::{FEATURED_COUNT, WEIGHT_JITTER, pick_featured, pick_featured_n};
pub use filter::{
    ALL_CATEGORIES, ProjectFilter, category_options, filter_projects, sort_by_importance,
};
pub use loader::{ContentFetcher, ContentLoader, ContentSource};
