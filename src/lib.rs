// src/lib.rs

//! folio: portfolio content engine
//!
//! Loads the site's content document with fallback, selects featured
//! projects, filters the project listing and renders the site.

pub mod error;
pub mod extract;
pub mod models;
pub mod render;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;
