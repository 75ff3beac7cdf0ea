// src/services/featured.rs

//! Featured project selection.
//!
//! Every project gets a weight of `importance + U[0, 5)`; the heaviest
//! projects win, preferring one project per category. The jitter makes the
//! homepage change between loads, so the exact pick is not stable. Callers
//! supply the random source, which lets tests pin it down.

use std::collections::HashSet;

use rand::Rng;

use crate::models::Project;

/// How many projects the homepage features.
pub const FEATURED_COUNT: usize = 3;

/// Upper bound (exclusive) of the random bonus added to each weight.
pub const WEIGHT_JITTER: f64 = 5.0;

/// Pick [`FEATURED_COUNT`] projects for the homepage.
pub fn pick_featured<'a, R>(projects: &'a [Project], rng: &mut R) -> Vec<&'a Project>
where
    R: Rng + ?Sized,
{
    pick_featured_n(projects, FEATURED_COUNT, rng)
}

/// Pick up to `count` projects, preferring distinct categories.
///
/// Pass one walks the weighted order and takes projects whose raw category
/// has not been taken yet; uncategorized projects all share a single slot.
/// Pass two tops up from the same order, skipping names already chosen.
pub fn pick_featured_n<'a, R>(projects: &'a [Project], count: usize, rng: &mut R) -> Vec<&'a Project>
where
    R: Rng + ?Sized,
{
    if projects.is_empty() || count == 0 {
        return Vec::new();
    }

    let mut weighted: Vec<(f64, &Project)> = projects
        .iter()
        .map(|project| (project.importance + rng.gen_range(0.0..WEIGHT_JITTER), project))
        .collect();
    weighted.sort_by(|a, b| b.0.total_cmp(&a.0));

    let mut chosen: Vec<&Project> = Vec::with_capacity(count);
    let mut used_categories: HashSet<Option<&str>> = HashSet::new();

    for &(_, project) in &weighted {
        if chosen.len() == count {
            break;
        }
        if used_categories.insert(project.category.as_deref()) {
            chosen.push(project);
        }
    }

    if chosen.len() < count {
        for &(_, project) in &weighted {
            if chosen.len() == count {
                break;
            }
            if !chosen.iter().any(|p| p.name == project.name) {
                chosen.push(project);
            }
        }
    }

    chosen.truncate(count);
    chosen
}
