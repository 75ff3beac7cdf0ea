//! Application state.
//!
//! [`AppState`] is owned by the top-level view and holds everything that
//! changes while the site is open: loaded content, the current page, the
//! theme and the listing filter. Derived lists are recomputed from it and
//! never written back.

mod router;
mod store;
mod theme;

use std::sync::Arc;

use rand::Rng;

use crate::models::{Config, Project};
use crate::render::PageView;
use crate::services::{ContentLoader, ContentSource, category_options, pick_featured};
use crate::storage::PreferenceStore;
use crate::utils::SiteBase;

pub use crate::services::ProjectFilter;
pub use router::{PROJECTS_FRAGMENT, Page, Router};
pub use store::{
    ContentState, ContentStore, LoadHandle, LoadStatus, LoadTicket, UNAVAILABLE_MESSAGE,
    spawn_load,
};
pub use theme::{DocumentRoot, THEME_ATTRIBUTE, THEME_KEY, Theme, ThemeController};

/// Top-level state of the site.
pub struct AppState<P: PreferenceStore> {
    owner: String,
    tagline: String,
    base: SiteBase,
    content: Arc<ContentStore>,
    router: Router,
    theme: ThemeController<P>,
    filter: ProjectFilter,
    /// Featured pick and the content revision it was drawn from
    featured: Option<(u64, Vec<Project>)>,
}

impl<P: PreferenceStore> AppState<P> {
    /// Fresh state at the home page, theme read from `preferences`.
    pub fn new(config: &Config, preferences: P) -> Self {
        let base = config.site_base();
        Self {
            owner: config.site.owner.clone(),
            tagline: config.site.tagline.clone(),
            router: Router::at_home(base.clone()),
            base,
            content: Arc::new(ContentStore::new()),
            theme: ThemeController::new(preferences),
            filter: ProjectFilter::default(),
            featured: None,
        }
    }

    pub fn content(&self) -> &Arc<ContentStore> {
        &self.content
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut Router {
        &mut self.router
    }

    pub fn theme(&self) -> &ThemeController<P> {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ThemeController<P> {
        &mut self.theme
    }

    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.filter.category = category.into();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    /// Load content into the store.
    pub async fn load<S: ContentSource>(&self, loader: &ContentLoader<S>) -> bool {
        self.content.load(loader).await
    }

    /// Featured projects for the current content.
    ///
    /// The pick is drawn once per loaded document, so repeated renders of
    /// the same content show the same projects.
    pub fn featured<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Project> {
        let content = self.content.snapshot();
        if let Some((revision, picked)) = &self.featured {
            if *revision == content.revision {
                return picked.clone();
            }
        }

        let picked: Vec<Project> = pick_featured(&content.document.projects, rng)
            .into_iter()
            .cloned()
            .collect();
        self.featured = Some((content.revision, picked.clone()));
        picked
    }

    /// Projects matching the current filter, most important first.
    pub fn listing(&self) -> Vec<Project> {
        let content = self.content.snapshot();
        self.filter
            .apply(&content.document.projects)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn categories(&self) -> Vec<String> {
        category_options(&self.content.snapshot().document.projects)
    }

    /// Snapshot everything the renderer needs.
    pub fn view<R: Rng + ?Sized>(&mut self, rng: &mut R) -> PageView {
        let featured = self.featured(rng);
        PageView {
            owner: self.owner.clone(),
            tagline: self.tagline.clone(),
            base: self.base.clone(),
            page: self.router.page(),
            theme: self.theme.theme(),
            root: self.theme.root().clone(),
            home_path: self.router.home_path(),
            projects_path: self.router.projects_path(),
            content: self.content.snapshot(),
            featured,
            listing: self.listing(),
            categories: self.categories(),
            filter: self.filter.clone(),
        }
    }
}
