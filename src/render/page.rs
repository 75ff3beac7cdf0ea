// src/render/page.rs

//! Whole-page rendering.

use std::fmt::Write;

use crate::models::{ContentDocument, Project};
use crate::services::ALL_CATEGORIES;
use crate::state::{ContentState, DocumentRoot, Page, ProjectFilter, Theme};
use crate::utils::SiteBase;

use super::components::{
    Disclosure, badge_pill, connection_chip, project_card, project_preview, skill_chip,
};
use super::markdown::escape_html;

pub const LOADING_MESSAGE: &str = "Loading projects...";
pub const NO_FEATURED_MESSAGE: &str = "Add items to myData.json to surface them here.";
pub const NO_MATCHES_MESSAGE: &str = "No projects match those filters.";
pub const NO_SKILLS_MESSAGE: &str = "Add skills to myData.json to see them here.";

/// Everything needed to render one page.
#[derive(Debug, Clone)]
pub struct PageView {
    pub owner: String,
    pub tagline: String,
    pub base: SiteBase,
    pub page: Page,
    pub theme: Theme,
    pub root: DocumentRoot,
    pub home_path: String,
    pub projects_path: String,
    pub content: ContentState,
    pub featured: Vec<Project>,
    pub listing: Vec<Project>,
    pub categories: Vec<String>,
    pub filter: ProjectFilter,
}

impl PageView {
    fn document(&self) -> &ContentDocument {
        &self.content.document
    }

    /// Status line shared by both project sections, if any.
    fn status_message(&self, empty: bool, empty_message: &'static str) -> Option<(&'static str, String)> {
        if self.content.is_loading() {
            Some(("muted", LOADING_MESSAGE.to_string()))
        } else if let Some(error) = &self.content.error {
            Some(("error", error.clone()))
        } else if empty {
            Some(("muted", empty_message.to_string()))
        } else {
            None
        }
    }
}

/// Render a complete HTML document.
pub fn render_page(view: &PageView) -> String {
    let mut out = String::from("<!doctype html>\n<html lang=\"en\"");
    for (name, value) in view.root.attributes() {
        let _ = write!(out, r#" {}="{}""#, name, escape_html(value));
    }
    out.push_str(">\n<head>\n<meta charset=\"utf-8\" />\n");
    let _ = writeln!(
        out,
        "<title>{} - Personal Site</title>",
        escape_html(&view.owner)
    );
    let _ = writeln!(
        out,
        r#"<link rel="stylesheet" href="{}" />"#,
        escape_html(&view.base.with_base("/app.css"))
    );
    out.push_str("</head>\n<body>\n<div class=\"app-shell\"><div class=\"bg-texture\"></div><div class=\"content\">\n");

    top_bar(&mut out, view);
    hero(&mut out, view);
    match view.page {
        Page::Home => home_sections(&mut out, view),
        Page::Projects => projects_section(&mut out, view),
    }

    out.push_str("</div></div>\n</body>\n</html>\n");
    out
}

fn top_bar(out: &mut String, view: &PageView) {
    let _ = writeln!(
        out,
        r#"<div class="top-bar"><a class="brand" href="{}">{} - Personal Site</a><button class="theme-toggle" type="button" data-theme-next="{}">{}</button></div>"#,
        escape_html(&view.home_path),
        escape_html(&view.owner),
        view.theme.toggled(),
        view.theme.toggle_label()
    );
}

fn hero(out: &mut String, view: &PageView) {
    let owner = escape_html(&view.owner);
    let _ = write!(
        out,
        r#"<section class="hero-card card"><div class="identity"><div class="avatar-wrap"><img src="{}" alt="{owner} profile" class="profile-photo" /><div class="glow"></div></div><div><p class="eyebrow">Hello, it is I</p><h1>{owner}</h1><p class="lede">{}</p><div class="connections">"#,
        escape_html(&view.base.with_base("/profile.png")),
        escape_html(&view.tagline)
    );
    for connection in &view.document().connections {
        out.push_str(&connection_chip(connection, &view.base));
    }
    out.push_str(r#"</div></div></div><div class="badges">"#);
    for badge in &view.document().badges {
        out.push_str(&badge_pill(badge));
    }
    out.push_str("</div></section>\n");
}

fn home_sections(out: &mut String, view: &PageView) {
    out.push_str(r#"<section class="grid"><div class="card skills-card"><div class="section-header"><div><p class="eyebrow">Capabilities</p><h2>Tools I use</h2></div></div>"#);
    let skills = &view.document().skills;
    if skills.is_empty() {
        let _ = write!(out, r#"<p class="muted">{NO_SKILLS_MESSAGE}</p>"#);
    } else {
        out.push_str(r#"<div class="skill-grid">"#);
        for skill in skills {
            out.push_str(&skill_chip(skill, &view.base));
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");

    let _ = write!(
        out,
        r#"<div class="card projects-card"><div class="section-header"><div><p class="eyebrow">Showcase</p><h2>Featured Projects</h2></div><div class="actions"><a class="pill-button" href="{}">All projects</a></div></div>"#,
        escape_html(&view.projects_path)
    );
    status(out, view.status_message(view.featured.is_empty(), NO_FEATURED_MESSAGE));
    out.push_str(r#"<div class="project-grid">"#);
    for project in &view.featured {
        out.push_str(&project_preview(project));
    }
    out.push_str("</div></div></section>\n");
}

fn projects_section(out: &mut String, view: &PageView) {
    let _ = write!(
        out,
        r#"<section class="card projects-card"><div class="section-header"><div><p class="eyebrow">All work</p><h2>Projects ({})</h2></div><div class="actions"><a class="pill-button" href="{}">Back home</a></div></div>"#,
        view.listing.len(),
        escape_html(&view.home_path)
    );

    out.push_str(r#"<div class="filters"><label class="filter-control"><span>Category</span><select name="category">"#);
    for category in &view.categories {
        let label = if category == ALL_CATEGORIES { "All" } else { category.as_str() };
        let selected = if *category == view.filter.category { " selected" } else { "" };
        let _ = write!(
            out,
            r#"<option value="{}"{selected}>{}</option>"#,
            escape_html(category),
            escape_html(label)
        );
    }
    let _ = write!(
        out,
        r#"</select></label><label class="filter-control grow"><span>Search</span><input type="text" name="search" placeholder="Name or description" value="{}" /></label></div>"#,
        escape_html(&view.filter.search)
    );

    status(out, view.status_message(view.listing.is_empty(), NO_MATCHES_MESSAGE));
    out.push_str(r#"<div class="project-grid">"#);
    for project in &view.listing {
        out.push_str(&project_card(project, &Disclosure::default()));
    }
    out.push_str("</div></section>\n");
}

fn status(out: &mut String, message: Option<(&'static str, String)>) {
    if let Some((class, text)) = message {
        let _ = write!(out, r#"<p class="{class}">{}</p>"#, escape_html(&text));
    }
}
