// src/render/components.rs

//! HTML fragments for individual content entities.

use std::fmt::Write;

use crate::models::{Badge, Connection, Project, Skill};
use crate::utils::SiteBase;

use super::markdown::{escape_html, markdown_to_html};

/// Collapsible "Read more" section of a project card.
///
/// The section animates between zero height and the measured height of its
/// content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Disclosure {
    pub open: bool,
    /// Measured height of the expanded content, in pixels
    pub content_height: u32,
}

impl Disclosure {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Update the measured height (on content change or resize).
    pub fn measure(&mut self, content_height: u32) {
        self.content_height = content_height;
    }

    pub fn button_label(&self) -> &'static str {
        if self.open { "Hide details" } else { "Read more" }
    }

    /// Inline style of the collapsible container.
    pub fn style(&self) -> String {
        if self.open {
            format!(
                "max-height: {}px; opacity: 1; margin-top: 8px",
                self.content_height
            )
        } else {
            "max-height: 0px; opacity: 0; margin-top: 0px".to_string()
        }
    }
}

fn link_row(project: &Project) -> String {
    let links = project.links();
    if links.is_empty() {
        return String::new();
    }
    let mut out = String::from(r#"<div class="link-row subtle">"#);
    for link in links {
        let _ = write!(
            out,
            r#"<a class="project-chip" data-link="{}" href="{}" target="_blank" rel="noreferrer">{}</a>"#,
            link.kind.key(),
            escape_html(link.url),
            link.kind.label()
        );
    }
    out.push_str("</div>");
    out
}

/// Full card used on the projects page.
pub fn project_card(project: &Project, disclosure: &Disclosure) -> String {
    let mut out = String::from(r#"<article class="project-card">"#);
    let _ = write!(
        out,
        r#"<div class="project-header"><h3>{}</h3><div class="meta-tags"><span class="pill outline">{}</span></div></div>"#,
        escape_html(&project.name),
        escape_html(project.category_label())
    );
    let _ = write!(
        out,
        r#"<div class="project-copy">{}</div>"#,
        markdown_to_html(project.summary())
    );

    out.push_str(r#"<div class="project-options">"#);
    if project.details().is_some() {
        let _ = write!(
            out,
            r#"<button type="button" class="project-chip" aria-expanded="{}">{}</button>"#,
            disclosure.open,
            disclosure.button_label()
        );
    }
    out.push_str(&link_row(project));
    out.push_str("</div>");

    if let Some(details) = project.details() {
        let _ = write!(
            out,
            r#"<div class="details-outer" style="{}"><div class="project-copy">{}</div></div>"#,
            disclosure.style(),
            markdown_to_html(details)
        );
    }
    out.push_str("</article>");
    out
}

/// Compact card used for featured projects on the home page.
pub fn project_preview(project: &Project) -> String {
    format!(
        r#"<article class="project-preview"><h3>{}</h3><div class="project-copy">{}</div>{}</article>"#,
        escape_html(&project.name),
        markdown_to_html(project.summary()),
        link_row(project)
    )
}

pub fn skill_chip(skill: &Skill, base: &SiteBase) -> String {
    let name = escape_html(&skill.name);
    format!(
        r#"<div class="skill-chip"><img src="{}" alt="{name}" /><span>{name}</span></div>"#,
        escape_html(&base.icon_for_skill(&skill.name))
    )
}

pub fn connection_chip(connection: &Connection, base: &SiteBase) -> String {
    let icon = base
        .resolve_icon(connection.icon.as_deref())
        .unwrap_or_else(|| base.icon_for_label(&connection.label));
    let label = escape_html(&connection.label);
    format!(
        r#"<a class="chip" href="{}" target="_blank" rel="noreferrer" aria-label="{label}"><img src="{}" alt="{label}" class="connection-icon" /></a>"#,
        escape_html(&connection.url),
        escape_html(&icon)
    )
}

pub fn badge_pill(badge: &Badge) -> String {
    let style = if badge.stand_out { "accent" } else { "outline" };
    format!(
        r#"<span class="pill {style}">{}</span>"#,
        escape_html(&badge.text)
    )
}
