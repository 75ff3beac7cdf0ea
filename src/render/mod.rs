//! Static HTML rendering of the portfolio.
//!
//! Rendering is stateless: a [`PageView`] goes in, a complete document comes
//! out.

mod components;
mod markdown;
mod page;

pub use components::{
    Disclosure, badge_pill, connection_chip, project_card, project_preview, skill_chip,
};
pub use markdown::{escape_html, markdown_to_html};
pub use page::{
    LOADING_MESSAGE, NO_FEATURED_MESSAGE, NO_MATCHES_MESSAGE, NO_SKILLS_MESSAGE, PageView,
    render_page,
};
