//! Pure page rendering: `(catalog, about_visible)` in, [`ViewNode`] tree out.
//! No signals, no DOM; the mount layer in `components` turns the tree into
//! Leptos views.

mod about_overlay;
mod header;
mod node;
mod profile_card;
mod project_grid;

pub use node::{Element, ViewNode};

use crate::catalog::ContentCatalog;
use about_overlay::about_overlay;
use header::site_header;
use profile_card::profile_card;
use project_grid::project_grid;

/// Build the whole page. The overlay sits between the profile card and the
/// project grid and is only present while `about_visible`.
pub fn render(catalog: &ContentCatalog, about_visible: bool) -> ViewNode {
    let mut page = Element::new("div")
        .class("page")
        .child(site_header(catalog))
        .child(profile_card());

    if about_visible {
        page = page.child(about_overlay());
    }

    page.child(project_grid(catalog)).into()
}
