use super::node::Element;
use crate::catalog::{ContentCatalog, NavAction, NavItem, PaletteName};
use crate::profile::SITE_TITLE;
use crate::state::Interaction;

pub fn site_header(catalog: &ContentCatalog) -> Element {
    let bold = catalog.palette(PaletteName::Bold);

    Element::new("header")
        .class("site-header")
        .child(Element::new("h1").class("site-title").text(SITE_TITLE))
        .child(
            Element::new("nav").class("site-nav").children(
                catalog
                    .nav_items()
                    .iter()
                    .enumerate()
                    .map(|(i, item)| nav_link(item, bold.cycle(i))),
            ),
        )
}

fn nav_link(item: &NavItem, color: &str) -> Element {
    let link = Element::new("a")
        .attr("href", item.target.href())
        .class("nav-link")
        .style(format!("color: {color}; font-weight: 700"));

    let link = match item.action {
        NavAction::OpenOverlay => link.on_click(Interaction::AboutLink),
        NavAction::Navigate => link,
    };
    link.text(item.label)
}
