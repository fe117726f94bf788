use super::node::Element;
use crate::profile::{
    SocialLink, ACCENT_BORDER, BIO, HEADING_COLOR, NAME, PORTRAIT_PATH, SOCIAL_LINKS, TAGLINE,
};

pub fn profile_card() -> Element {
    Element::new("main")
        .class("profile-card")
        .child(
            Element::new("div").class("profile-portrait").child(
                Element::new("img")
                    .attr("src", PORTRAIT_PATH)
                    .attr("alt", NAME)
                    .style(format!("border-color: {ACCENT_BORDER}")),
            ),
        )
        .child(
            Element::new("div")
                .class("profile-body")
                .child(
                    Element::new("h2")
                        .class("profile-name")
                        .style(format!("color: {HEADING_COLOR}"))
                        .text(NAME),
                )
                .child(Element::new("p").class("profile-tagline").text(TAGLINE))
                .child(Element::new("p").class("profile-bio").text(BIO))
                .child(
                    Element::new("div")
                        .class("social-links")
                        .children(SOCIAL_LINKS.iter().map(social_link)),
                ),
        )
}

fn social_link(link: &SocialLink) -> Element {
    let mut a = Element::new("a").attr("href", link.href);
    if link.external {
        a = a.attr("target", "_blank").attr("rel", "noopener noreferrer");
    }
    // Glyphs come from style.css, keyed by icon name
    a.class("social-link")
        .attr("aria-label", link.label)
        .style(format!(
            "--link-color: {}; --link-hover: {}",
            link.color, link.hover_color
        ))
        .child(
            Element::new("span")
                .class(format!("icon icon-{}", link.icon))
                .attr("aria-hidden", "true"),
        )
        .child(Element::new("span").class("social-label").text(link.label))
}
