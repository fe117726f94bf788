use super::node::Element;
use crate::profile::{ABOUT_HEADING, ABOUT_TEXT, ACCENT_BORDER, HEADING_COLOR};
use crate::state::Interaction;

/// Backdrop click closes; the panel consumes its own clicks.
pub fn about_overlay() -> Element {
    Element::new("div")
        .class("overlay-backdrop fade-in")
        .on_click(Interaction::Backdrop)
        .child(
            Element::new("div")
                .class("overlay-panel")
                .attr("role", "dialog")
                .attr("aria-modal", "true")
                .style(format!("border-top-color: {ACCENT_BORDER}"))
                .on_click(Interaction::Panel)
                .child(
                    Element::new("h2")
                        .style(format!("color: {HEADING_COLOR}"))
                        .text(ABOUT_HEADING),
                )
                .child(Element::new("p").text(ABOUT_TEXT)),
        )
}
