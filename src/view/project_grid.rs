use super::node::Element;
use crate::catalog::{ContentCatalog, PaletteName, ProjectRecord};

pub fn project_grid(catalog: &ContentCatalog) -> Element {
    let pastel = catalog.palette(PaletteName::Pastel);

    Element::new("section")
        .attr("id", "projects")
        .class("projects")
        .child(Element::new("h2").text("Projects"))
        .child(
            Element::new("div").class("project-grid").children(
                catalog
                    .projects()
                    .iter()
                    .enumerate()
                    .map(|(i, project)| project_card(project, pastel.cycle(i))),
            ),
        )
}

fn project_card(project: &ProjectRecord, background: &str) -> Element {
    Element::new("div")
        .class("project-card")
        .style(format!("background-color: {background}"))
        .child(Element::new("h3").text(project.title.as_str()))
        .child(Element::new("p").text(project.description.as_str()))
        .child(
            Element::new("div")
                .class("tag-list")
                .children(project.tags.iter().map(|tag| {
                    Element::new("span").class("tag").text(tag.as_str())
                })),
        )
}
