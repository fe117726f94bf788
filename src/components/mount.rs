use crate::state::Interaction;
use crate::view::{Element, ViewNode};
use leptos::*;

/// Turn a rendered tree into Leptos views. Elements with an interaction get a
/// click listener that reports it through `dispatch`.
pub fn mount_node(node: &ViewNode, dispatch: Callback<Interaction>) -> View {
    match node {
        ViewNode::Text(text) => text.clone().into_view(),
        ViewNode::Element(element) => mount_element(element, dispatch),
    }
}

fn mount_element(element: &Element, dispatch: Callback<Interaction>) -> View {
    let mut el = html::custom(html::Custom::new(element.tag));

    for (name, value) in &element.attrs {
        el = el.attr(*name, value.clone());
    }

    if let Some(interaction) = element.on_click {
        el = el.on(ev::click, move |event: web_sys::MouseEvent| {
            if interaction.stops_propagation() {
                event.stop_propagation();
            }
            dispatch.call(interaction);
        });
    }

    for child in &element.children {
        el = el.child(mount_node(child, dispatch));
    }

    el.into_view()
}
