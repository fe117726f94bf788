//! Browser tests for the mounted page: real DOM clicks against the overlay.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use leptos::*;
use portfolio_page::catalog::ContentCatalog;
use portfolio_page::components::PortfolioPage;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount_page() -> HtmlElement {
    let container: HtmlElement = document().create_element("div").unwrap().unchecked_into();
    document().body().unwrap().append_child(&container).unwrap();

    let catalog = ContentCatalog::global().unwrap();
    mount_to(container.clone(), move || view! { <PortfolioPage catalog=catalog/> });
    container
}

fn query(root: &HtmlElement, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .unwrap()
        .map(|el| el.unchecked_into())
}

#[wasm_bindgen_test]
fn test_overlay_opens_and_survives_panel_clicks() {
    let root = mount_page();
    assert!(query(&root, ".overlay-backdrop").is_none());

    query(&root, ".nav-link").unwrap().click();
    assert!(query(&root, ".overlay-backdrop").is_some());

    // Bubbles from the heading to the panel, which must stop it there
    query(&root, ".overlay-panel h2").unwrap().click();
    query(&root, ".overlay-panel").unwrap().click();
    assert!(query(&root, ".overlay-backdrop").is_some());

    root.remove();
}

#[wasm_bindgen_test]
fn test_backdrop_click_closes_overlay() {
    let root = mount_page();
    query(&root, ".nav-link").unwrap().click();

    query(&root, ".overlay-backdrop").unwrap().click();
    assert!(query(&root, ".overlay-backdrop").is_none());

    root.remove();
}
