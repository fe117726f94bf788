pub mod catalog;
pub mod components;
mod log;
pub mod profile;
pub mod state;
pub mod view;

use catalog::ContentCatalog;
use components::PortfolioPage;
use leptos::*;
use wasm_bindgen::prelude::*;

/// Root component
#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="error-container">
                <h2>"Something went wrong"</h2>
                <p>"The page content could not be loaded."</p>
                <ul>
                    {move || errors.get()
                        .into_iter()
                        .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                        .collect_view()
                    }
                </ul>
                <button on:click=move |_| {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().reload();
                    }
                }>"Reload"</button>
            </main>
        }>
            <RootInner/>
        </ErrorBoundary>
    }
}

/// Loads the catalog. Wrapped by ErrorBoundary so a bad content document is
/// reported instead of leaving a blank page.
#[component]
fn RootInner() -> impl IntoView {
    ContentCatalog::global()
        .map(|catalog| view! { <PortfolioPage catalog=catalog/> })
        .map_err(|e| {
            log::warn(&format!("could not load page content: {e}"));
            e
        })
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(Root);
}
