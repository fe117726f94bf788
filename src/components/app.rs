use crate::catalog::ContentCatalog;
use crate::components::mount_node;
use crate::log;
use crate::state::{Interaction, PageViewState};
use crate::view::render;
use leptos::*;

/// The portfolio page. Owns the overlay flag; every change re-renders the
/// tree from the catalog.
#[component]
pub fn PortfolioPage(catalog: &'static ContentCatalog) -> impl IntoView {
    let (state, set_state) = create_signal(PageViewState::new());

    // Only notify when visibility actually changes, so panel clicks leave the
    // mounted DOM alone
    let dispatch = Callback::new(move |interaction: Interaction| {
        let mut next = state.get_untracked();
        if next.handle(interaction) {
            log::debug(&format!("overlay {:?} after {:?}", next.overlay(), interaction));
            set_state.set(next);
        }
    });

    move || {
        let about_visible = state.with(|s| s.about_visible());
        mount_node(&render(catalog, about_visible), dispatch)
    }
}
