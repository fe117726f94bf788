//! Overlay visibility: the only mutable state on the page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Hidden,
    Visible,
}

/// A click the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// The "About" header link
    AboutLink,
    /// The dimmed area around the overlay panel
    Backdrop,
    /// Anywhere inside the overlay panel
    Panel,
}

impl Interaction {
    /// Consumed clicks must not bubble to enclosing handlers. A panel click
    /// reaching the backdrop would close the overlay.
    pub fn stops_propagation(self) -> bool {
        matches!(self, Interaction::Panel)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageViewState {
    about_visible: bool,
}

impl PageViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn about_visible(&self) -> bool {
        self.about_visible
    }

    pub fn overlay(&self) -> OverlayState {
        if self.about_visible {
            OverlayState::Visible
        } else {
            OverlayState::Hidden
        }
    }

    pub fn open_about(&mut self) {
        self.about_visible = true;
    }

    pub fn close_about(&mut self) {
        self.about_visible = false;
    }

    /// Apply one click. Returns `true` when visibility changed.
    pub fn handle(&mut self, interaction: Interaction) -> bool {
        let before = self.about_visible;
        match interaction {
            Interaction::AboutLink => self.open_about(),
            Interaction::Backdrop => self.close_about(),
            Interaction::Panel => {}
        }
        before != self.about_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(clicks: &[Interaction]) -> PageViewState {
        let mut state = PageViewState::new();
        for &click in clicks {
            state.handle(click);
        }
        state
    }

    #[test]
    fn test_starts_hidden() {
        let state = PageViewState::new();
        assert!(!state.about_visible());
        assert_eq!(state.overlay(), OverlayState::Hidden);
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut state = PageViewState::new();
        state.open_about();
        state.open_about();
        assert_eq!(state.overlay(), OverlayState::Visible);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut state = PageViewState::new();
        state.close_about();
        assert_eq!(state.overlay(), OverlayState::Hidden);
        state.open_about();
        state.close_about();
        state.close_about();
        assert_eq!(state.overlay(), OverlayState::Hidden);
    }

    #[test]
    fn test_panel_click_keeps_overlay_open() {
        let state = replay(&[Interaction::AboutLink, Interaction::Panel]);
        assert_eq!(state.overlay(), OverlayState::Visible);
    }

    #[test]
    fn test_backdrop_click_closes_overlay() {
        let state = replay(&[Interaction::AboutLink, Interaction::Backdrop]);
        assert_eq!(state.overlay(), OverlayState::Hidden);
    }

    #[test]
    fn test_toggles_indefinitely() {
        let mut clicks = Vec::new();
        for _ in 0..5 {
            clicks.extend([Interaction::AboutLink, Interaction::Panel, Interaction::Backdrop]);
        }
        assert_eq!(replay(&clicks).overlay(), OverlayState::Hidden);
        clicks.push(Interaction::AboutLink);
        assert_eq!(replay(&clicks).overlay(), OverlayState::Visible);
    }

    #[test]
    fn test_handle_reports_changes_only() {
        let mut state = PageViewState::new();
        assert!(!state.handle(Interaction::Backdrop));
        assert!(state.handle(Interaction::AboutLink));
        assert!(!state.handle(Interaction::AboutLink));
        assert!(!state.handle(Interaction::Panel));
        assert!(state.handle(Interaction::Backdrop));
    }

    #[test]
    fn test_only_panel_stops_propagation() {
        assert!(Interaction::Panel.stops_propagation());
        assert!(!Interaction::Backdrop.stops_propagation());
        assert!(!Interaction::AboutLink.stops_propagation());
    }
}
