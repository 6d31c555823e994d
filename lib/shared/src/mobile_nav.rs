use crate::navigation::NavigationLink;

/// Open/closed state of the mobile navigation modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MobileNavState {
    #[default]
    Closed,
    Open,
}

/// User interactions that drive [`MobileNavState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobileNavEvent {
    /// The menu button in the header.
    ToggleActivated,
    /// The close button inside the modal.
    CloseActivated,
    /// Any entry of the navigation list.
    LinkActivated,
    /// Backdrop click or Escape.
    Dismissed,
}

impl MobileNavState {
    pub fn apply(self, event: MobileNavEvent) -> Self {
        match (self, event) {
            (Self::Closed, MobileNavEvent::ToggleActivated) => Self::Open,
            (Self::Open, MobileNavEvent::ToggleActivated) => Self::Closed,
            (_, MobileNavEvent::CloseActivated)
            | (_, MobileNavEvent::LinkActivated)
            | (_, MobileNavEvent::Dismissed) => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Outcome of activating `link` from the navigation list.
    ///
    /// Navigation is only requested while open; entries without an `href` just close.
    pub fn select(self, link: &NavigationLink) -> Selection {
        let navigate_to = if self.is_open() {
            link.href.clone()
        } else {
            None
        };

        Selection {
            next: self.apply(MobileNavEvent::LinkActivated),
            navigate_to,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub next: MobileNavState,
    pub navigate_to: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(MobileNavState::default(), MobileNavState::Closed);
        assert!(!MobileNavState::default().is_open());
    }

    #[test]
    fn toggle_parity() {
        for count in 0..8 {
            let state = (0..count).fold(MobileNavState::default(), |state, _| {
                state.apply(MobileNavEvent::ToggleActivated)
            });
            assert_eq!(state.is_open(), count % 2 == 1, "after {count} toggles");
        }
    }

    #[test]
    fn every_closing_event_closes_an_open_modal() {
        for event in [
            MobileNavEvent::CloseActivated,
            MobileNavEvent::LinkActivated,
            MobileNavEvent::Dismissed,
        ] {
            assert_eq!(MobileNavState::Open.apply(event), MobileNavState::Closed);
            assert_eq!(MobileNavState::Closed.apply(event), MobileNavState::Closed);
        }
    }

    #[test]
    fn toggle_then_home_closes_and_navigates() {
        let open = MobileNavState::default().apply(MobileNavEvent::ToggleActivated);
        assert!(open.is_open());

        let selection = open.select(&NavigationLink::new(1, "Home", "/"));
        assert_eq!(
            selection,
            Selection {
                next: MobileNavState::Closed,
                navigate_to: Some("/".to_string()),
            }
        );
    }

    #[test]
    fn selecting_from_closed_menu_does_not_navigate() {
        let selection = MobileNavState::Closed.select(&NavigationLink::new(2, "Blog", "/blog"));
        assert_eq!(selection.next, MobileNavState::Closed);
        assert_eq!(selection.navigate_to, None);
    }

    #[test]
    fn entry_without_href_only_closes() {
        let link = NavigationLink {
            id: 3,
            name: "Soon".to_string(),
            href: None,
        };
        let selection = MobileNavState::Open.select(&link);
        assert_eq!(selection.next, MobileNavState::Closed);
        assert_eq!(selection.navigate_to, None);
    }
}
