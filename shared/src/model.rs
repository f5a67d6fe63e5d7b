//! Framework-free description of what the admin navigation shows.
//!
//! The web component renders everything from one [`render`] call per
//! pathname or drawer change.

use crate::drawer::DrawerState;
use crate::matching::{is_drawer_link_active, is_mode_link_active, shows_hamburger};
use crate::nav_link::{BRAND, DRAWER_LINKS, MODE_LINKS, NavLink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Mode,
    Drawer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkView {
    pub link: NavLink,
    pub kind: LinkKind,
    pub active: bool,
}

impl LinkView {
    pub fn class(&self) -> &'static str {
        match (self.kind, self.active) {
            (LinkKind::Mode, true) => "nav-link active",
            (LinkKind::Mode, false) => "nav-link",
            (LinkKind::Drawer, true) => "drawer-link active",
            (LinkKind::Drawer, false) => "drawer-link",
        }
    }
}

pub fn mode_links(pathname: &str) -> Vec<LinkView> {
    MODE_LINKS
        .iter()
        .map(|link| LinkView {
            link: *link,
            kind: LinkKind::Mode,
            active: is_mode_link_active(pathname, link),
        })
        .collect()
}

pub fn drawer_links(pathname: &str) -> Vec<LinkView> {
    DRAWER_LINKS
        .iter()
        .map(|link| LinkView {
            link: *link,
            kind: LinkKind::Drawer,
            active: is_drawer_link_active(pathname, link),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationView {
    pub brand: NavLink,
    pub mode_links: Vec<LinkView>,
    pub hamburger_visible: bool,
    /// `None` while the drawer is closed
    pub drawer: Option<Vec<LinkView>>,
}

pub fn render(pathname: &str, drawer: DrawerState) -> NavigationView {
    NavigationView {
        brand: BRAND,
        mode_links: mode_links(pathname),
        hamburger_visible: shows_hamburger(pathname),
        drawer: drawer.is_open().then(|| drawer_links(pathname)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawer::DrawerEvent;
    use crate::nav_link::{DEPOSIT_REQUESTS, find_drawer_link};
    use crate::navigator::follow_drawer_link;
    use crate::navigator::tests::{RecordingNavigator, init_tracing};

    fn active_labels(links: &[LinkView]) -> Vec<&'static str> {
        links
            .iter()
            .filter(|view| view.active)
            .map(|view| view.link.label)
            .collect()
    }

    #[test]
    fn should_render_dashboard_root() {
        let view = render("/admin/", DrawerState::default());

        assert!(view.hamburger_visible);
        assert!(view.drawer.is_none());
        assert!(active_labels(&view.mode_links).is_empty());
        assert_eq!(vec!["Dashboard"], active_labels(&drawer_links("/admin/")));
    }

    #[test]
    fn should_render_deposit_mode() {
        let view = render("/admin/deposit-requests", DrawerState::Closed);

        assert!(!view.hamburger_visible);
        assert_eq!(vec!["Deposit Requests"], active_labels(&view.mode_links));
        assert_eq!("nav-link active", view.mode_links[0].class());
        assert_eq!("nav-link", view.mode_links[1].class());
    }

    #[test]
    fn should_open_drawer_and_follow_link() {
        init_tracing();
        let navigator = RecordingNavigator::default();

        let state = DrawerState::default().apply(DrawerEvent::HamburgerActivated);
        let drawer = render("/admin/analytics", state).drawer.unwrap();
        assert_eq!(vec!["Analytics"], active_labels(&drawer));
        assert_eq!("drawer-link active", drawer[1].class());
        assert_eq!("drawer-link", drawer[0].class());

        let game_mode = find_drawer_link("/admin/game-mode").unwrap();
        let state = follow_drawer_link(state, game_mode, &navigator);

        assert_eq!(DrawerState::Closed, state);
        assert!(render("/admin/analytics", state).drawer.is_none());
        assert_eq!(
            vec!["/admin/game-mode".to_string()],
            *navigator.requests.borrow()
        );
    }

    #[test]
    fn should_hide_drawer_after_dismissal() {
        [DrawerEvent::CloseButton, DrawerEvent::Backdrop]
            .into_iter()
            .for_each(|event| {
                let state = DrawerState::Closed.apply(DrawerEvent::HamburgerActivated);
                assert!(render("/admin/users", state).drawer.is_some());
                assert!(render("/admin/users", state.apply(event)).drawer.is_none());
            });
    }

    #[test]
    fn should_show_drawer_exactly_when_open() {
        [DrawerState::Closed, DrawerState::Open]
            .into_iter()
            .for_each(|state| {
                assert_eq!(state.is_open(), render("/admin/", state).drawer.is_some())
            });
    }

    #[test]
    fn should_survive_empty_pathname() {
        let view = render("", DrawerState::Open);

        assert!(view.hamburger_visible);
        assert!(active_labels(&view.mode_links).is_empty());
        assert!(active_labels(&view.drawer.unwrap()).is_empty());
    }

    #[test]
    fn should_only_substring_match_mode_links() {
        // nested mode page keeps the mode lit but no drawer entry
        let view = render("/admin/deposit-requests/analytics", DrawerState::Open);

        assert!(view.mode_links.iter().any(|v| v.link == DEPOSIT_REQUESTS && v.active));
        assert!(active_labels(&view.drawer.unwrap()).is_empty());
    }

    #[test]
    fn should_always_render_brand() {
        ["", "/admin/", "/admin/withdrawal-requests"]
            .into_iter()
            .for_each(|pathname| {
                assert_eq!(BRAND, render(pathname, DrawerState::Closed).brand)
            });
    }
}
