use crate::drawer::{DrawerEvent, DrawerState};
use crate::nav_link::NavLink;

/// Requests route changes from whatever router hosts the navigation
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path)
    }
}

/// Closes the drawer, then asks the navigator for `link` exactly once.
pub fn follow_drawer_link(
    state: DrawerState,
    link: &NavLink,
    navigator: &impl Navigator,
) -> DrawerState {
    let next = state.apply(DrawerEvent::LinkActivated);
    tracing::info!("navigating to {}", link.path);
    navigator.navigate(link.path);
    next
}
