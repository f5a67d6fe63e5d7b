//! Active-link predicates.
//!
//! Top bar mode links match when the pathname *contains* their path, so
//! nested pages like `/admin/deposit-requests/42` keep the mode highlighted.
//! Drawer links only match on exact equality.

use crate::nav_link::{MODE_LINKS, NavLink};

pub fn is_mode_link_active(pathname: &str, link: &NavLink) -> bool {
    pathname.contains(link.path)
}

pub fn is_drawer_link_active(pathname: &str, link: &NavLink) -> bool {
    pathname == link.path
}

/// The hamburger is hidden while any mode page is open
pub fn shows_hamburger(pathname: &str) -> bool {
    !MODE_LINKS.iter().any(|mode| is_mode_link_active(pathname, mode))
}
