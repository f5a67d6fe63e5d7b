use crate::route::AdminRoute;

pub const BRAND_LABEL: &str = "Admin Panel";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

impl NavLink {
    pub const fn of(route: AdminRoute) -> Self {
        NavLink {
            path: route.to_str(),
            label: route.label(),
        }
    }
}

pub const BRAND: NavLink = NavLink {
    path: AdminRoute::Dashboard.to_str(),
    label: BRAND_LABEL,
};

pub const DEPOSIT_REQUESTS: NavLink = NavLink::of(AdminRoute::DepositRequests);
pub const WITHDRAWAL_REQUESTS: NavLink = NavLink::of(AdminRoute::WithdrawalRequests);

/// Top bar links matched by substring, in display order
pub const MODE_LINKS: [NavLink; 2] = [DEPOSIT_REQUESTS, WITHDRAWAL_REQUESTS];

/// Drawer entries matched exactly, in display order
pub const DRAWER_LINKS: [NavLink; 5] = [
    NavLink::of(AdminRoute::Dashboard),
    NavLink::of(AdminRoute::Analytics),
    NavLink::of(AdminRoute::GameMode),
    NavLink::of(AdminRoute::Users),
    NavLink::of(AdminRoute::Settings),
];

pub fn find_drawer_link(path: &str) -> Option<&'static NavLink> {
    DRAWER_LINKS.iter().find(|link| link.path == path)
}
