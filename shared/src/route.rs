pub const ADMIN_ROOT: &str = "/admin/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminRoute {
    Dashboard,
    Analytics,
    GameMode,
    Users,
    Settings,

    /// Top bar only, hides the hamburger
    DepositRequests,
    /// Top bar only, hides the hamburger
    WithdrawalRequests,
}

impl AdminRoute {
    pub const fn to_str(&self) -> &'static str {
        match self {
            AdminRoute::Dashboard => ADMIN_ROOT,
            AdminRoute::Analytics => "/admin/analytics",
            AdminRoute::GameMode => "/admin/game-mode",
            AdminRoute::Users => "/admin/users",
            AdminRoute::Settings => "/admin/settings",
            // modes
            AdminRoute::DepositRequests => "/admin/deposit-requests",
            AdminRoute::WithdrawalRequests => "/admin/withdrawal-requests",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            AdminRoute::Dashboard => "Dashboard",
            AdminRoute::Analytics => "Analytics",
            AdminRoute::GameMode => "Game Mode",
            AdminRoute::Users => "Users",
            AdminRoute::Settings => "Settings",
            AdminRoute::DepositRequests => "Deposit Requests",
            AdminRoute::WithdrawalRequests => "Withdraw Requests",
        }
    }
}
