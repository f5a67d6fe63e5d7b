mod admin_navigation;
mod card;
mod empty_state;
mod icons;

pub use admin_navigation::AdminNavigation;
pub use card::Card;
pub use empty_state::EmptyState;
pub use icons::{CloseIcon, MenuIcon};
