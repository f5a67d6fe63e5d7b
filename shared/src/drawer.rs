use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

/// Everything the user can do to the drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEvent {
    HamburgerActivated,
    CloseButton,
    Backdrop,
    LinkActivated,
}

impl DrawerState {
    pub fn is_open(&self) -> bool {
        matches!(self, DrawerState::Open)
    }

    pub fn apply(self, event: DrawerEvent) -> DrawerState {
        let next = match event {
            DrawerEvent::HamburgerActivated => DrawerState::Open,
            DrawerEvent::CloseButton | DrawerEvent::Backdrop | DrawerEvent::LinkActivated => {
                DrawerState::Closed
            }
        };
        tracing::debug!("drawer {} -> {} on {:?}", self, next, event);
        next
    }
}

impl Display for DrawerState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawerState::Closed => write!(f, "closed"),
            DrawerState::Open => write!(f, "open"),
        }
    }
}
