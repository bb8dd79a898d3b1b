//! Shared UI for the workspace: the page shell and the auth context it reads.

mod navbar;
pub use navbar::BottomNavBar;

mod layout;
pub use layout::{Layout, PageShell, CONTENT_CLASS, SHELL_CLASS};

mod auth;
pub use auth::*;

mod components;
pub use components::*;
