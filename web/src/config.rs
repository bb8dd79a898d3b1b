//! Application configuration.
//!
//! Values are baked in at compile time: `build.rs` forwards `APP_TITLE` and
//! `AUTH_SESSION_KEY` from the environment or a `.env` file.

const DEFAULT_TITLE: &str = "Cocoa";
const DEFAULT_SESSION_KEY: &str = "cocoa.session";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Document title (default: "Cocoa")
    pub title: String,
    /// Local storage key holding the persisted session (default: "cocoa.session")
    pub session_key: String,
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_values(option_env!("APP_TITLE"), option_env!("AUTH_SESSION_KEY"))
    }

    fn from_values(title: Option<&str>, session_key: Option<&str>) -> Self {
        Self {
            title: non_blank(title).unwrap_or(DEFAULT_TITLE).to_string(),
            session_key: non_blank(session_key)
                .unwrap_or(DEFAULT_SESSION_KEY)
                .to_string(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
