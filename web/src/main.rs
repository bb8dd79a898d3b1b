use auth::{use_session_resolved, AuthProvider};
use config::AppConfig;
use dioxus::prelude::*;

use ui::{use_auth, Layout};
use views::{HomePage, LoginPage, ProfilePage};

mod auth;
mod config;
mod storage;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        HomePage {},
        #[route("/login")]
        LoginPage {},

        #[layout(RequireAuth)]
            #[route("/profile")]
            ProfilePage {},
}

const MAIN_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(AppConfig::load);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "{config.title}" }

        AuthProvider { Router::<Route> {} }
    }
}

/// Route layout that wraps every page in the shared page shell.
#[component]
fn AppShell() -> Element {
    rsx! {
        Layout { Outlet::<Route> {} }
    }
}

#[component]
fn RequireAuth() -> Element {
    let auth = use_auth();
    let resolved = use_session_resolved();
    let nav = use_navigator();

    use_effect(move || {
        if must_sign_in(resolved(), auth.is_logged_in()) {
            nav.replace(Route::LoginPage {});
        }
    });

    rsx! {
        Outlet::<Route> {}
    }
}

/// Wait for the stored session before deciding.
fn must_sign_in(resolved: bool, logged_in: bool) -> bool {
    resolved && !logged_in
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLESHEET: &str = include_str!("../assets/tailwind.css");

    const SOURCES: &[&str] = &[
        include_str!("views/home.rs"),
        include_str!("views/login.rs"),
        include_str!("views/profile.rs"),
        include_str!("../../ui/src/navbar.rs"),
        include_str!("../../ui/src/components/footer.rs"),
    ];

    fn selector(class: &str) -> String {
        let mut selector = String::from(".");
        for c in class.chars() {
            if matches!(c, '/' | ':' | '[' | ']') {
                selector.push('\\');
            }
            selector.push(c);
        }
        selector
    }

    fn styled(class: &str) -> bool {
        let selector = selector(class);
        STYLESHEET.contains(&format!("{selector} {{"))
            || STYLESHEET.contains(&format!("{selector}:"))
    }

    fn literal_classes(source: &str) -> Vec<&str> {
        source
            .split("class: \"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .flat_map(str::split_whitespace)
            .collect()
    }

    #[test]
    fn stays_put_until_session_is_resolved() {
        assert!(!must_sign_in(false, false));
        assert!(!must_sign_in(false, true));
        assert!(!must_sign_in(true, true));
        assert!(must_sign_in(true, false));
    }

    #[test]
    fn stylesheet_covers_every_class() {
        let shell = ui::SHELL_CLASS.split_whitespace();
        let content = ui::CONTENT_CLASS.split_whitespace();
        let missing: Vec<&str> = SOURCES
            .iter()
            .flat_map(|source| literal_classes(source))
            .chain(shell)
            .chain(content)
            .filter(|class| !styled(class))
            .collect();

        assert!(missing.is_empty(), "unstyled classes: {missing:?}");
    }
}
