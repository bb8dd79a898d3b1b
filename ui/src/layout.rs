use crate::auth::{use_auth_status, AuthStatus};
use crate::components::Footer;
use crate::navbar::BottomNavBar;
use dioxus::prelude::*;

/// Outer container: brand colors, full viewport height, vertical stacking.
pub const SHELL_CLASS: &str =
    "flex flex-col min-h-screen p-4 bg-brand-ivory text-brand-dark-chocolate";

/// Centered region that takes the remaining vertical space.
pub const CONTENT_CLASS: &str = "flex flex-grow items-center justify-center";

/// Page scaffold with an explicit auth status.
///
/// Renders `children` untouched inside the centered region, followed by the
/// bottom navigation for signed-in users or the footer for everyone else.
#[component]
pub fn PageShell(status: AuthStatus, children: Element) -> Element {
    let bottom = match status {
        AuthStatus::Authenticated => rsx! { BottomNavBar {} },
        AuthStatus::Unauthenticated => rsx! { Footer {} },
    };

    rsx! {
      div { class: SHELL_CLASS,
        div { class: CONTENT_CLASS, {children} }
        {bottom}
      }
    }
}

/// [`PageShell`] driven by the auth context.
///
/// Without a provider the page renders as signed out.
#[component]
pub fn Layout(children: Element) -> Element {
    let status = use_auth_status();

    rsx! {
      PageShell { status, {children} }
    }
}
