use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

#[component]
pub fn HomePage() -> Element {
    let auth = use_auth();

    rsx! {
      div { class: "flex flex-col items-center gap-4 text-center",
        if let Some(name) = auth.display_name() {
          h1 { class: "text-3xl font-bold", "Welcome back, {name}" }
          p { class: "opacity-70", "Pick up where you left off." }
        } else {
          h1 { class: "text-3xl font-bold", "Welcome to Cocoa" }
          p { class: "opacity-70", "Sign in to see your profile." }
          Link {
            class: "px-6 py-2 rounded-full bg-brand-dark-chocolate text-brand-ivory font-medium hover:opacity-90 transition-opacity",
            to: Route::LoginPage {},
            "Sign in"
          }
        }
      }
    }
}
