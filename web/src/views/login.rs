use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use ui::{use_auth, Session};

use crate::Route;

#[component]
pub fn LoginPage() -> Element {
    let mut display_name = use_signal(|| "".to_string());
    let mut error = use_signal(|| "".to_string());
    let navigator = use_navigator();
    let mut auth = use_auth();

    let mut handle_login = move || {
        let name = display_name().trim().to_string();
        if name.is_empty() {
            error.set("Please enter a display name".to_string());
            return;
        }

        let session = Session::new(uuid::Uuid::new_v4().to_string(), name);
        info!("Signed in as {}", session.display_name);
        auth.login(session);
    };

    use_effect(move || {
        if auth.is_logged_in() {
            navigator.replace(Route::HomePage {});
        }
    });

    rsx! {
      div { class: "w-full max-w-sm",
        h1 { class: "text-2xl font-bold mb-6 text-center", "Sign in" }
        form {
          class: "flex flex-col gap-4",
          onsubmit: move |e| {
              e.prevent_default();
              handle_login();
          },
          div {
            label { class: "block text-sm font-medium mb-1", "Display name" }
            input {
              class: "w-full p-2 rounded border border-brand-dark-chocolate/20 bg-white focus:outline-none focus:border-brand-dark-chocolate",
              value: "{display_name}",
              oninput: move |e| {
                  display_name.set(e.value());
                  error.set("".to_string());
              },
              "type": "text",
            }
          }

          if !error().is_empty() {
            div { class: "text-red-700 text-sm", "{error}" }
          }

          button {
            class: "w-full py-2 rounded bg-brand-dark-chocolate text-brand-ivory font-bold hover:opacity-90 transition-opacity cursor-pointer",
            "type": "submit",
            "Sign in"
          }
        }
      }
    }
}
