use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

#[component]
pub fn ProfilePage() -> Element {
    let mut auth = use_auth();
    let navigator = use_navigator();

    let Some(session) = auth.session() else {
        return rsx! {};
    };
    let signed_in_at = session.signed_in_at.format("%Y-%m-%d %H:%M UTC").to_string();

    let logout = move |_| {
        info!("Signed out");
        auth.logout();
        navigator.replace(Route::HomePage {});
    };

    rsx! {
      div { class: "w-full max-w-sm flex flex-col gap-6",
        h1 { class: "text-2xl font-bold", "{session.display_name}" }
        dl { class: "grid grid-cols-[auto_1fr] gap-x-4 gap-y-2 text-sm",
          dt { class: "opacity-70", "User id" }
          dd { class: "font-mono break-all", "{session.user_id}" }
          dt { class: "opacity-70", "Signed in" }
          dd { "{signed_in_at}" }
        }
        button {
          class: "self-start px-4 py-2 rounded border border-red-700 text-red-700 text-xs uppercase tracking-widest hover:bg-red-700/10 cursor-pointer",
          onclick: logout,
          "Sign out"
        }
      }
    }
}
