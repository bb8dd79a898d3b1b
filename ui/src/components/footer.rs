use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
      footer { class: "pt-4 text-center border-t border-brand-dark-chocolate/10",
        div { class: "flex justify-center gap-6 text-xs uppercase tracking-widest opacity-70",
          span { "Cocoa" }
          a { class: "hover:opacity-100 transition-opacity", href: "/login", "Sign in" }
          a {
            class: "hover:opacity-100 transition-opacity",
            href: "https://github.com/cocoa-app/cocoa",
            target: "_blank",
            "Github"
          }
        }
      }
    }
}
