use dioxus::prelude::*;

struct NavItem {
    label: &'static str,
    href: &'static str,
    icon: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        href: "/",
        icon: "M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6",
    },
    NavItem {
        label: "Profile",
        href: "/profile",
        icon: "M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z",
    },
];

/// Bottom navigation shown to signed-in users.
#[component]
pub fn BottomNavBar() -> Element {
    rsx! {
        nav { class: "sticky bottom-0 flex justify-around items-center py-2 border-t border-brand-dark-chocolate/10 bg-brand-ivory",
            for item in NAV_ITEMS {
                a {
                    key: "{item.href}",
                    class: "flex flex-col items-center gap-1 px-4 py-1 text-xs font-medium hover:opacity-70 transition-opacity",
                    href: item.href,
                    svg {
                        class: "w-6 h-6",
                        fill: "none",
                        stroke: "currentColor",
                        view_box: "0 0 24 24",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "2",
                            d: item.icon,
                        }
                    }
                    span { "{item.label}" }
                }
            }
        }
    }
}
