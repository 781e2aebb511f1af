use dioxus::prelude::*;

use crate::components::WalletButton;
use crate::route::Route;
use crate::{PATENT_CERTIFICATE, SITE_NAME, WalletState};

const NAV_SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("game", "Game"),
    ("technology", "Technology"),
    ("rewards", "Rewards"),
    ("patents", "Patents"),
    ("faq", "FAQ"),
    ("contacts", "Contacts"),
];

#[component]
pub fn Layout() -> Element {
    let wallet = use_context::<Signal<WalletState>>();
    let notice = wallet.read().notice.clone();

    rsx! {
        div { class: "min-h-screen",
            style: "background-color: var(--surface-base);",
            // Navigation
            nav { class: "border-b elevated-border backdrop-blur sticky top-0 z-50",
                style: "background-color: var(--surface-base);",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                    div { class: "flex justify-between h-16",
                        // Logo - scrolls back to the hero
                        div { class: "flex items-center",
                            button {
                                class: "flex items-center space-x-2",
                                onclick: move |_| scroll_to_section("home"),
                                span { class: "text-2xl font-bold text-prizm-400 glow-purple", "{SITE_NAME}" }
                            }
                        }

                        // Section links
                        div { class: "hidden sm:flex sm:items-center sm:space-x-6",
                            for (id, label) in NAV_SECTIONS.iter().skip(1).copied() {
                                SectionLink { target: id, label: label }
                            }
                        }

                        // Wallet button
                        div { class: "flex items-center",
                            WalletButton {}
                        }
                    }
                }
            }

            // Main content
            main {
                Outlet::<Route> {}
            }

            // Footer
            footer { class: "border-t elevated-border py-8 mt-auto",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center text-low",
                    p { "© 2024 Prizmania. All rights reserved." }
                    p { class: "text-sm mt-2",
                        "The only cryptocurrency registered with Rospatent, certificate "
                        code { class: "text-gold", "{PATENT_CERTIFICATE}" }
                    }
                }
            }

            // Cosmetic toast, set by the mock wallet flow
            if let Some(text) = notice {
                div { class: "toast",
                    "{text}"
                }
            }
        }
    }
}

#[component]
fn SectionLink(target: &'static str, label: &'static str) -> Element {
    rsx! {
        button {
            class: "text-mid hover:text-gold px-3 py-2 text-sm font-medium transition-colors",
            onclick: move |_| scroll_to_section(target),
            "{label}"
        }
    }
}

/// Smooth-scroll the viewport to a section by element id.
#[cfg(feature = "web")]
pub fn scroll_to_section(id: &str) {
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    } else {
        tracing::warn!("no section with id {id}");
    }
}

#[cfg(not(feature = "web"))]
pub fn scroll_to_section(_id: &str) {}
