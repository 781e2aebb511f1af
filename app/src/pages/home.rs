use dioxus::prelude::*;

use crate::components::{FaqAccordion, RewardCalculator, scroll_to_section};
use crate::{CONTACT_EMAIL, TELEGRAM_HANDLE, WEBSITE_HOST};

#[component]
pub fn Home() -> Element {
    rsx! {
        // Hero
        section { id: "home", class: "min-h-screen flex items-center justify-center relative pt-16",
            div { class: "hero-backdrop" }
            div { class: "max-w-4xl mx-auto px-4 text-center relative z-10",
                h1 { class: "text-5xl md:text-7xl font-bold leading-tight mb-4",
                    span { class: "glow-purple", "PRIZMANIA" }
                    br {}
                    span { class: "text-3xl md:text-4xl glow-cyan", "everybody wins" }
                }
                p { class: "text-xl text-mid mb-8 max-w-2xl mx-auto",
                    "A crypto game where losing is impossible. Your wallet meets a "
                    "mathematical payout mechanic with a guaranteed reward."
                }
                div { class: "flex flex-wrap justify-center gap-4",
                    button {
                        class: "btn btn-primary neon-border text-lg px-8 py-3",
                        onclick: move |_| scroll_to_section("rewards"),
                        "Start Playing"
                    }
                    button {
                        class: "btn btn-secondary text-lg px-8 py-3",
                        onclick: move |_| scroll_to_section("game"),
                        "How It Works"
                    }
                }
            }
        }

        // Game mechanics
        section { id: "game", class: "py-24",
            div { class: "max-w-7xl mx-auto px-4",
                SectionHeading {
                    title: "A game you cannot lose",
                    subtitle: "Revolutionary guaranteed-payout mechanics",
                    accent: "glow-purple",
                }
                div { class: "grid md:grid-cols-3 gap-8",
                    FeatureCard {
                        title: "Guaranteed growth",
                        description: "The mathematical model rules out losing your deposit.",
                        icon: "📈",
                    }
                    FeatureCard {
                        title: "Full security",
                        description: "A decentralized system with no room for manipulation.",
                        icon: "🛡️",
                    }
                    FeatureCard {
                        title: "Honest payouts",
                        description: "Rewards are paid out automatically through smart contracts.",
                        icon: "🪙",
                    }
                }
            }
        }

        // Prizm technology
        section { id: "technology", class: "py-24 section-alt",
            div { class: "max-w-4xl mx-auto px-4",
                SectionHeading {
                    title: "Prizm technology",
                    subtitle: "A cryptocurrency with no analogue on the market",
                    accent: "glow-cyan",
                }
                div { class: "space-y-6",
                    TechRow {
                        title: "Eco-friendly mining",
                        description: "Energy-efficient technology with no harm to the environment.",
                        icon: "⚡",
                    }
                    TechRow {
                        title: "Full decentralization",
                        description: "A distributed network with no central point of control.",
                        icon: "🌐",
                    }
                    TechRow {
                        title: "A unique ecosystem",
                        description: "Its own infrastructure and original engineering decisions.",
                        icon: "🧩",
                    }
                }
            }
        }

        // Rewards: stats banner + calculator
        section { id: "rewards", class: "py-24",
            div { class: "max-w-4xl mx-auto px-4",
                SectionHeading {
                    title: "Reward system",
                    subtitle: "A mathematical model of reward distribution",
                    accent: "glow-orange",
                }
                div { class: "elevated rounded-lg p-8 elevated-border border neon-border mb-12",
                    div { class: "grid md:grid-cols-3 gap-8 text-center",
                        StatBlock { value: "100%", label: "Payout guarantee", accent: "glow-purple" }
                        StatBlock { value: "24/7", label: "System availability", accent: "glow-cyan" }
                        StatBlock { value: "∞", label: "Growth potential", accent: "glow-orange" }
                    }
                }
                RewardCalculator {}
            }
        }

        // Patents
        section { id: "patents", class: "py-24 section-alt",
            div { class: "max-w-3xl mx-auto px-4",
                SectionHeading {
                    title: "Patents and registration",
                    subtitle: "The only cryptocurrency registered with Rospatent",
                    accent: "glow-purple",
                }
                div { class: "elevated rounded-lg p-8 elevated-border border space-y-4",
                    PatentRow {
                        title: "Official registration",
                        description: format!("Rospatent certificate {}", crate::PATENT_CERTIFICATE),
                        icon: "🏅",
                    }
                    PatentRow {
                        title: "Intellectual property protection",
                        description: "Patent coverage for the core technology",
                        icon: "📜",
                    }
                    PatentRow {
                        title: "Legal status",
                        description: "Operates in compliance with applicable law",
                        icon: "✅",
                    }
                }
            }
        }

        // FAQ
        section { id: "faq", class: "py-24",
            div { class: "max-w-3xl mx-auto px-4",
                SectionHeading {
                    title: "Questions and answers",
                    subtitle: "Everything you need to know about Prizmania",
                    accent: "glow-cyan",
                }
                FaqAccordion {}
            }
        }

        // Contacts
        section { id: "contacts", class: "py-24 section-alt",
            div { class: "max-w-2xl mx-auto px-4",
                SectionHeading {
                    title: "Contacts",
                    subtitle: "Get in touch with us",
                    accent: "glow-orange",
                }
                div { class: "elevated rounded-lg p-8 elevated-border border grid gap-4",
                    ContactLink {
                        href: "mailto:{CONTACT_EMAIL}",
                        label: "Email",
                        value: CONTACT_EMAIL,
                        icon: "✉️",
                    }
                    ContactLink {
                        href: "https://t.me/prizmania",
                        label: "Telegram",
                        value: TELEGRAM_HANDLE,
                        icon: "📨",
                    }
                    ContactLink {
                        href: "https://{WEBSITE_HOST}",
                        label: "Website",
                        value: WEBSITE_HOST,
                        icon: "🌍",
                    }
                }
            }
        }
    }
}

#[component]
fn StatBlock(value: &'static str, label: &'static str, accent: &'static str) -> Element {
    rsx! {
        div { class: "space-y-2",
            div { class: "text-5xl font-bold {accent}", "{value}" }
            div { class: "text-mid", "{label}" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SectionHeadingProps {
    title: &'static str,
    subtitle: &'static str,
    accent: &'static str,
}

#[component]
fn SectionHeading(props: SectionHeadingProps) -> Element {
    rsx! {
        h2 { class: "text-4xl md:text-5xl font-bold text-center mb-4 {props.accent}",
            "{props.title}"
        }
        p { class: "text-center text-mid mb-16 text-lg", "{props.subtitle}" }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FeatureCardProps {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

#[component]
fn FeatureCard(props: FeatureCardProps) -> Element {
    rsx! {
        div { class: "card text-center",
            div { class: "text-4xl mb-4", "{props.icon}" }
            h3 { class: "text-lg font-semibold text-prizm-400 mb-2", "{props.title}" }
            p { class: "text-mid", "{props.description}" }
        }
    }
}

#[component]
fn TechRow(title: &'static str, description: &'static str, icon: &'static str) -> Element {
    rsx! {
        div { class: "flex gap-4 items-start",
            div { class: "w-12 h-12 rounded-lg elevated-control flex items-center justify-center flex-shrink-0 text-2xl",
                "{icon}"
            }
            div {
                h3 { class: "text-xl font-bold text-high mb-1", "{title}" }
                p { class: "text-mid", "{description}" }
            }
        }
    }
}

#[component]
fn PatentRow(title: &'static str, description: String, icon: &'static str) -> Element {
    rsx! {
        div { class: "flex items-start gap-3",
            span { class: "text-2xl flex-shrink-0", "{icon}" }
            div {
                h3 { class: "font-bold text-lg text-high mb-1", "{title}" }
                p { class: "text-low text-sm", "{description}" }
            }
        }
    }
}

#[component]
fn ContactLink(href: String, label: &'static str, value: &'static str, icon: &'static str) -> Element {
    rsx! {
        a {
            href: "{href}",
            class: "flex items-center gap-4 p-4 rounded-lg elevated-control hover:border-prizm-400 border border-transparent transition-colors",
            span { class: "text-2xl", "{icon}" }
            div {
                div { class: "font-semibold text-high", "{label}" }
                div { class: "text-mid", "{value}" }
            }
        }
    }
}
