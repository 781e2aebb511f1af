use dioxus::prelude::*;

const FAQ_ITEMS: &[(&str, &str)] = &[
    (
        "How does the win guarantee work?",
        "The system is built on a mathematical payout model that rules out \
         losing. Every participant receives a reward through decentralized \
         distribution of funds via smart contracts.",
    ),
    (
        "What is the Prizm cryptocurrency?",
        "Prizm is a cryptocurrency with its own technology and ecosystem, \
         registered with Rospatent. It relies on energy-efficient mining and \
         full decentralization.",
    ),
    (
        "How do I connect a wallet?",
        "Press the Connect Wallet button at the top of the page and pick a \
         wallet from the list. This demo site simulates the connection and \
         never talks to a real wallet.",
    ),
    (
        "What sets Prizmania apart from other crypto games?",
        "Prizmania is the only game with a no-loss guarantee, an official \
         Rospatent registration, eco-friendly mining, and a fully \
         decentralized system that cannot be manipulated.",
    ),
];

/// Single-open collapsible list. Clicking an open item closes it.
#[component]
pub fn FaqAccordion() -> Element {
    let mut open_item = use_signal(|| None::<usize>);

    rsx! {
        div { class: "space-y-4",
            for (index, (question, answer)) in FAQ_ITEMS.iter().copied().enumerate() {
                FaqItem {
                    question: question,
                    answer: answer,
                    open: *open_item.read() == Some(index),
                    on_toggle: move |_| {
                        let current = *open_item.read();
                        open_item.set(if current == Some(index) { None } else { Some(index) });
                    },
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: EventHandler<()>,
}

#[component]
fn FaqItem(props: FaqItemProps) -> Element {
    let chevron = if props.open { "−" } else { "+" };

    rsx! {
        div { class: "border elevated-border rounded-lg px-6 py-4 elevated",
            button {
                class: "w-full flex justify-between items-center text-left",
                onclick: move |_| props.on_toggle.call(()),
                span { class: "text-lg font-semibold text-high hover:text-prizm-400 transition-colors",
                    "{props.question}"
                }
                span { class: "text-prizm-400 text-xl font-mono", "{chevron}" }
            }
            if props.open {
                p { class: "text-mid mt-3", "{props.answer}" }
            }
        }
    }
}
