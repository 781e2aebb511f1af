use dioxus::prelude::*;
use prizmania_api::{compute_reward, Tier};

#[component]
pub fn RewardCalculator() -> Element {
    let mut tier = use_signal(|| Tier::Starter);
    let mut period = use_signal(|| Tier::Starter.periods()[0]);

    let selected_tier = *tier.read();
    let selected_period = *period.read();

    // Pure table lookup, recomputed on every selection change
    let result = compute_reward(selected_tier, selected_period);

    let mut select_tier = move |next: Tier| {
        tier.set(next);
        // Period lists are tier-specific; fall back to the first valid one
        if !next.periods().contains(&*period.read()) {
            period.set(next.periods()[0]);
        }
    };

    rsx! {
        div { class: "elevated rounded-lg p-6 elevated-border border max-w-xl mx-auto",
            h3 { class: "text-xl font-semibold text-prizm-400 mb-4", "Reward Calculator" }

            // Deposit tier
            div { class: "mb-4",
                p { class: "text-low text-sm mb-2", "Deposit" }
                div { class: "flex gap-2",
                    for t in Tier::ALL {
                        button {
                            class: if selected_tier == t { "controls-gold" } else { "elevated-control" },
                            class: " px-4 py-1.5 rounded text-sm font-mono",
                            onclick: move |_| select_tier(t),
                            {format!("{} PZM", t.amount())}
                        }
                    }
                }
            }

            // Holding period
            div { class: "mb-4",
                p { class: "text-low text-sm mb-2", "Holding period" }
                div { class: "flex gap-2",
                    for days in selected_tier.periods().iter().copied() {
                        button {
                            class: if selected_period == days { "controls-gold" } else { "elevated-control" },
                            class: " px-4 py-1.5 rounded text-sm font-mono",
                            onclick: move |_| period.set(days),
                            "{days} days"
                        }
                    }
                }
            }

            // Result panel
            div { class: "space-y-2 pt-4 border-t elevated-border text-sm",
                div { class: "flex justify-between",
                    span { class: "text-low", "Guaranteed minimum" }
                    span { class: "text-high font-mono", "{result.guaranteed_principal} PZM" }
                }
                div { class: "flex justify-between",
                    span { class: "text-low", "Reward" }
                    span { class: "text-high font-mono", "+{result.reward} PZM" }
                }
                div { class: "flex justify-between",
                    span { class: "text-low", "Total payout" }
                    span { class: "text-gold font-mono font-semibold", "{result.total_payout} PZM" }
                }
                div { class: "flex justify-between",
                    span { class: "text-low", "Profit" }
                    span { class: "text-prizm-400 font-mono", "{result.percent_gain}%" }
                }
            }
        }
    }
}
