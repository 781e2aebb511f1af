use dioxus::prelude::*;
use futures::StreamExt;

use crate::WalletState;

/// Wallet choices offered by the demo dialog. All of them resolve to the
/// same simulated handshake.
const WALLET_PROVIDERS: &[(&str, &str)] = &[
    ("Prizm Core", "The official Prizm desktop wallet"),
    ("Paratica", "Mobile wallet for the Prizm network"),
    ("WalletConnect", "Scan a QR code from any wallet"),
];

/// How long the fake handshake spins before "connecting".
const CONNECT_DELAY_MS: u32 = 900;

/// How long the toast stays on screen.
const NOTICE_DELAY_MS: u32 = 2_500;

#[derive(Clone)]
enum WalletAction {
    Connect(&'static str),
}

#[component]
pub fn WalletButton() -> Element {
    let mut wallet = use_context::<Signal<WalletState>>();
    let mut show_dialog = use_signal(|| false);
    let mut connecting = use_signal(|| false);

    // Coroutine for lifecycle-safe async work (simulated handshake + toast)
    let wallet_coro = use_coroutine(move |mut rx: UnboundedReceiver<WalletAction>| {
        async move {
            while let Some(action) = rx.next().await {
                match action {
                    WalletAction::Connect(provider) => {
                        tracing::info!("simulating {provider} connection");
                        gloo_timers::future::TimeoutFuture::new(CONNECT_DELAY_MS).await;

                        let address = mock_address();
                        {
                            let mut state = wallet.write();
                            state.connected = true;
                            state.address = Some(address);
                            state.notice = Some(format!("{provider} connected"));
                        }
                        connecting.set(false);

                        gloo_timers::future::TimeoutFuture::new(NOTICE_DELAY_MS).await;
                        wallet.write().notice = None;
                    }
                }
            }
        }
    });

    let disconnect_wallet = move |_| {
        wallet.write().connected = false;
        wallet.write().address = None;
    };

    let wallet_read = wallet.read();

    if wallet_read.connected {
        let address = wallet_read.address.clone().unwrap_or_default();
        let short = short_address(&address);

        rsx! {
            div { class: "flex items-center space-x-2",
                span { class: "text-sm text-mid font-mono", "{short}" }
                button {
                    class: "btn btn-secondary text-sm",
                    onclick: disconnect_wallet,
                    "Disconnect"
                }
            }
        }
    } else {
        rsx! {
            button {
                class: "btn btn-primary",
                onclick: move |_| show_dialog.set(true),
                "Connect Wallet"
            }

            if *show_dialog.read() {
                // Modal dialog with the mock provider list
                div { class: "dialog-backdrop",
                    onclick: move |_| show_dialog.set(false),
                    div { class: "dialog elevated elevated-border border rounded-lg p-6",
                        onclick: move |e| e.stop_propagation(),
                        h3 { class: "text-lg font-semibold text-prizm-400 mb-1", "Connect a wallet" }
                        p { class: "text-low text-sm mb-4",
                            "Demo mode: no real wallet is contacted."
                        }
                        div { class: "space-y-2",
                            for (name, description) in WALLET_PROVIDERS.iter().copied() {
                                button {
                                    class: "w-full text-left elevated-control rounded-lg p-3 hover:border-prizm-400 border border-transparent transition-colors",
                                    disabled: *connecting.read(),
                                    onclick: move |_| {
                                        connecting.set(true);
                                        show_dialog.set(false);
                                        wallet_coro.send(WalletAction::Connect(name));
                                    },
                                    p { class: "text-high font-medium", "{name}" }
                                    p { class: "text-low text-sm", "{description}" }
                                }
                            }
                        }
                        button {
                            class: "w-full mt-4 text-low hover:text-mid text-sm",
                            onclick: move |_| show_dialog.set(false),
                            "Cancel"
                        }
                    }
                }
            }

            if *connecting.read() {
                span { class: "ml-2 text-low text-sm animate-pulse", "Connecting..." }
            }
        }
    }
}

/// Abbreviate an address for the nav bar, `0x1234...abcd` style.
fn short_address(address: &str) -> String {
    if address.len() > 10 {
        format!("{}...{}", &address[..6], &address[address.len() - 4..])
    } else {
        address.to_string()
    }
}

/// Fabricate a random hex string shaped like an address.
///
/// This is a stage prop for the demo: it is generated client-side, belongs to
/// no key pair, and must never be treated as a real account.
#[cfg(feature = "web")]
fn mock_address() -> String {
    assemble_address(|| (js_sys::Math::random() * 16.0) as usize)
}

#[cfg(not(feature = "web"))]
fn mock_address() -> String {
    assemble_address(|| 0)
}

/// `0x` followed by 40 hex characters drawn from `nibble`.
fn assemble_address(mut nibble: impl FnMut() -> usize) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";

    let mut address = String::with_capacity(42);
    address.push_str("0x");
    for _ in 0..40 {
        address.push(HEX[nibble() % 16] as char);
    }
    address
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_address_truncates_long_addresses() {
        let address = "0x4f1db04c2ea11fca4c6f0a8a65bce48acbd54a21";
        assert_eq!(short_address(address), "0x4f1d...4a21");
    }

    #[test]
    fn short_address_keeps_short_strings() {
        assert_eq!(short_address("0xabcd"), "0xabcd");
        assert_eq!(short_address(""), "");
    }

    #[test]
    fn assembled_address_has_wallet_shape() {
        let mut counter = 0usize;
        let address = assemble_address(|| {
            counter += 1;
            counter * 7
        });

        assert_eq!(address.len(), 42);
        assert!(address.starts_with("0x"));
        assert!(address[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn assembled_address_wraps_out_of_range_nibbles() {
        let address = assemble_address(|| 16);
        assert_eq!(address, format!("0x{}", "0".repeat(40)));
    }
}
