#![allow(non_snake_case)]

mod components;
mod pages;
mod route;

use dioxus::prelude::*;
use route::Route;

// Site configuration
pub const SITE_NAME: &str = "PRIZMANIA";
pub const CONTACT_EMAIL: &str = "info@prizmania.com";
pub const TELEGRAM_HANDLE: &str = "@prizmania";
pub const WEBSITE_HOST: &str = "prizmania.com";
pub const PATENT_CERTIFICATE: &str = "No. 2018662596";

static MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "web")]
    {
        tracing_wasm::set_as_global_default();
        dioxus::launch(App);
    }

    #[cfg(feature = "desktop")]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    // Global state providers
    use_context_provider(|| Signal::new(WalletState::default()));

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}

// Global state types
#[derive(Clone, Default, Debug)]
pub struct WalletState {
    pub connected: bool,
    /// Demo address fabricated client-side. Never a real wallet.
    pub address: Option<String>,
    /// Transient toast text, cleared a few seconds after it is set.
    pub notice: Option<String>,
}
