mod layout;
mod faq;
mod reward_calculator;
mod wallet_button;

pub use layout::{scroll_to_section, Layout};
pub use faq::FaqAccordion;
pub use reward_calculator::RewardCalculator;
pub use wallet_button::WalletButton;
