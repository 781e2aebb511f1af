//! Core logic for the Prizmania reward program.
//!
//! Everything the landing page promises is driven by a fixed table of
//! pre-authored payouts keyed on (deposit tier, holding period). This crate
//! owns that table and the lookup over it; it performs no I/O and holds no
//! state.

pub mod consts;
pub mod error;
pub mod reward;

pub use consts::*;
pub use error::*;
pub use reward::*;
