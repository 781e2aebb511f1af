//! Authored reward tables.
//!
//! The figures below are marketing constants, not the output of a formula.
//! The reward and percent tables for a tier are parallel but independent;
//! do not try to derive one from the other.

/// Holding periods (days) offered per tier, in display order.
pub const STARTER_PERIODS: &[u32] = &[30, 90, 180];
pub const ADVANCED_PERIODS: &[u32] = &[90, 180, 270];
pub const PREMIUM_PERIODS: &[u32] = &[90, 180, 360];

/// Absolute reward (PZM) keyed on period days.
pub const STARTER_REWARDS: &[(u32, u64)] = &[(30, 20), (90, 60), (180, 140)];
pub const ADVANCED_REWARDS: &[(u32, u64)] = &[(90, 500), (180, 2_250), (270, 6_750)];
pub const PREMIUM_REWARDS: &[(u32, u64)] = &[(90, 5_000), (180, 16_000), (360, 58_000)];

/// Advertised gain (whole percent) keyed on period days.
pub const STARTER_PERCENTS: &[(u32, u64)] = &[(30, 30), (90, 35), (180, 40)];
pub const ADVANCED_PERCENTS: &[(u32, u64)] = &[(90, 35), (180, 45), (270, 50)];
pub const PREMIUM_PERCENTS: &[(u32, u64)] = &[(90, 40), (180, 55), (360, 60)];
