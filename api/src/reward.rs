use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ApiError;

/// A fixed deposit bracket. The discriminant is the deposit amount in PZM.
#[repr(u64)]
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
pub enum Tier {
    Starter = 20,
    Advanced = 250,
    Premium = 2000,
}

impl Tier {
    /// All tiers in display order.
    pub const ALL: [Tier; 3] = [Tier::Starter, Tier::Advanced, Tier::Premium];

    /// The deposit amount in PZM.
    pub fn amount(self) -> u64 {
        self.into()
    }

    /// The holding periods (days) offered for this tier.
    pub fn periods(self) -> &'static [u32] {
        match self {
            Tier::Starter => STARTER_PERIODS,
            Tier::Advanced => ADVANCED_PERIODS,
            Tier::Premium => PREMIUM_PERIODS,
        }
    }

    /// Resolve a raw deposit amount to its tier.
    pub fn from_amount(amount: u64) -> Result<Tier, ApiError> {
        Tier::try_from(amount).map_err(|_| ApiError::UnknownTier(amount))
    }

    fn reward_table(self) -> &'static [(u32, u64)] {
        match self {
            Tier::Starter => STARTER_REWARDS,
            Tier::Advanced => ADVANCED_REWARDS,
            Tier::Premium => PREMIUM_REWARDS,
        }
    }

    fn percent_table(self) -> &'static [(u32, u64)] {
        match self {
            Tier::Starter => STARTER_PERCENTS,
            Tier::Advanced => ADVANCED_PERCENTS,
            Tier::Premium => PREMIUM_PERCENTS,
        }
    }
}

/// The four figures the rewards panel renders for a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardResult {
    /// The deposit itself, always returned in full.
    pub guaranteed_principal: u64,

    /// Absolute reward in PZM, zero when the pair is not in the table.
    pub reward: u64,

    /// Principal plus reward.
    pub total_payout: u64,

    /// Advertised gain in whole percent, zero when the pair is not in the table.
    pub percent_gain: u64,
}

/// Look up the payout for a (tier, period) selection.
///
/// Total over its whole domain: a period with no entry for the tier yields
/// zero reward and zero percent, never an error.
pub fn compute_reward(tier: Tier, period_days: u32) -> RewardResult {
    let principal = tier.amount();
    let reward = table_value(tier.reward_table(), period_days);
    let percent_gain = table_value(tier.percent_table(), period_days);

    RewardResult {
        guaranteed_principal: principal,
        reward,
        total_payout: principal + reward,
        percent_gain,
    }
}

fn table_value(table: &[(u32, u64)], period_days: u32) -> u64 {
    table
        .iter()
        .find(|(days, _)| *days == period_days)
        .map(|(_, value)| *value)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_thirty_days() {
        let result = compute_reward(Tier::Starter, 30);
        assert_eq!(result.guaranteed_principal, 20);
        assert_eq!(result.reward, 20);
        assert_eq!(result.total_payout, 40);
        assert_eq!(result.percent_gain, 30);
    }

    #[test]
    fn advanced_longest_period() {
        let result = compute_reward(Tier::Advanced, 270);
        assert_eq!(result.reward, 6_750);
        assert_eq!(result.total_payout, 7_000);
        assert_eq!(result.percent_gain, 50);
    }

    #[test]
    fn premium_has_no_thirty_day_entry() {
        let result = compute_reward(Tier::Premium, 30);
        assert_eq!(
            result,
            RewardResult {
                guaranteed_principal: 2_000,
                reward: 0,
                total_payout: 2_000,
                percent_gain: 0,
            }
        );
    }

    #[test]
    fn unknown_period_yields_principal_only() {
        for tier in Tier::ALL {
            let result = compute_reward(tier, 7);
            assert_eq!(result.guaranteed_principal, tier.amount());
            assert_eq!(result.reward, 0);
            assert_eq!(result.total_payout, tier.amount());
            assert_eq!(result.percent_gain, 0);
        }
    }

    #[test]
    fn listed_periods_are_all_priced() {
        for tier in Tier::ALL {
            for &days in tier.periods() {
                let result = compute_reward(tier, days);
                assert!(result.reward > 0, "{tier:?} {days}d missing reward");
                assert!(result.percent_gain > 0, "{tier:?} {days}d missing percent");
                assert_eq!(result.total_payout, tier.amount() + result.reward);
            }
        }
    }

    #[test]
    fn lookup_is_idempotent() {
        let first = compute_reward(Tier::Advanced, 180);
        let second = compute_reward(Tier::Advanced, 180);
        assert_eq!(first, second);
    }

    #[test]
    fn tier_from_amount() {
        assert_eq!(Tier::from_amount(250), Ok(Tier::Advanced));
        assert_eq!(Tier::from_amount(21), Err(ApiError::UnknownTier(21)));
    }
}
