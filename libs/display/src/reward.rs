//! Block reward breakdown.
//!
//! The indexer reports a block's producer payout as one entry of a rewards
//! array, alongside the total collected transaction fees and the burnt
//! portion. The figure shown as "static reward" is derived: what the
//! producer received minus the fees that passed through, plus what was
//! burnt before reaching anyone.

use serde::{Deserialize, Serialize};
use tracing::warn;

use chainscope_units::{format_quantity, ratio, ChainCurrency, FormatOptions, Quantity, Ratio};

/// Reward-type labels that mark the block producer's payout entry.
const PRODUCER_REWARD_TYPES: [&str; 2] = ["Miner Reward", "Validator Reward"];

/// One entry of a block's `rewards` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub reward: Quantity,
}

/// Exact components of a block's reward display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockRewards {
    /// Producer payout as reported by the indexer.
    pub total: Quantity,
    /// Base issuance: `total - tx_fees + burnt_fees`. Signed, because odd
    /// indexer data can push it below zero and hiding that would be worse.
    pub static_reward: Quantity,
    pub tx_fees: Quantity,
    pub burnt_fees: Quantity,
}

/// Whole-coin strings for the breakdown line (`static + fees - burnt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewardBreakdown {
    pub total: String,
    pub static_reward: String,
    pub tx_fees: String,
    pub burnt_fees: String,
}

impl BlockRewards {
    /// Assemble the breakdown from raw api fields.
    ///
    /// The first miner/validator entry wins; the indexer is not supposed to
    /// send more than one, so extras are dropped with a warning.
    pub fn compute(entries: &[RewardEntry], tx_fees: Quantity, burnt_fees: Quantity) -> Self {
        let mut producer: Option<Quantity> = None;
        for entry in entries {
            if !PRODUCER_REWARD_TYPES.contains(&entry.kind.as_str()) {
                continue;
            }
            if producer.is_some() {
                warn!(
                    "ignoring duplicate producer reward entry of type '{}'",
                    entry.kind
                );
                continue;
            }
            producer = Some(entry.reward.clone());
        }

        let total = producer.unwrap_or_else(Quantity::zero);
        let static_reward = total.clone() - tx_fees.clone() + burnt_fees.clone();
        BlockRewards {
            total,
            static_reward,
            tx_fees,
            burnt_fees,
        }
    }

    /// Share of collected fees that was burnt. `Undefined` when the block
    /// collected no fees at all.
    pub fn burnt_share(&self) -> Ratio {
        ratio(&self.burnt_fees, &self.tx_fees)
    }

    /// Render every component at the whole-coin denomination, full precision.
    pub fn breakdown(&self, currency: &ChainCurrency) -> RewardBreakdown {
        let opts = FormatOptions::default();
        let coin = |q: &Quantity| format_quantity(q, currency.decimals, &opts);
        RewardBreakdown {
            total: coin(&self.total),
            static_reward: coin(&self.static_reward),
            tx_fees: coin(&self.tx_fees),
            burnt_fees: coin(&self.burnt_fees),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quantity(raw: &str) -> Quantity {
        Quantity::parse(raw).unwrap()
    }

    fn entry(kind: &str, reward: &str) -> RewardEntry {
        RewardEntry {
            kind: kind.to_string(),
            reward: quantity(reward),
        }
    }

    #[test]
    fn derives_static_reward_from_the_producer_entry() {
        let rewards = BlockRewards::compute(
            &[entry("Miner Reward", "2000000000000000000")],
            quantity("30000000000000000"),
            quantity("10000000000000000"),
        );
        assert_eq!(rewards.total, quantity("2000000000000000000"));
        assert_eq!(rewards.static_reward, quantity("1980000000000000000"));
    }

    #[test]
    fn validator_label_counts_as_producer() {
        let rewards = BlockRewards::compute(
            &[
                entry("Uncle Reward", "100"),
                entry("Validator Reward", "5000"),
            ],
            Quantity::zero(),
            Quantity::zero(),
        );
        assert_eq!(rewards.total, quantity("5000"));
    }

    #[test]
    fn first_producer_entry_wins() {
        let rewards = BlockRewards::compute(
            &[
                entry("Miner Reward", "5000"),
                entry("Validator Reward", "7000"),
            ],
            Quantity::zero(),
            Quantity::zero(),
        );
        assert_eq!(rewards.total, quantity("5000"));
    }

    #[test]
    fn missing_producer_entry_means_zero_reward() {
        let rewards = BlockRewards::compute(
            &[entry("Uncle Reward", "100")],
            quantity("30"),
            quantity("10"),
        );
        assert_eq!(rewards.total, Quantity::zero());
        // zero minus fees plus burnt: negative, and visibly so
        assert_eq!(rewards.static_reward, quantity("-20"));
    }

    #[test]
    fn component_order_does_not_change_the_sum() {
        let a = BlockRewards::compute(
            &[entry("Miner Reward", "2000000000000000000")],
            quantity("30000000000000000"),
            quantity("10000000000000000"),
        );
        // reconstruct total from the parts in a different order
        let reassembled: Quantity = [
            a.burnt_fees.clone(),
            a.static_reward.clone(),
            a.tx_fees.clone(),
        ]
        .into_iter()
        .sum::<Quantity>()
            - a.burnt_fees.clone()
            - a.burnt_fees.clone();
        let direct = a.static_reward.clone() + a.tx_fees.clone() - a.burnt_fees.clone();
        assert_eq!(direct, a.total);
        assert_eq!(reassembled, a.total);
    }

    #[test]
    fn burnt_share_handles_fee_free_blocks() {
        let rewards = BlockRewards::compute(&[], Quantity::zero(), Quantity::zero());
        assert!(rewards.burnt_share().is_undefined());

        let busy = BlockRewards::compute(
            &[entry("Miner Reward", "0")],
            quantity("40"),
            quantity("10"),
        );
        assert_eq!(busy.burnt_share().to_f64(), Some(0.25));
    }

    #[test]
    fn breakdown_renders_whole_coins() {
        let rewards = BlockRewards::compute(
            &[entry("Miner Reward", "2000000000000000000")],
            quantity("30000000000000000"),
            quantity("10000000000000000"),
        );
        let formatted = rewards.breakdown(&ChainCurrency::eth());
        assert_eq!(formatted.total, "2");
        assert_eq!(formatted.static_reward, "1.98");
        assert_eq!(formatted.tx_fees, "0.03");
        assert_eq!(formatted.burnt_fees, "0.01");
    }

    #[test]
    fn reward_entries_deserialize_from_api_json() {
        let entries: Vec<RewardEntry> = serde_json::from_str(
            r#"[{ "type": "Miner Reward", "reward": "2000000000000000000" }]"#,
        )
        .unwrap();
        assert_eq!(entries[0].kind, "Miner Reward");
        assert_eq!(entries[0].reward, quantity("2000000000000000000"));
    }
}
