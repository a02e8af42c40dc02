use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::models::Card;
use crate::traversal::action::ACTION_COUNT;
use crate::traversal::history::History;

/// Everything the acting player can observe: their own card plus the
/// public action history. Two deals reaching the same key are the same
/// decision node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InfoSetKey {
    pub card: Card,
    pub history: History,
}

impl InfoSetKey {
    pub fn new(card: Card, history: History) -> InfoSetKey {
        InfoSetKey { card, history }
    }
}

impl Display for InfoSetKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.history.is_empty() {
            write!(f, "{}", self.card)
        } else {
            write!(f, "{} {}", self.card, self.history)
        }
    }
}

impl Serialize for InfoSetKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Regret and strategy accumulators for one information set. Created
/// lazily on first visit, mutated additively on every visit after that.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfoSetNode {
    pub regret_sum: [f64; ACTION_COUNT],
    pub strategy_sum: [f64; ACTION_COUNT],
}

impl InfoSetNode {
    pub fn new() -> InfoSetNode {
        InfoSetNode::default()
    }

    /// Current mixed strategy through regret matching: the positive part
    /// of the accumulated regrets, normalized, uniform while no action has
    /// positive regret yet. Recomputed on every visit because the regrets
    /// move between iterations. The realization weight feeds the running
    /// strategy average that actually converges.
    pub fn strategy(&mut self, realization_weight: f64) -> [f64; ACTION_COUNT] {
        let mut strategy = [0.0; ACTION_COUNT];
        let mut normalizing_sum = 0.0;
        for a in 0..ACTION_COUNT {
            strategy[a] = self.regret_sum[a].max(0.0);
            normalizing_sum += strategy[a];
        }

        for a in 0..ACTION_COUNT {
            if normalizing_sum > 0.0 {
                strategy[a] /= normalizing_sum;
            } else {
                strategy[a] = 1.0 / ACTION_COUNT as f64;
            }
            self.strategy_sum[a] += realization_weight * strategy[a];
        }
        strategy
    }

    /// Average mixed strategy across all iterations so far. A pure query:
    /// reading it never disturbs the accumulators.
    pub fn average_strategy(&self) -> [f64; ACTION_COUNT] {
        let normalizing_sum: f64 = self.strategy_sum.iter().sum();
        let mut average = [0.0; ACTION_COUNT];
        for a in 0..ACTION_COUNT {
            if normalizing_sum > 0.0 {
                average[a] = self.strategy_sum[a] / normalizing_sum;
            } else {
                average[a] = 1.0 / ACTION_COUNT as f64;
            }
        }
        average
    }

    /// Fold another node's accumulators into this one. Pure addition, so
    /// the order workers are merged in cannot change the result.
    pub fn merge(&mut self, other: &InfoSetNode) {
        for a in 0..ACTION_COUNT {
            self.regret_sum[a] += other.regret_sum[a];
            self.strategy_sum[a] += other.strategy_sum[a];
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::traversal::action::Action;

    use super::*;

    #[test]
    fn test_strategy_uniform_without_regret() {
        let mut node = InfoSetNode::new();
        assert_eq!(node.strategy(1.0), [0.5, 0.5]);
    }

    #[test]
    fn test_strategy_normalizes_positive_regret() {
        let mut node = InfoSetNode::new();
        node.regret_sum = [3.0, 1.0];
        assert_eq!(node.strategy(1.0), [0.75, 0.25]);
    }

    #[test]
    fn test_negative_regret_is_clamped() {
        let mut node = InfoSetNode::new();
        node.regret_sum = [-2.0, 1.0];
        assert_eq!(node.strategy(1.0), [0.0, 1.0]);
    }

    #[test]
    fn test_all_negative_regret_falls_back_to_uniform() {
        let mut node = InfoSetNode::new();
        node.regret_sum = [-2.0, -0.5];
        assert_eq!(node.strategy(1.0), [0.5, 0.5]);
    }

    #[test]
    fn test_strategy_sum_is_realization_weighted() {
        let mut node = InfoSetNode::new();
        node.regret_sum = [3.0, 1.0];
        node.strategy(0.5);
        node.strategy(0.5);
        assert_eq!(node.strategy_sum, [0.75, 0.25]);
    }

    #[test]
    fn test_average_strategy_is_pure() {
        let mut node = InfoSetNode::new();
        node.regret_sum = [1.0, 2.0];
        node.strategy(1.0);
        let before = node.clone();
        let first = node.average_strategy();
        let second = node.average_strategy();
        assert_eq!(first, second);
        assert_eq!(node, before);
    }

    #[test]
    fn test_average_strategy_sums_to_one() {
        let mut node = InfoSetNode::new();
        node.strategy_sum = [0.2, 0.6];
        let average = node.average_strategy();
        assert!((average.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!((average[0] - 0.25).abs() < 1e-12);
        assert!((average[1] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_merge_adds_accumulators() {
        let mut left = InfoSetNode {
            regret_sum: [1.0, -2.0],
            strategy_sum: [0.5, 0.25],
        };
        let right = InfoSetNode {
            regret_sum: [0.5, 1.0],
            strategy_sum: [0.25, 0.75],
        };
        left.merge(&right);
        assert_eq!(left.regret_sum, [1.5, -1.0]);
        assert_eq!(left.strategy_sum, [0.75, 1.0]);
    }

    #[test]
    fn test_key_display() {
        let key = InfoSetKey::new(
            Card::Ace,
            History::from_actions(&[Action::Pass, Action::Bet]),
        );
        assert_eq!(key.to_string(), "A pb");
    }

    #[test]
    fn test_key_orders_by_card_then_history() {
        let queen = InfoSetKey::new(Card::Queen, History::from_actions(&[Action::Bet]));
        let king_early = InfoSetKey::new(Card::King, History::new());
        let king_late = InfoSetKey::new(Card::King, History::from_actions(&[Action::Pass]));
        assert!(queen < king_early);
        assert!(king_early < king_late);
    }
}
