use std::fmt::Display;

use rand::Rng;

/// Number of moves in the one-shot game
pub const RPS_ACTION_COUNT: usize = 3;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RpsMove {
    Rock,
    Paper,
    Scissors,
}

impl Display for RpsMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RpsMove::Rock => write!(f, "rock"),
            RpsMove::Paper => write!(f, "paper"),
            RpsMove::Scissors => write!(f, "scissors"),
        }
    }
}

impl RpsMove {
    pub fn from_index(index: usize) -> RpsMove {
        match index {
            0 => RpsMove::Rock,
            1 => RpsMove::Paper,
            2 => RpsMove::Scissors,
            _ => panic!("Invalid move"),
        }
    }

    pub fn to_index(&self) -> usize {
        match self {
            RpsMove::Rock => 0,
            RpsMove::Paper => 1,
            RpsMove::Scissors => 2,
        }
    }
}

/// 1.0 if `own` beats `other`, -1.0 if it loses, 0.0 on a draw.
pub fn evaluate(own: RpsMove, other: RpsMove) -> f64 {
    if own == other {
        return 0.0;
    }
    match (own, other) {
        (RpsMove::Rock, RpsMove::Scissors)
        | (RpsMove::Paper, RpsMove::Rock)
        | (RpsMove::Scissors, RpsMove::Paper) => 1.0,
        _ => -1.0,
    }
}

/// Regret-matching agent for the one-shot game: the same accumulators as
/// an information set node, with no tree above them. Its time-average
/// strategy converges to the uniform equilibrium in self-play.
#[derive(Debug, Default)]
pub struct RpsAgent {
    regret_sum: [f64; RPS_ACTION_COUNT],
    strategy_sum: [f64; RPS_ACTION_COUNT],
}

impl RpsAgent {
    pub fn new() -> RpsAgent {
        RpsAgent::default()
    }

    /// Current mixed strategy through regret matching, accumulated into
    /// the running average as a side effect.
    pub fn strategy(&mut self) -> [f64; RPS_ACTION_COUNT] {
        let mut strategy = [0.0; RPS_ACTION_COUNT];
        let mut normalizing_sum = 0.0;
        for a in 0..RPS_ACTION_COUNT {
            strategy[a] = self.regret_sum[a].max(0.0);
            normalizing_sum += strategy[a];
        }
        for a in 0..RPS_ACTION_COUNT {
            if normalizing_sum > 0.0 {
                strategy[a] /= normalizing_sum;
            } else {
                strategy[a] = 1.0 / RPS_ACTION_COUNT as f64;
            }
            self.strategy_sum[a] += strategy[a];
        }
        strategy
    }

    /// Sample one move from the current mixed strategy.
    pub fn act(&mut self, rng: &mut impl Rng) -> RpsMove {
        let strategy = self.strategy();
        let mut r = rng.gen_range(0.0..1.0);
        for a in 0..RPS_ACTION_COUNT {
            r -= strategy[a];
            if r <= 0.0 {
                return RpsMove::from_index(a);
            }
        }
        RpsMove::from_index(RPS_ACTION_COUNT - 1) // Floating point slack
    }

    /// Accumulate regret against the move the opponent actually made.
    pub fn observe(&mut self, own: RpsMove, opponent: RpsMove) {
        let achieved = evaluate(own, opponent);
        for a in 0..RPS_ACTION_COUNT {
            self.regret_sum[a] += evaluate(RpsMove::from_index(a), opponent) - achieved;
        }
    }

    pub fn average_strategy(&self) -> [f64; RPS_ACTION_COUNT] {
        let normalizing_sum: f64 = self.strategy_sum.iter().sum();
        let mut average = [0.0; RPS_ACTION_COUNT];
        for a in 0..RPS_ACTION_COUNT {
            if normalizing_sum > 0.0 {
                average[a] = self.strategy_sum[a] / normalizing_sum;
            } else {
                average[a] = 1.0 / RPS_ACTION_COUNT as f64;
            }
        }
        average
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(RpsMove::Rock, RpsMove::Scissors, 1.0)]
    #[case(RpsMove::Paper, RpsMove::Rock, 1.0)]
    #[case(RpsMove::Scissors, RpsMove::Paper, 1.0)]
    #[case(RpsMove::Scissors, RpsMove::Rock, -1.0)]
    #[case(RpsMove::Rock, RpsMove::Rock, 0.0)]
    fn test_evaluate(#[case] own: RpsMove, #[case] other: RpsMove, #[case] expected: f64) {
        assert_eq!(evaluate(own, other), expected);
        assert_eq!(evaluate(other, own), -expected);
    }

    #[test]
    fn test_fresh_agent_mixes_uniformly() {
        let mut agent = RpsAgent::new();
        let third = 1.0 / 3.0;
        assert_eq!(agent.strategy(), [third, third, third]);
    }

    #[test]
    fn test_exploits_a_constant_opponent() {
        let mut agent = RpsAgent::new();
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..10_000 {
            let own = agent.act(&mut rng);
            agent.observe(own, RpsMove::Rock);
        }
        let average = agent.average_strategy();
        assert!(
            average[RpsMove::Paper.to_index()] > 0.8,
            "should learn to play paper: {:?}",
            average
        );
    }

    #[test]
    fn test_self_play_converges_to_uniform() {
        let mut left = RpsAgent::new();
        let mut right = RpsAgent::new();
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..50_000 {
            let left_move = left.act(&mut rng);
            let right_move = right.act(&mut rng);
            left.observe(left_move, right_move);
            right.observe(right_move, left_move);
        }
        for agent in [&left, &right] {
            for &p in &agent.average_strategy() {
                assert!((p - 1.0 / 3.0).abs() < 0.05, "{:?}", agent.average_strategy());
            }
        }
    }
}
