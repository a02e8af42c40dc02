use std::fmt::{Display, Formatter};

use indicatif::ProgressBar;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::PROGRESS_TICK;
use crate::models::{Deal, Deck, Player};
use crate::thread_utils::with_rng;

use super::action::{Action, ACTION_COUNT};
use super::history::History;
use super::strategy::info_set::InfoSetKey;
use super::strategy::node_store::NodeStore;
use super::terminal_state::{check_terminal, evaluate_terminal, TerminalState};

/// Depth-first walker for a single dealt hand. Carries the store it is
/// allowed to grow and accumulates regret on the way back up.
struct TreeWalker<'a> {
    store: &'a mut NodeStore,
    deal: Deal,
}

impl<'a> TreeWalker<'a> {
    fn new(store: &'a mut NodeStore, deal: Deal) -> TreeWalker<'a> {
        TreeWalker { store, deal }
    }

    /// Counterfactual utility of the subtree under `history` for the
    /// player on move there. `p0` and `p1` are each player's own reach
    /// probability, the product of their strategy choices along the path.
    fn cfr(&mut self, history: History, p0: f64, p1: f64) -> f64 {
        let player = history.player_to_act();

        let terminal = check_terminal(&history);
        if terminal != TerminalState::None {
            return evaluate_terminal(&terminal, &history, &self.deal, player);
        }

        let key = InfoSetKey::new(self.deal.card_of(player), history);
        let realization_weight = match player {
            Player::First => p0,
            Player::Second => p1,
        };
        let strategy = self.store.get_or_create(key).strategy(realization_weight);

        let mut utilities = [0.0; ACTION_COUNT];
        let mut node_utility = 0.0;
        for a in 0..ACTION_COUNT {
            let next = history.with(Action::from_index(a));
            // The recursive call answers from the opponent's seat
            utilities[a] = match player {
                Player::First => -self.cfr(next, p0 * strategy[a], p1),
                Player::Second => -self.cfr(next, p0, p1 * strategy[a]),
            };
            node_utility += strategy[a] * utilities[a];
        }

        // Counterfactual regret: weighted by how often everyone but the
        // acting player lets the game get here
        let opponent_reach = match player {
            Player::First => p1,
            Player::Second => p0,
        };
        let node = self.store.get_or_create(key);
        for a in 0..ACTION_COUNT {
            node.regret_sum[a] += opponent_reach * (utilities[a] - node_utility);
        }

        node_utility
    }
}

/// Drives CFR iterations over random deals and owns the node store for
/// the lifetime of the run.
pub struct Trainer {
    store: NodeStore,
    deck: Deck,
    rng: SmallRng,
}

impl Trainer {
    pub fn new() -> Trainer {
        Trainer::from_seed(with_rng(|rng| rng.gen()))
    }

    /// Seeded trainer: replaying a seed reproduces the accumulators exactly.
    pub fn from_seed(seed: u64) -> Trainer {
        Trainer {
            store: NodeStore::new(),
            deck: Deck::new(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn train(&mut self, iterations: usize) -> TrainingReport {
        let total_utility = self.run(iterations, None);
        build_report(&self.store, total_utility / iterations as f64)
    }

    fn run(&mut self, iterations: usize, progress: Option<&ProgressBar>) -> f64 {
        if iterations == 0 {
            panic!("Training requires at least one iteration");
        }
        let mut total_utility = 0.0;
        for i in 0..iterations {
            let deal = self.deck.deal_with(&mut self.rng);
            let mut walker = TreeWalker::new(&mut self.store, deal);
            total_utility += walker.cfr(History::new(), 1.0, 1.0);
            if let Some(progress) = progress {
                if (i + 1) % PROGRESS_TICK == 0 {
                    progress.inc(PROGRESS_TICK as u64);
                }
            }
        }
        if let Some(progress) = progress {
            progress.inc((iterations % PROGRESS_TICK) as u64);
        }
        total_utility
    }

    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    fn into_store(self) -> NodeStore {
        self.store
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Trainer::new()
    }
}

/// Shards iterations across rayon workers, each training on a private
/// store with its own derived seed, then sums the accumulators. Regret
/// and strategy updates commute under addition, so the merged result
/// does not depend on which shard finishes first.
pub fn train_sharded(iterations: usize, workers: usize, seed: u64) -> TrainingReport {
    if iterations == 0 {
        panic!("Training requires at least one iteration");
    }
    if workers == 0 {
        panic!("Training requires at least one worker");
    }
    let progress = ProgressBar::new(iterations as u64);
    let shards: Vec<usize> = (0..workers)
        .map(|w| iterations / workers + usize::from(w < iterations % workers))
        .collect();

    let results: Vec<(f64, Trainer)> = shards
        .into_par_iter()
        .enumerate()
        .filter(|(_, share)| *share > 0)
        .map(|(w, share)| {
            let mut trainer = Trainer::from_seed(seed.wrapping_add(w as u64));
            let total_utility = trainer.run(share, Some(&progress));
            (total_utility, trainer)
        })
        .collect();
    progress.finish_and_clear();

    let mut total_utility = 0.0;
    let mut merged = NodeStore::new();
    for (shard_utility, trainer) in results {
        total_utility += shard_utility;
        merged.merge(trainer.into_store());
    }
    build_report(&merged, total_utility / iterations as f64)
}

/// Outcome of a training run: the estimated game value for the first
/// player and the converged average strategy at every information set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingReport {
    pub game_value: f64,
    pub strategies: Vec<StrategyLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyLine {
    pub info_set: InfoSetKey,
    pub avg_strategy: [f64; ACTION_COUNT],
}

fn build_report(store: &NodeStore, game_value: f64) -> TrainingReport {
    TrainingReport {
        game_value,
        strategies: store
            .sorted()
            .into_iter()
            .map(|(key, node)| StrategyLine {
                info_set: key,
                avg_strategy: node.average_strategy(),
            })
            .collect(),
    }
}

impl Display for TrainingReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Average game value: {:.4}", self.game_value)?;
        writeln!(f, "info set  [pass, bet]")?;
        for line in &self.strategies {
            writeln!(
                f,
                "{:<8}  [{:.3}, {:.3}]",
                line.info_set.to_string(),
                line.avg_strategy[0],
                line.avg_strategy[1]
            )?;
        }
        Ok(())
    }
}
