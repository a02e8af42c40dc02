pub mod config;
mod matchers;
mod models;
mod thread_utils;
mod traversal;

pub use matchers::rps::{evaluate as evaluate_rps, RpsAgent, RpsMove};
pub use models::{Card, Deal, Deck, Player};
pub use traversal::action::{Action, ACTION_COUNT};
pub use traversal::history::History;
pub use traversal::main_train::{train_sharded, StrategyLine, Trainer, TrainingReport};
pub use traversal::strategy::info_set::{InfoSetKey, InfoSetNode};
pub use traversal::strategy::node_store::NodeStore;
