use std::collections::HashMap;

use itertools::Itertools;

use super::info_set::{InfoSetKey, InfoSetNode};

/// Owns every information set touched during one training run. Grows
/// monotonically up to the 12 reachable information sets of the game and
/// is discarded with its trainer.
#[derive(Debug, Default)]
pub struct NodeStore {
    map: HashMap<InfoSetKey, InfoSetNode>,
}

impl NodeStore {
    pub fn new() -> NodeStore {
        NodeStore {
            map: HashMap::new(),
        }
    }

    pub fn get_or_create(&mut self, key: InfoSetKey) -> &mut InfoSetNode {
        self.map.entry(key).or_insert_with(InfoSetNode::new)
    }

    pub fn get(&self, key: &InfoSetKey) -> Option<&InfoSetNode> {
        self.map.get(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// All nodes sorted by key for deterministic reporting.
    pub fn sorted(&self) -> Vec<(InfoSetKey, &InfoSetNode)> {
        self.map
            .iter()
            .map(|(key, node)| (*key, node))
            .sorted_by_key(|(key, _)| *key)
            .collect()
    }

    /// Fold another store into this one by summing accumulators per key.
    pub fn merge(&mut self, other: NodeStore) {
        for (key, node) in other.map {
            self.get_or_create(key).merge(&node);
        }
    }
}
