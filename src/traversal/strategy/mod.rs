pub mod info_set;
pub mod node_store;
