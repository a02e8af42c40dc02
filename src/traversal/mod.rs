pub mod action;
pub mod history;
pub mod main_train;
pub mod strategy;
pub mod terminal_state;
