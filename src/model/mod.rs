pub mod decision_tree;
pub mod game_state;
pub mod message;
