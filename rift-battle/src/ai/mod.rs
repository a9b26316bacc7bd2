mod heuristic;
mod random;
mod selector;

pub use heuristic::HeuristicSelector;
pub use random::RandomSelector;
pub use selector::{
    MoveSelection,
    MoveSelector,
    legal_targets,
};
