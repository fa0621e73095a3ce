pub mod coin_change;

pub use coin_change::{solve_greedy, solve_greedy_with};
