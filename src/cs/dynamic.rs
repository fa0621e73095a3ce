pub mod coin_change;

// Re-export dynamic programming algorithms with descriptive names
pub use coin_change::{solve_dp, solve_dp_with};
