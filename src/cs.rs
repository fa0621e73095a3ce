pub mod dynamic;
pub mod greedy;
pub mod solution;
pub mod trace;

pub use dynamic::{solve_dp, solve_dp_with};
pub use greedy::{solve_greedy, solve_greedy_with};
pub use solution::{Report, Solution, SolverConfig, DEFAULT_MAX_AMOUNT};
pub use trace::{Locale, TraceStep};
