pub mod compare;
pub mod cs;
pub mod error;
pub mod input;

pub use compare::{
    coin_usage, compare, compare_batch, compare_with, Comparison, DenominationStats, Verdict,
};
pub use cs::{
    solve_dp, solve_dp_with, solve_greedy, solve_greedy_with, Locale, Report, Solution,
    SolverConfig, TraceStep, DEFAULT_MAX_AMOUNT,
};
pub use error::{Error, Result};
pub use input::{parse_denominations, validate_amount, Preset, AMOUNT_RANGE};
