use crate::cs::trace::{Locale, TraceStep};
use crate::error::{Error, Result};

/// Default ceiling on the target amount accepted by the solvers.
pub const DEFAULT_MAX_AMOUNT: usize = 1_000_000;

/// Configuration options shared by the coin change solvers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Largest amount accepted; `None` disables the check
    pub max_amount: Option<usize>,
    /// Language used by [`Report::log_lines`] callers that follow the config
    pub locale: Locale,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_amount: Some(DEFAULT_MAX_AMOUNT),
            locale: Locale::English,
        }
    }
}

/// Outcome of a single solver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    /// `coins` sums exactly to the target and `coins.len() == count`.
    Found { count: usize, coins: Vec<usize> },
    /// The target cannot be formed by this solver.
    NotFound,
}

impl Solution {
    pub fn is_found(&self) -> bool {
        matches!(self, Solution::Found { .. })
    }

    /// Number of coins used, if a solution was found.
    pub fn count(&self) -> Option<usize> {
        match self {
            Solution::Found { count, .. } => Some(*count),
            Solution::NotFound => None,
        }
    }

    /// Coins in the order they were picked; empty when not found.
    pub fn coins(&self) -> &[usize] {
        match self {
            Solution::Found { coins, .. } => coins,
            Solution::NotFound => &[],
        }
    }
}

/// A solution together with the trace of how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub solution: Solution,
    pub trace: Vec<TraceStep>,
}

impl Report {
    pub fn count(&self) -> Option<usize> {
        self.solution.count()
    }

    pub fn coins(&self) -> &[usize] {
        self.solution.coins()
    }

    /// Coin count with `-1` standing in for "no solution".
    ///
    /// # Examples
    ///
    /// ```
    /// use coinchange::solve_dp;
    ///
    /// assert_eq!(solve_dp(&[2, 4], 7).unwrap().count_or_sentinel(), -1);
    /// assert_eq!(solve_dp(&[2, 4], 8).unwrap().count_or_sentinel(), 2);
    /// ```
    pub fn count_or_sentinel(&self) -> i64 {
        self.count().map_or(-1, |c| c as i64)
    }

    /// Renders every trace step as a display line.
    pub fn log_lines(&self, locale: Locale) -> Vec<String> {
        self.trace.iter().map(|step| step.render(locale)).collect()
    }
}

/// Rejects denominations and amounts the solvers cannot work with.
pub(crate) fn validate(coins: &[usize], amount: usize, config: &SolverConfig) -> Result<()> {
    if coins.contains(&0) {
        return Err(Error::invalid_input("coin denominations must be positive"));
    }
    if let Some(limit) = config.max_amount {
        if amount > limit {
            return Err(Error::AmountTooLarge { amount, limit });
        }
    }
    Ok(())
}
