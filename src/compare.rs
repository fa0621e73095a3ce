//! Side-by-side runs of the DP and greedy solvers.
//!
//! The solvers never talk to each other; this module runs both on the same
//! input and summarizes how the greedy answer stands against the optimum.

use std::collections::BTreeMap;

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::cs::{solve_dp_with, solve_greedy_with, Report, SolverConfig};
use crate::error::Result;

/// How the greedy result compares with the DP optimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Greedy used as few coins as DP.
    GreedyOptimal,
    /// Greedy succeeded but needed `extra_coins` more than DP.
    GreedySuboptimal { extra_coins: usize },
    /// DP found a solution, greedy did not.
    GreedyFailed,
    /// Neither solver can form the amount.
    Unsolvable,
}

/// Results of both solvers for one amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub amount: usize,
    pub dp: Report,
    pub greedy: Report,
}

impl Comparison {
    pub fn verdict(&self) -> Verdict {
        match (self.dp.count(), self.greedy.count()) {
            (Some(best), Some(greedy)) if greedy == best => Verdict::GreedyOptimal,
            (Some(best), Some(greedy)) => Verdict::GreedySuboptimal {
                extra_coins: greedy.saturating_sub(best),
            },
            (Some(_), None) => Verdict::GreedyFailed,
            // DP is exhaustive, so greedy cannot succeed where it fails
            (None, _) => Verdict::Unsolvable,
        }
    }
}

/// Runs both solvers on `coins` and `amount` with the default configuration.
///
/// # Examples
///
/// ```
/// use coinchange::{compare, Verdict};
///
/// let comparison = compare(&[1, 3, 4], 6).unwrap();
/// assert_eq!(comparison.verdict(), Verdict::GreedySuboptimal { extra_coins: 1 });
/// ```
pub fn compare(coins: &[usize], amount: usize) -> Result<Comparison> {
    compare_with(coins, amount, &SolverConfig::default())
}

pub fn compare_with(coins: &[usize], amount: usize, config: &SolverConfig) -> Result<Comparison> {
    let dp = solve_dp_with(coins, amount, config)?;
    let greedy = solve_greedy_with(coins, amount, config)?;
    let comparison = Comparison { amount, dp, greedy };
    debug!("compare: amount={amount}, verdict={:?}", comparison.verdict());
    Ok(comparison)
}

/// Compares the solvers for every amount in `amounts`, in order.
///
/// With the `parallel` feature the amounts are solved on the rayon pool.
pub fn compare_batch(coins: &[usize], amounts: &[usize]) -> Result<Vec<Comparison>> {
    let config = SolverConfig::default();

    #[cfg(feature = "parallel")]
    let results: Result<Vec<Comparison>> = amounts
        .par_iter()
        .map(|&amount| compare_with(coins, amount, &config))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results: Result<Vec<Comparison>> = amounts
        .iter()
        .map(|&amount| compare_with(coins, amount, &config))
        .collect();

    results
}

/// Counts how many times each denomination appears in `coins`.
///
/// # Examples
///
/// ```
/// use coinchange::coin_usage;
///
/// let usage = coin_usage(&[4, 1, 1]);
/// assert_eq!(usage.get(&1), Some(&2));
/// assert_eq!(usage.get(&4), Some(&1));
/// ```
pub fn coin_usage(coins: &[usize]) -> BTreeMap<usize, usize> {
    let mut usage = BTreeMap::new();
    for &coin in coins {
        *usage.entry(coin).or_insert(0) += 1;
    }
    usage
}

/// Quick facts about a denomination set and target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenominationStats {
    pub amount: usize,
    pub denominations: usize,
    pub largest: usize,
    pub smallest: usize,
}

impl DenominationStats {
    /// Returns `None` when `coins` is empty.
    pub fn new(coins: &[usize], amount: usize) -> Option<Self> {
        Some(Self {
            amount,
            denominations: coins.len(),
            largest: *coins.iter().max()?,
            smallest: *coins.iter().min()?,
        })
    }
}
