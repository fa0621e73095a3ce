use log::{debug, trace};

use crate::cs::solution::{validate, Report, Solution, SolverConfig};
use crate::cs::trace::TraceStep;
use crate::error::Result;

/// Makes change for `amount` by repeatedly taking the largest coin that still fits.
///
/// The denominations are copied and sorted in descending order; the caller's
/// slice is left untouched. This heuristic is not guaranteed to be optimal, and
/// for non-canonical coin systems it can fail even when a solution exists. When
/// it fails, the coins picked along the way are discarded and only the trace
/// (ending in [`TraceStep::GreedyFailed`]) is kept.
///
/// Uses [`SolverConfig::default`]; see [`solve_greedy_with`].
///
/// # Examples
///
/// ```
/// use coinchange::{solve_greedy, Solution};
///
/// // Greedy takes 4 first and ends with three coins, where 3 + 3 needs only two
/// let report = solve_greedy(&[1, 3, 4], 6).unwrap();
/// assert_eq!(report.solution, Solution::Found { count: 3, coins: vec![4, 1, 1] });
///
/// assert_eq!(solve_greedy(&[2, 4], 7).unwrap().solution, Solution::NotFound);
/// ```
///
/// # Complexity
/// * Time: O(coins log coins + number of coins taken)
/// * Space: O(coins)
pub fn solve_greedy(coins: &[usize], amount: usize) -> Result<Report> {
    solve_greedy_with(coins, amount, &SolverConfig::default())
}

/// Same as [`solve_greedy`] with an explicit configuration.
///
/// # Errors
/// * `Error::InvalidInput` if a denomination is zero
/// * `Error::AmountTooLarge` if `amount` exceeds `config.max_amount`
pub fn solve_greedy_with(
    coins: &[usize],
    amount: usize,
    config: &SolverConfig,
) -> Result<Report> {
    validate(coins, amount, config)?;
    debug!("greedy: amount={amount}, denominations={}", coins.len());

    let mut sorted = coins.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut remaining = amount;
    let mut used = Vec::new();
    let mut steps = Vec::new();

    for &coin in &sorted {
        while remaining >= coin {
            remaining -= coin;
            used.push(coin);
            let step = TraceStep::Take { coin, remaining };
            trace!("{step}");
            steps.push(step);
        }
    }

    if remaining != 0 {
        let step = TraceStep::GreedyFailed { remaining };
        trace!("{step}");
        steps.push(step);
        debug!("greedy: stuck with {remaining} left of {amount}");
        return Ok(Report {
            solution: Solution::NotFound,
            trace: steps,
        });
    }

    debug!("greedy: amount {amount} formed with {} coins", used.len());
    Ok(Report {
        solution: Solution::Found {
            count: used.len(),
            coins: used,
        },
        trace: steps,
    })
}
