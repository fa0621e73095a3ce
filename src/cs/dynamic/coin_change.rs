use log::{debug, trace};

use crate::cs::solution::{validate, Report, Solution, SolverConfig};
use crate::cs::trace::TraceStep;
use crate::error::{Error, Result};

/// Sentinel for table entries that cannot (yet) be formed.
const UNREACHABLE: usize = usize::MAX;

/// Computes the minimum number of coins needed to form the target `amount`,
/// together with one optimal set of coins and a trace of every table update.
///
/// This is the "unbounded" variant: each coin can be used any number of times.
/// Amounts are filled bottom-up, and for each amount the coins are tried in the
/// order given. An entry is only updated on a strict improvement, so when several
/// coins tie, the first one in `coins` decides the reconstruction.
///
/// Uses [`SolverConfig::default`]; see [`solve_dp_with`].
///
/// # Examples
///
/// ```
/// use coinchange::{solve_dp, Solution};
///
/// // Minimum 2 coins: 3 + 3 = 6
/// let report = solve_dp(&[1, 3, 4], 6).unwrap();
/// assert_eq!(report.solution, Solution::Found { count: 2, coins: vec![3, 3] });
///
/// // Impossible to form 7 from [2, 4]
/// assert_eq!(solve_dp(&[2, 4], 7).unwrap().solution, Solution::NotFound);
/// ```
///
/// # Complexity
/// * Time: O(amount × coins)
/// * Space: O(amount)
pub fn solve_dp(coins: &[usize], amount: usize) -> Result<Report> {
    solve_dp_with(coins, amount, &SolverConfig::default())
}

/// Same as [`solve_dp`] with an explicit configuration.
///
/// # Errors
/// * `Error::InvalidInput` if a denomination is zero
/// * `Error::AmountTooLarge` if `amount` exceeds `config.max_amount`
pub fn solve_dp_with(coins: &[usize], amount: usize, config: &SolverConfig) -> Result<Report> {
    validate(coins, amount, config)?;
    let size = amount
        .checked_add(1)
        .ok_or_else(|| Error::invalid_input("amount does not fit a DP table"))?;
    debug!("dp: amount={amount}, denominations={}", coins.len());

    // dp[i] holds the minimum number of coins forming i; last[i] the coin that got it there.
    let mut dp = vec![UNREACHABLE; size];
    let mut last = vec![0_usize; size];
    dp[0] = 0;
    let mut steps = Vec::new();

    for curr_amount in 1..=amount {
        for &coin in coins {
            if coin > curr_amount || dp[curr_amount - coin] == UNREACHABLE {
                continue;
            }
            let candidate = dp[curr_amount - coin] + 1;
            if candidate < dp[curr_amount] {
                let step = TraceStep::DpUpdate {
                    index: curr_amount,
                    old: (dp[curr_amount] != UNREACHABLE).then_some(dp[curr_amount]),
                    new: candidate,
                    coin,
                };
                trace!("{step}");
                steps.push(step);
                dp[curr_amount] = candidate;
                last[curr_amount] = coin;
            }
        }
    }

    if dp[amount] == UNREACHABLE {
        debug!("dp: amount {amount} cannot be formed");
        return Ok(Report {
            solution: Solution::NotFound,
            trace: steps,
        });
    }

    // Walk back from the target along the recorded last coins
    let mut used = Vec::with_capacity(dp[amount]);
    let mut remaining = amount;
    while remaining > 0 {
        let coin = last[remaining];
        used.push(coin);
        remaining -= coin;
    }

    debug!("dp: amount {amount} formed with {} coins", dp[amount]);
    Ok(Report {
        solution: Solution::Found {
            count: dp[amount],
            coins: used,
        },
        trace: steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::trace::Locale;

    #[test]
    fn test_min_coins() {
        let report = solve_dp(&[1, 6, 10], 18).unwrap();
        assert_eq!(report.count(), Some(3));
        assert_eq!(report.coins().iter().sum::<usize>(), 18);

        let report = solve_dp(&[1, 3, 4], 6).unwrap();
        assert_eq!(
            report.solution,
            Solution::Found {
                count: 2,
                coins: vec![3, 3]
            }
        );
    }

    #[test]
    fn test_impossible_keeps_trace() {
        let report = solve_dp(&[2, 4], 7).unwrap();
        assert_eq!(report.solution, Solution::NotFound);
        assert!(report.coins().is_empty());
        assert_eq!(report.count_or_sentinel(), -1);
        // dp[2], dp[4], dp[6] reachable; dp[4] and dp[6] improve twice
        assert!(!report.trace.is_empty());
    }

    #[test]
    fn test_zero_amount() {
        let report = solve_dp(&[1, 5, 10], 0).unwrap();
        assert_eq!(
            report.solution,
            Solution::Found {
                count: 0,
                coins: vec![]
            }
        );
        assert!(report.trace.is_empty());
    }

    #[test]
    fn test_empty_coins() {
        assert_eq!(solve_dp(&[], 5).unwrap().solution, Solution::NotFound);
        assert_eq!(solve_dp(&[], 0).unwrap().count(), Some(0));
    }

    #[test]
    fn test_exact_trace() {
        let report = solve_dp(&[1, 2], 3).unwrap();
        assert_eq!(
            report.log_lines(Locale::English),
            vec![
                "dp[1] updated from inf -> 1 (using coin 1)",
                "dp[2] updated from inf -> 2 (using coin 1)",
                "dp[2] updated from 2 -> 1 (using coin 2)",
                "dp[3] updated from inf -> 2 (using coin 1)",
            ]
        );
        assert_eq!(
            report.solution,
            Solution::Found {
                count: 2,
                coins: vec![1, 2]
            }
        );
    }

    #[test]
    fn test_tie_break_first_coin_wins() {
        // dp[6]: 3+3 and 2+4 both use 2 coins; coin 2 improves first
        let report = solve_dp(&[2, 3, 4], 6).unwrap();
        assert_eq!(report.count(), Some(2));
        assert_eq!(report.coins()[0], 2);

        let report = solve_dp(&[3, 2, 4], 6).unwrap();
        assert_eq!(report.coins(), &[3, 3]);
    }

    #[test]
    fn test_duplicate_denominations() {
        let plain = solve_dp(&[1, 5], 7).unwrap();
        let duplicated = solve_dp(&[1, 5, 5, 1], 7).unwrap();
        assert_eq!(plain, duplicated);
    }

    #[test]
    fn test_trace_length_bound() {
        let coins = [1, 3, 4, 7];
        let amount = 50;
        let report = solve_dp(&coins, amount).unwrap();
        assert!(report.trace.len() <= amount * coins.len());
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            solve_dp(&[0, 1], 5),
            Err(Error::InvalidInput(_))
        ));

        let config = SolverConfig {
            max_amount: Some(100),
            ..SolverConfig::default()
        };
        assert_eq!(
            solve_dp_with(&[1], 101, &config),
            Err(Error::AmountTooLarge {
                amount: 101,
                limit: 100
            })
        );
    }
}
