//! Structured trace records emitted by the coin change solvers.
//!
//! Solvers record what they did as [`TraceStep`] values. Turning a step into a
//! human-readable line happens only at the boundary, through [`TraceStep::render`]
//! or the `Display` impl (English).

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Language used when rendering trace lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    English,
    /// Bahasa Indonesia, matching the phrasing of the original solver logs
    Indonesian,
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "id" | "indonesian" => Ok(Locale::Indonesian),
            other => Err(Error::Parse(format!("unknown locale '{other}'"))),
        }
    }
}

/// One state-changing step taken by a solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceStep {
    /// `dp[index]` strictly improved from `old` (`None` = unreachable) to `new` using `coin`.
    DpUpdate {
        index: usize,
        old: Option<usize>,
        new: usize,
        coin: usize,
    },
    /// Greedy took `coin`, leaving `remaining`.
    Take { coin: usize, remaining: usize },
    /// Greedy ran out of denominations with `remaining` still unpaid.
    GreedyFailed { remaining: usize },
}

/// Table value as printed in trace lines; unreachable entries print as `inf`.
struct TableValue(Option<usize>);

impl fmt::Display for TableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("inf"),
        }
    }
}

impl TraceStep {
    /// Renders this step as a single log line in the given locale.
    ///
    /// # Examples
    ///
    /// ```
    /// use coinchange::cs::{Locale, TraceStep};
    ///
    /// let step = TraceStep::DpUpdate { index: 3, old: None, new: 1, coin: 3 };
    /// assert_eq!(step.render(Locale::English), "dp[3] updated from inf -> 1 (using coin 3)");
    /// assert_eq!(step.render(Locale::Indonesian), "dp[3] diperbarui dari inf -> 1 (pakai koin 3)");
    /// ```
    pub fn render(&self, locale: Locale) -> String {
        match (*self, locale) {
            (TraceStep::DpUpdate { index, old, new, coin }, Locale::English) => format!(
                "dp[{index}] updated from {} -> {new} (using coin {coin})",
                TableValue(old)
            ),
            (TraceStep::DpUpdate { index, old, new, coin }, Locale::Indonesian) => format!(
                "dp[{index}] diperbarui dari {} -> {new} (pakai koin {coin})",
                TableValue(old)
            ),
            (TraceStep::Take { coin, remaining }, Locale::English) => {
                format!("Take coin {coin}, remaining: {remaining}")
            }
            (TraceStep::Take { coin, remaining }, Locale::Indonesian) => {
                format!("Ambil koin {coin}, sisa: {remaining}")
            }
            (TraceStep::GreedyFailed { .. }, Locale::English) => {
                "Cannot form the target amount with greedy.".to_string()
            }
            (TraceStep::GreedyFailed { .. }, Locale::Indonesian) => {
                "Tidak bisa membentuk jumlah target dengan greedy.".to_string()
            }
        }
    }
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Locale::English))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dp_update_keeps_value_order() {
        let step = TraceStep::DpUpdate {
            index: 6,
            old: Some(3),
            new: 2,
            coin: 3,
        };
        assert_eq!(step.to_string(), "dp[6] updated from 3 -> 2 (using coin 3)");
    }

    #[test]
    fn test_greedy_lines() {
        let take = TraceStep::Take {
            coin: 4,
            remaining: 2,
        };
        assert_eq!(take.render(Locale::English), "Take coin 4, remaining: 2");
        assert_eq!(take.render(Locale::Indonesian), "Ambil koin 4, sisa: 2");

        let failed = TraceStep::GreedyFailed { remaining: 1 };
        assert_eq!(
            failed.render(Locale::Indonesian),
            "Tidak bisa membentuk jumlah target dengan greedy."
        );
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::English));
        assert_eq!(" Indonesian ".parse::<Locale>(), Ok(Locale::Indonesian));
        assert!("fr".parse::<Locale>().is_err());
    }
}
