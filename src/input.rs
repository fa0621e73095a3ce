//! Parsing and validation of raw user input, ahead of the solvers.

use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Amounts accepted from interactive input.
pub const AMOUNT_RANGE: RangeInclusive<usize> = 1..=10_000;

/// Parses a comma-separated list of coin values such as `"1, 5, 10, 25"`.
///
/// Tokens that are not plain digit strings are skipped, as are zeros. The
/// result is deduplicated and sorted ascending.
///
/// # Errors
/// * `Error::Parse` if a digit string does not fit in `usize`
/// * `Error::EmptyDenominations` if nothing usable remains
///
/// # Examples
///
/// ```
/// use coinchange::parse_denominations;
///
/// assert_eq!(parse_denominations("10, 1,x, 5,10").unwrap(), vec![1, 5, 10]);
/// assert!(parse_denominations("a,b").is_err());
/// ```
pub fn parse_denominations(text: &str) -> Result<Vec<usize>> {
    let mut coins = Vec::new();
    for token in text.split(',').map(str::trim) {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        let coin: usize = token
            .parse()
            .map_err(|e| Error::Parse(format!("coin value '{token}': {e}")))?;
        if coin > 0 {
            coins.push(coin);
        }
    }

    coins.sort_unstable();
    coins.dedup();
    if coins.is_empty() {
        return Err(Error::EmptyDenominations);
    }
    Ok(coins)
}

/// Checks that `amount` lies within `range`.
pub fn validate_amount(amount: usize, range: &RangeInclusive<usize>) -> Result<usize> {
    if range.contains(&amount) {
        Ok(amount)
    } else {
        Err(Error::invalid_input(format!(
            "amount {amount} must be between {} and {}",
            range.start(),
            range.end()
        )))
    }
}

/// Common real-world coin systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Us,
    Euro,
    Uk,
}

impl Preset {
    pub fn denominations(&self) -> Vec<usize> {
        match self {
            Preset::Us => vec![1, 5, 10, 25],
            Preset::Euro | Preset::Uk => vec![1, 2, 5, 10, 20, 50],
        }
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "us" => Ok(Preset::Us),
            "euro" | "eu" => Ok(Preset::Euro),
            "uk" => Ok(Preset::Uk),
            other => Err(Error::Parse(format!("unknown preset '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_junk_and_zero() {
        assert_eq!(
            parse_denominations(" 25,10 ,, 5 ,-1, 2.5, 0, 1").unwrap(),
            vec![1, 5, 10, 25]
        );
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_denominations(""), Err(Error::EmptyDenominations));
        assert_eq!(parse_denominations("0,0"), Err(Error::EmptyDenominations));
    }

    #[test]
    fn test_parse_overflow() {
        assert!(matches!(
            parse_denominations("1,999999999999999999999999999"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount(11, &AMOUNT_RANGE), Ok(11));
        assert!(validate_amount(0, &AMOUNT_RANGE).is_err());
        assert!(validate_amount(10_001, &AMOUNT_RANGE).is_err());
    }

    #[test]
    fn test_presets() {
        assert_eq!("US".parse::<Preset>(), Ok(Preset::Us));
        assert_eq!(Preset::Us.denominations(), vec![1, 5, 10, 25]);
        assert_eq!(Preset::Uk.denominations(), Preset::Euro.denominations());
        assert!("yen".parse::<Preset>().is_err());
    }
}
