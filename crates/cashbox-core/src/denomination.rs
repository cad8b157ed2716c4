//! # Denominations
//!
//! The fixed ladder of banknote and coin face values the register handles.
//!
//! ```text
//! 500 · 200 · 100 · 50 · 20 · 10 · 5 · 2 · 1 · 0.5 · 0.2 · 0.1 · 0.05
//! ◄──────────── DENOMINATIONS (descending, "large first") ────────────
//! ```
//!
//! A [`Denomination`] can only be built for a member of this ladder, so an
//! inventory keyed by `Denomination` can never hold a stray key.
//!
//! ## Wire Format
//! Denominations travel as the shortest decimal string of their face value,
//! the same keys a JSON client would produce from a number: `"500"`, `"0.5"`,
//! `"0.05"`. Parsing also accepts padded forms such as `"0.50"` or `"1.0"`.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;

/// A face value from the fixed ladder, stored in cents.
///
/// Ordering is by face value, so a `BTreeMap<Denomination, _>` iterates
/// smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Denomination(i64);

/// Every denomination the register handles, largest first.
pub const DENOMINATIONS: [Denomination; 13] = [
    Denomination(50_000),
    Denomination(20_000),
    Denomination(10_000),
    Denomination(5_000),
    Denomination(2_000),
    Denomination(1_000),
    Denomination(500),
    Denomination(200),
    Denomination(100),
    Denomination(50),
    Denomination(20),
    Denomination(10),
    Denomination(5),
];

impl Denomination {
    /// Looks up the ladder entry worth `cents`.
    ///
    /// ## Example
    /// ```rust
    /// use cashbox_core::Denomination;
    ///
    /// assert!(Denomination::from_cents(2000).is_ok()); // 20
    /// assert!(Denomination::from_cents(300).is_err()); // no 3-unit note
    /// ```
    pub fn from_cents(cents: i64) -> Result<Self, ValidationError> {
        DENOMINATIONS
            .iter()
            .copied()
            .find(|d| d.0 == cents)
            .ok_or_else(not_in_ladder)
    }

    /// Looks up the ladder entry matching a decimal face value such as `0.5`.
    pub fn from_major_f64(value: f64) -> Result<Self, ValidationError> {
        Denomination::from_cents(Money::from_major_f64(value).cents())
    }

    /// Face value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Face value as Money.
    #[inline]
    pub const fn value(&self) -> Money {
        Money::from_cents(self.0)
    }

    /// Iterates the ladder largest first.
    pub fn descending() -> impl DoubleEndedIterator<Item = Denomination> {
        DENOMINATIONS.into_iter()
    }

    /// Iterates the ladder smallest first.
    pub fn ascending() -> impl DoubleEndedIterator<Item = Denomination> {
        DENOMINATIONS.into_iter().rev()
    }
}

fn not_in_ladder() -> ValidationError {
    ValidationError::NotAllowed {
        field: "denomination".to_string(),
        allowed: DENOMINATIONS.iter().map(ToString::to_string).collect(),
    }
}

fn invalid_format(reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: "denomination".to_string(),
        reason: reason.to_string(),
    }
}

// =============================================================================
// Text Form
// =============================================================================

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;

        if frac == 0 {
            write!(f, "{}", whole)
        } else if frac % 10 == 0 {
            write!(f, "{}.{}", whole, frac / 10)
        } else {
            write!(f, "{}.{:02}", whole, frac)
        }
    }
}

impl FromStr for Denomination {
    type Err = ValidationError;

    /// Parses a decimal face value exactly, without going through floats.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (whole, frac) = s.split_once('.').unwrap_or((s, ""));

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid_format("expected a decimal number"));
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid_format("expected a decimal number"));
        }

        let frac = frac.trim_end_matches('0');
        if frac.len() > 2 {
            return Err(invalid_format("more than two decimal places"));
        }

        let whole: i64 = whole
            .parse()
            .map_err(|_| invalid_format("value too large"))?;
        let frac_cents = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid_format("bad fraction"))? * 10,
            _ => frac.parse::<i64>().map_err(|_| invalid_format("bad fraction"))?,
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .ok_or_else(|| invalid_format("value too large"))?;

        Denomination::from_cents(cents)
    }
}

impl Serialize for Denomination {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Denomination {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_is_strictly_descending() {
        assert!(DENOMINATIONS.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(DENOMINATIONS.len(), 13);
    }

    #[test]
    fn test_ascending_reverses_ladder() {
        let asc: Vec<i64> = Denomination::ascending().map(|d| d.cents()).collect();
        assert_eq!(asc.first(), Some(&5));
        assert_eq!(asc.last(), Some(&50_000));
    }

    #[test]
    fn test_display_matches_wire_keys() {
        let keys: Vec<String> = DENOMINATIONS.iter().map(ToString::to_string).collect();
        assert_eq!(
            keys,
            vec!["500", "200", "100", "50", "20", "10", "5", "2", "1", "0.5", "0.2", "0.1", "0.05"]
        );
    }

    #[test]
    fn test_parse_round_trips_every_key() {
        for d in DENOMINATIONS {
            assert_eq!(d.to_string().parse::<Denomination>(), Ok(d));
        }
    }

    #[test]
    fn test_parse_accepts_padded_forms() {
        assert_eq!("0.50".parse::<Denomination>().map(|d| d.cents()), Ok(50));
        assert_eq!("1.0".parse::<Denomination>().map(|d| d.cents()), Ok(100));
        assert_eq!(" 20 ".parse::<Denomination>().map(|d| d.cents()), Ok(2000));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "abc".parse::<Denomination>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            "-5".parse::<Denomination>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            "0.055".parse::<Denomination>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            ".5".parse::<Denomination>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_values_outside_ladder() {
        assert!(matches!(
            "3".parse::<Denomination>(),
            Err(ValidationError::NotAllowed { .. })
        ));
        assert!(matches!(
            "0.01".parse::<Denomination>(),
            Err(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_from_major_f64() {
        assert_eq!(Denomination::from_major_f64(0.05).map(|d| d.cents()), Ok(5));
        assert_eq!(Denomination::from_major_f64(20.0).map(|d| d.cents()), Ok(2000));
        assert!(Denomination::from_major_f64(0.3).is_err());
    }

    #[test]
    fn test_serde_uses_string_form() {
        let d = Denomination::from_cents(50).unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"0.5\"");
        let back: Denomination = serde_json::from_str("\"0.5\"").unwrap();
        assert_eq!(back, d);
    }
}
