//! Decimal playlist ids of any length.
//!
//! Playlist ids are integers written as strings, with no upper bound. They are
//! compared and incremented on their digits so that no id is ever too large.

use std::cmp::Ordering;
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlaylistNumber {
    negative: bool,
    /// Magnitude without leading zeros, "0" for zero.
    digits: String,
}

impl PlaylistNumber {
    /// Parses an optionally signed run of ASCII digits, surrounding whitespace allowed.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = digits.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        Some(PlaylistNumber {
            negative: negative && digits != "0",
            digits: digits.to_owned(),
        })
    }

    pub fn one() -> Self {
        PlaylistNumber {
            negative: false,
            digits: "1".to_owned(),
        }
    }

    /// The number plus one.
    pub fn next(&self) -> Self {
        if !self.negative {
            return PlaylistNumber {
                negative: false,
                digits: increment_digits(&self.digits),
            };
        }
        // -n + 1 == -(n - 1), n >= 1 here
        let digits = decrement_digits(&self.digits);
        PlaylistNumber {
            negative: digits != "0",
            digits,
        }
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

fn increment_digits(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return String::from_utf8_lossy(&bytes).into_owned();
        }
    }
    format!("1{}", String::from_utf8_lossy(&bytes))
}

fn decrement_digits(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for b in bytes.iter_mut().rev() {
        if *b == b'0' {
            *b = b'9';
        } else {
            *b -= 1;
            break;
        }
    }
    let s = String::from_utf8_lossy(&bytes);
    let trimmed = s.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

impl Ord for PlaylistNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }
}

impl PartialOrd for PlaylistNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PlaylistNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> PlaylistNumber {
        PlaylistNumber::parse(s).unwrap()
    }

    #[test]
    fn parses_and_normalizes() {
        assert_eq!(num("007").to_string(), "7");
        assert_eq!(num(" 12 ").to_string(), "12");
        assert_eq!(num("+4").to_string(), "4");
        assert_eq!(num("-0").to_string(), "0");
        assert_eq!(num("-000").to_string(), "0");
        assert_eq!(num("-15").to_string(), "-15");
        assert!(PlaylistNumber::parse("").is_none());
        assert!(PlaylistNumber::parse("-").is_none());
        assert!(PlaylistNumber::parse("1a").is_none());
        assert!(PlaylistNumber::parse("abc").is_none());
    }

    #[test]
    fn orders_over_the_whole_range() {
        assert!(num("99999999999999999999") > num("18446744073709551615"));
        assert!(num("10") > num("9"));
        assert!(num("0") > num("-1"));
        assert!(num("-2") > num("-10"));
        assert_eq!(num("05").cmp(&num("5")), Ordering::Equal);
    }

    #[test]
    fn increments_with_carry() {
        assert_eq!(num("8").next().to_string(), "9");
        assert_eq!(num("199").next().to_string(), "200");
        assert_eq!(
            num("18446744073709551615").next().to_string(),
            "18446744073709551616"
        );
        assert_eq!(
            num("99999999999999999999").next().to_string(),
            "100000000000000000000"
        );
    }

    #[test]
    fn increments_negative_numbers() {
        assert_eq!(num("-3").next().to_string(), "-2");
        assert_eq!(num("-10").next().to_string(), "-9");
        assert_eq!(num("-1").next().to_string(), "0");
        assert_eq!(num("0").next().to_string(), "1");
    }
}
