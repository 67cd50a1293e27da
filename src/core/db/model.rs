use std::{fmt, str::FromStr};

/// A number of hours with exactly two fractional digits.
///
/// Held as a count of hundredths, which is also how it is stored in the
/// database (`10.50` is `1050`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hours(i64);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseHoursError {
    #[error("no digits")]
    Empty,
    #[error("unexpected character {0:?}")]
    InvalidChar(char),
    #[error("value out of range")]
    Overflow,
}

impl Hours {
    pub const ZERO: Hours = Hours(0);

    pub const fn from_hundredths(hundredths: i64) -> Self {
        Hours(hundredths)
    }

    pub const fn hundredths(self) -> i64 {
        self.0
    }
}

/// Parses plain decimal notation (`10`, `10.5`, `.5`, `-2.25`).
///
/// Digits past the second fractional place are rounded half away from zero,
/// so `1.005` becomes `1.01` and `-1.005` becomes `-1.01`.
impl FromStr for Hours {
    type Err = ParseHoursError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(ParseHoursError::Empty);
        }
        if let Some(c) = int_part
            .chars()
            .chain(frac_part.chars())
            .find(|c| !c.is_ascii_digit())
        {
            return Err(ParseHoursError::InvalidChar(c));
        }

        let mut whole: i64 = 0;
        for digit in int_part.bytes() {
            whole = whole
                .checked_mul(10)
                .and_then(|v| v.checked_add(i64::from(digit - b'0')))
                .ok_or(ParseHoursError::Overflow)?;
        }

        let mut frac = frac_part.bytes().map(|d| i64::from(d - b'0'));
        let tenths = frac.next().unwrap_or(0);
        let hundredths = frac.next().unwrap_or(0);
        let round_up = frac.next().is_some_and(|d| d >= 5);

        let value = whole
            .checked_mul(100)
            .and_then(|v| v.checked_add(tenths * 10 + hundredths + i64::from(round_up)))
            .ok_or(ParseHoursError::Overflow)?;
        Ok(Hours(if negative { -value } else { value }))
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl From<i64> for Hours {
    fn from(value: i64) -> Self {
        Hours(value)
    }
}

impl From<Hours> for i64 {
    fn from(hours: Hours) -> Self {
        hours.0
    }
}
