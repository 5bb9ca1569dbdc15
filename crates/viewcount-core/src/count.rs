use serde::Serialize;
use std::fmt::Display;

/// A non-negative view count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ViewCount(u64);

impl ViewCount {
    pub const ZERO: ViewCount = ViewCount(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Reads a stored counter value, falling back to zero instead of failing.
    ///
    /// An absent value is zero. Otherwise the leading base-10 integer is
    /// taken: surrounding whitespace and an optional sign are allowed, and
    /// anything after the digits is ignored, so `"12abc"` reads as 12. No
    /// digits at all reads as zero. Negative values clamp to zero and values
    /// past `u64::MAX` saturate.
    pub fn parse_lenient(stored: Option<&str>) -> Self {
        let Some(raw) = stored else {
            return Self::ZERO;
        };

        let raw = raw.trim_start();
        let (negative, rest) = match raw.as_bytes().first() {
            Some(b'-') => (true, &raw[1..]),
            Some(b'+') => (false, &raw[1..]),
            _ => (false, raw),
        };

        let digits = rest.bytes().take_while(u8::is_ascii_digit);
        let mut value: u64 = 0;
        let mut seen_digit = false;
        for digit in digits {
            seen_digit = true;
            value = value
                .saturating_mul(10)
                .saturating_add(u64::from(digit - b'0'));
        }

        if !seen_digit || negative {
            return Self::ZERO;
        }
        Self(value)
    }

    /// Returns the next count. Saturates at `u64::MAX`.
    pub fn incremented(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// The decimal form written back to the store.
    pub fn to_stored(self) -> String {
        self.0.to_string()
    }
}

impl Display for ViewCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> u64 {
        ViewCount::parse_lenient(Some(raw)).get()
    }

    #[test]
    fn absent_is_zero() {
        assert_eq!(ViewCount::parse_lenient(None), ViewCount::ZERO);
    }

    #[test]
    fn plain_decimal() {
        assert_eq!(parse("0"), 0);
        assert_eq!(parse("3"), 3);
        assert_eq!(parse("0042"), 42);
        assert_eq!(parse("+7"), 7);
        assert_eq!(parse("  15"), 15);
    }

    #[test]
    fn malformed_values_become_zero() {
        assert_eq!(parse("abc"), 0);
        assert_eq!(parse(""), 0);
        assert_eq!(parse("   "), 0);
        assert_eq!(parse("-"), 0);
        assert_eq!(parse("x12"), 0);
    }

    #[test]
    fn trailing_garbage_is_ignored() {
        assert_eq!(parse("12abc"), 12);
        assert_eq!(parse("9.75"), 9);
        assert_eq!(parse("5 views"), 5);
    }

    #[test]
    fn negative_values_clamp_to_zero() {
        assert_eq!(parse("-5"), 0);
        assert_eq!(parse("-0"), 0);
    }

    #[test]
    fn huge_values_saturate() {
        assert_eq!(parse("99999999999999999999999999"), u64::MAX);
        assert_eq!(ViewCount::new(u64::MAX).incremented().get(), u64::MAX);
    }

    #[test]
    fn stored_form_is_decimal() {
        assert_eq!(ViewCount::new(4).to_stored(), "4");
        assert_eq!(ViewCount::new(3).incremented().to_stored(), "4");
    }
}
