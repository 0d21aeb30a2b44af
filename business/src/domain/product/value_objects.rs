use std::fmt;
use std::str::FromStr;

use super::errors::ProductError;

/// Identifier assigned by the store's identity column.
///
/// Always strictly positive. Parsing from a path segment accepts only a plain
/// run of ASCII digits, so `"-3"`, `"+3"`, `"3.0"` or `" 3"` are rejected
/// before the store is ever queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(i32);

impl ProductId {
    pub fn new(value: i32) -> Result<Self, ProductError> {
        if value < 1 {
            return Err(ProductError::InvalidId);
        }
        Ok(Self(value))
    }

    /// Constructor for ids read back from the store (no validation).
    pub fn from_repository(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ProductError::InvalidId);
        }
        let value = s.parse::<i32>().map_err(|_| ProductError::InvalidId)?;
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_positive_integer_token() {
        let id: ProductId = "42".parse().unwrap();
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn should_reject_non_numeric_token() {
        assert!(matches!("abc".parse::<ProductId>(), Err(ProductError::InvalidId)));
        assert!(matches!("12abc".parse::<ProductId>(), Err(ProductError::InvalidId)));
        assert!(matches!("".parse::<ProductId>(), Err(ProductError::InvalidId)));
    }

    #[test]
    fn should_reject_negative_and_zero_ids() {
        assert!(matches!("-1".parse::<ProductId>(), Err(ProductError::InvalidId)));
        assert!(matches!("0".parse::<ProductId>(), Err(ProductError::InvalidId)));
        assert!(ProductId::new(0).is_err());
    }

    #[test]
    fn should_reject_signed_fractional_or_padded_tokens() {
        for token in ["+7", "7.0", " 7", "7 ", "1e3"] {
            assert!(token.parse::<ProductId>().is_err(), "{token} should be rejected");
        }
    }

    #[test]
    fn should_reject_ids_out_of_range() {
        assert!("2147483648".parse::<ProductId>().is_err());
        assert_eq!(
            "2147483647".parse::<ProductId>().unwrap().value(),
            i32::MAX
        );
    }
}
