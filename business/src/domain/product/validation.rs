//! Field rules for product payloads.
//!
//! Every rule is checked independently so a caller gets the complete list of
//! problems in one response. Values come straight from the request body: a
//! JSON body may carry numbers or strings, a url-encoded body only strings.

use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode, Zero};
use serde_json::Value;

pub const NAME_MAX_LENGTH: usize = 100;
pub const PRICE_SCALE: i64 = 2;

pub const NAME_REQUIRED: &str = "Product name is required and cannot be empty";
pub const NAME_TOO_LONG: &str = "Product name cannot exceed 100 characters";
pub const PRICE_INVALID: &str = "Price must be a positive number";
pub const STOCK_INVALID: &str = "Stock must be a non-negative number";

/// Checks name, price and stock, returning one message per failing field.
///
/// An empty list means the payload is acceptable.
pub fn validate_product(
    name: Option<&Value>,
    price: Option<&Value>,
    stock: Option<&Value>,
) -> Vec<String> {
    parse_product(name, price, stock).err().unwrap_or_default()
}

/// Coerces all three fields at once, or lists every failure in name, price,
/// stock order.
pub fn parse_product(
    name: Option<&Value>,
    price: Option<&Value>,
    stock: Option<&Value>,
) -> Result<(String, BigDecimal, i32), Vec<String>> {
    match (parse_name(name), parse_price(price), parse_stock(stock)) {
        (Ok(name), Ok(price), Ok(stock)) => Ok((name, price, stock)),
        (name, price, stock) => Err([name.err(), price.err(), stock.err()]
            .into_iter()
            .flatten()
            .map(str::to_string)
            .collect()),
    }
}

pub fn parse_name(value: Option<&Value>) -> Result<String, &'static str> {
    let name = match value {
        Some(Value::String(raw)) => raw.trim(),
        _ => return Err(NAME_REQUIRED),
    };
    if name.is_empty() {
        return Err(NAME_REQUIRED);
    }
    if name.chars().count() > NAME_MAX_LENGTH {
        return Err(NAME_TOO_LONG);
    }
    Ok(name.to_string())
}

/// Parses a price as a fixed-point decimal with two fraction digits
/// (half-up). The rounded value must be strictly positive.
pub fn parse_price(value: Option<&Value>) -> Result<BigDecimal, &'static str> {
    let raw = match value {
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::String(raw)) => raw.trim().to_string(),
        _ => return Err(PRICE_INVALID),
    };

    // Rejects NaN, infinities and absurd exponents before building a decimal.
    match raw.parse::<f64>() {
        Ok(approx) if approx.is_finite() => {}
        _ => return Err(PRICE_INVALID),
    }

    let price = BigDecimal::from_str(&raw)
        .map_err(|_| PRICE_INVALID)?
        .with_scale_round(PRICE_SCALE, RoundingMode::HalfUp);
    if price <= BigDecimal::zero() {
        return Err(PRICE_INVALID);
    }
    Ok(price)
}

/// Parses stock as a non-negative 32-bit integer. Integral floats such as
/// `5.0` are accepted, fractional ones are not.
pub fn parse_stock(value: Option<&Value>) -> Result<i32, &'static str> {
    let stock = match value {
        Some(Value::Number(number)) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Some(Value::String(raw)) => raw.trim().parse::<i64>().ok(),
        _ => None,
    }
    .and_then(|v| i32::try_from(v).ok())
    .ok_or(STOCK_INVALID)?;

    if stock < 0 {
        return Err(STOCK_INVALID);
    }
    Ok(stock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn validate(name: Value, price: Value, stock: Value) -> Vec<String> {
        validate_product(Some(&name), Some(&price), Some(&stock))
    }

    #[test]
    fn should_return_three_errors_when_every_field_is_invalid() {
        let errors = validate(json!(""), json!(-1), json!(-1));

        assert_eq!(
            errors,
            vec![
                NAME_REQUIRED.to_string(),
                PRICE_INVALID.to_string(),
                STOCK_INVALID.to_string(),
            ]
        );
    }

    #[test]
    fn should_return_no_errors_when_product_is_valid() {
        assert!(validate(json!("Widget"), json!(9.99), json!(5)).is_empty());
    }

    #[test]
    fn should_fail_every_field_when_absent() {
        assert_eq!(validate_product(None, None, None).len(), 3);
    }

    #[test]
    fn should_coerce_fields_when_every_rule_passes() {
        let (name, price, stock) =
            parse_product(Some(&json!(" Pen ")), Some(&json!(1.499)), Some(&json!("100"))).unwrap();

        assert_eq!(name, "Pen");
        assert_eq!(price, BigDecimal::from_str("1.50").unwrap());
        assert_eq!(stock, 100);
    }

    #[test]
    fn should_report_the_same_errors_from_parse_and_validate() {
        let (name, price, stock) = (json!("Pen"), json!("0.001"), json!(2.5));

        assert_eq!(
            parse_product(Some(&name), Some(&price), Some(&stock)).unwrap_err(),
            validate_product(Some(&name), Some(&price), Some(&stock))
        );
    }

    #[test]
    fn should_reject_blank_name() {
        assert_eq!(parse_name(Some(&json!("   \t "))), Err(NAME_REQUIRED));
        assert_eq!(parse_name(Some(&json!(12))), Err(NAME_REQUIRED));
        assert_eq!(parse_name(Some(&Value::Null)), Err(NAME_REQUIRED));
    }

    #[test]
    fn should_reject_name_longer_than_limit() {
        let long_name = "x".repeat(NAME_MAX_LENGTH + 1);
        assert_eq!(parse_name(Some(&json!(long_name))), Err(NAME_TOO_LONG));

        let padded = format!("  {}  ", "y".repeat(NAME_MAX_LENGTH));
        assert_eq!(
            parse_name(Some(&json!(padded))).unwrap().len(),
            NAME_MAX_LENGTH
        );
    }

    #[test]
    fn should_reject_zero_negative_and_non_numeric_prices() {
        for value in [
            json!(0),
            json!(-3.5),
            json!("abc"),
            json!(""),
            json!("NaN"),
            json!("inf"),
            json!(true),
            json!([1]),
            json!(0.004),
        ] {
            assert_eq!(parse_price(Some(&value)), Err(PRICE_INVALID), "{value}");
        }
    }

    #[test]
    fn should_round_price_half_up_to_two_digits() {
        let price = parse_price(Some(&json!("2.005"))).unwrap();
        assert_eq!(price, BigDecimal::from_str("2.01").unwrap());
        assert_eq!(price.to_string(), "2.01");
    }

    #[test]
    fn should_accept_zero_stock() {
        assert_eq!(parse_stock(Some(&json!(0))), Ok(0));
        assert_eq!(parse_stock(Some(&json!("0"))), Ok(0));
    }

    #[test]
    fn should_reject_fractional_negative_and_oversized_stock() {
        for value in [
            json!(1.5),
            json!(-1),
            json!("2.5"),
            json!("ten"),
            json!(4_294_967_296_i64),
            json!(null),
        ] {
            assert_eq!(parse_stock(Some(&value)), Err(STOCK_INVALID), "{value}");
        }
    }

    #[test]
    fn should_accept_integral_float_stock() {
        assert_eq!(parse_stock(Some(&json!(5.0))), Ok(5));
    }

    proptest! {
        #[test]
        fn valid_products_never_produce_errors(
            name in "[A-Za-z][A-Za-z0-9 ]{0,98}",
            cents in 1u32..10_000_000,
            stock in 0i32..=i32::MAX,
        ) {
            let price = format!("{}.{:02}", cents / 100, cents % 100);
            let errors = validate(json!(name), json!(price), json!(stock));
            prop_assert!(errors.is_empty(), "{:?}", errors);
        }

        #[test]
        fn negative_stock_is_always_rejected(stock in i32::MIN..0) {
            prop_assert_eq!(parse_stock(Some(&json!(stock))), Err(STOCK_INVALID));
        }

        #[test]
        fn non_positive_prices_are_always_rejected(price in -1.0e9f64..=0.0) {
            prop_assert_eq!(parse_price(Some(&json!(price))), Err(PRICE_INVALID));
        }
    }
}
