//! Field parsers for values exported by spreadsheet tools and dataframe libraries,
//! which write integers as `12`, `12.0` or `1.2e1` depending on the column dtype.
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::str::FromStr;

/// Parse a decimal, accepting plain and scientific notation.
pub fn parse_decimal(field: &str, raw: &str) -> Result<Decimal, String> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(format!("{field} is empty"));
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| format!("{field} '{s}' is not a number"))
}

/// Parse a whole number that may have been written with a zero fractional part.
fn parse_whole(field: &str, raw: &str) -> Result<Decimal, String> {
    let value = parse_decimal(field, raw)?;
    if !value.fract().is_zero() {
        return Err(format!("{field} '{}' is not a whole number", raw.trim()));
    }
    Ok(value)
}

pub fn parse_year(raw: &str) -> Result<i32, String> {
    parse_whole("year", raw)?
        .to_i32()
        .ok_or_else(|| format!("year '{}' is out of range", raw.trim()))
}

/// Quarters outside 1..=4 are kept as-is; only the type range is enforced.
pub fn parse_quarter(raw: &str) -> Result<u8, String> {
    parse_whole("quarter", raw)?
        .to_u8()
        .ok_or_else(|| format!("quarter '{}' is out of range", raw.trim()))
}

/// A blank count is a missing value: it adds nothing to a sum but the row is kept.
pub fn parse_count(raw: &str) -> Result<u64, String> {
    if raw.trim().is_empty() {
        return Ok(0);
    }
    let value = parse_whole("count", raw)?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(format!("count '{}' is negative", raw.trim()));
    }
    value
        .to_u64()
        .ok_or_else(|| format!("count '{}' is out of range", raw.trim()))
}

/// Blank amounts are treated like blank counts.
pub fn parse_amount(raw: &str) -> Result<Decimal, String> {
    if raw.trim().is_empty() {
        return Ok(Decimal::ZERO);
    }
    parse_decimal("amount", raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_amount_plain_and_scientific() {
        assert_eq!(parse_amount("1200.5").unwrap(), dec!(1200.5));
        assert_eq!(parse_amount(" 300 ").unwrap(), dec!(300));
        assert_eq!(parse_amount("1.5e3").unwrap(), dec!(1500));
        assert!(parse_amount("n/a").is_err());
    }

    #[test]
    fn test_blank_measures_are_zero() {
        assert_eq!(parse_amount("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("  ").unwrap(), Decimal::ZERO);
        assert_eq!(parse_count("").unwrap(), 0);
    }

    #[test]
    fn test_blank_period_fields_are_errors() {
        assert!(parse_year("").is_err());
        assert!(parse_quarter(" ").is_err());
    }

    #[test]
    fn test_parse_count_accepts_float_formatted_integers() {
        assert_eq!(parse_count("42").unwrap(), 42);
        assert_eq!(parse_count("42.0").unwrap(), 42);
        assert_eq!(parse_count("4.2e1").unwrap(), 42);
        assert_eq!(parse_count("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_count_rejects_fractions_and_negatives() {
        assert!(parse_count("4.5").is_err());
        assert!(parse_count("-3").is_err());
    }

    #[test]
    fn test_parse_year_and_quarter() {
        assert_eq!(parse_year("2023").unwrap(), 2023);
        assert_eq!(parse_quarter("4").unwrap(), 4);
        assert_eq!(parse_quarter("7").unwrap(), 7);
        assert!(parse_quarter("300").is_err());
        assert!(parse_year("twenty").is_err());
    }
}
