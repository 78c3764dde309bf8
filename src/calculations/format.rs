//! Currency and percentage display strings

use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "GBP")]
    Gbp,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            other => Err(format!("unsupported currency '{}'", other)),
        }
    }
}

/// `$1,234.56` style, US dollars
pub fn format_currency(amount: f64) -> String {
    format_currency_in(amount, Currency::Usd)
}

/// Two decimals, comma thousands separators, symbol prefix, leading `-` for
/// negatives. Amounts that round to zero are shown unsigned.
pub fn format_currency_in(amount: f64, currency: Currency) -> String {
    let symbol = currency.symbol();
    if amount.is_nan() {
        return format!("{}NaN", symbol);
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}{}∞", sign, symbol);
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };

    format!("{}{}{}.{}", sign, symbol, group_thousands(whole), cents)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Inverse of [`format_currency_in`] for finite amounts in any supported currency
pub fn parse_currency(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let rest = ["$", "€", "£"]
        .iter()
        .find_map(|sym| rest.strip_prefix(sym))
        .unwrap_or(rest);

    let digits: String = rest.chars().filter(|c| *c != ',').collect();
    let value: f64 = digits.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// `12.35%`
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.5), "$999.50");
        assert_eq!(format_currency(1234.567), "$1,234.57");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(-2593.74), "-$2,593.74");
    }

    #[test]
    fn test_negative_rounding_to_zero_is_unsigned() {
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_other_currencies() {
        assert_eq!(format_currency_in(1500.0, Currency::Eur), "€1,500.00");
        assert_eq!(format_currency_in(-12.3, Currency::Gbp), "-£12.30");
        assert_eq!("gbp".parse::<Currency>(), Ok(Currency::Gbp));
        assert!("JPY".parse::<Currency>().is_err());
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_currency(f64::NAN), "$NaN");
        assert_eq!(format_currency(f64::NEG_INFINITY), "-$∞");
        assert_eq!(parse_currency("$NaN"), None);
    }

    #[test]
    fn test_round_trip() {
        for amount in [0.0, 7.777, -47.991, 1593.7424, 12_345_678.9, -0.25] {
            let parsed = parse_currency(&format_currency(amount)).expect("parses");
            assert_abs_diff_eq!(parsed, amount, epsilon = 0.005);
        }
        let parsed = parse_currency(&format_currency_in(-9876.54, Currency::Eur)).expect("parses");
        assert_abs_diff_eq!(parsed, -9876.54, epsilon = 0.005);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(format_percentage(5.26), "5.26%");
        assert_eq!(format_percentage(12.3456), "12.35%");
        assert_eq!(format_percentage(-3.0), "-3.00%");
    }
}
