//! # Currency Display
//!
//! Turns minor-unit `Money` into the strings the cart screen shows
//! (`₦4,910.00`, `Free`). The ledger never formats; this is the only place
//! that knows about symbols and decimal places.

use pharmacart_core::Money;
use serde::{Deserialize, Serialize};

const MAX_DECIMALS: u8 = 4;

/// Currency symbol and number of minor-unit digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Minor-unit digits (2 for kobo/cents, 0 for whole-unit currencies).
    #[serde(default = "default_decimals")]
    pub decimals: u8,
}

fn default_symbol() -> String {
    "₦".to_string()
}

fn default_decimals() -> u8 {
    2
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat {
            symbol: default_symbol(),
            decimals: default_decimals(),
        }
    }
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>, decimals: u8) -> Self {
        CurrencyFormat {
            symbol: symbol.into(),
            decimals: decimals.min(MAX_DECIMALS),
        }
    }

    /// Formats an amount with the symbol and thousands separators.
    ///
    /// ```rust
    /// use pharmacart_core::Money;
    /// use pharmacart_session::format::CurrencyFormat;
    ///
    /// let naira = CurrencyFormat::default();
    /// assert_eq!(naira.format(Money::from_minor(491000)), "₦4,910.00");
    /// assert_eq!(naira.format(Money::from_minor(-49000)), "-₦490.00");
    /// ```
    pub fn format(&self, amount: Money) -> String {
        let decimals = u32::from(self.decimals.min(MAX_DECIMALS));
        let scale = 10u64.pow(decimals);
        let abs = amount.minor().unsigned_abs();
        let major = group_thousands(abs / scale);
        let sign = if amount.is_negative() { "-" } else { "" };

        if decimals == 0 {
            format!("{}{}{}", sign, self.symbol, major)
        } else {
            format!(
                "{}{}{}.{:0width$}",
                sign,
                self.symbol,
                major,
                abs % scale,
                width = decimals as usize
            )
        }
    }

    /// Label for a fulfillment fee: `Free` for zero, otherwise the amount.
    pub fn fee_label(&self, fee: Money) -> String {
        if fee.is_zero() {
            "Free".to_string()
        } else {
            self.format(fee)
        }
    }

    /// Discount row text, e.g. `-₦490.00`.
    pub fn discount_label(&self, discount: Money) -> String {
        format!("-{}", self.format(discount))
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_two_decimals() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format(Money::zero()), "₦0.00");
        assert_eq!(fmt.format(Money::from_minor(5)), "₦0.05");
        assert_eq!(fmt.format(Money::from_minor(245000)), "₦2,450.00");
        assert_eq!(fmt.format(Money::from_minor(123456789)), "₦1,234,567.89");
    }

    #[test]
    fn test_format_whole_units() {
        let fmt = CurrencyFormat::new("₦", 0);
        assert_eq!(fmt.format(Money::from_minor(4910)), "₦4,910");
        assert_eq!(fmt.format(Money::from_minor(500)), "₦500");
        assert_eq!(fmt.format(Money::from_minor(1000000)), "₦1,000,000");
    }

    #[test]
    fn test_format_negative() {
        let fmt = CurrencyFormat::new("$", 2);
        assert_eq!(fmt.format(Money::from_minor(-550)), "-$5.50");
    }

    #[test]
    fn test_fee_and_discount_labels() {
        let fmt = CurrencyFormat::new("₦", 0);
        assert_eq!(fmt.fee_label(Money::zero()), "Free");
        assert_eq!(fmt.fee_label(Money::from_minor(500)), "₦500");
        assert_eq!(fmt.discount_label(Money::from_minor(490)), "-₦490");
    }

    #[test]
    fn test_decimals_capped() {
        let fmt = CurrencyFormat::new("X", 9);
        assert_eq!(fmt.decimals, 4);
        assert_eq!(fmt.format(Money::from_minor(12345)), "X1.2345");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(u64::MAX), "18,446,744,073,709,551,615");
    }
}
