//! Display formatting utilities for terminal output
//!
//! All number cosmetics live here: currency symbols, thousands separators,
//! percent signs. The comparison core hands over plain values only.

pub mod breakdown;
pub mod combined;
pub mod summary;
pub mod table;

use crate::models::Money;

/// Format a money amount with thousands separators, e.g. `$114,624.00`
pub fn fmt_money(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!(
        "{}${}.{:02}",
        sign,
        thousands(amount.dollars().abs()),
        amount.cents_part()
    )
}

/// Format a money amount to whole dollars, e.g. `$37,624`
///
/// Used for the headline metrics and breakdown lines, which drop cents.
pub fn fmt_money_whole(amount: Money) -> String {
    let rounded = (amount.cents() as f64 / 100.0).round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{}${}", sign, thousands(rounded.abs()))
}

/// Format a percent change with one decimal place, e.g. `-32.8%`
pub fn fmt_pct(pct: f64) -> String {
    format!("{:.1}%", pct)
}

fn thousands(mut n: i64) -> String {
    debug_assert!(n >= 0);
    let mut groups = Vec::new();
    loop {
        let (rest, group) = (n / 1000, n % 1000);
        if rest == 0 {
            groups.push(group.to_string());
            break;
        }
        groups.push(format!("{:03}", group));
        n = rest;
    }
    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_money() {
        assert_eq!(fmt_money(Money::from_dollars(114624)), "$114,624.00");
        assert_eq!(fmt_money(Money::from_cents(50134)), "$501.34");
        assert_eq!(fmt_money(Money::from_dollars(-37624)), "-$37,624.00");
        assert_eq!(fmt_money(Money::zero()), "$0.00");
    }

    #[test]
    fn test_fmt_money_whole() {
        assert_eq!(fmt_money_whole(Money::from_dollars(37624)), "$37,624");
        assert_eq!(fmt_money_whole(Money::from_cents(-50134)), "-$501");
        assert_eq!(fmt_money_whole(Money::from_cents(1_917_714)), "$19,177");
    }

    #[test]
    fn test_fmt_pct() {
        assert_eq!(fmt_pct(38.64), "38.6%");
        assert_eq!(fmt_pct(-100.0), "-100.0%");
        assert_eq!(fmt_pct(0.0), "0.0%");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1234567), "1,234,567");
    }
}
