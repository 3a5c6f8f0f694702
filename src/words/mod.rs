//! Legal-document amount-in-words rendering.
//!
//! This module converts a monetary amount into the word form printed on the
//! legal amount line of an invoice, using the Indian numbering scale
//! (crore/lakh/thousand, not the Western million grouping) with the
//! fractional part rendered as paise.

mod lexicon;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::calculation::round_to_paise;
use self::lexicon::{below_hundred, below_thousand};

/// Converts an amount to its legal-document word form,
/// `"Rupees <words> Only"`.
///
/// The amount is rounded to paise first, which makes the carry at e.g.
/// `99.995` explicit: it reads as one hundred rupees. Negative amounts
/// render as the absolute value prefixed with `Minus`. Crore and lakh
/// groups pluralize when greater than one; `Thousand` and `Hundred` are
/// invariant; zero groups are skipped.
///
/// Supported domain: `|amount|` below one hundred crore
/// (1,00,00,00,000).
///
/// # Examples
///
/// ```
/// use invoice_engine::words::amount_in_words;
/// use rust_decimal::Decimal;
///
/// assert_eq!(amount_in_words(Decimal::ZERO), "Rupees Zero Only");
/// assert_eq!(amount_in_words(Decimal::from(100000)), "Rupees One Lakh Only");
/// assert_eq!(
///     amount_in_words(Decimal::new(123456789, 2)),
///     "Rupees Twelve Lakhs Thirty Four Thousand Five Hundred and Sixty Seven and Eighty Nine Paise Only"
/// );
/// ```
pub fn amount_in_words(amount: Decimal) -> String {
    let rounded = round_to_paise(amount.abs());
    let negative = amount.is_sign_negative() && !rounded.is_zero();

    let rupees = rounded.trunc().to_u64().unwrap_or(0);
    let paise = ((rounded - rounded.trunc()) * Decimal::ONE_HUNDRED)
        .to_u32()
        .unwrap_or(0);

    let words = if rupees == 0 && paise == 0 {
        "Zero".to_string()
    } else {
        let rupee_words = integer_in_words(rupees);
        let mut words = rupee_words;
        if paise > 0 {
            if words.is_empty() {
                words = format!("{} Paise", below_hundred(paise));
            } else {
                words = format!("{} and {} Paise", words, below_hundred(paise));
            }
        }
        words
    };

    if negative {
        format!("Rupees Minus {} Only", words)
    } else {
        format!("Rupees {} Only", words)
    }
}

/// Renders the rupee part on the Indian scale, descending, skipping zero
/// groups.
fn integer_in_words(rupees: u64) -> String {
    let crore = (rupees / 10_000_000) as u32;
    let lakh = ((rupees % 10_000_000) / 100_000) as u32;
    let thousand = ((rupees % 100_000) / 1_000) as u32;
    let below = (rupees % 1_000) as u32;

    let mut groups = Vec::new();
    if crore > 0 {
        let scale = if crore == 1 { "Crore" } else { "Crores" };
        groups.push(format!("{} {}", below_hundred(crore), scale));
    }
    if lakh > 0 {
        let scale = if lakh == 1 { "Lakh" } else { "Lakhs" };
        groups.push(format!("{} {}", below_hundred(lakh), scale));
    }
    if thousand > 0 {
        groups.push(format!("{} Thousand", below_hundred(thousand)));
    }
    if below > 0 {
        groups.push(below_thousand(below));
    }

    groups.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn words(s: &str) -> String {
        amount_in_words(Decimal::from_str(s).unwrap())
    }

    /// AW-001: zero renders as Zero
    #[test]
    fn test_zero() {
        assert_eq!(words("0"), "Rupees Zero Only");
        assert_eq!(words("0.00"), "Rupees Zero Only");
    }

    /// AW-002: exact scale boundaries
    #[test]
    fn test_scale_boundaries() {
        assert_eq!(words("100"), "Rupees One Hundred Only");
        assert_eq!(words("1000"), "Rupees One Thousand Only");
        assert_eq!(words("100000"), "Rupees One Lakh Only");
        assert_eq!(words("10000000"), "Rupees One Crore Only");
    }

    /// AW-003: the values one below each boundary
    #[test]
    fn test_below_boundary_values() {
        assert_eq!(words("99"), "Rupees Ninety Nine Only");
        assert_eq!(words("999"), "Rupees Nine Hundred and Ninety Nine Only");
        assert_eq!(
            words("99999"),
            "Rupees Ninety Nine Thousand Nine Hundred and Ninety Nine Only"
        );
        assert_eq!(
            words("9999999"),
            "Rupees Ninety Nine Lakhs Ninety Nine Thousand Nine Hundred and Ninety Nine Only"
        );
    }

    /// AW-004: lakh boundary crossing with paise
    #[test]
    fn test_lakh_crossing_with_paise() {
        assert_eq!(
            words("1234567.89"),
            "Rupees Twelve Lakhs Thirty Four Thousand Five Hundred and Sixty Seven and Eighty Nine Paise Only"
        );
    }

    /// AW-005: plural scale words above one
    #[test]
    fn test_plural_scale_words() {
        assert_eq!(words("200000"), "Rupees Two Lakhs Only");
        assert_eq!(words("20000000"), "Rupees Two Crores Only");
        assert_eq!(words("2000"), "Rupees Two Thousand Only");
    }

    /// AW-006: zero groups are skipped
    #[test]
    fn test_zero_groups_skipped() {
        assert_eq!(words("100067"), "Rupees One Lakh Sixty Seven Only");
        assert_eq!(words("10000005"), "Rupees One Crore Five Only");
        assert_eq!(words("1100"), "Rupees One Thousand One Hundred Only");
    }

    /// AW-007: paise carry at the two-decimal boundary
    #[test]
    fn test_paise_carry_into_rupees() {
        assert_eq!(words("99.995"), "Rupees One Hundred Only");
        assert_eq!(words("0.999"), "Rupees One Only");
    }

    /// AW-008: paise-only amounts drop the joiner
    #[test]
    fn test_paise_only_amount() {
        assert_eq!(words("0.50"), "Rupees Fifty Paise Only");
        assert_eq!(words("0.05"), "Rupees Five Paise Only");
    }

    /// AW-009: negative amounts carry an explicit sign word
    #[test]
    fn test_negative_amount() {
        assert_eq!(words("-250"), "Rupees Minus Two Hundred and Fifty Only");
        assert_eq!(words("-0.75"), "Rupees Minus Seventy Five Paise Only");
    }

    #[test]
    fn test_rupees_and_paise() {
        assert_eq!(
            words("1680.05"),
            "Rupees One Thousand Six Hundred and Eighty and Five Paise Only"
        );
    }

    #[test]
    fn test_teens_inside_groups() {
        assert_eq!(
            words("1313013"),
            "Rupees Thirteen Lakhs Thirteen Thousand Thirteen Only"
        );
    }

    #[test]
    fn test_paise_is_dropped_when_rounding_to_whole() {
        assert_eq!(words("500.004"), "Rupees Five Hundred Only");
    }

    #[test]
    fn test_largest_supported_amount() {
        assert_eq!(
            words("999999999.99"),
            "Rupees Ninety Nine Crores Ninety Nine Lakhs Ninety Nine Thousand Nine Hundred and \
             Ninety Nine and Ninety Nine Paise Only"
        );
    }
}
