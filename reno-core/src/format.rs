//! Display formatting for estimate values.
//!
//! Rounding happens here and nowhere else.

use rust_decimal::Decimal;

use crate::calculations::common::{round_half_up, round_whole};

/// Formats a dollar amount with two decimal places and comma separators.
///
/// ```
/// use rust_decimal_macros::dec;
/// use reno_core::format::format_usd;
///
/// assert_eq!(format_usd(dec!(1416.666)), "$1,416.67");
/// assert_eq!(format_usd(dec!(629700)), "$629,700.00");
/// assert_eq!(format_usd(dec!(-12.5)), "-$12.50");
/// ```
pub fn format_usd(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// Formats a month count as a whole number of months.
///
/// ```
/// use rust_decimal_macros::dec;
/// use reno_core::format::format_months;
///
/// assert_eq!(format_months(dec!(23.294)), "23 months");
/// assert_eq!(format_months(dec!(0.6)), "1 month");
/// ```
pub fn format_months(value: Decimal) -> String {
    let months = round_whole(value).normalize();
    let unit = if months == Decimal::ONE { "month" } else { "months" };
    format!("{} {unit}", group_thousands(&months.to_string()))
}

/// Formats a percentage without trailing zeros.
///
/// ```
/// use rust_decimal_macros::dec;
/// use reno_core::format::format_percent;
///
/// assert_eq!(format_percent(dec!(90.00)), "90%");
/// assert_eq!(format_percent(dec!(102.5)), "102.5%");
/// ```
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", round_half_up(value).normalize())
}

/// Inserts commas every three digits of an unsigned integer string.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
