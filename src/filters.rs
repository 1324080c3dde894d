use askama::Result;
use rust_decimal::Decimal;

// Formats a money amount with two decimals and thousands separators.
// This allows us to use `|money` in the templates.
#[allow(clippy::unnecessary_wraps)]
pub fn money(amount: &Decimal) -> Result<String> {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    Ok(format!("{}{}.{}", sign, grouped, cents))
}
