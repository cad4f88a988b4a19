//! Text rendering for typed cells.

use rust_decimal::Decimal;
use stock_model::{Cell, MoneyStyle};

/// Render one cell as the text written to the CSV field.
pub fn render_cell(cell: &Cell) -> String {
    match cell {
        Cell::Text(value) => value.clone(),
        Cell::Integer(value) => value.to_string(),
        Cell::Decimal(value) => float_like(*value),
        Cell::Money { amount, style } => render_money(*amount, *style),
        Cell::Date { value, style } => value.format(style.pattern()).to_string(),
        Cell::Blank => String::new(),
    }
}

fn render_money(amount: Decimal, style: MoneyStyle) -> String {
    match style {
        MoneyStyle::Plain => format!("{:.2}", amount.round_dp(2)),
        MoneyStyle::DollarPrefixed => format!("${}", float_like(amount)),
        MoneyStyle::Currency => currency(amount),
    }
}

/// Shortest decimal form, keeping at least one fractional digit.
pub fn float_like(value: Decimal) -> String {
    let normalized = value.normalize();
    if normalized.scale() == 0 {
        format!("{normalized}.0")
    } else {
        normalized.to_string()
    }
}

/// `$1,234.56`, with the sign ahead of the symbol for negatives.
pub fn currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let fixed = format!("{:.2}", rounded.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}${}.{fraction}", group_thousands(whole))
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
