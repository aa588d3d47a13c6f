//! Display strings for calculator results (en-AU, whole dollars).

use crate::models::calculator::{CalculatorResults, EstimateSummary, ValueRange};

/// `1234.5` → `"$1,235"`, `-1200` → `"-$1,200"`.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{}", rounded.abs() as u64);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

pub fn format_currency_range(range: ValueRange) -> String {
    format!("{} - {}", format_currency(range.min), format_currency(range.max))
}

/// Under a year in months, under ten years to one decimal, otherwise whole years.
/// Units are picked from the rounded figure, so 0.99 reads "1.0 years".
pub fn format_payback(years: f64) -> String {
    let months = (years * 12.0).round();
    if months < 12.0 {
        let months = months.max(1.0) as u32;
        return if months == 1 { "1 month".to_string() } else { format!("{months} months") };
    }
    let tenths = (years * 10.0).round() / 10.0;
    if tenths < 10.0 {
        format!("{tenths:.1} years")
    } else {
        format!("{} years", years.round() as u64)
    }
}

pub fn format_payback_range(range: Option<ValueRange>) -> String {
    match range {
        Some(r) => format!("{} - {}", format_payback(r.min), format_payback(r.max)),
        None => "Not recoverable".to_string(),
    }
}

pub fn summarize(results: &CalculatorResults) -> EstimateSummary {
    EstimateSummary {
        annual_savings: format_currency(results.annual_savings),
        new_annual_bill: format_currency(results.new_annual_bill),
        total_cost: format_currency_range(results.total_cost),
        payback: format_payback_range(results.payback_years),
        ten_year_savings: format_currency_range(results.ten_year_savings),
        twenty_five_year_savings: format_currency_range(results.twenty_five_year_savings),
        bill_reduction: format!("{}%", results.bill_reduction_percent),
    }
}
