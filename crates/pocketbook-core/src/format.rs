use chrono::{DateTime, NaiveDate, Utc};

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64, currency: &str) -> String;
}

/// Formats dates for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: NaiveDate) -> String;

    fn format_timestamp(&self, timestamp: DateTime<Utc>) -> String {
        self.format_date(timestamp.date_naive())
    }
}

/// Indian digit grouping (`1,23,45,678`) with at most two fraction digits.
#[derive(Debug, Default, Clone, Copy)]
pub struct IndianGrouping;

impl CurrencyFormatter for IndianGrouping {
    fn format_amount(&self, amount: f64, currency: &str) -> String {
        render_amount(amount, currency, group_indian)
    }
}

/// Thousands grouping (`12,345,678`) with at most two fraction digits.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThousandsGrouping;

impl CurrencyFormatter for ThousandsGrouping {
    fn format_amount(&self, amount: f64, currency: &str) -> String {
        render_amount(amount, currency, group_thousands)
    }
}

/// Picks the digit grouping for a BCP 47 locale tag. Indian locales
/// (`*-IN`) group in lakhs and crores; everything else in thousands.
pub fn currency_formatter_for(locale: &str) -> Box<dyn CurrencyFormatter> {
    let indian = locale
        .rsplit(['-', '_'])
        .next()
        .is_some_and(|region| region.eq_ignore_ascii_case("in"));
    if indian {
        Box::new(IndianGrouping)
    } else {
        Box::new(ThousandsGrouping)
    }
}

fn render_amount(amount: f64, currency: &str, group: fn(&str) -> String) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group(&(cents / 100).to_string());
    let fraction = cents % 100;
    if fraction == 0 {
        format!("{sign}{currency}{whole}")
    } else {
        let digits = format!("{fraction:02}");
        format!("{sign}{currency}{whole}.{}", digits.trim_end_matches('0'))
    }
}

fn group_thousands(digits: &str) -> String {
    let mut groups: Vec<&str> = Vec::new();
    let mut end = digits.len();
    while end > 0 {
        let start = end.saturating_sub(3);
        groups.push(&digits[start..end]);
        end = start;
    }
    groups.reverse();
    groups.join(",")
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// `Feb 1, 2026` style dates.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShortDate;

impl DateFormatter for ShortDate {
    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%b %-d, %Y").to_string()
    }
}
