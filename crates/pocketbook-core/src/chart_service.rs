//! Time-series buckets for the income-versus-expense chart.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use pocketbook_domain::{start_of_day, start_of_month, start_of_week, TimePeriod, Transaction};

use crate::summary_service::sum_income_expense;

const DAILY_BUCKETS: i64 = 7;
const WEEKLY_BUCKETS: i64 = 4;
const MONTHLY_BUCKETS: i32 = 6;
const YEARLY_BUCKETS: i32 = 3;

/// Half-open time range `[start, end)` with a display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub label: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Bucket {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }
}

/// One chart data point.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub income: f64,
    pub expense: f64,
}

pub struct ChartService;

impl ChartService {
    /// Contiguous buckets ending with the one that contains `now`, oldest first.
    ///
    /// Daily covers 7 days, weekly 4 Monday-aligned weeks, monthly 6 calendar
    /// months, yearly 3 calendar years.
    pub fn buckets(period: TimePeriod, now: DateTime<Utc>) -> Vec<Bucket> {
        let today = now.date_naive();
        match period {
            TimePeriod::Daily => (0..DAILY_BUCKETS)
                .rev()
                .map(|back| {
                    let day = today - Duration::days(back);
                    span(day, day + Duration::days(1), day.format("%a").to_string())
                })
                .collect(),
            TimePeriod::Weekly => {
                let current = start_of_week(today);
                (0..WEEKLY_BUCKETS)
                    .rev()
                    .map(|back| {
                        let week = current - Duration::weeks(back);
                        span(week, week + Duration::weeks(1), week.format("%b %-d").to_string())
                    })
                    .collect()
            }
            TimePeriod::Monthly => {
                let current = month_index(start_of_month(today));
                (0..MONTHLY_BUCKETS)
                    .rev()
                    .filter_map(|back| {
                        let start = month_start(current - back)?;
                        let end = month_start(current - back + 1)?;
                        Some(span(start, end, start.format("%b").to_string()))
                    })
                    .collect()
            }
            TimePeriod::Yearly => (0..YEARLY_BUCKETS)
                .rev()
                .filter_map(|back| {
                    let year = today.year() - back;
                    let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
                    let end = NaiveDate::from_ymd_opt(year + 1, 1, 1)?;
                    Some(span(start, end, year.to_string()))
                })
                .collect(),
        }
    }

    /// Income and expense per bucket, transfers excluded. Empty buckets report zero.
    pub fn income_vs_expense(
        transactions: &[Transaction],
        period: TimePeriod,
        now: DateTime<Utc>,
    ) -> Vec<SeriesPoint> {
        Self::buckets(period, now)
            .into_iter()
            .map(|bucket| {
                let (income, expense) = sum_income_expense(
                    transactions.iter().filter(|txn| bucket.contains(txn.date)),
                );
                SeriesPoint {
                    label: bucket.label,
                    start: bucket.start,
                    end: bucket.end,
                    income,
                    expense,
                }
            })
            .collect()
    }
}

fn span(start: NaiveDate, end: NaiveDate, label: String) -> Bucket {
    Bucket {
        label,
        start: start_of_day(start),
        end: start_of_day(end),
    }
}

fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

fn month_start(index: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(index.div_euclid(12), index.rem_euclid(12) as u32 + 1, 1)
}
