//! Display trait, identifiers, and time-period helpers for ledger primitives.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generates a fresh random identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

opaque_id!(
    /// Opaque account identifier. Generated ids are random; well-known ids such
    /// as `cash` are accepted verbatim.
    AccountId
);

opaque_id!(
    /// Opaque transaction identifier. Carries no ordering information.
    TransactionId
);

/// Error returned when parsing one of the ledger enums from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} `{}`", self.kind, self.value)
    }
}

impl std::error::Error for ParseEnumError {}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
/// Reporting cadence used by period totals and time-series charts.
pub enum TimePeriod {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 4] = [
        TimePeriod::Daily,
        TimePeriod::Weekly,
        TimePeriod::Monthly,
        TimePeriod::Yearly,
    ];

    /// Returns the start of the period containing `now`.
    ///
    /// Weeks start on Monday. All boundaries are midnight UTC.
    pub fn period_start(self, now: DateTime<Utc>) -> DateTime<Utc> {
        let today = now.date_naive();
        let date = match self {
            TimePeriod::Daily => today,
            TimePeriod::Weekly => start_of_week(today),
            TimePeriod::Monthly => start_of_month(today),
            TimePeriod::Yearly => today - Duration::days(today.ordinal0() as i64),
        };
        start_of_day(date)
    }

    pub fn label(self) -> &'static str {
        match self {
            TimePeriod::Daily => "daily",
            TimePeriod::Weekly => "weekly",
            TimePeriod::Monthly => "monthly",
            TimePeriod::Yearly => "yearly",
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimePeriod {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" | "day" | "d" => Ok(TimePeriod::Daily),
            "weekly" | "week" | "w" => Ok(TimePeriod::Weekly),
            "monthly" | "month" | "m" => Ok(TimePeriod::Monthly),
            "yearly" | "year" | "y" => Ok(TimePeriod::Yearly),
            other => Err(ParseEnumError::new("period", other)),
        }
    }
}

/// Midnight UTC on `date`.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// Monday of the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// First day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 30, 0).unwrap()
    }

    #[test]
    fn period_start_aligns_to_calendar_boundaries() {
        // 2026-02-05 is a Thursday.
        let now = at(2026, 2, 5, 15);
        assert_eq!(
            TimePeriod::Daily.period_start(now),
            Utc.with_ymd_and_hms(2026, 2, 5, 0, 0, 0).unwrap()
        );
        assert_eq!(
            TimePeriod::Weekly.period_start(now),
            Utc.with_ymd_and_hms(2026, 2, 2, 0, 0, 0).unwrap()
        );
        assert_eq!(
            TimePeriod::Monthly.period_start(now),
            Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            TimePeriod::Yearly.period_start(now),
            Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn week_starts_on_monday_even_on_sunday() {
        let sunday = NaiveDate::from_ymd_opt(2026, 2, 8).unwrap();
        assert_eq!(
            start_of_week(sunday),
            NaiveDate::from_ymd_opt(2026, 2, 2).unwrap()
        );
    }

    #[test]
    fn time_period_parses_aliases() {
        assert_eq!("W".parse::<TimePeriod>().unwrap(), TimePeriod::Weekly);
        assert_eq!("yearly".parse::<TimePeriod>().unwrap(), TimePeriod::Yearly);
        let err = "fortnightly".parse::<TimePeriod>().unwrap_err();
        assert_eq!(err.to_string(), "unknown period `fortnightly`");
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = AccountId::generate();
        let b = AccountId::generate();
        assert_ne!(a, b);
        assert_eq!(AccountId::from("cash").as_str(), "cash");
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = TransactionId::from("tx-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"tx-1\"");
    }
}
