use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Format des dates de la configuration (`2025-02-14`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("invalid date: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("invalid month: '{0}' (expected YYYY-MM)")]
    InvalidMonth(String),
    #[error("month out of range: {0} (expected 1-12)")]
    MonthOutOfRange(u32),
}

/// Date calendaire naïve (pas de fuseau horaire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }
    pub fn month(&self) -> u32 {
        self.0.month()
    }
    pub fn day(&self) -> u32 {
        self.0.day()
    }
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Nombre de jours écoulés depuis `earlier` (négatif si `self` est avant).
    pub fn days_since(&self, earlier: CalendarDate) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }

    /// Écart en mois calendaires, sans tenir compte du jour.
    pub fn months_since(&self, earlier: CalendarDate) -> i64 {
        i64::from(self.year() - earlier.year()) * 12
            + (i64::from(self.month()) - i64::from(earlier.month()))
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !has_four_digit_year(s) {
            return Err(DateError::InvalidDate(s.to_string()));
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|_| DateError::InvalidDate(s.to_string()))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Mois à imprimer (une page). Le mois est toujours dans 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthSelector {
    year: i32,
    month: u32,
}

impl MonthSelector {
    pub fn new(year: i32, month: u32) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::MonthOutOfRange(month));
        }
        // année hors de la plage chrono
        NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| DateError::InvalidMonth(format!("{year:04}-{month:02}")))?;
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> CalendarDate {
        CalendarDate(
            NaiveDate::from_ymd_opt(self.year, self.month, 1)
                .expect("MonthSelector holds a valid year/month"),
        )
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Date du jour `day` de ce mois, si elle existe.
    pub fn day(&self, day: u32) -> Option<CalendarDate> {
        CalendarDate::from_ymd(self.year, self.month, day)
    }

    /// Nom anglais du mois ("February").
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }
}

impl FromStr for MonthSelector {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !has_four_digit_year(s) {
            return Err(DateError::InvalidMonth(s.to_string()));
        }
        // même règle que pour une date complète, en fixant le jour au 1er
        let first = NaiveDate::parse_from_str(&format!("{s}-01"), DATE_FORMAT)
            .map_err(|_| DateError::InvalidMonth(s.to_string()))?;
        Self::new(first.year(), first.month())
    }
}

impl fmt::Display for MonthSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// L'année doit faire exactement 4 chiffres ASCII, sans signe ni espace.
fn has_four_digit_year(s: &str) -> bool {
    s.split('-')
        .next()
        .is_some_and(|year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Règle grégorienne : divisible par 4, sauf les siècles non divisibles par 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => panic!("month out of range: {month}"),
    }
}
