//! Cadence des événements récurrents et test d'appartenance en O(1).

use crate::date::CalendarDate;
use crate::model::RecurringEvent;
use serde::{Serialize, Serializer};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceError {
    #[error("invalid recurrence: '{0}' (expected <count><w|m|y>)")]
    Malformed(String),
    #[error("recurrence count must be positive: '{0}'")]
    ZeroCount(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CadenceUnit {
    Week,
    Month,
    Year,
}

impl CadenceUnit {
    pub fn suffix(self) -> char {
        match self {
            CadenceUnit::Week => 'w',
            CadenceUnit::Month => 'm',
            CadenceUnit::Year => 'y',
        }
    }

    fn from_suffix(c: char) -> Option<Self> {
        match c {
            'w' => Some(CadenceUnit::Week),
            'm' => Some(CadenceUnit::Month),
            'y' => Some(CadenceUnit::Year),
            _ => None,
        }
    }
}

/// Fréquence `count × unit`, ex. `2w` = toutes les deux semaines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cadence {
    pub count: NonZeroU32,
    pub unit: CadenceUnit,
}

impl Cadence {
    pub fn new(count: u32, unit: CadenceUnit) -> Option<Self> {
        NonZeroU32::new(count).map(|count| Self { count, unit })
    }

    pub fn weekly(count: u32) -> Option<Self> {
        Self::new(count, CadenceUnit::Week)
    }
    pub fn monthly(count: u32) -> Option<Self> {
        Self::new(count, CadenceUnit::Month)
    }
    pub fn yearly(count: u32) -> Option<Self> {
        Self::new(count, CadenceUnit::Year)
    }
}

impl FromStr for Cadence {
    type Err = RecurrenceError;

    /// Grammaire : un ou plusieurs chiffres ASCII suivis d'exactement un de `w`, `m`, `y`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || RecurrenceError::Malformed(s.to_string());
        let mut chars = s.chars();
        let unit = chars
            .next_back()
            .and_then(CadenceUnit::from_suffix)
            .ok_or_else(malformed)?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        // u32::from_str refuse aussi les valeurs trop grandes
        let count: u32 = digits.parse().map_err(|_| malformed())?;
        Cadence::new(count, unit).ok_or_else(|| RecurrenceError::ZeroCount(s.to_string()))
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.unit.suffix())
    }
}

impl Serialize for Cadence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// La règle `rule` se déclenche-t-elle le jour `date` ?
///
/// Hors de `[start_date, end_date]` la réponse est toujours `false`. Les
/// règles mensuelles et annuelles exigent le même numéro de jour (et de mois
/// pour l'annuel) que `start_date` : un ancrage au 31 ne se déclenche jamais
/// dans un mois de 30 jours.
pub fn fires(rule: &RecurringEvent, date: CalendarDate) -> bool {
    if !rule.covers(date) {
        return false;
    }
    let start = rule.start_date;
    let count = i64::from(rule.cadence.count.get());
    match rule.cadence.unit {
        CadenceUnit::Week => date.days_since(start) % (count * 7) == 0,
        CadenceUnit::Month => {
            date.day() == start.day() && date.months_since(start) % count == 0
        }
        CadenceUnit::Year => {
            date.month() == start.month()
                && date.day() == start.day()
                && i64::from(date.year() - start.year()) % count == 0
        }
    }
}
