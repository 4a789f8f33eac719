use crate::date::CalendarDate;
use crate::recurrence::Cadence;
use serde::Serialize;

/// Événement ponctuel : un seul jour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SingleEvent {
    pub date: CalendarDate,
    pub description: String,
}

impl SingleEvent {
    pub fn new<D: Into<String>>(date: CalendarDate, description: D) -> Self {
        Self {
            date,
            description: description.into(),
        }
    }
}

/// Événement récurrent ancré sur `start_date`, borné (inclus) par `end_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecurringEvent {
    pub start_date: CalendarDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<CalendarDate>,
    pub cadence: Cadence,
    pub description: String,
}

impl RecurringEvent {
    pub fn new<D: Into<String>>(start_date: CalendarDate, cadence: Cadence, description: D) -> Self {
        Self {
            start_date,
            end_date: None,
            cadence,
            description: description.into(),
        }
    }

    pub fn until(mut self, end_date: CalendarDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Vrai si `date` tombe dans `[start_date, end_date]`.
    pub fn covers(&self, date: CalendarDate) -> bool {
        date >= self.start_date && self.end_date.map_or(true, |end| date <= end)
    }
}

/// Ensemble ordonné des événements d'une configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventSet {
    pub single: Vec<SingleEvent>,
    pub recurring: Vec<RecurringEvent>,
}

impl EventSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.single.is_empty() && self.recurring.is_empty()
    }

    pub fn len(&self) -> usize {
        self.single.len() + self.recurring.len()
    }
}
