//! Validation et décodage de la configuration YAML.
//!
//! La config brute (`serde_yaml::Value`) est parcourue une seule fois : chaque
//! problème est collecté (jamais d'arrêt au premier), et les types du domaine
//! ne sont produits que si aucune erreur n'a été trouvée.

use crate::date::{CalendarDate, MonthSelector};
use crate::model::{EventSet, RecurringEvent, SingleEvent};
use crate::recurrence::Cadence;
use serde_yaml::Value;
use std::fmt;
use thiserror::Error;

pub const MONTHS_KEY: &str = "months_to_print";
pub const EVENTS_KEY: &str = "events";
pub const SINGLE_EVENTS_KEY: &str = "single_events";
pub const RECURRING_EVENTS_KEY: &str = "recurring_events";

/// Un problème de config ; `Display` donne le message affiché à l'utilisateur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Config file must contain a mapping at the top level.")]
    RootNotAMapping,
    #[error("Missing '{0}' key in config file.")]
    MissingKey(&'static str),
    #[error("'{0}' must be a list.")]
    NotAList(&'static str),
    #[error("'{0}' must be a mapping.")]
    NotAMapping(&'static str),
    #[error("Each entry in '{0}' must be a mapping.")]
    EntryNotAMapping(&'static str),
    #[error("Each single event must have 'date' and 'description' keys.")]
    SingleEventKeys,
    #[error("Each recurring event must have 'recurrence', 'start_date', and 'description' keys.")]
    RecurringEventKeys,
    #[error("Invalid month format: '{0}'. Use 'YYYY-MM'.")]
    InvalidMonth(String),
    #[error("Invalid date format: '{0}'. Use 'YYYY-MM-DD'.")]
    InvalidDate(String),
    #[error("Invalid start_date format: '{0}'. Use 'YYYY-MM-DD'.")]
    InvalidStartDate(String),
    #[error("Invalid end_date format: '{0}'. Use 'YYYY-MM-DD'.")]
    InvalidEndDate(String),
    #[error("Invalid recurrence format: '{0}'. Use 'nw', 'nm', or 'ny'.")]
    InvalidRecurrence(String),
    #[error("Description must be a string: '{0}'.")]
    DescriptionNotString(String),
    #[error("Description must not be empty.")]
    EmptyDescription,
}

/// Toutes les erreurs d'une passe de validation, dans l'ordre de découverte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<ConfigError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ConfigError] {
        &self.0
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Errors in config file:")?;
        for err in &self.0 {
            writeln!(f, "- {err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Configuration décodée : mois à imprimer (ordre conservé) et événements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarConfig {
    pub months: Vec<MonthSelector>,
    pub events: EventSet,
}

impl CalendarConfig {
    pub fn from_yaml_str(s: &str) -> anyhow::Result<Self> {
        let raw: Value = serde_yaml::from_str(s)?;
        Ok(decode(&raw)?)
    }
}

/// Liste des messages d'erreur ; vide si la config est valide.
pub fn validate(raw: &Value) -> Vec<String> {
    match decode(raw) {
        Ok(_) => Vec::new(),
        Err(errors) => errors.messages(),
    }
}

/// Valide et décode en une seule passe.
pub fn decode(raw: &Value) -> Result<CalendarConfig, ValidationErrors> {
    let Some(root) = raw.as_mapping() else {
        return Err(ValidationErrors(vec![ConfigError::RootNotAMapping]));
    };

    let mut v = Validator::default();
    let months_raw = root.get(MONTHS_KEY);
    let events_raw = root.get(EVENTS_KEY);
    if months_raw.is_none() {
        v.push(ConfigError::MissingKey(MONTHS_KEY));
    }
    if events_raw.is_none() {
        v.push(ConfigError::MissingKey(EVENTS_KEY));
    }

    let months = months_raw.map(|m| v.months(m)).unwrap_or_default();
    let events = events_raw.map(|e| v.events(e)).unwrap_or_default();

    if v.errors.is_empty() {
        tracing::debug!(
            months = months.len(),
            single = events.single.len(),
            recurring = events.recurring.len(),
            "config decoded"
        );
        Ok(CalendarConfig { months, events })
    } else {
        tracing::debug!(errors = v.errors.len(), "config rejected");
        Err(ValidationErrors(v.errors))
    }
}

#[derive(Default)]
struct Validator {
    errors: Vec<ConfigError>,
}

impl Validator {
    fn push(&mut self, err: ConfigError) {
        self.errors.push(err);
    }

    fn list<'a>(&mut self, raw: &'a Value, key: &'static str) -> Option<&'a [Value]> {
        match raw.as_sequence() {
            Some(seq) => Some(seq.as_slice()),
            None => {
                self.push(ConfigError::NotAList(key));
                None
            }
        }
    }

    fn months(&mut self, raw: &Value) -> Vec<MonthSelector> {
        let Some(list) = self.list(raw, MONTHS_KEY) else {
            return Vec::new();
        };
        list.iter()
            .filter_map(|entry| {
                let parsed = entry.as_str().and_then(|s| s.parse::<MonthSelector>().ok());
                if parsed.is_none() {
                    self.push(ConfigError::InvalidMonth(literal(entry)));
                }
                parsed
            })
            .collect()
    }

    fn events(&mut self, raw: &Value) -> EventSet {
        let Some(map) = raw.as_mapping() else {
            self.push(ConfigError::NotAMapping(EVENTS_KEY));
            return EventSet::default();
        };
        let mut events = EventSet::default();
        if let Some(single) = map.get(SINGLE_EVENTS_KEY) {
            if let Some(list) = self.list(single, SINGLE_EVENTS_KEY) {
                events.single = list.iter().filter_map(|e| self.single_event(e)).collect();
            }
        }
        if let Some(recurring) = map.get(RECURRING_EVENTS_KEY) {
            if let Some(list) = self.list(recurring, RECURRING_EVENTS_KEY) {
                events.recurring = list.iter().filter_map(|e| self.recurring_event(e)).collect();
            }
        }
        events
    }

    fn single_event(&mut self, entry: &Value) -> Option<SingleEvent> {
        let Some(map) = entry.as_mapping() else {
            self.push(ConfigError::EntryNotAMapping(SINGLE_EVENTS_KEY));
            return None;
        };
        let (Some(date), Some(description)) = (map.get("date"), map.get("description")) else {
            self.push(ConfigError::SingleEventKeys);
            return None;
        };
        let date = self.date(date, ConfigError::InvalidDate);
        let description = self.description(description);
        Some(SingleEvent {
            date: date?,
            description: description?,
        })
    }

    fn recurring_event(&mut self, entry: &Value) -> Option<RecurringEvent> {
        let Some(map) = entry.as_mapping() else {
            self.push(ConfigError::EntryNotAMapping(RECURRING_EVENTS_KEY));
            return None;
        };
        let (Some(recurrence), Some(start_date), Some(description)) = (
            map.get("recurrence"),
            map.get("start_date"),
            map.get("description"),
        ) else {
            self.push(ConfigError::RecurringEventKeys);
            return None;
        };

        let cadence = recurrence.as_str().and_then(|s| s.parse::<Cadence>().ok());
        if cadence.is_none() {
            self.push(ConfigError::InvalidRecurrence(literal(recurrence)));
        }
        let start_date = self.date(start_date, ConfigError::InvalidStartDate);
        // `end_date: ~` équivaut à une absence de borne
        let end_date = match map.get("end_date") {
            None | Some(Value::Null) => Some(None),
            Some(raw) => self.date(raw, ConfigError::InvalidEndDate).map(Some),
        };
        let description = self.description(description);

        Some(RecurringEvent {
            start_date: start_date?,
            end_date: end_date?,
            cadence: cadence?,
            description: description?,
        })
    }

    fn date(&mut self, raw: &Value, err: fn(String) -> ConfigError) -> Option<CalendarDate> {
        let parsed = raw.as_str().and_then(|s| s.parse::<CalendarDate>().ok());
        if parsed.is_none() {
            self.push(err(literal(raw)));
        }
        parsed
    }

    fn description(&mut self, raw: &Value) -> Option<String> {
        match raw.as_str() {
            Some(s) if s.trim().is_empty() => {
                self.push(ConfigError::EmptyDescription);
                None
            }
            Some(s) => Some(s.to_string()),
            None => {
                self.push(ConfigError::DescriptionNotString(literal(raw)));
                None
            }
        }
    }
}

/// Représentation textuelle d'une valeur fautive pour les messages.
fn literal(raw: &Value) -> String {
    match raw {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{other:?}")),
    }
}
