#![forbid(unsafe_code)]
//! Calgen — génération de calendriers mensuels à partir d'une config YAML.
//!
//! - Événements ponctuels et récurrents (semaine / mois / année, fin optionnelle).
//! - Validation complète de la config en une passe (toutes les erreurs d'un coup).
//! - Grille mensuelle 7 colonnes, dimanche en premier.
//! - Dates naïves, pas de fuseau horaire ; le dessin passe par le trait `Canvas`.

pub mod config;
pub mod date;
pub mod document;
pub mod grid;
pub mod io;
pub mod model;
pub mod recurrence;
pub mod render;
pub mod resolver;
pub mod template;

pub use config::{decode, validate, CalendarConfig, ConfigError, ValidationErrors};
pub use date::{CalendarDate, DateError, MonthSelector};
pub use document::{assemble, assemble_value, render_html};
pub use grid::{DayCell, MonthGrid};
pub use model::{EventSet, RecurringEvent, SingleEvent};
pub use recurrence::{fires, Cadence, CadenceUnit, RecurrenceError};
pub use render::{paint_document, paint_month, render_json, Canvas, Font, PageLayout, SvgDocument};
pub use resolver::resolve;
pub use template::{template_config, write_template, ConfigFile};
