use crate::config::CalendarConfig;
use crate::io;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

pub const DEFAULT_TEMPLATE_FILE: &str = "template_config.yaml";

/// Forme exacte du fichier de configuration sur disque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigFile {
    pub months_to_print: Vec<String>,
    pub events: EventsFile,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventsFile {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub single_events: Vec<SingleEventEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recurring_events: Vec<RecurringEventEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SingleEventEntry {
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecurringEventEntry {
    pub recurrence: String,
    pub start_date: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl From<&CalendarConfig> for ConfigFile {
    fn from(config: &CalendarConfig) -> Self {
        Self {
            months_to_print: config.months.iter().map(ToString::to_string).collect(),
            events: EventsFile {
                single_events: config
                    .events
                    .single
                    .iter()
                    .map(|e| SingleEventEntry {
                        date: e.date.to_string(),
                        description: e.description.clone(),
                    })
                    .collect(),
                recurring_events: config
                    .events
                    .recurring
                    .iter()
                    .map(|r| RecurringEventEntry {
                        recurrence: r.cadence.to_string(),
                        start_date: r.start_date.to_string(),
                        description: r.description.clone(),
                        end_date: r.end_date.map(|d| d.to_string()),
                    })
                    .collect(),
            },
        }
    }
}

impl ConfigFile {
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("serializing config to YAML")
    }
}

/// Config d'exemple : deux mois, deux fêtes, une réunion hebdo bornée et un rapport mensuel.
pub fn template_config() -> ConfigFile {
    ConfigFile {
        months_to_print: vec!["2025-01".into(), "2025-02".into()],
        events: EventsFile {
            single_events: vec![
                SingleEventEntry {
                    date: "2025-01-01".into(),
                    description: "New Year's Day".into(),
                },
                SingleEventEntry {
                    date: "2025-02-14".into(),
                    description: "Valentine's Day".into(),
                },
            ],
            recurring_events: vec![
                RecurringEventEntry {
                    recurrence: "1w".into(),
                    start_date: "2025-01-06".into(),
                    description: "Weekly Meeting".into(),
                    end_date: Some("2025-03-31".into()),
                },
                RecurringEventEntry {
                    recurrence: "1m".into(),
                    start_date: "2025-01-15".into(),
                    description: "Monthly Report Due".into(),
                    end_date: None,
                },
            ],
        },
    }
}

/// Écrit la config d'exemple en YAML.
pub fn write_template<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let yaml = template_config().to_yaml()?;
    io::write_atomic(path, yaml.as_bytes())
        .with_context(|| format!("writing template {}", path.display()))?;
    tracing::info!(path = %path.display(), "template config written");
    Ok(())
}
