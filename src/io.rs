use crate::config::{self, CalendarConfig};
use anyhow::Context;
use serde_yaml::Value;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Lit et parse un fichier YAML sans le valider.
pub fn load_config_value<P: AsRef<Path>>(path: P) -> anyhow::Result<Value> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let value: Value = serde_yaml::from_str(&data)
        .with_context(|| format!("parsing YAML config file {}", path.display()))?;
    tracing::debug!(path = %path.display(), "config file loaded");
    Ok(value)
}

/// Lit, valide et décode. Les erreurs de validation remontent en `ValidationErrors`.
pub fn load_config<P: AsRef<Path>>(path: P) -> anyhow::Result<CalendarConfig> {
    let value = load_config_value(path)?;
    Ok(config::decode(&value)?)
}

/// Écriture atomique (fichier temporaire dans le même dossier puis rename).
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &[u8]) -> anyhow::Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(contents)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("atomic rename to {}", path.display()))?;
    Ok(())
}
