use crate::date::CalendarDate;
use crate::model::EventSet;
use crate::recurrence::fires;

/// Descriptions actives le jour `date`, dans l'ordre d'empilement :
/// événements ponctuels d'abord, puis récurrents, chacun dans l'ordre de la config.
/// Pas de dédoublonnage.
pub fn resolve(events: &EventSet, date: CalendarDate) -> Vec<String> {
    let single = events
        .single
        .iter()
        .filter(|e| e.date == date)
        .map(|e| e.description.clone());
    let recurring = events
        .recurring
        .iter()
        .filter(|r| fires(r, date))
        .map(|r| r.description.clone());
    single.chain(recurring).collect()
}
