use crate::config::{self, CalendarConfig, ValidationErrors};
use crate::grid::MonthGrid;
use crate::render::{paint_document, PageLayout, SvgDocument};
use serde_yaml::Value;

/// Une grille par mois demandé, dans l'ordre de `months_to_print` (doublons compris).
pub fn assemble(config: &CalendarConfig) -> Vec<MonthGrid> {
    config
        .months
        .iter()
        .map(|month| {
            let grid = MonthGrid::build(*month, &config.events);
            tracing::debug!(month = %month, rows = grid.rows(), "month grid built");
            grid
        })
        .collect()
}

/// Valide puis assemble ; aucune grille n'est construite si la config a une erreur.
pub fn assemble_value(raw: &Value) -> Result<Vec<MonthGrid>, ValidationErrors> {
    let config = config::decode(raw)?;
    Ok(assemble(&config))
}

/// Document HTML/SVG complet (une page par mois).
pub fn render_html(config: &CalendarConfig) -> String {
    let grids = assemble(config);
    let mut doc = SvgDocument::new();
    paint_document(&mut doc, &PageLayout::letter_landscape(), &grids);
    doc.into_html()
}
