mod layout;
mod svg;

pub use layout::{PageLayout, Rect, INCH};
pub use svg::SvgDocument;

use crate::grid::{DayCell, MonthGrid};
use anyhow::Result;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub weight: FontWeight,
    pub size: f32,
}

impl Font {
    pub const TITLE: Font = Font::bold(24.0);
    pub const WEEKDAY: Font = Font::bold(12.0);
    pub const DAY_NUMBER: Font = Font::regular(10.0);
    pub const EVENT: Font = Font::regular(8.0);

    pub const fn regular(size: f32) -> Self {
        Self {
            weight: FontWeight::Regular,
            size,
        }
    }
    pub const fn bold(size: f32) -> Self {
        Self {
            weight: FontWeight::Bold,
            size,
        }
    }
}

/// Surface de dessin (PDF, SVG, ...). Coordonnées en points, origine en bas à gauche.
pub trait Canvas {
    fn begin_page(&mut self, width: f32, height: f32);
    fn set_font(&mut self, font: Font);
    fn draw_string(&mut self, x: f32, y: f32, text: &str);
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn finish_page(&mut self);
}

/// Dessine une page complète pour `grid`.
pub fn paint_month(canvas: &mut dyn Canvas, layout: &PageLayout, grid: &MonthGrid) {
    canvas.begin_page(layout.width, layout.height);

    canvas.set_font(Font::TITLE);
    let (x, y) = layout.title_origin();
    let title = format!("{} {}", grid.month.month_name(), grid.month.year());
    canvas.draw_string(x, y, &title);

    canvas.set_font(Font::WEEKDAY);
    for (col, label) in WEEKDAY_LABELS.iter().enumerate() {
        let (x, y) = layout.weekday_origin(col);
        canvas.draw_string(x, y, label);
    }

    for (row, week) in grid.weeks.iter().enumerate() {
        for (col, cell) in week.iter().enumerate() {
            let r = layout.cell_rect(row, col);
            canvas.rect(r.x, r.y, r.width, r.height);

            let DayCell::Active { date, events } = cell else {
                continue;
            };
            canvas.set_font(Font::DAY_NUMBER);
            let (x, y) = layout.day_number_origin(row, col);
            canvas.draw_string(x, y, &date.day().to_string());

            canvas.set_font(Font::EVENT);
            for (i, event) in events.iter().enumerate() {
                let (x, y) = layout.event_origin(row, col, i);
                canvas.draw_string(x, y, event);
            }
        }
    }

    canvas.finish_page();
}

/// Une page par grille, dans l'ordre donné.
pub fn paint_document(canvas: &mut dyn Canvas, layout: &PageLayout, grids: &[MonthGrid]) {
    for grid in grids {
        tracing::debug!(month = %grid.month, rows = grid.rows(), "painting page");
        paint_month(canvas, layout, grid);
    }
}

/// Export JSON des grilles, pour un moteur de rendu externe.
pub fn render_json(grids: &[MonthGrid]) -> Result<String> {
    Ok(serde_json::to_string_pretty(grids)?)
}
