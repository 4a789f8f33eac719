//! Géométrie d'une page (points typographiques, origine en bas à gauche).

pub const INCH: f32 = 72.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Découpage d'une page : titre, bandeau des jours, puis 7 colonnes de cases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub header_height: f32,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl PageLayout {
    /// Lettre US paysage, marges d'un pouce.
    pub fn letter_landscape() -> Self {
        Self::new(11.0 * INCH, 8.5 * INCH, INCH)
    }

    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin,
            header_height: 0.5 * INCH,
            cell_width: (width - 2.0 * margin) / 7.0,
            // une ligne réservée aux noms des jours
            cell_height: (height - 2.0 * margin) / 7.0,
        }
    }

    /// Haut de la première ligne de cases.
    pub fn grid_top(&self) -> f32 {
        self.height - self.margin - self.header_height
    }

    pub fn title_origin(&self) -> (f32, f32) {
        (self.margin, self.height - self.margin + 0.25 * INCH)
    }

    pub fn weekday_origin(&self, col: usize) -> (f32, f32) {
        (
            self.margin + col as f32 * self.cell_width + 0.2 * INCH,
            self.grid_top() + 0.2 * INCH,
        )
    }

    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let top = self.grid_top() - row as f32 * self.cell_height;
        Rect {
            x: self.margin + col as f32 * self.cell_width,
            y: top - self.cell_height,
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// Numéro du jour, en haut à gauche de la case.
    pub fn day_number_origin(&self, row: usize, col: usize) -> (f32, f32) {
        let cell = self.cell_rect(row, col);
        (cell.x + 0.1 * INCH, cell.y + cell.height - 0.2 * INCH)
    }

    /// Événements empilés depuis le bas de la case, `index` 0 en bas.
    pub fn event_origin(&self, row: usize, col: usize, index: usize) -> (f32, f32) {
        let cell = self.cell_rect(row, col);
        (
            cell.x + 0.1 * INCH,
            cell.y + 0.1 * INCH + index as f32 * 0.15 * INCH,
        )
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::letter_landscape()
    }
}
