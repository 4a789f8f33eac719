//! Grille d'un mois : semaines de 7 cases, première colonne = dimanche.

use crate::date::{CalendarDate, MonthSelector};
use crate::model::EventSet;
use crate::resolver::resolve;
use serde::Serialize;

pub const DAYS_PER_WEEK: usize = 7;

/// Une case de la grille : remplissage (jour d'un mois voisin) ou jour du mois.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DayCell {
    Empty,
    Active {
        date: CalendarDate,
        events: Vec<String>,
    },
}

impl DayCell {
    pub fn date(&self) -> Option<CalendarDate> {
        match self {
            DayCell::Empty => None,
            DayCell::Active { date, .. } => Some(*date),
        }
    }

    pub fn events(&self) -> &[String] {
        match self {
            DayCell::Empty => &[],
            DayCell::Active { events, .. } => events,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, DayCell::Active { .. })
    }
}

pub type Week = [DayCell; DAYS_PER_WEEK];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub month: MonthSelector,
    pub weeks: Vec<Week>,
}

impl MonthGrid {
    /// Construit la grille de `month` en résolvant les événements de chaque jour.
    pub fn build(month: MonthSelector, events: &EventSet) -> Self {
        let days_in_month = month.days_in_month();
        let offset = month.first_day().weekday().num_days_from_sunday() as usize;

        let mut cells: Vec<DayCell> = Vec::with_capacity(6 * DAYS_PER_WEEK);

        // cases vides avant le 1er
        cells.extend((0..offset).map(|_| DayCell::Empty));

        for day in 1..=days_in_month {
            let date = month
                .day(day)
                .expect("day within days_in_month is a valid date");
            cells.push(DayCell::Active {
                date,
                events: resolve(events, date),
            });
        }

        // compléter la dernière semaine
        while cells.len() % DAYS_PER_WEEK != 0 {
            cells.push(DayCell::Empty);
        }

        let weeks: Vec<Week> = cells
            .chunks_exact(DAYS_PER_WEEK)
            .map(|chunk| std::array::from_fn(|i| chunk[i].clone()))
            .collect();

        MonthGrid { month, weeks }
    }

    pub fn rows(&self) -> usize {
        self.weeks.len()
    }

    /// Cases actives en ordre ligne par ligne.
    pub fn active_cells(&self) -> impl Iterator<Item = &DayCell> + '_ {
        self.weeks.iter().flatten().filter(|c| c.is_active())
    }

    /// Case du jour `day` (1-indexé), si le jour existe dans ce mois.
    pub fn cell(&self, day: u32) -> Option<&DayCell> {
        self.active_cells()
            .find(|c| c.date().map(|d| d.day()) == Some(day))
    }

    /// Position (ligne, colonne) du jour `day`.
    pub fn position(&self, day: u32) -> Option<(usize, usize)> {
        self.weeks.iter().enumerate().find_map(|(row, week)| {
            week.iter()
                .position(|c| c.date().map(|d| d.day()) == Some(day))
                .map(|col| (row, col))
        })
    }
}
