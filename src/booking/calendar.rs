// ============================================================================
// CALENDARIO - Cálculo de meses y fechas habilitadas (sin DOM)
// ============================================================================

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashSet;
use std::fmt;

/// Mes visible en el calendario
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    /// 1..=12
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn days_in_month(&self) -> u32 {
        let next_first = self.next().first_day();
        (next_first - self.first_day()).num_days() as u32
    }

    /// Celdas del mes en semanas que empiezan el lunes; `None` es relleno
    pub fn grid(&self) -> Vec<Option<NaiveDate>> {
        let first = self.first_day();
        let offset = first.weekday().num_days_from_monday() as usize;

        let mut cells: Vec<Option<NaiveDate>> = vec![None; offset];
        cells.extend((0..self.days_in_month()).map(|d| Some(first + Duration::days(d as i64))));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells
    }

    pub fn label(&self) -> String {
        const MESES: [&str; 12] = [
            "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio",
            "Julio", "Agosto", "Septiembre", "Octubre", "Noviembre", "Diciembre",
        ];
        let name = (self.month as usize)
            .checked_sub(1)
            .and_then(|i| MESES.get(i))
            .copied()
            .unwrap_or("?");
        format!("{} {}", name, self.year)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// `YYYY-MM-DD` en fecha local, sin zona horaria
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Una fecha se puede elegir si no es pasada y el backend la marcó disponible
pub fn is_selectable(date: NaiveDate, today: NaiveDate, available: &HashSet<NaiveDate>) -> bool {
    date >= today && available.contains(&date)
}

/// No se navega a meses anteriores al actual
pub fn can_go_to_prev_month(visible: MonthKey, today: NaiveDate) -> bool {
    visible > MonthKey::of(today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_key_formats_as_year_month() {
        assert_eq!(MonthKey::of(date(2026, 3, 15)).to_string(), "2026-03");
    }

    #[test]
    fn month_navigation_wraps_years() {
        let dec = MonthKey { year: 2025, month: 12 };
        assert_eq!(dec.next(), MonthKey { year: 2026, month: 1 });
        assert_eq!(dec.next().prev(), dec);
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(MonthKey { year: 2024, month: 2 }.days_in_month(), 29);
        assert_eq!(MonthKey { year: 2026, month: 2 }.days_in_month(), 28);
        assert_eq!(MonthKey { year: 2026, month: 12 }.days_in_month(), 31);
    }

    #[test]
    fn grid_starts_on_monday() {
        // 1 de octubre de 2026 es jueves
        let grid = MonthKey { year: 2026, month: 10 }.grid();
        assert_eq!(&grid[..3], &[None, None, None]);
        assert_eq!(grid[3], Some(date(2026, 10, 1)));
        assert_eq!(grid.len() % 7, 0);
        assert_eq!(grid.iter().flatten().count(), 31);
    }

    #[test]
    fn past_or_unavailable_dates_are_not_selectable() {
        let today = date(2026, 10, 19);
        let available: HashSet<_> = [date(2026, 10, 18), date(2026, 10, 19), date(2026, 10, 22)]
            .into_iter()
            .collect();

        assert!(!is_selectable(date(2026, 10, 18), today, &available));
        assert!(is_selectable(date(2026, 10, 19), today, &available));
        assert!(is_selectable(date(2026, 10, 22), today, &available));
        assert!(!is_selectable(date(2026, 10, 23), today, &available));
    }

    #[test]
    fn previous_month_is_blocked_at_current_month() {
        let today = date(2026, 10, 19);
        assert!(!can_go_to_prev_month(MonthKey::of(today), today));
        assert!(can_go_to_prev_month(MonthKey { year: 2026, month: 11 }, today));
    }

    #[test]
    fn labels_are_spanish_and_tolerate_out_of_range_months() {
        assert_eq!(MonthKey { year: 2026, month: 1 }.label(), "Enero 2026");
        assert_eq!(MonthKey { year: 2026, month: 0 }.label(), "? 2026");
        assert_eq!(MonthKey { year: 2026, month: 13 }.label(), "? 2026");
    }

    #[test]
    fn dates_format_without_time() {
        assert_eq!(format_date(date(2026, 1, 5)), "2026-01-05");
    }
}
