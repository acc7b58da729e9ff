//! Monthly P&L heatmap.

use crate::domain::journal::Trade;
use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::Decimal;

/// The month currently shown on the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    /// 1..=12
    pub month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Parse `YYYY-MM`
    pub fn parse(raw: &str) -> Option<Self> {
        let (year, month) = raw.trim().split_once('-')?;
        Self::new(year.parse().ok()?, month.parse().ok()?)
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.next().first_day();
        next.pred_opt()
            .map(|last| last.day())
            .unwrap_or(31)
    }

    /// e.g. "March 2024"
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

/// Heatmap colouring of one day cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayTone {
    Empty,
    Profit,
    Loss,
    Flat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub day: u32,
    pub date: NaiveDate,
    pub total_pnl: Decimal,
    pub trade_count: usize,
}

impl CalendarDay {
    pub fn tone(&self) -> DayTone {
        if self.trade_count == 0 {
            DayTone::Empty
        } else if self.total_pnl > Decimal::ZERO {
            DayTone::Profit
        } else if self.total_pnl < Decimal::ZERO {
            DayTone::Loss
        } else {
            DayTone::Flat
        }
    }
}

/// A Sunday-first month grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    pub cursor: MonthCursor,
    /// Empty cells before the 1st (Sunday = 0)
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
}

impl CalendarMonth {
    pub fn build(trades: &[Trade], cursor: MonthCursor) -> Self {
        let first = cursor.first_day();
        let days = (1..=cursor.days_in_month())
            .filter_map(|day| first.with_day(day))
            .map(|date| {
                let (total_pnl, trade_count) = trades
                    .iter()
                    .filter(|t| t.date == date)
                    .fold((Decimal::ZERO, 0usize), |(sum, n), t| (sum + t.pnl, n + 1));
                CalendarDay {
                    day: date.day(),
                    date,
                    total_pnl,
                    trade_count,
                }
            })
            .collect();

        Self {
            cursor,
            leading_blanks: first.weekday().num_days_from_sunday(),
            days,
        }
    }

    pub fn day(&self, day: u32) -> Option<&CalendarDay> {
        self.days.iter().find(|d| d.day == day)
    }

    /// Grid rows of 7 cells; `None` marks padding before the 1st and after the last day
    pub fn weeks(&self) -> Vec<Vec<Option<&CalendarDay>>> {
        let mut cells: Vec<Option<&CalendarDay>> = (0..self.leading_blanks).map(|_| None).collect();
        cells.extend(self.days.iter().map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells.chunks(7).map(|week| week.to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_rolls_over_years() {
        let jan = MonthCursor::new(2024, 1).unwrap();
        assert_eq!(jan.prev(), MonthCursor::new(2023, 12).unwrap());
        let dec = MonthCursor::new(2024, 12).unwrap();
        assert_eq!(dec.next(), MonthCursor::new(2025, 1).unwrap());
        assert!(MonthCursor::new(2024, 13).is_none());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(MonthCursor::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(MonthCursor::new(2023, 2).unwrap().days_in_month(), 28);
        assert_eq!(MonthCursor::new(2024, 12).unwrap().days_in_month(), 31);
        assert_eq!(MonthCursor::new(2024, 4).unwrap().days_in_month(), 30);
    }

    #[test]
    fn test_parse_and_label() {
        let cursor = MonthCursor::parse("2024-03").unwrap();
        assert_eq!(cursor.label(), "March 2024");
        assert!(MonthCursor::parse("2024/03").is_none());
    }

    #[test]
    fn test_grid_layout() {
        // 1 March 2024 was a Friday
        let month = CalendarMonth::build(&[], MonthCursor::new(2024, 3).unwrap());
        assert_eq!(month.leading_blanks, 5);
        assert_eq!(month.days.len(), 31);

        let weeks = month.weeks();
        assert!(weeks.iter().all(|w| w.len() == 7));
        assert!(weeks[0][4].is_none());
        assert_eq!(weeks[0][5].map(|d| d.day), Some(1));
        assert!(month.days.iter().all(|d| d.tone() == DayTone::Empty));
    }
}
