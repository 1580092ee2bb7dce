//! Year and month labels derived from observation dates

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::clean::CleanedSeries;

/// Calendar month. Ordering follows the calendar, not the label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    Jan = 1,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// Every month, January first
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Month of `date`
    pub fn of(date: NaiveDate) -> Month {
        // `month0` is always in `0..12`
        Month::ALL[date.month0() as usize]
    }

    /// 1 for January up to 12 for December
    pub fn ordinal(self) -> u32 {
        self as u32
    }

    /// Zero-based position on a calendar-ordered axis
    pub fn index(self) -> usize {
        self as usize - 1
    }

    /// Three-letter label, e.g. "Jan"
    pub fn abbreviation(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// Full English name, e.g. "January"
    pub fn name(self) -> &'static str {
        match self {
            Month::Jan => "January",
            Month::Feb => "February",
            Month::Mar => "March",
            Month::Apr => "April",
            Month::May => "May",
            Month::Jun => "June",
            Month::Jul => "July",
            Month::Aug => "August",
            Month::Sep => "September",
            Month::Oct => "October",
            Month::Nov => "November",
            Month::Dec => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// A cleaned observation with its year and month
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabeledObservation {
    pub date: NaiveDate,
    pub value: f64,
    pub year: i32,
    pub month: Month,
}

impl LabeledObservation {
    /// Labels every observation of the series, keeping its order
    pub fn label(series: &CleanedSeries) -> Vec<LabeledObservation> {
        series
            .observations()
            .iter()
            .map(|o| LabeledObservation {
                date: o.date,
                value: o.value,
                year: o.date.year(),
                month: Month::of(o.date),
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn calendar_order_is_not_alphabetical() {
        let mut months = vec![Month::Dec, Month::Apr, Month::Aug, Month::Jan, Month::Feb];
        months.sort();

        assert_eq!(
            months,
            vec![Month::Jan, Month::Feb, Month::Apr, Month::Aug, Month::Dec]
        );
    }

    #[test]
    fn ordinals_and_labels() {
        for (i, month) in Month::ALL.iter().enumerate() {
            assert_eq!(month.index(), i);
            assert_eq!(month.ordinal() as usize, i + 1);
        }

        let labels: Vec<_> = Month::ALL.iter().map(|m| m.abbreviation()).collect();
        assert_eq!(
            labels,
            vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        );
        assert_eq!(Month::Sep.name(), "September");
        assert_eq!(Month::Sep.to_string(), "Sep");
    }

    #[test]
    fn month_matches_strftime() {
        let date = NaiveDate::from_ymd_opt(2017, 3, 31).unwrap();

        assert_eq!(Month::of(date), Month::Mar);
        assert_eq!(Month::of(date).abbreviation(), date.format("%b").to_string());
    }
}
