//! Immutable chart specifications
//!
//! Each chart is plain data: the series to draw plus its titles and labels. Building one never
//! touches the filesystem; a [`Plotter`](crate::plot::Plotter) turns it into an image.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::aggregate::MonthlyAverageTable;
use crate::calendar::{LabeledObservation, Month};
use crate::clean::CleanedSeries;
use crate::stats::univariate::{BoxSummary, Sample};

/// Page views against time, one point per cleaned observation
#[derive(Clone, Debug, PartialEq)]
pub struct LineChart {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub points: Vec<(NaiveDate, f64)>,
}

impl LineChart {
    pub fn new(series: &CleanedSeries) -> LineChart {
        LineChart {
            title: "Daily freeCodeCamp Forum Page Views 5/2016-12/2019",
            x_label: "Date",
            y_label: "Page Views",
            points: series
                .observations()
                .iter()
                .map(|o| (o.date, o.value))
                .collect(),
        }
    }
}

/// The bars of one month, at most one per year
#[derive(Clone, Debug, PartialEq)]
pub struct BarSeries {
    pub month: Month,
    pub bars: Vec<(i32, f64)>,
}

impl BarSeries {
    /// Legend entry
    pub fn label(&self) -> &'static str {
        self.month.name()
    }
}

/// Monthly averages grouped by year
#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub legend_title: &'static str,
    /// One group per year, ascending
    pub years: Vec<i32>,
    /// One series per month present in the data, January first
    pub series: Vec<BarSeries>,
}

impl BarChart {
    pub fn new(table: &MonthlyAverageTable) -> BarChart {
        let series = table
            .months()
            .into_iter()
            .map(|month| BarSeries {
                month,
                bars: table
                    .years()
                    .into_iter()
                    .filter_map(|year| table.get(year, month).map(|mean| (year, mean)))
                    .collect(),
            })
            .collect();

        BarChart {
            title: "Average Page Views Per Month (5/2016-12/2019)",
            x_label: "Years",
            y_label: "Average Page Views",
            legend_title: "Months",
            years: table.years(),
            series,
        }
    }

    /// Tallest bar, if any
    pub fn max(&self) -> Option<f64> {
        self.series
            .iter()
            .flat_map(|s| s.bars.iter().map(|&(_, mean)| mean))
            .fold(None, |acc: Option<f64>, x| Some(acc.map_or(x, |m| m.max(x))))
    }
}

/// One box of a box plot
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledBox {
    pub label: String,
    pub summary: BoxSummary<f64>,
}

/// One of the two box plots
#[derive(Clone, Debug, PartialEq)]
pub struct BoxPanel {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub boxes: Vec<LabeledBox>,
}

impl BoxPanel {
    /// Lowest and highest point drawn in the panel
    pub fn extent(&self) -> Option<(f64, f64)> {
        self.boxes
            .iter()
            .map(|b| b.summary.extent())
            .fold(None, |acc, (lo, hi)| match acc {
                Some((a, b)) => Some((f64::min(a, lo), f64::max(b, hi))),
                None => Some((lo, hi)),
            })
    }
}

/// Spread of page views by year (trend) and by month (seasonality), side by side
#[derive(Clone, Debug, PartialEq)]
pub struct BoxChart {
    pub by_year: BoxPanel,
    pub by_month: BoxPanel,
}

impl BoxChart {
    pub fn new(series: &CleanedSeries) -> BoxChart {
        let labeled = LabeledObservation::label(series);

        let mut years: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
        let mut months: BTreeMap<Month, Vec<f64>> = BTreeMap::new();
        for o in &labeled {
            years.entry(o.year).or_default().push(o.value);
            months.entry(o.month).or_default().push(o.value);
        }

        BoxChart {
            by_year: BoxPanel {
                title: "Year-wise Box Plot (Trend)",
                x_label: "Year",
                y_label: "Page Views",
                boxes: boxes(years),
            },
            by_month: BoxPanel {
                title: "Month-wise Box Plot (Seasonality)",
                x_label: "Month",
                y_label: "Page Views",
                boxes: boxes(months),
            },
        }
    }
}

// `BTreeMap` iteration gives ascending years and calendar-ordered months
fn boxes<K: ToString>(groups: BTreeMap<K, Vec<f64>>) -> Vec<LabeledBox> {
    groups
        .into_iter()
        .map(|(key, values)| LabeledBox {
            label: key.to_string(),
            summary: BoxSummary::new(Sample::new(&values)),
        })
        .collect()
}
