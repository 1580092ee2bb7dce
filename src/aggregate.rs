//! Per (year, month) averages of the cleaned series

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::calendar::{LabeledObservation, Month};
use crate::clean::CleanedSeries;
use crate::stats::univariate::Sample;

/// Mean page views of every (year, month) that has at least one observation
///
/// Months without data have no entry; they are never reported as zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MonthlyAverageTable {
    averages: BTreeMap<(i32, Month), f64>,
}

impl MonthlyAverageTable {
    pub fn from_series(series: &CleanedSeries) -> MonthlyAverageTable {
        let groups = LabeledObservation::label(series)
            .into_iter()
            .map(|o| ((o.year, o.month), o.value))
            .into_group_map();

        let averages = groups
            .into_iter()
            .map(|(key, values)| (key, Sample::new(&values).mean()))
            .collect();

        MonthlyAverageTable { averages }
    }

    /// Mean for `year`/`month`, `None` when that month has no observations
    pub fn get(&self, year: i32, month: Month) -> Option<f64> {
        self.averages.get(&(year, month)).cloned()
    }

    /// Distinct years, ascending
    pub fn years(&self) -> Vec<i32> {
        self.averages.keys().map(|&(year, _)| year).dedup().collect()
    }

    /// Months that have data in at least one year, in calendar order
    pub fn months(&self) -> Vec<Month> {
        self.averages
            .keys()
            .map(|&(_, month)| month)
            .sorted()
            .dedup()
            .collect()
    }

    /// Entries ordered by year, then month
    pub fn iter(&self) -> impl Iterator<Item = (i32, Month, f64)> + '_ {
        self.averages
            .iter()
            .map(|(&(year, month), &mean)| (year, month, mean))
    }

    pub fn len(&self) -> usize {
        self.averages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.averages.is_empty()
    }
}
