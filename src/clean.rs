//! Percentile-based outlier removal

use itertools::Itertools;

use crate::data::{Dataset, Observation};
use crate::error::{Error, Result};
use crate::stats::univariate::Sample;

/// Percentile below which observations are dropped
pub const LOWER_PERCENTILE: f64 = 2.5;
/// Percentile above which observations are dropped
pub const UPPER_PERCENTILE: f64 = 97.5;

/// Closed `[lower, upper]` range of values kept by the cleaner
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PercentileBounds {
    pub lower: f64,
    pub upper: f64,
}

impl PercentileBounds {
    /// Computes the 2.5th and 97.5th percentiles of every value in `dataset`
    pub fn of(dataset: &Dataset) -> Result<PercentileBounds> {
        if dataset.is_empty() {
            return Err(Error::EmptyInput);
        }

        let values = dataset.values();
        let percentiles = Sample::new(&values).percentiles();

        Ok(PercentileBounds {
            lower: percentiles.at(LOWER_PERCENTILE),
            upper: percentiles.at(UPPER_PERCENTILE),
        })
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// The observations that survived outlier removal, in source order
#[derive(Clone, Debug, PartialEq)]
pub struct CleanedSeries {
    bounds: PercentileBounds,
    observations: Vec<Observation>,
}

impl CleanedSeries {
    /// The bounds the series was filtered with. They come from the full dataset and are never
    /// recomputed on the cleaned data.
    pub fn bounds(&self) -> PercentileBounds {
        self.bounds
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }
}

/// Drops every observation outside the `[P2.5, P97.5]` range of `dataset`
///
/// # Errors
///
/// Returns `Error::EmptyInput` when there is nothing to compute percentiles from
pub fn clean(dataset: &Dataset) -> Result<CleanedSeries> {
    let bounds = PercentileBounds::of(dataset)?;
    let observations: Vec<_> = dataset
        .observations()
        .iter()
        .filter(|o| bounds.contains(o.value))
        .cloned()
        .collect();

    debug!("Percentile bounds: [{}, {}]", bounds.lower, bounds.upper);
    info!(
        "Kept {} of {} observations ({} dropped as outliers)",
        observations.len(),
        dataset.len(),
        dataset.len() - observations.len()
    );
    debug!(
        "First rows after cleaning: {}",
        observations
            .iter()
            .take(5)
            .map(|o| format!("{} {}", o.date, o.value))
            .join(", ")
    );

    Ok(CleanedSeries {
        bounds,
        observations,
    })
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use chrono::{Duration, NaiveDate};
    use quickcheck::{quickcheck, TestResult};

    use super::*;

    fn dataset(values: &[f64]) -> Dataset {
        let start = NaiveDate::from_ymd_opt(2016, 5, 9).unwrap();
        let observations = values
            .iter()
            .enumerate()
            .map(|(i, &value)| Observation {
                date: start + Duration::days(i as i64),
                value,
            })
            .collect();

        Dataset::new(observations).unwrap()
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(clean(&Dataset::default()), Err(Error::EmptyInput)));
    }

    #[test]
    fn constant_series_is_kept_whole() {
        let cleaned = clean(&dataset(&[7.; 25])).unwrap();

        assert_eq!(cleaned.len(), 25);
        assert_eq!(cleaned.bounds().lower, 7.);
        assert_eq!(cleaned.bounds().upper, 7.);
    }

    #[test]
    fn single_observation_is_kept() {
        let cleaned = clean(&dataset(&[1201.])).unwrap();

        assert_eq!(cleaned.len(), 1);
    }

    #[test]
    fn extreme_values_are_dropped() {
        let mut values: Vec<f64> = (0..100u32).map(|i| 1000. + f64::from(i)).collect();
        values[40] = 100_000.;
        values[60] = 1.;
        let cleaned = clean(&dataset(&values)).unwrap();

        assert!(!cleaned.values().contains(&100_000.));
        assert!(!cleaned.values().contains(&1.));
        assert_relative_eq!(cleaned.bounds().lower, 1001.475, epsilon = 1e-9);
    }

    #[test]
    fn filtering_preserves_order() {
        let values = [5., 1., 4., 2., 3., 100., 0.];
        let cleaned = clean(&dataset(&values)).unwrap();
        let dates: Vec<_> = cleaned.observations().iter().map(|o| o.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();

        assert_eq!(dates, sorted);
    }

    quickcheck! {
        fn retained_values_lie_within_bounds(values: Vec<u16>) -> TestResult {
            if values.is_empty() {
                return TestResult::discard();
            }

            let values: Vec<f64> = values.into_iter().map(f64::from).collect();
            let original = dataset(&values);
            let bounds = PercentileBounds::of(&original).unwrap();
            let cleaned = clean(&original).unwrap();

            TestResult::from_bool(
                cleaned.bounds() == bounds
                    && bounds.lower <= bounds.upper
                    && cleaned.values().iter().all(|&v| v >= bounds.lower && v <= bounds.upper)
                    && cleaned.len() == values.iter().filter(|&&v| bounds.contains(v)).count()
            )
        }
    }

    quickcheck! {
        fn cleaning_is_deterministic(values: Vec<u16>) -> TestResult {
            if values.is_empty() {
                return TestResult::discard();
            }

            let values: Vec<f64> = values.into_iter().map(f64::from).collect();
            let original = dataset(&values);

            TestResult::from_bool(clean(&original).unwrap() == clean(&original).unwrap())
        }
    }
}
