//! Tukey's box-and-whisker summary
//!
//! The box spans the interquartile range. Two "fences" classify the data, computed from the
//! quartiles:
//!
//! ``` ignore
//! // q1, q3 are the first and third quartiles
//! let iqr = q3 - q1;  // The interquartile range
//! let (f1, f2) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);  // the "fences"
//! ```
//!
//! Each whisker reaches the most extreme data point that still lies inside its fence. Everything
//! beyond the fences is an outlier and gets drawn as a discrete marker.
//!
//! ``` ignore
//!            outlier    whisker       box        whisker    outlier
//!         x   |    |-------------[  |    ]-------------|    |   x
//!             f1   lo            q1 q2   q3            hi   f2
//! ```

use crate::stats::float::Float;
use crate::stats::univariate::Sample;

/// Summary statistics needed to draw one box
#[derive(Clone, Debug, PartialEq)]
pub struct BoxSummary<A> {
    pub q1: A,
    pub median: A,
    pub q3: A,
    /// Lowest data point at or above the lower fence
    pub lower_whisker: A,
    /// Highest data point at or below the upper fence
    pub upper_whisker: A,
    /// Data points outside the fences, in sample order
    pub outliers: Vec<A>,
}

impl<A> BoxSummary<A>
where
    A: Float,
    usize: cast::From<A, Output = Result<usize, cast::Error>>,
{
    /// Summarizes the sample
    ///
    /// - Time: `O(N log N) where N = length`
    pub fn new(sample: &Sample<A>) -> BoxSummary<A> {
        let (q1, median, q3) = sample.percentiles().quartiles();
        let (lo, hi) = BoxSummary::fences(q1, q3);

        let mut lower_whisker = q1;
        let mut upper_whisker = q3;
        let mut outliers = vec![];

        for &x in sample.iter() {
            if x < lo || x > hi {
                outliers.push(x);
            } else {
                lower_whisker = lower_whisker.min(x);
                upper_whisker = upper_whisker.max(x);
            }
        }

        BoxSummary {
            q1,
            median,
            q3,
            lower_whisker,
            upper_whisker,
            outliers,
        }
    }

    /// Returns the inner fences `(q1 - 1.5 * iqr, q3 + 1.5 * iqr)`
    fn fences(q1: A, q3: A) -> (A, A) {
        let k = A::cast(1.5);
        let iqr = q3 - q1;

        (q1 - k * iqr, q3 + k * iqr)
    }

    /// Returns the interquartile range
    pub fn iqr(&self) -> A {
        self.q3 - self.q1
    }

    /// Lowest and highest point drawn, outliers included
    pub fn extent(&self) -> (A, A) {
        self.outliers
            .iter()
            .fold((self.lower_whisker, self.upper_whisker), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            })
    }
}
