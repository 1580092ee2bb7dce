//! Descriptive statistics used to clean and summarize the series.
//!
//! Only univariate statistics are needed: percentiles for the outlier bounds, the mean for the
//! monthly averages and the Tukey summary behind each box plot.

pub mod univariate;

mod float;

use self::float::Float;

fn sum<A>(xs: &[A]) -> A
where
    A: Float,
{
    use std::ops::Add;

    xs.iter().cloned().fold(A::cast(0), Add::add)
}
