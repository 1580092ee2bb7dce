use crate::stats::float::Float;
use cast::usize;

/// A "view" into the percentiles of a sample
///
/// Holds a sorted copy of the data so that repeated queries are `O(1)`.
pub struct Percentiles<A>(Box<[A]>)
where
    A: Float;

impl<A> Percentiles<A>
where
    A: Float,
    usize: cast::From<A, Output = Result<usize, cast::Error>>,
{
    /// Wraps data that is already sorted in ascending order
    pub(crate) fn from_sorted(sorted: Box<[A]>) -> Percentiles<A> {
        debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

        Percentiles(sorted)
    }

    /// Returns the percentile at `p`%
    ///
    /// The rank `p / 100 * (n - 1)` is interpolated linearly between the two closest order
    /// statistics.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the closed `[0, 100]` range
    pub fn at(&self, p: A) -> A {
        let _0 = A::cast(0);
        let _100 = A::cast(100);

        assert!(p >= _0 && p <= _100);
        assert!(!self.0.is_empty());

        let len = self.0.len() - 1;

        if p == _100 {
            return self.0[len];
        }

        let rank = (p / _100) * A::cast(len);
        let integer = rank.floor();
        let fraction = rank - integer;
        // NB `rank` lies in `[0, len]`, the conversion can't fail
        let n = usize(integer).unwrap_or(len);
        let floor = self.0[n];

        match self.0.get(n + 1) {
            Some(&ceiling) => floor + (ceiling - floor) * fraction,
            None => floor,
        }
    }

    /// Returns the 25th, 50th and 75th percentiles
    pub fn quartiles(&self) -> (A, A, A) {
        (
            self.at(A::cast(25)),
            self.at(A::cast(50)),
            self.at(A::cast(75)),
        )
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use crate::stats::univariate::Sample;

    #[test]
    fn interpolates_between_closest_ranks() {
        let data = [1., 2., 3., 4.];
        let percentiles = Sample::new(&data).percentiles();

        assert_relative_eq!(percentiles.at(0.), 1.);
        assert_relative_eq!(percentiles.at(100.), 4.);
        assert_relative_eq!(percentiles.at(50.), 2.5);
        assert_relative_eq!(percentiles.at(2.5), 1.075, epsilon = 1e-12);
        assert_relative_eq!(percentiles.at(97.5), 3.925, epsilon = 1e-12);
    }

    #[test]
    fn unsorted_input() {
        let data = [30., 10., 20.];
        let (q1, q2, q3) = Sample::new(&data).percentiles().quartiles();

        assert_relative_eq!(q1, 15.);
        assert_relative_eq!(q2, 20.);
        assert_relative_eq!(q3, 25.);
    }

    #[test]
    fn single_element() {
        let data = [42.];
        let percentiles = Sample::new(&data).percentiles();

        assert_relative_eq!(percentiles.at(2.5), 42.);
        assert_relative_eq!(percentiles.at(97.5), 42.);
        assert_eq!(percentiles.quartiles(), (42., 42., 42.));
    }

    #[test]
    #[should_panic]
    fn out_of_range() {
        let data = [1., 2.];
        Sample::new(&data).percentiles().at(100.5);
    }
}
