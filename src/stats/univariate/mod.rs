//! Univariate analysis

mod percentiles;
mod sample;
mod tukey;

pub use self::percentiles::Percentiles;
pub use self::sample::Sample;
pub use self::tukey::BoxSummary;
