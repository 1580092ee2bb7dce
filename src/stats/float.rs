//! Float trait

use cast::From;
use num_traits::float;

/// `num_traits::float::Float` plus the lossless casts the statistics code relies on.
pub trait Float:
    float::Float + From<usize, Output = Self> + From<f32, Output = Self> + Sync + Send
{
}

impl Float for f32 {}
impl Float for f64 {}
