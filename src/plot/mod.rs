//! Rendering of chart specifications into image files

mod plotters_backend;

use std::path::Path;

use crate::chart::{BarChart, BoxChart, LineChart};
use crate::error::Result;

pub use self::plotters_backend::PlottersBackend;

/// Where and how big a chart is drawn
#[derive(Clone, Copy, Debug)]
pub struct PlotContext<'a> {
    pub path: &'a Path,
    pub size: (u32, u32),
}

/// A rendering backend
///
/// Every method writes exactly one file at `ctx.path`. Failing to draw or to write it is an error
/// the caller can't recover from.
pub trait Plotter {
    fn line(&mut self, ctx: PlotContext<'_>, chart: &LineChart) -> Result<()>;

    fn bar(&mut self, ctx: PlotContext<'_>, chart: &BarChart) -> Result<()>;

    /// Both box plots go into one figure, side by side
    fn boxes(&mut self, ctx: PlotContext<'_>, chart: &BoxChart) -> Result<()>;
}
