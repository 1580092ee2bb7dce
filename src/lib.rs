//! Outlier filtering and descriptive charts for a daily page-view series.
//!
//! The pipeline loads a `date,value` CSV file, drops every observation outside the 2.5th..97.5th
//! percentile range of the full series and draws three charts from what is left:
//!
//! - a line plot of page views against time,
//! - a bar chart of monthly averages grouped by year,
//! - a pair of box plots showing the spread by year and by month.
//!
//! ```no_run
//! use pageviews::PageViews;
//!
//! let mut page_views = PageViews::default().output_directory("charts");
//! let series = page_views.load().unwrap();
//! page_views.draw_line_plot(&series).unwrap();
//! page_views.draw_bar_plot(&series).unwrap();
//! page_views.draw_box_plot(&series).unwrap();
//! ```

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate tracing;

mod error;
mod stats;

pub mod aggregate;
pub mod calendar;
pub mod chart;
pub mod clean;
pub mod data;
pub mod plot;

use std::path::{Path, PathBuf};

pub use crate::aggregate::MonthlyAverageTable;
pub use crate::calendar::{LabeledObservation, Month};
pub use crate::chart::{BarChart, BoxChart, LineChart};
pub use crate::clean::{clean, CleanedSeries, PercentileBounds};
pub use crate::data::{Dataset, Observation};
pub use crate::error::{Error, Result};
pub use crate::plot::{PlotContext, Plotter, PlottersBackend};
pub use crate::stats::univariate::{BoxSummary, Percentiles, Sample};

/// File name of the line plot inside the output directory
pub const LINE_PLOT_FILE: &str = "line_plot.svg";
/// File name of the bar chart inside the output directory
pub const BAR_PLOT_FILE: &str = "bar_plot.svg";
/// File name of the box plots inside the output directory
pub const BOX_PLOT_FILE: &str = "box_plot.svg";

/// Input file read when none is configured
pub const DEFAULT_INPUT: &str = "fcc-forum-pageviews.csv";

static LINE_PLOT_SIZE: (u32, u32) = (1000, 600);
static BAR_PLOT_SIZE: (u32, u32) = (1000, 600);
static BOX_PLOT_SIZE: (u32, u32) = (1500, 600);

/// The charts produced by one run of the pipeline
#[derive(Clone, Debug, PartialEq)]
pub struct Figures {
    /// Number of observations left after cleaning
    pub cleaned_count: usize,
    /// Monthly averages behind the bar chart
    pub monthly_averages: MonthlyAverageTable,
    /// Specification of the line plot
    pub line: LineChart,
    /// Specification of the bar chart
    pub bar: BarChart,
    /// Specification of the box plots
    pub boxes: BoxChart,
}

/// Configuration and entry point of the pipeline
///
/// The defaults read `fcc-forum-pageviews.csv` and write the charts to the current directory.
pub struct PageViews {
    input: PathBuf,
    output_directory: PathBuf,
    line_plot_size: (u32, u32),
    bar_plot_size: (u32, u32),
    box_plot_size: (u32, u32),
    plotter: Box<dyn Plotter>,
}

impl Default for PageViews {
    fn default() -> PageViews {
        PageViews {
            input: PathBuf::from(DEFAULT_INPUT),
            output_directory: PathBuf::from("."),
            line_plot_size: LINE_PLOT_SIZE,
            bar_plot_size: BAR_PLOT_SIZE,
            box_plot_size: BOX_PLOT_SIZE,
            plotter: Box::new(PlottersBackend),
        }
    }
}

impl PageViews {
    /// Changes the CSV file the series is read from
    pub fn input<P: AsRef<Path>>(mut self, path: P) -> PageViews {
        self.input = path.as_ref().to_owned();
        self
    }

    /// Changes the directory the charts are written to. It must already exist.
    pub fn output_directory<P: AsRef<Path>>(mut self, path: P) -> PageViews {
        self.output_directory = path.as_ref().to_owned();
        self
    }

    /// Changes the size in pixels of the line plot
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero
    pub fn line_plot_size(mut self, width: u32, height: u32) -> PageViews {
        assert!(width > 0 && height > 0);

        self.line_plot_size = (width, height);
        self
    }

    /// Changes the size in pixels of the bar chart
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero
    pub fn bar_plot_size(mut self, width: u32, height: u32) -> PageViews {
        assert!(width > 0 && height > 0);

        self.bar_plot_size = (width, height);
        self
    }

    /// Changes the size in pixels of the figure holding both box plots
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero
    pub fn box_plot_size(mut self, width: u32, height: u32) -> PageViews {
        assert!(width > 0 && height > 0);

        self.box_plot_size = (width, height);
        self
    }

    /// Replaces the rendering backend
    pub fn with_plotter<P: Plotter + 'static>(mut self, plotter: P) -> PageViews {
        self.plotter = Box::new(plotter);
        self
    }

    /// Path a chart file is written to
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_directory.join(file_name)
    }

    /// Loads the input file and removes its outliers
    pub fn load(&self) -> Result<CleanedSeries> {
        let dataset = Dataset::from_path(&self.input)?;
        clean(&dataset)
    }

    /// Draws the cleaned series against time into `line_plot.svg`
    pub fn draw_line_plot(&mut self, series: &CleanedSeries) -> Result<LineChart> {
        let chart = LineChart::new(series);
        let path = self.output_path(LINE_PLOT_FILE);

        self.plotter.line(
            PlotContext {
                path: &path,
                size: self.line_plot_size,
            },
            &chart,
        )?;
        info!("Wrote {:?}", path);

        Ok(chart)
    }

    /// Draws the monthly averages, grouped by year, into `bar_plot.svg`
    pub fn draw_bar_plot(&mut self, series: &CleanedSeries) -> Result<BarChart> {
        let chart = BarChart::new(&MonthlyAverageTable::from_series(series));
        let path = self.output_path(BAR_PLOT_FILE);

        self.plotter.bar(
            PlotContext {
                path: &path,
                size: self.bar_plot_size,
            },
            &chart,
        )?;
        info!("Wrote {:?}", path);

        Ok(chart)
    }

    /// Draws the year-wise and month-wise box plots into `box_plot.svg`
    pub fn draw_box_plot(&mut self, series: &CleanedSeries) -> Result<BoxChart> {
        let chart = BoxChart::new(series);
        let path = self.output_path(BOX_PLOT_FILE);

        self.plotter.boxes(
            PlotContext {
                path: &path,
                size: self.box_plot_size,
            },
            &chart,
        )?;
        info!("Wrote {:?}", path);

        Ok(chart)
    }

    /// Loads, cleans and draws all three charts
    pub fn run(&mut self) -> Result<Figures> {
        let series = self.load()?;

        Ok(Figures {
            cleaned_count: series.len(),
            monthly_averages: MonthlyAverageTable::from_series(&series),
            line: self.draw_line_plot(&series)?,
            bar: self.draw_bar_plot(&series)?,
            boxes: self.draw_box_plot(&series)?,
        })
    }
}
