use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::FontTransform;

use super::{PlotContext, Plotter};
use crate::chart::{BarChart, BoxChart, LineChart};
use crate::error::{Error, Result};

static DEFAULT_FONT: FontFamily = FontFamily::SansSerif;
static POINT_SIZE: u32 = 3;

const DARK_BLUE: RGBColor = RGBColor(31, 120, 180);

/// One color per calendar month
static MONTH_COLORS: [RGBColor; 12] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
    RGBColor(0, 0, 139),
    RGBColor(139, 0, 139),
];

mod bar;
mod boxes;
mod line;

type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;
type DrawResult = std::result::Result<(), DrawingAreaErrorKind<std::io::Error>>;

/// Style of the x tick labels. Axis titles must set their own style or they inherit the rotation
fn rotated_labels<'a>() -> FontDesc<'a> {
    (DEFAULT_FONT, 12).into_font().transform(FontTransform::Rotate90)
}

/// `lo..hi` widened by 5% on each side, never empty
fn padded(lo: f64, hi: f64) -> Range<f64> {
    if hi > lo {
        let pad = (hi - lo) * 0.05;
        (lo - pad)..(hi + pad)
    } else {
        (lo - 1.)..(hi + 1.)
    }
}

/// Axis holding `n` categories centred on `0, 1, .., n - 1`
fn categories(n: usize) -> Range<f64> {
    -0.5..(n.max(1) as f64 - 0.5)
}

/// Label of the category at `x`, empty between categories
fn category_label<T: AsRef<str>>(labels: &[T], x: f64) -> String {
    let i = x.round();
    if (x - i).abs() > 1e-6 || i < 0. {
        return String::new();
    }
    labels
        .get(i as usize)
        .map(|l| l.as_ref().to_owned())
        .unwrap_or_default()
}

fn draw<F>(ctx: PlotContext<'_>, figure: F) -> Result<()>
where
    F: FnOnce(&Area<'_>) -> DrawResult,
{
    let root = SVGBackend::new(ctx.path, ctx.size).into_drawing_area();
    let written = figure(&root).and_then(|_| root.present());

    written.map_err(|e| write_error(ctx.path, e))
}

fn write_error(path: &Path, e: DrawingAreaErrorKind<std::io::Error>) -> Error {
    Error::FileWrite {
        path: path.to_owned(),
        message: e.to_string(),
    }
}

/// Draws charts as SVG files through `plotters`
#[derive(Default)]
pub struct PlottersBackend;

impl Plotter for PlottersBackend {
    fn line(&mut self, ctx: PlotContext<'_>, chart: &LineChart) -> Result<()> {
        debug!("Drawing {} points into {:?}", chart.points.len(), ctx.path);
        draw(ctx, |root| line::line_figure(root, chart))
    }

    fn bar(&mut self, ctx: PlotContext<'_>, chart: &BarChart) -> Result<()> {
        debug!(
            "Drawing {} years x {} months into {:?}",
            chart.years.len(),
            chart.series.len(),
            ctx.path
        );
        draw(ctx, |root| bar::bar_figure(root, chart))
    }

    fn boxes(&mut self, ctx: PlotContext<'_>, chart: &BoxChart) -> Result<()> {
        debug!(
            "Drawing {} + {} boxes into {:?}",
            chart.by_year.boxes.len(),
            chart.by_month.boxes.len(),
            ctx.path
        );
        draw(ctx, |root| boxes::box_figure(root, chart))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn padded_range_is_never_empty() {
        assert_eq!(padded(5., 5.), 4.0..6.0);
        assert_eq!(padded(0., 100.), -5.0..105.0);
    }

    #[test]
    fn labels_only_at_category_centres() {
        let labels = ["2016", "2017"];

        assert_eq!(category_label(&labels, 0.), "2016");
        assert_eq!(category_label(&labels, 1.), "2017");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, 2.), "");
        assert_eq!(category_label(&labels, -1.), "");
    }
}
