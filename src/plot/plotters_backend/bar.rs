use super::*;

/// Share of a year's slot taken up by its twelve bars
const GROUP_WIDTH: f64 = 0.8;

/// Horizontal extent of the bar for the `month_index`-th month in the year group centred at
/// `group`. Every month owns a fixed slot so a missing month leaves a gap instead of shifting
/// the others.
fn bar_span(group: usize, month_index: usize) -> (f64, f64) {
    let width = GROUP_WIDTH / 12.;
    let left = group as f64 - GROUP_WIDTH / 2. + width * month_index as f64;

    (left, left + width)
}

pub(crate) fn bar_figure(root: &Area<'_>, chart: &BarChart) -> DrawResult {
    root.fill(&WHITE)?;

    let labels: Vec<String> = chart.years.iter().map(|y| y.to_string()).collect();
    let top = chart.max().unwrap_or(1.).max(1.) * 1.1;

    let mut cc = ChartBuilder::on(root)
        .caption(chart.title, (DEFAULT_FONT, 20))
        .margin(10)
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .build_cartesian_2d(categories(labels.len()), 0.0..top)?;

    let formatter = |x: &f64| category_label(labels.as_slice(), *x);
    cc.configure_mesh()
        .disable_x_mesh()
        .x_desc(chart.x_label)
        .y_desc(chart.y_label)
        .x_labels(labels.len().max(1))
        .x_label_formatter(&formatter)
        .x_label_style(rotated_labels())
        .axis_desc_style((DEFAULT_FONT, 15))
        .draw()?;

    // Heading of the legend
    cc.draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())?
        .label(chart.legend_title)
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], TRANSPARENT.filled()));

    for series in &chart.series {
        let color = MONTH_COLORS[series.month.index()];
        let bars = series.bars.iter().filter_map(|&(year, mean)| {
            let group = chart.years.iter().position(|&y| y == year)?;
            let (left, right) = bar_span(group, series.month.index());

            Some(Rectangle::new([(left, 0.), (right, mean)], color.filled()))
        });

        cc.draw_series(bars)?
            .label(series.label())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    cc.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::bar_span;

    #[test]
    fn months_fill_the_group_left_to_right() {
        let (jan_left, jan_right) = bar_span(0, 0);
        let (dec_left, dec_right) = bar_span(0, 11);

        assert_relative_eq!(jan_left, -0.4);
        assert_relative_eq!(jan_right - jan_left, 0.8 / 12.);
        assert_relative_eq!(dec_right, 0.4, epsilon = 1e-12);
        assert!(dec_left > jan_right);

        let (next_year, _) = bar_span(1, 0);
        assert_relative_eq!(next_year, 0.6);
    }
}
