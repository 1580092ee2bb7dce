use chrono::{Datelike, NaiveDate};

use super::*;

fn day_number(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

fn date_label(x: &f64) -> String {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
        .map(|d| d.format("%Y-%m").to_string())
        .unwrap_or_default()
}

pub(crate) fn line_figure(root: &Area<'_>, chart: &LineChart) -> DrawResult {
    root.fill(&WHITE)?;

    let points: Vec<(f64, f64)> = chart
        .points
        .iter()
        .map(|&(date, value)| (day_number(date), value))
        .collect();

    let (x_range, y_range) = if points.is_empty() {
        (0.0..1.0, 0.0..1.0)
    } else {
        let xs = plotters::data::fitting_range(points.iter().map(|(x, _)| x));
        let ys = plotters::data::fitting_range(points.iter().map(|(_, y)| y));
        (padded(xs.start, xs.end), padded(ys.start, ys.end))
    };

    let mut cc = ChartBuilder::on(root)
        .caption(chart.title, (DEFAULT_FONT, 20))
        .margin(10)
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 80)
        .build_cartesian_2d(x_range, y_range)?;

    cc.configure_mesh()
        .disable_x_mesh()
        .x_desc(chart.x_label)
        .y_desc(chart.y_label)
        .x_labels(12)
        .x_label_formatter(&date_label)
        .x_label_style(rotated_labels())
        .axis_desc_style((DEFAULT_FONT, 15))
        .draw()?;

    // Gaps in the dates are bridged by a straight segment, never filled in
    cc.draw_series(LineSeries::new(points, &DARK_BLUE))?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn day_numbers_round_trip_through_labels() {
        let date = NaiveDate::from_ymd_opt(2016, 5, 9).unwrap();

        assert_eq!(date_label(&day_number(date)), "2016-05");
        assert_eq!(date_label(&(day_number(date) + 0.4)), "2016-05");
    }
}
