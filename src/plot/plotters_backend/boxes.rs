use super::*;
use crate::chart::BoxPanel;

const BOX_HALF_WIDTH: f64 = 0.3;
const CAP_HALF_WIDTH: f64 = 0.15;

pub(crate) fn box_figure(root: &Area<'_>, chart: &BoxChart) -> DrawResult {
    root.fill(&WHITE)?;

    let areas = root.split_evenly((1, 2));
    for (area, panel) in areas.iter().zip(&[&chart.by_year, &chart.by_month]) {
        box_panel(area, panel)?;
    }

    Ok(())
}

fn box_panel(area: &Area<'_>, panel: &BoxPanel) -> DrawResult {
    let labels: Vec<&str> = panel.boxes.iter().map(|b| b.label.as_str()).collect();
    let y_range = match panel.extent() {
        Some((lo, hi)) => padded(lo, hi),
        None => 0.0..1.0,
    };

    let mut cc = ChartBuilder::on(area)
        .caption(panel.title, (DEFAULT_FONT, 20))
        .margin(10)
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .build_cartesian_2d(categories(labels.len()), y_range)?;

    let formatter = |x: &f64| category_label(labels.as_slice(), *x);
    cc.configure_mesh()
        .disable_x_mesh()
        .x_desc(panel.x_label)
        .y_desc(panel.y_label)
        .x_labels(labels.len().max(1))
        .x_label_formatter(&formatter)
        .x_label_style(rotated_labels())
        .axis_desc_style((DEFAULT_FONT, 15))
        .draw()?;

    for (i, labeled) in panel.boxes.iter().enumerate() {
        let s = &labeled.summary;
        let x = i as f64;
        let color = MONTH_COLORS[i % MONTH_COLORS.len()];
        let (left, right) = (x - BOX_HALF_WIDTH, x + BOX_HALF_WIDTH);

        cc.draw_series(vec![
            Rectangle::new([(left, s.q1), (right, s.q3)], color.mix(0.7).filled()),
            Rectangle::new([(left, s.q1), (right, s.q3)], BLACK.stroke_width(1)),
        ])?;

        cc.draw_series(vec![
            // median
            PathElement::new(vec![(left, s.median), (right, s.median)], &BLACK),
            // whiskers
            PathElement::new(vec![(x, s.q1), (x, s.lower_whisker)], &BLACK),
            PathElement::new(vec![(x, s.q3), (x, s.upper_whisker)], &BLACK),
            // caps
            PathElement::new(
                vec![
                    (x - CAP_HALF_WIDTH, s.lower_whisker),
                    (x + CAP_HALF_WIDTH, s.lower_whisker),
                ],
                &BLACK,
            ),
            PathElement::new(
                vec![
                    (x - CAP_HALF_WIDTH, s.upper_whisker),
                    (x + CAP_HALF_WIDTH, s.upper_whisker),
                ],
                &BLACK,
            ),
        ])?;

        cc.draw_series(
            s.outliers
                .iter()
                .map(|&y| Circle::new((x, y), POINT_SIZE, BLACK.stroke_width(1))),
        )?;
    }

    Ok(())
}
