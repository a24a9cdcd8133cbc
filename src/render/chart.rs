use plotters::coord::Shift;
use plotters::prelude::*;

use super::{ChartData, ChartStyle, DECODE_LABEL, ENCODE_LABEL, X_LABEL, Y_LABEL};
use crate::error::{PlotError, Result};

/// Draws both series, axis labels, grid and legend onto `root`.
///
/// Works on any plotters backend so the same chart can go to a window buffer,
/// a PNG or an SVG. Points are joined in the order they appear in `data`.
pub fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &ChartData,
    style: &ChartStyle,
) -> Result<()> {
    root.fill(&WHITE).map_err(PlotError::render)?;

    let (x_range, y_range) = data.bounds();
    let mut chart = ChartBuilder::on(root)
        .caption(&style.title, ("sans-serif", 24).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(PlotError::render)?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .draw()
        .map_err(PlotError::render)?;

    let series = [
        (ENCODE_LABEL, &data.avg_encode_ms, BLUE),
        (DECODE_LABEL, &data.avg_decode_ms, RED),
    ];
    for (label, times, color) in series {
        let points: Vec<(f64, f64)> = data
            .filesizes
            .iter()
            .zip(times)
            .map(|(&size, &ms)| (size as f64, ms))
            .collect();

        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
            .map_err(PlotError::render)?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        chart
            .draw_series(points.into_iter().map(|p| Circle::new(p, 3, color.filled())))
            .map_err(PlotError::render)?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(PlotError::render)?;

    root.present().map_err(PlotError::render)?;
    Ok(())
}
