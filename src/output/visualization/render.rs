//! Shared line-chart renderer
//!
//! Breakthrough curves and depth profiles are both "several labelled lines
//! on one pair of axes". This module draws that chart on any plotters backend
//! and picks the backend from the output file extension.

use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

use super::config::PlotConfig;

/// One labelled line: legend text plus (x, y) points
pub(crate) struct LineData {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// Render `lines` to `output_path` (`.svg` → vector, anything else → bitmap)
pub(crate) fn render_to_file(
    output_path: &str,
    lines: &[LineData],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let (max_x, max_y) = bounds(lines, config.x_max);

    let ext = Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            render_lines(backend, lines, config, max_x, max_y)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            render_lines(backend, lines, config, max_x, max_y)
        }
    }
}

/// Upper bounds of the chart area
///
/// A valid `x_max` wins over the data. Otherwise an axis with no data falls
/// back to 1.0 so an empty selection still draws a valid frame.
fn bounds(lines: &[LineData], x_max: Option<f64>) -> (f64, f64) {
    let max_x = match x_max {
        Some(x) if x.is_finite() && x > 0.0 => x,
        _ => lines
            .iter()
            .flat_map(|l| l.points.iter().map(|p| p.0))
            .fold(f64::NEG_INFINITY, f64::max),
    };
    let max_y = lines
        .iter()
        .flat_map(|l| l.points.iter().map(|p| p.1))
        .fold(f64::NEG_INFINITY, f64::max);

    let max_x = if max_x.is_finite() && max_x > 0.0 { max_x } else { 1.0 };
    let max_y = if max_y.is_finite() { max_y.max(1e-10) } else { 1.0 };
    (max_x, max_y)
}

fn render_lines<DB: DrawingBackend>(
    backend: DB,
    lines: &[LineData],
    config: &PlotConfig,
    max_x: f64,
    max_y: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_x, 0.0..(max_y * 1.1))?;

    let x_fmt = |x: &f64| format!("{:.0}", x);
    let y_fmt = |y: &f64| format!("{:.1}", y);

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(config.xlabel.as_str())
        .y_desc(config.ylabel.as_str())
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt);
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    for (idx, line) in lines.iter().enumerate() {
        let color = config.series_color(idx);

        chart
            .draw_series(LineSeries::new(
                line.points.iter().copied(),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(line.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    if !lines.is_empty() {
        chart
            .configure_series_labels()
            .background_style(config.background.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}
