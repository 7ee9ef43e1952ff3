// SVG charts: the two coverage curves and a static scatter map

use crate::error::RenderError;
use crate::models::Method;
use crate::views::{LineChart, MapLayer, MapView};
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

const CHART_SIZE: (u32, u32) = (700, 500);
const MAP_SIZE: (u32, u32) = (1000, 800);

fn series_color(method: Method) -> RGBColor {
    match method {
        // matplotlib's first two default colors
        Method::Greedy => RGBColor(31, 119, 180),
        Method::Ilp => RGBColor(255, 127, 14),
    }
}

fn drawing_error(target: &Path, e: Box<dyn Error>) -> RenderError {
    RenderError::Drawing {
        target: target.display().to_string(),
        message: e.to_string(),
    }
}

/// Draws one line per method with circle markers, a legend and a grid
pub fn draw_line_chart(chart: &LineChart, output_path: &Path) -> Result<(), RenderError> {
    line_chart(chart, output_path).map_err(|e| drawing_error(output_path, e))
}

fn line_chart(chart: &LineChart, output_path: &Path) -> Result<(), Box<dyn Error>> {
    let (min_k, max_k) = chart.k_bounds().unwrap_or((1, 1));
    let max_value = chart.max_value().unwrap_or(0.0);
    // Add padding
    let y_max = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };

    let root = SVGBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(chart.title, ("sans-serif", 22).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(min_k.saturating_sub(1)..max_k + 1, 0.0..y_max)?;

    ctx.configure_mesh()
        .x_desc(chart.x_label)
        .y_desc(chart.y_label)
        .draw()?;

    for series in chart.series.iter().filter(|s| !s.points.is_empty()) {
        let color = series_color(series.method);
        ctx.draw_series(LineSeries::new(
            series.points.iter().copied(),
            color.stroke_width(2),
        ))?
        .label(series.method.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        ctx.draw_series(
            series
                .points
                .iter()
                .map(|&(k, v)| Circle::new((k, v), 4, color.filled())),
        )?;
    }

    ctx.configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Draws every map layer as a lon/lat scatter plot
pub fn draw_map(map: &MapView, output_path: &Path) -> Result<(), RenderError> {
    scatter_map(map, output_path).map_err(|e| drawing_error(output_path, e))
}

/// Chart bounds around the drawn points, or around the view center when there are none
fn determine_bounds(map: &MapView) -> (f64, f64, f64, f64) {
    let (min_x, max_x, min_y, max_y) = match map.bounds() {
        Some(rect) => (rect.min().x, rect.max().x, rect.min().y, rect.max().y),
        None => (
            map.view_state.longitude,
            map.view_state.longitude,
            map.view_state.latitude,
            map.view_state.latitude,
        ),
    };

    // Add padding, with a floor so a single point still gets an area
    let padding_x = ((max_x - min_x) * 0.05).max(0.01);
    let padding_y = ((max_y - min_y) * 0.05).max(0.01);

    (
        min_x - padding_x,
        max_x + padding_x,
        min_y - padding_y,
        max_y + padding_y,
    )
}

/// Pixel size for a layer's marker, scaled down from its radius in meters
fn marker_size(layer: &MapLayer) -> i32 {
    ((layer.radius / 20.0).round() as i32).clamp(2, 10)
}

fn scatter_map(map: &MapView, output_path: &Path) -> Result<(), Box<dyn Error>> {
    let (min_x, max_x, min_y, max_y) = determine_bounds(map);

    let root = SVGBackend::new(output_path, MAP_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(
            "Map: Existing / Demand / Candidate Points",
            ("sans-serif", 24).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(min_x..max_x, min_y..max_y)?;

    ctx.configure_mesh().x_desc("lon").y_desc("lat").draw()?;

    for layer in &map.layers {
        let [r, g, b, a] = layer.fill_color;
        let color = RGBAColor(r, g, b, a as f64 / 255.0);
        let size = marker_size(layer);

        ctx.draw_series(
            layer
                .points
                .iter()
                .map(|p| Circle::new((p.location.lon, p.location.lat), size, color.filled())),
        )?
        .label(format!("{} ({})", layer.type_label, layer.len()))
        .legend(move |(x, y)| Circle::new((x, y), 5, color.filled()));
    }

    ctx.configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    root.present()?;
    Ok(())
}
