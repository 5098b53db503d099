//! Chart rendering for the curve evaluators, built on `plotters`.
//!
//! Every helper renders synchronously into a bitmap file at the given path
//! and shares one fixed dark color scheme. Chart geometry and axis ranges
//! are fixed per curve family; backend errors propagate unchanged.

use std::boxed::Box;
use std::error::Error;
use std::vec::Vec;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::cubic_bezier::CubicBezier;
use crate::wave::{ocean, WaveTerm};
use crate::NativeFloat;

/// Background fill of every chart.
pub const CHART_BACKGROUND: RGBColor = RGBColor(0x25, 0x25, 0x25);
/// Axis and control-polygon color.
pub const CHART_FOREGROUND: RGBColor = RGBColor(0xe8, 0xe8, 0xe8);
/// Line color of the curve itself.
pub const CURVE_COLOR: RGBColor = RGBColor(0x1e, 0x90, 0xff);

const BEZIER_CHART_SIZE: (u32, u32) = (500, 500);
const WAVE_CHART_SIZE: (u32, u32) = (1000, 300);
const WAVE_Y_RANGE: (NativeFloat, NativeFloat) = (-3.0, 3.0);

/// Draw `curve` sampled at `ts` into a square chart with both axes fixed to
/// [0, 1], together with its control points joined by a dashed polyline with
/// x markers. The rendered bitmap is written to `path`.
pub fn plot_cubic_bezier(
    path: &str,
    curve: &CubicBezier,
    ts: &[NativeFloat],
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, BEZIER_CHART_SIZE).into_drawing_area();
    root.fill(&CHART_BACKGROUND)?;

    // setup the chart
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(0.0..1.0, 0.0..1.0)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .axis_style(&CHART_FOREGROUND)
        .label_style(("sans-serif", 12).into_font().color(&CHART_FOREGROUND))
        .draw()?;

    // draw the actual bezier curve
    chart.draw_series(LineSeries::new(
        curve.eval_each(ts).map(|p| (p.x(), p.y())),
        &CURVE_COLOR,
    ))?;

    // draw the control polygon
    let polygon: Vec<(NativeFloat, NativeFloat)> = curve
        .control_polygon()
        .iter()
        .map(|p| (p.x(), p.y()))
        .collect();
    chart.draw_series(DashedLineSeries::new(
        polygon.iter().copied(),
        4,
        4,
        ShapeStyle::from(&CHART_FOREGROUND),
    ))?;
    chart.draw_series(
        polygon
            .iter()
            .map(|&(x, y)| Cross::new((x, y), 5, ShapeStyle::from(&CHART_FOREGROUND))),
    )?;

    root.present()?;
    Ok(())
}

/// Render the four-term ocean preset over the sample locations `xs` into a
/// wide chart written to `path`.
pub fn plot_ocean(path: &str, xs: &[NativeFloat]) -> Result<(), Box<dyn Error>> {
    draw_wave_chart(path, xs, xs.iter().map(|&x| ocean(x)).collect())
}

/// Render a single default wave term (frequency 1, amplitude 1, offset 0)
/// over the sample locations `xs` into a wide chart written to `path`.
pub fn plot_wave_term(path: &str, xs: &[NativeFloat]) -> Result<(), Box<dyn Error>> {
    let term = WaveTerm::default();
    draw_wave_chart(path, xs, term.eval_each(xs).collect())
}

/// Shared wave chart: vertical axis fixed to [-3, 3], horizontal axis
/// spanning the sample locations.
fn draw_wave_chart(
    path: &str,
    xs: &[NativeFloat],
    ys: Vec<NativeFloat>,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, WAVE_CHART_SIZE).into_drawing_area();
    root.fill(&CHART_BACKGROUND)?;

    let (xmin, xmax) = match (xs.first(), xs.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => (0.0, 1.0),
    };

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(xmin..xmax, WAVE_Y_RANGE.0..WAVE_Y_RANGE.1)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .axis_style(&CHART_FOREGROUND)
        .label_style(("sans-serif", 12).into_font().color(&CHART_FOREGROUND))
        .draw()?;

    chart.draw_series(LineSeries::new(
        xs.iter().copied().zip(ys),
        &CURVE_COLOR,
    ))?;

    root.present()?;
    Ok(())
}
