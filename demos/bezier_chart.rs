use swell::plot::plot_cubic_bezier;
use swell::{linspace, CubicBezier, Point2};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // control points inside the unit square, which is what the chart shows
    let bezier = CubicBezier::new(
        Point2::new(0.05, 0.1),
        Point2::new(0.15, 0.9),
        Point2::new(0.85, 0.05),
        Point2::new(0.95, 0.95),
    );

    let ts: Vec<f64> = linspace(0.0, 1.0, 500).collect();
    plot_cubic_bezier("cubic_bezier.png", &bezier, &ts)?;
    println!("wrote cubic_bezier.png");

    Ok(())
}
