use std::f64::consts::PI;
use swell::linspace;
use swell::plot::{plot_ocean, plot_wave_term};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let xs: Vec<f64> = linspace(0.0, 4.0 * PI, 1000).collect();

    plot_ocean("ocean_waves.png", &xs)?;
    plot_wave_term("single_wave.png", &xs)?;
    println!("wrote ocean_waves.png and single_wave.png");

    Ok(())
}
