use std::f64::consts::PI;
use swell::{linspace, ocean_each};

fn main() {
    let width = 80usize;
    let height = 20usize;

    let xs: Vec<f64> = linspace(0.0, 4.0 * PI, width).collect();
    let ys: Vec<f64> = ocean_each(&xs).collect();

    let mut min = ys[0];
    let mut max = ys[0];
    for &v in &ys {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    if (max - min).abs() < 1e-12 {
        max = min + 1.0;
    }

    let mut grid = vec![vec![' '; width]; height];
    for (i, &value) in ys.iter().enumerate() {
        let row = value_to_row(value, min, max, height);
        grid[row][i] = '~';
    }

    println!("ocean swell over [0, 4pi] (~ = surface height)");
    println!("range: [{:.3}, {:.3}]", min, max);
    for row in grid {
        let line: String = row.into_iter().collect();
        println!("{}", line);
    }
}

fn value_to_row(value: f64, min: f64, max: f64, height: usize) -> usize {
    let t = (value - min) / (max - min);
    let y = (1.0 - t) * (height as f64 - 1.0);
    y.round().clamp(0.0, (height - 1) as f64) as usize
}
