//! Evaluators and chart helpers for two small families of curves: a cubic
//! Bézier curve defined by four control points in the plane, and a layered
//! "ocean wave" built from summed negative-absolute-sine terms.
//!
//! The evaluators are pure and allocation-free and work in `#![no_std]`
//! environments. Chart rendering lives behind the `plot` feature and draws
//! with [`plotters`](https://docs.rs/plotters).
#![no_std]

#[cfg(any(test, feature = "plot"))]
extern crate std;

pub mod cubic_bezier;
pub mod point2;
pub mod sample;
pub mod wave;

#[cfg(feature = "plot")]
pub mod plot;

pub use cubic_bezier::{cubic_blend, CubicBezier};
pub use point2::Point2;
pub use sample::linspace;
pub use wave::{ocean, ocean_each, WaveTerm, OCEAN_TERMS};

/// The native floating point type used by the evaluators.
pub type NativeFloat = f64;

/// Tolerance for approximate comparisons of evaluated coordinates.
pub const EPSILON: NativeFloat = 1e-10;
