//! Evenly spaced sample sequences consumed by the curve evaluators.

use crate::NativeFloat;

/// Returns an iterator over `nsteps` evenly spaced values from `start` to
/// `end` inclusive. With fewer than two steps the sequence collapses to
/// `start`.
pub fn linspace(
    start: NativeFloat,
    end: NativeFloat,
    nsteps: usize,
) -> impl Iterator<Item = NativeFloat> {
    let stepsize = if nsteps > 1 {
        (end - start) / ((nsteps - 1) as NativeFloat)
    } else {
        0.0
    };
    (0..nsteps).map(move |i| start + i as NativeFloat * stepsize)
}
