//! Fixed-point-count signal reduction for visualization.
//!
//! Picks `target_points` evenly spaced indices over the source and returns
//! the exact sample values at those positions. Deliberately index decimation
//! rather than averaging or low-pass filtering: picked values stay faithful
//! to the source for visual comparison, at the cost of aliasing on signals
//! that vary faster than the target resolution.

use crate::error::{PipelineError, Result};

/// Reduce a signal to `target_points` index-sampled points
///
/// Indices run from 0 to len-1 inclusive; when `target_points` exceeds the
/// signal length, indices repeat. First and last output samples are always
/// the first and last source samples.
pub fn reduce(signal: &[f64], target_points: usize) -> Result<Vec<f64>> {
    if signal.is_empty() {
        return Err(PipelineError::Parameter {
            name: "signal",
            value: "0".into(),
            reason: "sequence must be non-empty",
        });
    }
    if target_points == 0 {
        return Err(PipelineError::Parameter {
            name: "target_points",
            value: "0".into(),
            reason: "must be at least 1",
        });
    }
    if target_points == 1 {
        return Ok(vec![signal[0]]);
    }

    let last = (signal.len() - 1) as f64;
    let span = (target_points - 1) as f64;
    Ok((0..target_points)
        .map(|i| {
            let idx = (i as f64 * last / span).round() as usize;
            signal[idx]
        })
        .collect())
}
