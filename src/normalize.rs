use crate::error::{PipelineError, Result};

/// Collapse interleaved multi-channel audio to mono by averaging each frame
pub fn collapse_mono(samples: &[f64], channels: u16) -> Vec<f64> {
    if channels <= 1 {
        return samples.to_vec();
    }

    let ch = channels as usize;
    // chunks_exact drops a trailing partial frame
    samples
        .chunks_exact(ch)
        .map(|frame| frame.iter().sum::<f64>() / ch as f64)
        .collect()
}

/// Scale a sequence so its peak absolute value is exactly 1.0
///
/// Silence (zero peak) is a `DegenerateInput` error: dividing by the peak
/// would produce NaN, and a silent input carries nothing to modulate.
pub fn normalize(samples: &[f64], stage: &'static str) -> Result<Vec<f64>> {
    if samples.is_empty() {
        return Err(PipelineError::Parameter {
            name: "samples",
            value: "0".into(),
            reason: "sequence must be non-empty",
        });
    }
    if samples.iter().any(|x| !x.is_finite()) {
        return Err(PipelineError::InternalComputation {
            stage,
            reason: "non-finite sample value".into(),
        });
    }

    let peak = peak_amplitude(samples);
    if peak == 0.0 {
        return Err(PipelineError::DegenerateInput { stage });
    }

    Ok(samples.iter().map(|&x| x / peak).collect())
}

/// Peak absolute value of a sequence
pub fn peak_amplitude(samples: &[f64]) -> f64 {
    samples.iter().map(|x| x.abs()).fold(0.0f64, f64::max)
}
