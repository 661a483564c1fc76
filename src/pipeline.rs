use serde::Serialize;
use tracing::debug;

use crate::error::{PipelineError, Result};
use crate::input::DecodedAudio;
use crate::{modulate, normalize, quantize, reduce, resample};

/// Parameters for one pipeline run, threaded explicitly through every stage
#[derive(Debug, Clone)]
pub struct PipelineParams {
    /// Bits per quantized sample (1-32)
    pub bit_depth: u32,
    /// Carrier frequency in Hz
    pub carrier_freq: f64,
    /// Carrier-rate samples per symbol
    pub sps: u32,
    /// Resample the input to this rate before quantization
    pub target_sample_rate: Option<u32>,
    /// Point count for each reduced diagnostic signal
    pub viz_points: usize,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            bit_depth: 8,
            carrier_freq: 2000.0,
            sps: 16,
            target_sample_rate: None,
            viz_points: 100,
        }
    }
}

impl PipelineParams {
    /// Reject out-of-range parameters before any work happens
    pub fn validate(&self) -> Result<()> {
        if !(1..=32).contains(&self.bit_depth) {
            return Err(PipelineError::Parameter {
                name: "bit_depth",
                value: self.bit_depth.to_string(),
                reason: "must be between 1 and 32",
            });
        }
        if self.sps == 0 {
            return Err(PipelineError::Parameter {
                name: "sps",
                value: self.sps.to_string(),
                reason: "must be at least 1",
            });
        }
        if !(self.carrier_freq > 0.0 && self.carrier_freq.is_finite()) {
            return Err(PipelineError::Parameter {
                name: "carrier_freq",
                value: self.carrier_freq.to_string(),
                reason: "must be positive and finite",
            });
        }
        if self.target_sample_rate == Some(0) {
            return Err(PipelineError::Parameter {
                name: "target_sample_rate",
                value: "0".into(),
                reason: "must be at least 1",
            });
        }
        if self.viz_points == 0 {
            return Err(PipelineError::Parameter {
                name: "viz_points",
                value: "0".into(),
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

/// Reduced views of every intermediate signal, in processing order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostics {
    /// Mono input after optional resampling
    pub audio: Vec<f64>,
    pub pcm_codes: Vec<f64>,
    pub bits: Vec<f64>,
    pub symbols: Vec<f64>,
    pub carrier: Vec<f64>,
    pub passband: Vec<f64>,
}

/// The parameters a run actually used, echoed back to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsedParams {
    pub original_sample_rate: u32,
    pub processed_sample_rate: u32,
    pub output_sample_rate: u32,
    pub bit_depth: u32,
    pub carrier_freq: f64,
    pub sps: u32,
}

/// Everything one pipeline run produces
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineResult {
    /// Peak-normalized passband signal, ready for WAV output
    pub output: Vec<f64>,
    pub output_sample_rate: u32,
    pub diagnostics: Diagnostics,
    pub params: UsedParams,
}

/// Run the full pipeline: mono collapse, resample, normalize, quantize,
/// modulate, reduce
///
/// Stage order is fixed; each stage consumes the complete output of the
/// prior one. Any stage error fails the whole run, no partial results.
pub fn run(audio: &DecodedAudio, params: &PipelineParams) -> Result<PipelineResult> {
    params.validate()?;
    if audio.sample_rate == 0 {
        return Err(PipelineError::Parameter {
            name: "sample_rate",
            value: "0".into(),
            reason: "must be at least 1",
        });
    }

    let mono = normalize::collapse_mono(&audio.samples, audio.channels);
    if mono.is_empty() {
        return Err(PipelineError::Parameter {
            name: "samples",
            value: "0".into(),
            reason: "input audio has no frames",
        });
    }

    let processed_rate = params.target_sample_rate.unwrap_or(audio.sample_rate);
    let mono = if processed_rate != audio.sample_rate {
        debug!(
            from = audio.sample_rate,
            to = processed_rate,
            "resampling input"
        );
        resample::resample(&mono, audio.sample_rate, processed_rate)?
    } else {
        mono
    };

    let normalized = normalize::normalize(&mono, "normalize")?;
    let quantized = quantize::quantize(&normalized, params.bit_depth)?;
    debug!(
        codes = quantized.codes.len(),
        bits = quantized.bits.len(),
        "quantized"
    );

    let signal = modulate::modulate(
        &quantized.bits,
        processed_rate,
        params.sps,
        params.carrier_freq,
    )?;
    debug!(
        passband_samples = signal.passband.len(),
        tx_rate = signal.sample_rate,
        "modulated"
    );

    // WAV output convention: scale the passband to unit peak
    let output = normalize::normalize(&signal.passband, "output")?;

    let codes: Vec<f64> = quantized.codes.iter().map(|&c| c as f64).collect();
    let bits: Vec<f64> = quantized.bits.iter().map(|&b| b as f64).collect();
    let k = params.viz_points;
    let diagnostics = Diagnostics {
        audio: reduce::reduce(&mono, k)?,
        pcm_codes: reduce::reduce(&codes, k)?,
        bits: reduce::reduce(&bits, k)?,
        symbols: reduce::reduce(&signal.symbols, k)?,
        carrier: reduce::reduce(&signal.carrier, k)?,
        passband: reduce::reduce(&signal.passband, k)?,
    };

    Ok(PipelineResult {
        output,
        output_sample_rate: signal.sample_rate,
        diagnostics,
        params: UsedParams {
            original_sample_rate: audio.sample_rate,
            processed_sample_rate: processed_rate,
            output_sample_rate: signal.sample_rate,
            bit_depth: params.bit_depth,
            carrier_freq: params.carrier_freq,
            sps: params.sps,
        },
    })
}
