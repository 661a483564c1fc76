use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use hound::{SampleFormat, WavReader};

use super::DecodedAudio;
use crate::error::{PipelineError, Result};

fn corrupt(e: impl std::fmt::Display) -> PipelineError {
    PipelineError::CorruptFile {
        format: "WAV",
        reason: e.to_string(),
    }
}

/// Read a WAV file into interleaved f64 samples
pub fn decode<P: AsRef<Path>>(path: P) -> Result<DecodedAudio> {
    let reader = WavReader::open(path).map_err(corrupt)?;
    let spec = reader.spec();

    let samples = match spec.sample_format {
        SampleFormat::Float => read_float_samples(reader)?,
        SampleFormat::Int => read_int_samples(reader, spec.bits_per_sample)?,
    };

    Ok(DecodedAudio {
        samples,
        sample_rate: spec.sample_rate,
        channels: spec.channels,
    })
}

fn read_float_samples(mut reader: WavReader<BufReader<File>>) -> Result<Vec<f64>> {
    reader
        .samples::<f32>()
        .map(|s| s.map(|v| v as f64).map_err(corrupt))
        .collect()
}

fn read_int_samples(mut reader: WavReader<BufReader<File>>, bits: u16) -> Result<Vec<f64>> {
    let max_val = (1i64 << (bits - 1)) as f64;

    reader
        .samples::<i32>()
        .map(|s| s.map(|v| v as f64 / max_val).map_err(corrupt))
        .collect()
}
