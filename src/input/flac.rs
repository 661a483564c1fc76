use std::path::Path;

use super::DecodedAudio;
use crate::error::{PipelineError, Result};

fn corrupt(e: impl std::fmt::Display) -> PipelineError {
    PipelineError::CorruptFile {
        format: "FLAC",
        reason: e.to_string(),
    }
}

/// Read a FLAC file into interleaved f64 samples
pub fn decode<P: AsRef<Path>>(path: P) -> Result<DecodedAudio> {
    let mut reader = claxon::FlacReader::open(path).map_err(corrupt)?;
    let info = reader.streaminfo();
    let max_val = (1i64 << (info.bits_per_sample - 1)) as f64;

    let mut samples = Vec::new();
    for sample in reader.samples() {
        let sample = sample.map_err(corrupt)?;
        samples.push(sample as f64 / max_val);
    }

    Ok(DecodedAudio {
        samples,
        sample_rate: info.sample_rate,
        channels: info.channels as u16,
    })
}
