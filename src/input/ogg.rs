use std::fs::File;
use std::path::Path;

use lewton::inside_ogg::OggStreamReader;

use super::DecodedAudio;
use crate::error::{PipelineError, Result};

fn corrupt(e: impl std::fmt::Display) -> PipelineError {
    PipelineError::CorruptFile {
        format: "OGG",
        reason: e.to_string(),
    }
}

/// Read an Ogg Vorbis file into interleaved f64 samples
pub fn decode<P: AsRef<Path>>(path: P) -> Result<DecodedAudio> {
    let file = File::open(path)?;
    let mut reader = OggStreamReader::new(file).map_err(corrupt)?;

    let sample_rate = reader.ident_hdr.audio_sample_rate;
    let channels = reader.ident_hdr.audio_channels as u16;

    let mut samples = Vec::new();
    while let Some(packet) = reader.read_dec_packet_itl().map_err(corrupt)? {
        samples.extend(packet.iter().map(|&s| s as f64 / 32768.0));
    }

    Ok(DecodedAudio {
        samples,
        sample_rate,
        channels,
    })
}
