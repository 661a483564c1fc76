pub mod flac;
pub mod mp3;
pub mod ogg;
pub mod wav;

use std::path::Path;

use tracing::debug;

use crate::error::{PipelineError, Result};

/// Decoded audio: interleaved samples in [-1.0, 1.0] plus stream metadata
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    pub samples: Vec<f64>,
    pub sample_rate: u32,
    pub channels: u16,
}

impl DecodedAudio {
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels.max(1) as usize
    }

    pub fn duration_secs(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }
}

/// Audio container formats accepted at the upload boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Wav,
    Mp3,
    Flac,
    Ogg,
}

impl AudioFormat {
    /// Determine the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "wav" => Ok(AudioFormat::Wav),
            "mp3" => Ok(AudioFormat::Mp3),
            "flac" => Ok(AudioFormat::Flac),
            "ogg" => Ok(AudioFormat::Ogg),
            _ => Err(PipelineError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AudioFormat::Wav => "WAV",
            AudioFormat::Mp3 => "MP3",
            AudioFormat::Flac => "FLAC",
            AudioFormat::Ogg => "OGG",
        }
    }
}

/// Decode an audio file, dispatching on its extension
pub fn decode_file(path: &Path) -> Result<DecodedAudio> {
    let format = AudioFormat::from_path(path)?;

    let audio = match format {
        AudioFormat::Wav => wav::decode(path),
        AudioFormat::Mp3 => mp3::decode(path),
        AudioFormat::Flac => flac::decode(path),
        AudioFormat::Ogg => ogg::decode(path),
    }?;

    if audio.samples.is_empty() {
        return Err(PipelineError::CorruptFile {
            format: format.name(),
            reason: "no audio frames".into(),
        });
    }
    if audio.sample_rate == 0 {
        return Err(PipelineError::CorruptFile {
            format: format.name(),
            reason: "sample rate is zero".into(),
        });
    }

    debug!(
        format = format.name(),
        frames = audio.frames(),
        sample_rate = audio.sample_rate,
        channels = audio.channels,
        "decoded audio"
    );

    Ok(audio)
}
