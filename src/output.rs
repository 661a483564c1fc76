use std::io::Cursor;
use std::path::Path;

use chrono::{DateTime, Local};
use hound::{SampleFormat, WavSpec, WavWriter};
use serde::Serialize;

use crate::error::{PipelineError, Result};
use crate::pipeline::{Diagnostics, PipelineResult, UsedParams};

fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Write samples to a WAV file (mono int16 PCM)
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[f64], sample_rate: u32) -> Result<()> {
    let mut writer = WavWriter::create(path, wav_spec(sample_rate))?;
    write_samples(&mut writer, samples)?;
    writer.finalize()?;
    Ok(())
}

/// Encode samples to WAV bytes in memory, for embedding in a report
pub fn wav_bytes(samples: &[f64], sample_rate: u32) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    let mut writer = WavWriter::new(&mut cursor, wav_spec(sample_rate))?;
    write_samples(&mut writer, samples)?;
    writer.finalize()?;
    Ok(cursor.into_inner())
}

fn write_samples<W: std::io::Write + std::io::Seek>(
    writer: &mut WavWriter<W>,
    samples: &[f64],
) -> Result<()> {
    for &sample in samples {
        // Convert f64 [-1.0, 1.0] to i16
        let pcm = (sample * 32767.0).clamp(-32768.0, 32767.0) as i16;
        writer.write_sample(pcm)?;
    }
    Ok(())
}

/// Hex-encode bytes for transport as a string
pub fn hex_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

/// Generate a timestamped filename for the modulated output
pub fn generate_filename(base_time: DateTime<Local>) -> String {
    format!("modulated_{}.wav", base_time.format("%Y-%m-%d_%H-%M-%S"))
}

/// JSON report for one processed file: artifact reference, echoed
/// parameters, reduced diagnostic signals
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub audio_file: String,
    #[serde(flatten)]
    pub params: &'a UsedParams,
    #[serde(flatten)]
    pub diagnostics: &'a Diagnostics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_hex: Option<String>,
}

impl<'a> Report<'a> {
    pub fn new(audio_file: &str, result: &'a PipelineResult, audio_hex: Option<String>) -> Self {
        Self {
            audio_file: audio_file.to_string(),
            params: &result.params,
            diagnostics: &result.diagnostics,
            audio_hex,
        }
    }
}

/// Write a report as pretty-printed JSON
pub fn write_report<P: AsRef<Path>>(path: P, report: &Report) -> Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(|e| {
        PipelineError::InternalComputation {
            stage: "report",
            reason: e.to_string(),
        }
    })?;
    std::fs::write(path, json)?;
    Ok(())
}
