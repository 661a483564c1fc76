use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::error::Result;
use crate::input;
use crate::output;
use crate::pipeline::{self, PipelineParams};

/// Paths of the artifacts one processed file produced
#[derive(Debug, Clone)]
pub struct ProcessedArtifacts {
    pub audio_path: PathBuf,
    pub report_path: PathBuf,
}

/// Decode an audio file, run the pipeline, write the modulated WAV and the
/// JSON report into the output directory
pub fn process_file(
    input_path: &Path,
    output_dir: &Path,
    params: &PipelineParams,
    embed_audio: bool,
    verbose: bool,
) -> Result<ProcessedArtifacts> {
    if verbose {
        println!("Reading audio file...");
    }
    let audio = input::decode_file(input_path)?;

    if verbose {
        println!(
            "Loaded {} frames at {} Hz, {} channel(s) ({:.2}s)",
            audio.frames(),
            audio.sample_rate,
            audio.channels,
            audio.duration_secs()
        );
    }

    let result = pipeline::run(&audio, params)?;

    if verbose {
        println!(
            "Modulated {} bits/sample at {:.0} Hz carrier -> {} samples at {} Hz",
            result.params.bit_depth,
            result.params.carrier_freq,
            result.output.len(),
            result.output_sample_rate
        );
    }

    let audio_name = output::generate_filename(Local::now());
    let audio_path = output_dir.join(&audio_name);
    output::write_wav(&audio_path, &result.output, result.output_sample_rate)?;

    let audio_hex = if embed_audio {
        let bytes = output::wav_bytes(&result.output, result.output_sample_rate)?;
        Some(output::hex_string(&bytes))
    } else {
        None
    };

    let report = output::Report::new(&audio_name, &result, audio_hex);
    let report_path = audio_path.with_extension("json");
    output::write_report(&report_path, &report)?;

    info!(
        audio = %audio_path.display(),
        report = %report_path.display(),
        "artifacts written"
    );
    if verbose {
        println!("Wrote: {}", audio_path.display());
        println!("Wrote: {}", report_path.display());
    }

    Ok(ProcessedArtifacts {
        audio_path,
        report_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processes_a_wav_file_end_to_end() {
        let dir = std::env::temp_dir().join(format!("pcm-psk-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        // Synthesize a short input tone
        let samples: Vec<f64> = (0..200)
            .map(|i| (2.0 * std::f64::consts::PI * 10.0 * i as f64 / 200.0).sin())
            .collect();
        let input_path = dir.join("tone.wav");
        output::write_wav(&input_path, &samples, 200).unwrap();

        let params = PipelineParams {
            bit_depth: 4,
            carrier_freq: 50.0,
            sps: 2,
            target_sample_rate: None,
            viz_points: 10,
        };
        let artifacts = process_file(&input_path, &dir, &params, false, false).unwrap();

        assert!(artifacts.audio_path.exists());
        assert!(artifacts.report_path.exists());

        let report: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&artifacts.report_path).unwrap())
                .unwrap();
        assert_eq!(report["bit_depth"], 4);
        assert_eq!(report["original_sample_rate"], 200);
        assert_eq!(report["passband"].as_array().unwrap().len(), 10);

        std::fs::remove_dir_all(&dir).ok();
    }
}
