use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use pcm_psk::pipeline::PipelineParams;
use pcm_psk::process;

/// Encode an audio recording as a BPSK passband signal
#[derive(Parser, Debug)]
#[command(name = "pcm-psk")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input audio file (wav, mp3, flac or ogg)
    #[arg(value_name = "INPUT")]
    input_file: PathBuf,

    /// Output directory for the modulated WAV and JSON report
    #[arg(short, long, default_value = "./out")]
    output_dir: PathBuf,

    /// Bits per quantized sample
    #[arg(short, long, default_value = "8")]
    bit_depth: u32,

    /// Resample the input to this rate before encoding (Hz)
    #[arg(short, long, default_value = "44100")]
    sample_rate: u32,

    /// Carrier frequency (Hz)
    #[arg(short, long, default_value = "2000")]
    carrier_freq: f64,

    /// Carrier-rate samples per symbol
    #[arg(long, default_value = "16")]
    sps: u32,

    /// Point count for each reduced diagnostic signal
    #[arg(short, long, default_value = "100")]
    points: usize,

    /// Embed the modulated WAV in the report as a hex string
    #[arg(long)]
    embed_audio: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Create output directory if it doesn't exist
    std::fs::create_dir_all(&args.output_dir)?;

    let params = PipelineParams {
        bit_depth: args.bit_depth,
        carrier_freq: args.carrier_freq,
        sps: args.sps,
        target_sample_rate: Some(args.sample_rate),
        viz_points: args.points,
    };

    let artifacts = process::process_file(
        &args.input_file,
        &args.output_dir,
        &params,
        args.embed_audio,
        args.verbose,
    )?;

    println!(
        "Saved {} and {}",
        artifacts.audio_path.display(),
        artifacts.report_path.display()
    );

    Ok(())
}
