use std::fs::File;
use std::path::Path;

use minimp3::{Decoder, Error as Mp3Error, Frame};

use super::DecodedAudio;
use crate::error::{PipelineError, Result};

/// Read an MP3 file into interleaved f64 samples
pub fn decode<P: AsRef<Path>>(path: P) -> Result<DecodedAudio> {
    let file = File::open(path)?;
    let mut decoder = Decoder::new(file);

    let mut samples = Vec::new();
    let mut sample_rate = 0u32;
    let mut channels = 0u16;

    loop {
        match decoder.next_frame() {
            Ok(Frame {
                data,
                sample_rate: sr,
                channels: ch,
                ..
            }) => {
                // Stream parameters come from the first frame
                if sample_rate == 0 {
                    sample_rate = sr as u32;
                    channels = ch as u16;
                }
                samples.extend(data.iter().map(|&s| s as f64 / 32768.0));
            }
            Err(Mp3Error::Eof) => break,
            Err(e) => {
                return Err(PipelineError::CorruptFile {
                    format: "MP3",
                    reason: e.to_string(),
                })
            }
        }
    }

    Ok(DecodedAudio {
        samples,
        sample_rate,
        channels,
    })
}
