pub mod carrier;
pub mod error;
pub mod input;
pub mod modulate;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod process;
pub mod quantize;
pub mod reduce;
pub mod resample;

pub use error::{PipelineError, Result};
pub use input::DecodedAudio;
pub use pipeline::{PipelineParams, PipelineResult};
