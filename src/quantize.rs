//! Uniform PCM quantizer.
//!
//! Samples are clipped to [-1.0, 1.0 - 1e-12] and mapped to one of 2^n
//! uniformly spaced levels: `code = floor((x + 1) * 2^n / 2)`. Codes are
//! unsigned, in [0, 2^n - 1]; the clip keeps +1.0 from overflowing the top
//! level. Each code serializes to exactly n bits, most significant first,
//! concatenated in sample order.

use crate::error::{PipelineError, Result};

const CLIP_EPS: f64 = 1e-12;

/// Quantizer output: one code per sample plus the serialized bitstream
#[derive(Debug, Clone, PartialEq)]
pub struct Quantized {
    pub codes: Vec<u32>,
    pub bits: Vec<u8>,
}

/// Quantize normalized samples at the given bit depth
pub fn quantize(samples: &[f64], bit_depth: u32) -> Result<Quantized> {
    validate_bit_depth(bit_depth)?;

    let half_levels = (1u64 << bit_depth) as f64 / 2.0;
    let codes: Vec<u32> = samples
        .iter()
        .map(|&x| {
            let clipped = x.clamp(-1.0, 1.0 - CLIP_EPS);
            ((clipped + 1.0) * half_levels).floor() as u32
        })
        .collect();

    let bits = serialize_bits(&codes, bit_depth);
    Ok(Quantized { codes, bits })
}

/// Expand each code to `bit_depth` bits, MSB first
pub fn serialize_bits(codes: &[u32], bit_depth: u32) -> Vec<u8> {
    codes
        .iter()
        .flat_map(|&code| (0..bit_depth).rev().map(move |i| ((code >> i) & 1) as u8))
        .collect()
}

/// Pack a bitstream back into codes, the inverse of `serialize_bits`
pub fn pack_codes(bits: &[u8], bit_depth: u32) -> Result<Vec<u32>> {
    validate_bit_depth(bit_depth)?;
    if bits.len() % bit_depth as usize != 0 {
        return Err(PipelineError::Parameter {
            name: "bits",
            value: bits.len().to_string(),
            reason: "bitstream length must be a multiple of the bit depth",
        });
    }

    Ok(bits
        .chunks(bit_depth as usize)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0u32, |acc, &bit| (acc << 1) | (bit & 1) as u32)
        })
        .collect())
}

fn validate_bit_depth(bit_depth: u32) -> Result<()> {
    if !(1..=32).contains(&bit_depth) {
        return Err(PipelineError::Parameter {
            name: "bit_depth",
            value: bit_depth.to_string(),
            reason: "must be between 1 and 32",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_two_bit_fixture() {
        // Hand-computed for the floor policy, L = 4:
        //   0.5 -> floor(1.5 * 2) = 3
        //  -1.0 -> floor(0.0 * 2) = 0
        //   1.0 -> clipped, floor((2 - eps) * 2) = 3
        //   0.0 -> floor(1.0 * 2) = 2
        let q = quantize(&[0.5, -1.0, 1.0, 0.0], 2).unwrap();
        assert_eq!(q.codes, vec![3, 0, 3, 2]);
        assert_eq!(q.bits, vec![1, 1, 0, 0, 1, 1, 1, 0]);
    }

    #[test]
    fn bitstream_length_is_codes_times_depth() {
        let samples = [0.9, -0.7, 0.3, -0.1, 0.0];
        for bit_depth in [1, 2, 5, 8, 16, 24] {
            let q = quantize(&samples, bit_depth).unwrap();
            assert_eq!(q.codes.len(), samples.len());
            assert_eq!(q.bits.len(), q.codes.len() * bit_depth as usize);
        }
    }

    #[test]
    fn serialization_round_trips() {
        let samples: Vec<f64> = (0..64).map(|i| (i as f64 / 32.0) - 1.0).collect();
        for bit_depth in [1, 3, 8, 12] {
            let q = quantize(&samples, bit_depth).unwrap();
            let restored = pack_codes(&q.bits, bit_depth).unwrap();
            assert_eq!(restored, q.codes);
        }
    }

    #[test]
    fn boundary_values_stay_in_range() {
        for bit_depth in [1, 2, 8, 16, 32] {
            let top = (1u64 << bit_depth) - 1;
            let q = quantize(&[1.0, -1.0], bit_depth).unwrap();
            assert_eq!(q.codes[0] as u64, top, "bit depth {bit_depth}");
            assert_eq!(q.codes[1], 0);
        }
    }

    #[test]
    fn one_bit_depth_is_a_sign_slicer() {
        let q = quantize(&[0.5, -0.5, 1.0, -1.0, 0.0], 1).unwrap();
        assert_eq!(q.codes, vec![1, 0, 1, 0, 1]);
        // One bit per sample
        assert_eq!(q.bits.len(), 5);
        assert_eq!(q.bits, q.codes.iter().map(|&c| c as u8).collect::<Vec<_>>());
    }

    #[test]
    fn quantization_is_deterministic() {
        let samples: Vec<f64> = (0..100).map(|i| ((i as f64) * 0.37).sin()).collect();
        let a = quantize(&samples, 8).unwrap();
        let b = quantize(&samples, 8).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_bit_depth_is_rejected() {
        assert!(matches!(
            quantize(&[0.0], 0).unwrap_err(),
            PipelineError::Parameter { name: "bit_depth", .. }
        ));
        assert!(matches!(
            quantize(&[0.0], 33).unwrap_err(),
            PipelineError::Parameter { name: "bit_depth", .. }
        ));
    }

    #[test]
    fn ragged_bitstream_is_rejected() {
        let err = pack_codes(&[1, 0, 1], 2).unwrap_err();
        assert!(matches!(err, PipelineError::Parameter { name: "bits", .. }));
    }
}
