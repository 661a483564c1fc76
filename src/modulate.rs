use crate::carrier;
use crate::error::{PipelineError, Result};

/// BPSK modulation products, all at the tx sample rate
#[derive(Debug, Clone, PartialEq)]
pub struct BpskSignal {
    /// Polar NRZ symbols, one per bit
    pub symbols: Vec<f64>,
    /// Symbols held for `sps` samples each
    pub baseband: Vec<f64>,
    /// Carrier waveform, same length as the baseband
    pub carrier: Vec<f64>,
    /// Elementwise product of baseband and carrier
    pub passband: Vec<f64>,
    /// Tx sample rate: input rate * sps
    pub sample_rate: u32,
}

/// Modulate a bitstream onto a cosine carrier
///
/// Bit 0 maps to -1.0 and bit 1 to +1.0; each symbol is held for `sps`
/// samples (zero-order hold) before the carrier multiply. No amplitude
/// scaling happens here.
pub fn modulate(bits: &[u8], sample_rate: u32, sps: u32, carrier_freq: f64) -> Result<BpskSignal> {
    if bits.is_empty() {
        return Err(PipelineError::Parameter {
            name: "bits",
            value: "0".into(),
            reason: "bitstream must be non-empty",
        });
    }
    if sample_rate == 0 {
        return Err(PipelineError::Parameter {
            name: "sample_rate",
            value: sample_rate.to_string(),
            reason: "must be at least 1",
        });
    }
    if sps == 0 {
        return Err(PipelineError::Parameter {
            name: "sps",
            value: sps.to_string(),
            reason: "must be at least 1",
        });
    }
    if !(carrier_freq > 0.0 && carrier_freq.is_finite()) {
        return Err(PipelineError::Parameter {
            name: "carrier_freq",
            value: carrier_freq.to_string(),
            reason: "must be positive and finite",
        });
    }

    let tx_rate = sample_rate
        .checked_mul(sps)
        .ok_or(PipelineError::Parameter {
            name: "sps",
            value: sps.to_string(),
            reason: "sample_rate * sps overflows",
        })?;

    let symbols: Vec<f64> = bits
        .iter()
        .map(|&bit| if bit & 1 == 1 { 1.0 } else { -1.0 })
        .collect();

    let baseband: Vec<f64> = symbols
        .iter()
        .flat_map(|&s| std::iter::repeat(s).take(sps as usize))
        .collect();

    let (_, carrier_wave) = carrier::carrier(baseband.len(), tx_rate, carrier_freq);

    let passband: Vec<f64> = baseband
        .iter()
        .zip(&carrier_wave)
        .map(|(&s, &c)| s * c)
        .collect();

    Ok(BpskSignal {
        symbols,
        baseband,
        carrier: carrier_wave,
        passband,
        sample_rate: tx_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_nrz_mapping() {
        let signal = modulate(&[0, 1, 1, 0], 100, 1, 10.0).unwrap();
        assert_eq!(signal.symbols, vec![-1.0, 1.0, 1.0, -1.0]);
    }

    #[test]
    fn lengths_are_bits_times_sps() {
        let bits = [1, 0, 1, 1, 0, 0, 1, 0];
        let signal = modulate(&bits, 8000, 16, 2000.0).unwrap();
        let expected = bits.len() * 16;
        assert_eq!(signal.baseband.len(), expected);
        assert_eq!(signal.carrier.len(), expected);
        assert_eq!(signal.passband.len(), expected);
        assert_eq!(signal.sample_rate, 8000 * 16);
    }

    #[test]
    fn zero_order_hold_repeats_each_symbol() {
        let signal = modulate(&[1, 0], 100, 4, 10.0).unwrap();
        assert_eq!(signal.baseband[..4], [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(signal.baseband[4..], [-1.0, -1.0, -1.0, -1.0]);
    }

    #[test]
    fn passband_is_baseband_times_carrier() {
        // fc = tx_rate / 4: carrier samples land on 1, 0, -1, 0
        let signal = modulate(&[1], 4, 4, 4.0).unwrap();
        assert!((signal.carrier[0] - 1.0).abs() < 1e-12);
        assert!((signal.passband[0] - 1.0).abs() < 1e-12);
        assert!((signal.passband[2] + 1.0).abs() < 1e-12);
        for ((&s, &c), &p) in signal
            .baseband
            .iter()
            .zip(&signal.carrier)
            .zip(&signal.passband)
        {
            assert!((s * c - p).abs() < 1e-12);
        }
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        assert!(matches!(
            modulate(&[1], 100, 0, 10.0).unwrap_err(),
            PipelineError::Parameter { name: "sps", .. }
        ));
        assert!(matches!(
            modulate(&[1], 100, 1, 0.0).unwrap_err(),
            PipelineError::Parameter { name: "carrier_freq", .. }
        ));
        assert!(matches!(
            modulate(&[1], 100, 1, -5.0).unwrap_err(),
            PipelineError::Parameter { name: "carrier_freq", .. }
        ));
        assert!(matches!(
            modulate(&[], 100, 1, 10.0).unwrap_err(),
            PipelineError::Parameter { name: "bits", .. }
        ));
        assert!(matches!(
            modulate(&[1], u32::MAX, 2, 10.0).unwrap_err(),
            PipelineError::Parameter { name: "sps", .. }
        ));
    }
}
