use std::f64::consts::PI;

/// Time axis at the given rate: t[k] = k / sample_rate
pub fn timebase(len: usize, sample_rate: u32) -> Vec<f64> {
    let rate = sample_rate as f64;
    (0..len).map(|k| k as f64 / rate).collect()
}

/// Cosine carrier over a timebase: c[k] = cos(2*pi*freq*t[k])
///
/// Single source of the carrier for both modulation and diagnostics.
pub fn carrier(len: usize, sample_rate: u32, freq: f64) -> (Vec<f64>, Vec<f64>) {
    let time = timebase(len, sample_rate);
    let wave = time.iter().map(|&t| (2.0 * PI * freq * t).cos()).collect();
    (time, wave)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timebase_spacing_matches_rate() {
        let t = timebase(4, 8000);
        assert_eq!(t.len(), 4);
        assert_eq!(t[0], 0.0);
        assert!((t[1] - 1.0 / 8000.0).abs() < 1e-15);
        assert!((t[3] - 3.0 / 8000.0).abs() < 1e-15);
    }

    #[test]
    fn carrier_is_cosine() {
        // freq = rate / 4 puts samples at quarter-cycle points
        let (_, wave) = carrier(4, 4, 1.0);
        assert!((wave[0] - 1.0).abs() < 1e-12);
        assert!(wave[1].abs() < 1e-12);
        assert!((wave[2] + 1.0).abs() < 1e-12);
        assert!(wave[3].abs() < 1e-12);
    }

    #[test]
    fn carrier_length_matches_request() {
        let (time, wave) = carrier(1000, 44100, 2000.0);
        assert_eq!(time.len(), 1000);
        assert_eq!(wave.len(), 1000);
    }
}
